pub mod content;
pub mod deck;
pub mod pptx;
pub mod shapes;
pub mod theme;

pub use content::*;
pub use deck::*;
pub use pptx::*;
pub use shapes::*;
