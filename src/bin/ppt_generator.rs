use std::path::Path;

use anyhow::Result;
use colored::*;

use agriverse_tools::slides::{content, pptx};

fn main() -> Result<()> {
    let deck = content::build();
    let path = Path::new(content::OUTPUT_FILE);
    pptx::save(&deck, path)?;

    println!(
        "{}",
        format!(
            "Deck generated: {} ({} slides)",
            path.display(),
            deck.slides.len()
        )
        .green()
    );
    Ok(())
}
