use crate::slides::shapes::{Align, Shape, TextBox, CARD_CORNER, PILL_CORNER};
use crate::slides::theme::{self, inches, Rgb};

/// Placeholder fill, slightly lighter than the card background.
const PLACEHOLDER_FILL: Rgb = Rgb(45, 50, 60);

/// One slide: a bag of absolutely positioned shapes on the dark background.
///
/// Shapes are write-only; they are constructed, never queried or mutated
/// after placement. All drawing coordinates are in inches.
#[derive(Debug, Default)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Draws a borderless text box.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        size_pt: u32,
        color: Rgb,
        bold: bool,
        align: Align,
    ) {
        self.shapes.push(Shape::Text(TextBox {
            text: text.to_string(),
            x: inches(x),
            y: inches(y),
            w: inches(w),
            h: inches(h),
            size_pt,
            color,
            bold,
            align,
        }));
    }

    /// Draws a rounded card with the standard corner radius.
    pub fn card(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.shapes.push(Shape::Card {
            x: inches(x),
            y: inches(y),
            w: inches(w),
            h: inches(h),
            color,
            corner: CARD_CORNER,
        });
    }

    /// Draws a pill tag with a centered white label.
    pub fn tag(&mut self, label: &str, x: f64, y: f64, color: Rgb) {
        let (w, h) = (1.2, 0.4);
        self.shapes.push(Shape::Card {
            x: inches(x),
            y: inches(y),
            w: inches(w),
            h: inches(h),
            color,
            corner: PILL_CORNER,
        });
        self.text(label, x, y + 0.05, w, h, 12, theme::TEXT_WHITE, true, Align::Center);
    }

    /// Draws a screenshot placeholder box with its caption.
    pub fn placeholder(&mut self, x: f64, y: f64, w: f64, h: f64, label: &str) {
        self.shapes.push(Shape::Card {
            x: inches(x),
            y: inches(y),
            w: inches(w),
            h: inches(h),
            color: PLACEHOLDER_FILL,
            corner: CARD_CORNER,
        });
        self.text(
            &format!("[{}]\nPLACE UI SCREENSHOT HERE", label),
            x,
            y + h / 2.0 - 0.3,
            w,
            1.0,
            14,
            theme::TEXT_GREY,
            false,
            Align::Center,
        );
    }

    /// Draws a solid ellipse, for decorative glows.
    pub fn oval(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.shapes.push(Shape::Oval {
            x: inches(x),
            y: inches(y),
            w: inches(w),
            h: inches(h),
            color,
        });
    }
}

/// The in-memory presentation being assembled, slide by slide.
#[derive(Debug, Default)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank slide and returns it for drawing.
    pub fn add_slide(&mut self) -> &mut Slide {
        let index = self.slides.len();
        self.slides.push(Slide::default());
        &mut self.slides[index]
    }
}
