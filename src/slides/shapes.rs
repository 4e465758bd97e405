use quick_xml::escape::escape;

use crate::slides::theme::{self, Rgb};

/// Default corner radius for cards, 3% of the shorter side.
pub const CARD_CORNER: u32 = 3_000;
/// Fully rounded ends, for pill tags.
pub const PILL_CORNER: u32 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    fn attr(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
        }
    }
}

/// A borderless text box. Lines separated by `\n` become paragraphs.
#[derive(Debug, Clone)]
pub struct TextBox {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub size_pt: u32,
    pub color: Rgb,
    pub bold: bool,
    pub align: Align,
}

/// One absolutely positioned shape. Positions and sizes are in EMU.
#[derive(Debug, Clone)]
pub enum Shape {
    Text(TextBox),
    /// Rounded rectangle without border; `corner` is the DrawingML
    /// adjustment value.
    Card {
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        color: Rgb,
        corner: u32,
    },
    /// Solid ellipse, used for decorative glows.
    Oval {
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        color: Rgb,
    },
}

impl Shape {
    /// Renders the shape as a `p:sp` element. `id` must be unique within
    /// the slide's shape tree.
    pub fn to_xml(&self, id: u32) -> String {
        match self {
            Shape::Text(text_box) => render_text(id, text_box),
            Shape::Card {
                x,
                y,
                w,
                h,
                color,
                corner,
            } => render_geometry(id, "Card", "roundRect", *x, *y, *w, *h, *color, Some(*corner)),
            Shape::Oval { x, y, w, h, color } => {
                render_geometry(id, "Oval", "ellipse", *x, *y, *w, *h, *color, None)
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_geometry(
    id: u32,
    name: &str,
    prst: &str,
    x: i64,
    y: i64,
    w: i64,
    h: i64,
    color: Rgb,
    adjustment: Option<u32>,
) -> String {
    let av_lst = match adjustment {
        Some(value) => format!(r#"<a:gd name="adj" fmla="val {}"/>"#, value),
        None => String::new(),
    };
    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name} {id}"/>"#,
            r#"<p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{w}" cy="{h}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="{prst}"><a:avLst>{av}</a:avLst></a:prstGeom>"#,
            r#"<a:solidFill><a:srgbClr val="{color}"/></a:solidFill>"#,
            r#"<a:ln><a:noFill/></a:ln></p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"#,
        ),
        id = id,
        name = name,
        x = x,
        y = y,
        w = w,
        h = h,
        prst = prst,
        av = av_lst,
        color = color.hex(),
    )
}

fn render_text(id: u32, text_box: &TextBox) -> String {
    let bold = if text_box.bold { r#" b="1""# } else { "" };
    let color = text_box.color.hex();

    let paragraphs: String = text_box
        .text
        .split('\n')
        .map(|line| {
            format!(
                concat!(
                    r#"<a:p><a:pPr algn="{align}"/>"#,
                    r#"<a:r><a:rPr lang="en-US" sz="{size}"{bold}>"#,
                    r#"<a:solidFill><a:srgbClr val="{color}"/></a:solidFill>"#,
                    r#"<a:latin typeface="{latin}"/><a:ea typeface="{ea}"/>"#,
                    r#"</a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
                ),
                align = text_box.align.attr(),
                size = text_box.size_pt * 100,
                bold = bold,
                color = color,
                latin = theme::FONT_LATIN,
                ea = theme::FONT_EAST_ASIAN,
                text = escape(line),
            )
        })
        .collect();

    format!(
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/>"#,
            r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{w}" cy="{h}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#,
            r#"<a:noFill/><a:ln><a:noFill/></a:ln></p:spPr>"#,
            r#"<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
        ),
        id = id,
        x = text_box.x,
        y = text_box.y,
        w = text_box.w,
        h = text_box.h,
        paragraphs = paragraphs,
    )
}
