//! PresentationML package writer.
//!
//! A `.pptx` file is a zip archive of XML parts. The deck is serialized
//! directly: content types, package relationships, the presentation part,
//! one blank slide master/layout pair, a dark theme part, and one slide
//! part per slide.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::slides::deck::{Deck, Slide};
use crate::slides::theme;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Serializes the deck to `path` as a complete PresentationML package.
pub fn save(deck: &Deck, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    put(&mut zip, options, "[Content_Types].xml", &content_types(deck.slides.len()))?;
    put(&mut zip, options, "_rels/.rels", &package_rels())?;
    put(&mut zip, options, "docProps/core.xml", &core_props())?;
    put(&mut zip, options, "docProps/app.xml", &app_props(deck.slides.len()))?;
    put(&mut zip, options, "ppt/presentation.xml", &presentation(deck.slides.len()))?;
    put(
        &mut zip,
        options,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels(deck.slides.len()),
    )?;
    put(&mut zip, options, "ppt/slideMasters/slideMaster1.xml", &slide_master())?;
    put(
        &mut zip,
        options,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &master_rels(),
    )?;
    put(&mut zip, options, "ppt/slideLayouts/slideLayout1.xml", &slide_layout())?;
    put(
        &mut zip,
        options,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &layout_rels(),
    )?;
    put(&mut zip, options, "ppt/theme/theme1.xml", &theme_part())?;

    for (i, slide) in deck.slides.iter().enumerate() {
        let number = i + 1;
        put(
            &mut zip,
            options,
            &format!("ppt/slides/slide{}.xml", number),
            &render_slide(slide),
        )?;
        put(
            &mut zip,
            options,
            &format!("ppt/slides/_rels/slide{}.xml.rels", number),
            &slide_rels(),
        )?;
    }

    zip.finish()?;
    Ok(())
}

fn put(zip: &mut ZipWriter<File>, options: FileOptions, name: &str, body: &str) -> Result<()> {
    zip.start_file(name, options)?;
    zip.write_all(body.as_bytes())?;
    Ok(())
}

/// Renders one slide part: dark background plus its shape tree.
pub fn render_slide(slide: &Slide) -> String {
    // Shape ids start at 2; id 1 is the group holding the tree.
    let shapes: String = slide
        .shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| shape.to_xml(i as u32 + 2))
        .collect();

    format!(
        concat!(
            "{decl}",
            r#"<p:sld xmlns:a="{ns_a}" xmlns:r="{ns_r}" xmlns:p="{ns_p}">"#,
            "<p:cSld>",
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
            "<p:spTree>",
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            "<p:grpSpPr>",
            r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#,
            "</p:grpSpPr>",
            "{shapes}",
            "</p:spTree></p:cSld>",
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sld>",
        ),
        decl = XML_DECL,
        ns_a = NS_A,
        ns_r = NS_R,
        ns_p = NS_P,
        bg = theme::BG_DEEP.hex(),
        shapes = shapes,
    )
}

fn content_types(slide_count: usize) -> String {
    let slide_overrides: String = (1..=slide_count)
        .map(|n| {
            format!(
                concat!(
                    r#"<Override PartName="/ppt/slides/slide{}.xml" "#,
                    r#"ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                ),
                n
            )
        })
        .collect();

    format!(
        concat!(
            "{decl}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
            r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
            r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
            r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
            "{slides}",
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
            r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
            "</Types>",
        ),
        decl = XML_DECL,
        slides = slide_overrides,
    )
}

fn package_rels() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#,
            r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
            r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#,
            "</Relationships>",
        ),
        decl = XML_DECL,
    )
}

fn core_props() -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            "{decl}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>AgriVerse Ultimate</dc:title>",
            "<dc:creator>AgriVerse</dc:creator>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>"#,
            "</cp:coreProperties>",
        ),
        decl = XML_DECL,
        now = now,
    )
}

fn app_props(slide_count: usize) -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
            "<Application>agriverse-tools</Application>",
            "<Slides>{count}</Slides>",
            "</Properties>",
        ),
        decl = XML_DECL,
        count = slide_count,
    )
}

fn presentation(slide_count: usize) -> String {
    // rId1 is the slide master; slides follow from rId2.
    let slide_ids: String = (0..slide_count)
        .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 2))
        .collect();

    format!(
        concat!(
            "{decl}",
            r#"<p:presentation xmlns:a="{ns_a}" xmlns:r="{ns_r}" xmlns:p="{ns_p}">"#,
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#,
            "<p:sldIdLst>{slide_ids}</p:sldIdLst>",
            r#"<p:sldSz cx="{width}" cy="{height}"/>"#,
            r#"<p:notesSz cx="6858000" cy="9144000"/>"#,
            "</p:presentation>",
        ),
        decl = XML_DECL,
        ns_a = NS_A,
        ns_r = NS_R,
        ns_p = NS_P,
        slide_ids = slide_ids,
        width = theme::SLIDE_WIDTH,
        height = theme::SLIDE_HEIGHT,
    )
}

fn presentation_rels(slide_count: usize) -> String {
    let slide_rels: String = (1..=slide_count)
        .map(|n| {
            format!(
                concat!(
                    r#"<Relationship Id="rId{}" "#,
                    r#"Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" "#,
                    r#"Target="slides/slide{}.xml"/>"#,
                ),
                n + 1,
                n
            )
        })
        .collect();

    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
            "{slides}",
            "</Relationships>",
        ),
        decl = XML_DECL,
        slides = slide_rels,
    )
}

fn slide_master() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldMaster xmlns:a="{ns_a}" xmlns:r="{ns_r}" xmlns:p="{ns_p}">"#,
            "<p:cSld>",
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
            "<p:spTree>",
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            "<p:grpSpPr/>",
            "</p:spTree></p:cSld>",
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "</p:sldMaster>",
        ),
        decl = XML_DECL,
        ns_a = NS_A,
        ns_r = NS_R,
        ns_p = NS_P,
        bg = theme::BG_DEEP.hex(),
    )
}

fn master_rels() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
            r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>"#,
            "</Relationships>",
        ),
        decl = XML_DECL,
    )
}

fn slide_layout() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<p:sldLayout xmlns:a="{ns_a}" xmlns:r="{ns_r}" xmlns:p="{ns_p}" type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank">"#,
            "<p:spTree>",
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            "<p:grpSpPr/>",
            "</p:spTree></p:cSld>",
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sldLayout>",
        ),
        decl = XML_DECL,
        ns_a = NS_A,
        ns_r = NS_R,
        ns_p = NS_P,
    )
}

fn layout_rels() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>"#,
            "</Relationships>",
        ),
        decl = XML_DECL,
    )
}

fn slide_rels() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
            "</Relationships>",
        ),
        decl = XML_DECL,
    )
}

/// Minimal theme part: the deck's palette plus the mandatory format scheme.
fn theme_part() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<a:theme xmlns:a="{ns_a}" name="AgriVerse Dark">"#,
            "<a:themeElements>",
            r#"<a:clrScheme name="AgriVerse">"#,
            r#"<a:dk1><a:srgbClr val="000000"/></a:dk1>"#,
            r#"<a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>"#,
            r#"<a:dk2><a:srgbClr val="{bg}"/></a:dk2>"#,
            r#"<a:lt2><a:srgbClr val="{grey}"/></a:lt2>"#,
            r#"<a:accent1><a:srgbClr val="{farmer}"/></a:accent1>"#,
            r#"<a:accent2><a:srgbClr val="{buyer}"/></a:accent2>"#,
            r#"<a:accent3><a:srgbClr val="{bank}"/></a:accent3>"#,
            r#"<a:accent4><a:srgbClr val="{expert}"/></a:accent4>"#,
            r#"<a:accent5><a:srgbClr val="{admin}"/></a:accent5>"#,
            r#"<a:accent6><a:srgbClr val="{tech}"/></a:accent6>"#,
            r#"<a:hlink><a:srgbClr val="{buyer}"/></a:hlink>"#,
            r#"<a:folHlink><a:srgbClr val="{expert}"/></a:folHlink>"#,
            "</a:clrScheme>",
            r#"<a:fontScheme name="AgriVerse">"#,
            r#"<a:majorFont><a:latin typeface="{latin}"/><a:ea typeface="{ea}"/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{latin}"/><a:ea typeface="{ea}"/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>",
            r#"<a:fmtScheme name="Office">"#,
            "<a:fillStyleLst>",
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            "</a:fillStyleLst>",
            "<a:lnStyleLst>",
            r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            "</a:lnStyleLst>",
            "<a:effectStyleLst>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "<a:effectStyle><a:effectLst/></a:effectStyle>",
            "</a:effectStyleLst>",
            "<a:bgFillStyleLst>",
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            "</a:bgFillStyleLst>",
            "</a:fmtScheme>",
            "</a:themeElements>",
            "</a:theme>",
        ),
        decl = XML_DECL,
        ns_a = NS_A,
        bg = theme::BG_DEEP.hex(),
        grey = theme::TEXT_GREY.hex(),
        farmer = theme::FARMER.hex(),
        buyer = theme::BUYER.hex(),
        bank = theme::BANK.hex(),
        expert = theme::EXPERT.hex(),
        admin = theme::ADMIN.hex(),
        tech = theme::TECH.hex(),
        latin = theme::FONT_LATIN,
        ea = theme::FONT_EAST_ASIAN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::content;
    use std::io::Read;

    #[test]
    fn every_rendered_slide_has_the_dark_background() {
        let deck = content::build();
        for slide in &deck.slides {
            let xml = render_slide(slide);
            assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="0D1117"/>"#));
        }
    }

    #[test]
    fn shape_ids_are_unique_within_a_slide() {
        let deck = content::build();
        let xml = render_slide(&deck.slides[0]);
        for id in 2..2 + deck.slides[0].shapes.len() as u32 {
            assert_eq!(xml.matches(&format!(r#"id="{}""#, id)).count(), 1);
        }
    }

    #[test]
    fn package_round_trips_through_a_zip_reader() {
        let deck = content::build();
        let path = std::env::temp_dir().join(format!(
            "agriverse-deck-test-{}.pptx",
            std::process::id()
        ));
        save(&deck, &path).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();

        // One slide part per deck slide, and the mandatory package parts.
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide12.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {}", name);
        }
        assert!(archive.by_name("ppt/slides/slide13.xml").is_err());

        let mut presentation = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut presentation)
            .unwrap();
        assert_eq!(presentation.matches("<p:sldId ").count(), 12);
        assert!(presentation.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));

        std::fs::remove_file(&path).unwrap();
    }
}
