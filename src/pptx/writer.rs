//! PPTX writer implementation.
//!
//! Serializes a `Presentation` into the fixed part tree of a .pptx
//! package: content types, package relationships, document properties,
//! presentation.xml, the static theme/master/layout scaffold, and one
//! generated part per slide.

use crate::error::{Error, Result};
use crate::model::{Paragraph, Presentation, Slide, TextStyle};
use crate::opc::{PackageWriter, Relationships};
use crate::pptx::options::WriteOptions;
use crate::pptx::scaffold::{
    slide_part, APP_PROPS_PART, CORE_PROPS_PART, CT_APP_PROPS, CT_CORE_PROPS, CT_PRESENTATION,
    CT_SLIDE, CT_SLIDE_LAYOUT, CT_SLIDE_MASTER, CT_THEME, PRESENTATION_PART, REL_APP_PROPS,
    REL_CORE_PROPS, REL_OFFICE_DOCUMENT, REL_SLIDE, REL_SLIDE_LAYOUT, REL_SLIDE_MASTER, REL_THEME,
    SLIDE_LAYOUT_CONTENT_PART, SLIDE_LAYOUT_CONTENT_XML, SLIDE_LAYOUT_TITLE_PART,
    SLIDE_LAYOUT_TITLE_XML, SLIDE_MASTER_PART, SLIDE_MASTER_XML, THEME_PART, THEME_XML, XMLNS_A,
    XMLNS_P, XMLNS_R,
};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::CompressionMethod;

/// Writer for PPTX (PowerPoint) presentations.
///
/// # Examples
///
/// ```no_run
/// use deckgen::pptx::PptxWriter;
/// use deckgen::{Presentation, Slide, SlideLayout, TextStyle};
///
/// # fn example() -> deckgen::Result<()> {
/// let mut pres = Presentation::new();
/// let mut slide = Slide::new(SlideLayout::Title);
/// slide.set_title("Hello", TextStyle::new());
/// pres.add_slide(slide);
///
/// PptxWriter::new(&pres).save("hello.pptx")?;
/// # Ok(())
/// # }
/// ```
pub struct PptxWriter<'a> {
    presentation: &'a Presentation,
    options: WriteOptions,
}

impl<'a> PptxWriter<'a> {
    /// Create a writer with default options.
    pub fn new(presentation: &'a Presentation) -> Self {
        Self {
            presentation,
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with explicit options.
    pub fn with_options(presentation: &'a Presentation, options: WriteOptions) -> Self {
        Self {
            presentation,
            options,
        }
    }

    /// Serialize the presentation and return the package bytes.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        self.validate()?;
        let mut pkg = PackageWriter::new();
        if !self.options.compress {
            pkg.set_compression(CompressionMethod::Stored);
        }
        self.write_package(&mut pkg)?;
        pkg.finish_to_bytes()
    }

    /// Serialize and write to a file, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.write_to_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// A slide-less document and text-less slides have no placeholder
    /// to render into; both map to the original missing-placeholder
    /// failure mode.
    fn validate(&self) -> Result<()> {
        if self.presentation.is_empty() {
            return Err(Error::EmptyPresentation);
        }
        for (i, slide) in self.presentation.slides.iter().enumerate() {
            if slide.is_empty() {
                return Err(Error::EmptySlide(i + 1));
            }
        }
        Ok(())
    }

    fn write_package<W: Write + Seek>(&self, pkg: &mut PackageWriter<W>) -> Result<()> {
        let mut package_rels = Relationships::new();
        package_rels.add(REL_OFFICE_DOCUMENT, PRESENTATION_PART);
        package_rels.add(REL_CORE_PROPS, CORE_PROPS_PART);
        package_rels.add(REL_APP_PROPS, APP_PROPS_PART);
        pkg.add_relationships("", &package_rels)?;

        pkg.add_part(
            CORE_PROPS_PART,
            CT_CORE_PROPS,
            self.core_props_xml().as_bytes(),
        )?;
        pkg.add_part(
            APP_PROPS_PART,
            CT_APP_PROPS,
            self.app_props_xml().as_bytes(),
        )?;

        // rId1 is the master; slides follow as rId2..rId(n+1), matching
        // the r:id references emitted in presentation_xml.
        let mut pres_rels = Relationships::new();
        pres_rels.add(REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        for number in 1..=self.presentation.slide_count() {
            pres_rels.add(REL_SLIDE, &format!("slides/slide{number}.xml"));
        }
        pkg.add_part(
            PRESENTATION_PART,
            CT_PRESENTATION,
            self.presentation_xml().as_bytes(),
        )?;
        pkg.add_relationships(PRESENTATION_PART, &pres_rels)?;

        pkg.add_part(THEME_PART, CT_THEME, THEME_XML.as_bytes())?;

        pkg.add_part(SLIDE_MASTER_PART, CT_SLIDE_MASTER, SLIDE_MASTER_XML.as_bytes())?;
        let mut master_rels = Relationships::new();
        master_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");
        master_rels.add(REL_THEME, "../theme/theme1.xml");
        pkg.add_relationships(SLIDE_MASTER_PART, &master_rels)?;

        for (part, xml) in [
            (SLIDE_LAYOUT_TITLE_PART, SLIDE_LAYOUT_TITLE_XML),
            (SLIDE_LAYOUT_CONTENT_PART, SLIDE_LAYOUT_CONTENT_XML),
        ] {
            pkg.add_part(part, CT_SLIDE_LAYOUT, xml.as_bytes())?;
            let mut layout_rels = Relationships::new();
            layout_rels.add(REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
            pkg.add_relationships(part, &layout_rels)?;
        }

        for (i, slide) in self.presentation.slides.iter().enumerate() {
            let part = slide_part(i + 1);
            pkg.add_part(&part, CT_SLIDE, slide_xml(slide).as_bytes())?;

            let mut slide_rels = Relationships::new();
            slide_rels.add(REL_SLIDE_LAYOUT, slide.layout.layout_target());
            pkg.add_relationships(&part, &slide_rels)?;
        }

        Ok(())
    }

    fn presentation_xml(&self) -> String {
        let (cx, cy) = self.presentation.slide_size.emu();
        let mut xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <p:presentation xmlns:a=\"{XMLNS_A}\" xmlns:r=\"{XMLNS_R}\" xmlns:p=\"{XMLNS_P}\">\
             <p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
             <p:sldIdLst>"
        );
        for i in 0..self.presentation.slide_count() {
            xml.push_str(&format!(
                "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
                256 + i,
                i + 2
            ));
        }
        xml.push_str(&format!(
            "</p:sldIdLst><p:sldSz cx=\"{cx}\" cy=\"{cy}\"/>\
             <p:notesSz cx=\"6858000\" cy=\"9144000\"/></p:presentation>"
        ));
        xml
    }

    fn core_props_xml(&self) -> String {
        let meta = &self.presentation.metadata;
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <cp:coreProperties \
             xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
             xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
             xmlns:dcterms=\"http://purl.org/dc/terms/\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
        );
        if let Some(ref title) = meta.title {
            xml.push_str(&format!("<dc:title>{}</dc:title>", escape(title.as_str())));
        }
        if let Some(ref subject) = meta.subject {
            xml.push_str(&format!(
                "<dc:subject>{}</dc:subject>",
                escape(subject.as_str())
            ));
        }
        if let Some(ref author) = meta.author {
            xml.push_str(&format!(
                "<dc:creator>{}</dc:creator>",
                escape(author.as_str())
            ));
        }
        xml.push_str("</cp:coreProperties>");
        xml
    }

    fn app_props_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <Properties \
             xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
             xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
             <Application>{}</Application>\
             <Slides>{}</Slides>\
             <PresentationFormat>{}</PresentationFormat>\
             </Properties>",
            escape(self.options.application.as_str()),
            self.presentation.slide_count(),
            self.presentation.slide_size.format_name(),
        )
    }
}

fn slide_xml(slide: &Slide) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <p:sld xmlns:a=\"{XMLNS_A}\" xmlns:r=\"{XMLNS_R}\" xmlns:p=\"{XMLNS_P}\"><p:cSld>"
    );

    if let Some(bg) = slide.background {
        xml.push_str(&format!(
            "<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>\
             <a:effectLst/></p:bgPr></p:bg>",
            bg.hex()
        ));
    }

    xml.push_str(
        "<p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/>\
         <p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>",
    );

    if !slide.title.is_empty() {
        push_placeholder(
            &mut xml,
            2,
            "Title 1",
            slide.layout.title_ph_type(),
            None,
            &slide.title,
        );
    }
    if !slide.body.is_empty() {
        push_placeholder(
            &mut xml,
            3,
            slide.layout.body_shape_name(),
            slide.layout.body_ph_type(),
            Some(1),
            &slide.body,
        );
    }

    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    xml
}

/// Append a placeholder shape filled with the given paragraphs.
/// Geometry is inherited from the matching layout placeholder.
fn push_placeholder(
    xml: &mut String,
    id: u32,
    name: &str,
    ph_type: &str,
    ph_idx: Option<u32>,
    paragraphs: &[Paragraph],
) {
    let idx_attr = ph_idx
        .map(|idx| format!(" idx=\"{idx}\""))
        .unwrap_or_default();
    xml.push_str(&format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/>\
         <p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>\
         <p:nvPr><p:ph type=\"{ph_type}\"{idx_attr}/></p:nvPr></p:nvSpPr>\
         <p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>"
    ));
    for para in paragraphs {
        push_paragraph(xml, para);
    }
    xml.push_str("</p:txBody></p:sp>");
}

fn push_paragraph(xml: &mut String, para: &Paragraph) {
    xml.push_str("<a:p>");
    if let Some(align) = para.alignment {
        xml.push_str(&format!("<a:pPr algn=\"{}\"/>", align.algn()));
    }
    for run in &para.runs {
        xml.push_str("<a:r>");
        xml.push_str(&run_props_xml(&run.style));
        xml.push_str(&format!("<a:t>{}</a:t>", escape(run.text.as_str())));
        xml.push_str("</a:r>");
    }
    xml.push_str("</a:p>");
}

/// Run properties; empty when the style has nothing set, so master
/// text styles apply.
fn run_props_xml(style: &TextStyle) -> String {
    if !style.has_formatting() {
        return String::new();
    }

    let mut attrs = String::from(" lang=\"en-US\"");
    if let Some(size_pt) = style.size_pt {
        // sz is in hundredths of a point
        attrs.push_str(&format!(" sz=\"{}\"", size_pt * 100));
    }
    if style.bold {
        attrs.push_str(" b=\"1\"");
    }
    if style.italic {
        attrs.push_str(" i=\"1\"");
    }

    let mut children = String::new();
    if let Some(color) = style.color {
        children.push_str(&format!(
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            color.hex()
        ));
    }
    if let Some(ref font) = style.font {
        children.push_str(&format!(
            "<a:latin typeface=\"{}\"/>",
            escape(font.as_str())
        ));
    }

    if children.is_empty() {
        format!("<a:rPr{attrs}/>")
    } else {
        format!("<a:rPr{attrs}>{children}</a:rPr>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, SlideLayout};

    fn sample_slide() -> Slide {
        let mut slide =
            Slide::new(SlideLayout::TitleAndContent).with_background(Color::new(0x1A, 0x0B, 0x2E));
        slide.set_title(
            "The Problem",
            TextStyle {
                bold: true,
                color: Some(Color::new(0xF5, 0x9E, 0x0B)),
                ..Default::default()
            },
        );
        slide.add_body_paragraph(Paragraph::styled(
            "• First point",
            TextStyle {
                size_pt: Some(18),
                color: Some(Color::new(0xFF, 0xFF, 0xFF)),
                ..Default::default()
            },
        ));
        slide
    }

    #[test]
    fn test_slide_xml_structure() {
        let xml = slide_xml(&sample_slide());
        assert!(xml.contains("<a:srgbClr val=\"1A0B2E\"/>"));
        assert!(xml.contains("type=\"title\""));
        assert!(xml.contains("type=\"body\" idx=\"1\""));
        assert!(xml.contains("<a:t>The Problem</a:t>"));
        assert!(xml.contains("sz=\"1800\""));
        assert!(xml.contains("b=\"1\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut slide = Slide::new(SlideLayout::TitleAndContent);
        slide.set_title("Uncertainty & Ephemerality", TextStyle::new());
        let xml = slide_xml(&slide);
        assert!(xml.contains("Uncertainty &amp; Ephemerality"));
        assert!(!xml.contains("Uncertainty & Ephemerality"));
    }

    #[test]
    fn test_default_style_emits_no_run_props() {
        assert_eq!(run_props_xml(&TextStyle::new()), "");
    }

    #[test]
    fn test_run_props_size_in_centipoints() {
        let props = run_props_xml(&TextStyle {
            size_pt: Some(60),
            ..Default::default()
        });
        assert!(props.contains("sz=\"6000\""));
    }

    #[test]
    fn test_empty_presentation_rejected() {
        let pres = Presentation::new();
        let err = PptxWriter::new(&pres).write_to_bytes().unwrap_err();
        assert!(matches!(err, Error::EmptyPresentation));
    }

    #[test]
    fn test_empty_slide_rejected() {
        let mut pres = Presentation::new();
        pres.add_slide(Slide::new(SlideLayout::Title));
        let err = PptxWriter::new(&pres).write_to_bytes().unwrap_err();
        assert!(matches!(err, Error::EmptySlide(1)));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let mut pres = Presentation::new();
        for n in 0..3 {
            let mut slide = Slide::new(SlideLayout::TitleAndContent);
            slide.set_title(format!("Slide {n}"), TextStyle::new());
            pres.add_slide(slide);
        }
        let xml = PptxWriter::new(&pres).presentation_xml();
        assert!(xml.contains("<p:sldId id=\"256\" r:id=\"rId2\"/>"));
        assert!(xml.contains("<p:sldId id=\"257\" r:id=\"rId3\"/>"));
        assert!(xml.contains("<p:sldId id=\"258\" r:id=\"rId4\"/>"));
        assert!(xml.contains("cx=\"9144000\""));
    }
}
