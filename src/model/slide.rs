//! Slide model.

use super::{Color, Paragraph, TextStyle};
use serde::{Deserialize, Serialize};

/// Which slide layout a slide is rendered on.
///
/// Each variant maps to one of the two layout parts shipped in the
/// package scaffold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    /// Centered title and subtitle placeholders
    Title,
    /// Title placeholder over a body placeholder
    #[default]
    TitleAndContent,
}

impl SlideLayout {
    /// Placeholder type for the title shape (`p:ph type` attribute).
    pub fn title_ph_type(&self) -> &'static str {
        match self {
            SlideLayout::Title => "ctrTitle",
            SlideLayout::TitleAndContent => "title",
        }
    }

    /// Placeholder type for the body shape.
    pub fn body_ph_type(&self) -> &'static str {
        match self {
            SlideLayout::Title => "subTitle",
            SlideLayout::TitleAndContent => "body",
        }
    }

    /// Relationship target of the layout part, relative to a slide part.
    pub fn layout_target(&self) -> &'static str {
        match self {
            SlideLayout::Title => "../slideLayouts/slideLayout1.xml",
            SlideLayout::TitleAndContent => "../slideLayouts/slideLayout2.xml",
        }
    }

    /// Display name of the body placeholder shape.
    pub fn body_shape_name(&self) -> &'static str {
        match self {
            SlideLayout::Title => "Subtitle 2",
            SlideLayout::TitleAndContent => "Content Placeholder 2",
        }
    }
}

/// One slide: a layout, an optional background fill, and the text
/// filling the layout's placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Layout the slide is rendered on
    pub layout: SlideLayout,

    /// Solid background fill (layout background when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    /// Title placeholder paragraphs
    #[serde(default)]
    pub title: Vec<Paragraph>,

    /// Body (or subtitle) placeholder paragraphs
    #[serde(default)]
    pub body: Vec<Paragraph>,
}

impl Slide {
    /// Create an empty slide on the given layout.
    pub fn new(layout: SlideLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Set the background fill.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the title to a single styled paragraph.
    pub fn set_title(&mut self, text: impl Into<String>, style: TextStyle) {
        self.title = vec![Paragraph::styled(text, style)];
    }

    /// Append a paragraph to the body placeholder.
    pub fn add_body_paragraph(&mut self, para: Paragraph) {
        self.body.push(para);
    }

    /// Concatenated title text.
    pub fn title_text(&self) -> String {
        self.title
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Concatenated body text, one line per paragraph.
    pub fn body_text(&self) -> String {
        self.body
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the slide carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.title.iter().all(|p| p.is_empty()) && self.body.iter().all(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_placeholders() {
        assert_eq!(SlideLayout::Title.title_ph_type(), "ctrTitle");
        assert_eq!(SlideLayout::Title.body_ph_type(), "subTitle");
        assert_eq!(SlideLayout::TitleAndContent.title_ph_type(), "title");
        assert_eq!(SlideLayout::TitleAndContent.body_ph_type(), "body");
    }

    #[test]
    fn test_slide_construction() {
        let mut slide =
            Slide::new(SlideLayout::TitleAndContent).with_background(Color::new(0x1A, 0x0B, 0x2E));
        assert!(slide.is_empty());

        slide.set_title("Roadmap", TextStyle::new());
        slide.add_body_paragraph(Paragraph::plain("• Phase 1"));
        slide.add_body_paragraph(Paragraph::plain("• Phase 2"));

        assert!(!slide.is_empty());
        assert_eq!(slide.title_text(), "Roadmap");
        assert_eq!(slide.body_text(), "• Phase 1\n• Phase 2");
    }
}
