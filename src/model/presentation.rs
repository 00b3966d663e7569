//! Presentation model structures.

use super::Slide;
use serde::{Deserialize, Serialize};

/// Slide dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideSize {
    /// 10in x 7.5in, the classic on-screen show
    #[default]
    Screen4x3,
    /// 13.333in x 7.5in widescreen
    Screen16x9,
}

impl SlideSize {
    /// Slide dimensions in EMUs (914400 per inch).
    pub fn emu(&self) -> (u32, u32) {
        match self {
            SlideSize::Screen4x3 => (9_144_000, 6_858_000),
            SlideSize::Screen16x9 => (12_192_000, 6_858_000),
        }
    }

    /// The `PresentationFormat` string recorded in docProps/app.xml.
    pub fn format_name(&self) -> &'static str {
        match self {
            SlideSize::Screen4x3 => "On-screen Show (4:3)",
            SlideSize::Screen16x9 => "On-screen Show (16:9)",
        }
    }
}

/// Document metadata written to docProps/core.xml.
///
/// No timestamps: generated packages are byte-identical across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// An in-memory presentation: metadata, slide size, and ordered slides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Presentation {
    /// Document metadata
    pub metadata: Metadata,

    /// Slide dimensions
    #[serde(default)]
    pub slide_size: SlideSize,

    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new empty presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check if the presentation has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to JSON string (compact).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Slide, SlideLayout, TextStyle};

    #[test]
    fn test_slide_size_emu() {
        assert_eq!(SlideSize::Screen4x3.emu(), (9_144_000, 6_858_000));
        assert_eq!(SlideSize::Screen16x9.emu(), (12_192_000, 6_858_000));
    }

    #[test]
    fn test_presentation_construction() {
        let mut pres = Presentation::new();
        assert!(pres.is_empty());

        let mut slide = Slide::new(SlideLayout::Title);
        slide.set_title("Hello", TextStyle::new());
        pres.add_slide(slide);

        assert!(!pres.is_empty());
        assert_eq!(pres.slide_count(), 1);
    }

    #[test]
    fn test_metadata_serialization() {
        let pres = Presentation {
            metadata: Metadata {
                title: Some("Deck".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = pres.to_json().unwrap();
        assert!(json.contains("Deck"));
        // Empty fields should not be serialized
        assert!(!json.contains("subject"));
    }
}
