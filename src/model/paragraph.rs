//! Paragraph and text run models.

use super::Color;
use serde::{Deserialize, Serialize};

/// Text alignment within a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlignment {
    /// The PresentationML `algn` attribute value for this alignment.
    pub fn algn(&self) -> &'static str {
        match self {
            TextAlignment::Left => "l",
            TextAlignment::Center => "ctr",
            TextAlignment::Right => "r",
            TextAlignment::Justify => "just",
        }
    }
}

/// Text style properties.
///
/// Unset fields are omitted from the run properties so the slide
/// master's text styles apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Font size in points (e.g., 60 = 60pt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u32>,

    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Font face name (e.g., "Georgia")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl TextStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any property is set.
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.size_pt.is_some()
            || self.color.is_some()
            || self.font.is_some()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: TextStyle,
}

fn is_default_style(style: &TextStyle) -> bool {
    *style == TextStyle::default()
}

impl TextRun {
    /// Create a plain text run with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a styled text run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One paragraph of a placeholder's text body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in document order
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Paragraph alignment (inherited from the layout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlignment>,
}

impl Paragraph {
    /// Create a paragraph from a single plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
            alignment: None,
        }
    }

    /// Create a paragraph from a single styled run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            runs: vec![TextRun::styled(text, style)],
            alignment: None,
        }
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph carries any text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_attr() {
        assert_eq!(TextAlignment::Left.algn(), "l");
        assert_eq!(TextAlignment::Center.algn(), "ctr");
        assert_eq!(TextAlignment::Justify.algn(), "just");
    }

    #[test]
    fn test_plain_text() {
        let para = Paragraph {
            runs: vec![
                TextRun::plain("Hello, "),
                TextRun::styled(
                    "World",
                    TextStyle {
                        bold: true,
                        ..Default::default()
                    },
                ),
            ],
            alignment: None,
        };
        assert_eq!(para.plain_text(), "Hello, World");
        assert!(!para.is_empty());
    }

    #[test]
    fn test_default_style_not_serialized() {
        let run = TextRun::plain("text");
        let json = serde_json::to_string(&run).unwrap();
        assert!(!json.contains("style"));
    }

    #[test]
    fn test_has_formatting() {
        assert!(!TextStyle::new().has_formatting());
        let style = TextStyle {
            size_pt: Some(18),
            ..Default::default()
        };
        assert!(style.has_formatting());
    }
}
