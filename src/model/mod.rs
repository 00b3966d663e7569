//! Presentation content model.

mod color;
mod paragraph;
mod presentation;
mod slide;

pub use color::{Color, Palette};
pub use paragraph::{Paragraph, TextAlignment, TextRun, TextStyle};
pub use presentation::{Metadata, Presentation, SlideSize};
pub use slide::{Slide, SlideLayout};
