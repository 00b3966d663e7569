//! PPTX (Office Open XML) presentation writing.
//!
//! Serializes a `Presentation` into a .pptx package: a ZIP archive of
//! PresentationML parts.

pub mod options;
pub mod scaffold;
pub mod writer;

pub use options::WriteOptions;
pub use writer::PptxWriter;
