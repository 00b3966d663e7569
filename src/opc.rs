//! OPC (Open Packaging Conventions) package writer.
//!
//! OOXML documents are ZIP archives of XML parts tied together by a
//! content-type manifest and per-part relationship files. This module
//! manages the archive structure; part content is produced by the
//! `pptx` module.

use crate::error::Result;
use quick_xml::escape::escape;
use std::io::{Cursor, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// A relationship entry in a `.rels` part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part
    pub target: String,
}

/// An ordered collection of relationships for one source part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship, allocating the next sequential `rIdN`.
    /// Returns the allocated ID.
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the `.rels` part XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
        );
        for rel in &self.rels {
            xml.push_str(&format!(
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
                rel.id,
                escape(rel.rel_type.as_str()),
                escape(rel.target.as_str()),
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// Derive the `.rels` sibling path for a part.
///
/// The package-level relationships (empty source) live at `_rels/.rels`;
/// a part `ppt/presentation.xml` keeps its relationships at
/// `ppt/_rels/presentation.xml.rels`.
pub fn rels_path(part: &str) -> String {
    if part.is_empty() {
        return "_rels/.rels".to_string();
    }
    match part.rfind('/') {
        Some(i) => format!("{}/_rels/{}.rels", &part[..i], &part[i + 1..]),
        None => format!("_rels/{part}.rels"),
    }
}

/// Writer for OPC packages.
///
/// Collects content-type overrides as parts are added and emits
/// `[Content_Types].xml` when the package is finished.
///
/// # Examples
///
/// ```no_run
/// use deckgen::opc::PackageWriter;
///
/// # fn example() -> deckgen::Result<()> {
/// let mut writer = PackageWriter::new();
/// writer.add_part("ppt/presentation.xml", "application/xml", b"<p:presentation/>")?;
/// let bytes = writer.finish_to_bytes()?;
/// # Ok(())
/// # }
/// ```
pub struct PackageWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    overrides: Vec<(String, String)>,
    compression: CompressionMethod,
}

impl PackageWriter<Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self::with_writer(Cursor::new(Vec::new()))
    }

    /// Finish writing and return the package bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter<Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Create a new package writer over a custom writer.
    pub fn with_writer(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            overrides: Vec::new(),
            compression: CompressionMethod::Deflated,
        }
    }

    /// Set the compression method for subsequent entries.
    pub fn set_compression(&mut self, compression: CompressionMethod) {
        self.compression = compression;
    }

    // Entry mtimes stay at the DOS epoch so repeated builds produce
    // byte-identical archives.
    fn file_options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
    }

    fn write_entry(&mut self, path: &str, content: &[u8]) -> Result<()> {
        self.zip.start_file(path, self.file_options())?;
        self.zip.write_all(content)?;
        Ok(())
    }

    /// Add a part, registering its content-type override.
    pub fn add_part(&mut self, path: &str, content_type: &str, content: &[u8]) -> Result<()> {
        self.overrides
            .push((format!("/{path}"), content_type.to_string()));
        self.write_entry(path, content)
    }

    /// Write the relationships part for `source_part`.
    ///
    /// The package-level relationships use an empty `source_part`.
    /// Relationship parts are covered by the `rels` default content
    /// type, so no override is registered.
    pub fn add_relationships(&mut self, source_part: &str, rels: &Relationships) -> Result<()> {
        if rels.is_empty() {
            return Ok(());
        }
        let path = rels_path(source_part);
        self.write_entry(&path, rels.to_xml().as_bytes())
    }

    fn content_types_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
             <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
             <Default Extension=\"xml\" ContentType=\"application/xml\"/>",
        );
        for (part_name, content_type) in &self.overrides {
            xml.push_str(&format!(
                "<Override PartName=\"{}\" ContentType=\"{}\"/>",
                escape(part_name.as_str()),
                escape(content_type.as_str()),
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    /// Emit `[Content_Types].xml` and finalize the archive.
    pub fn finish(mut self) -> Result<W> {
        let content_types = self.content_types_xml();
        self.write_entry("[Content_Types].xml", content_types.as_bytes())?;
        let writer = self.zip.finish()?;
        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_rels_path() {
        assert_eq!(rels_path(""), "_rels/.rels");
        assert_eq!(
            rels_path("ppt/presentation.xml"),
            "ppt/_rels/presentation.xml.rels"
        );
        assert_eq!(
            rels_path("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(rels_path("part.xml"), "_rels/part.xml.rels");
    }

    #[test]
    fn test_relationship_id_allocation() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("type-a", "a.xml"), "rId1");
        assert_eq!(rels.add("type-b", "b.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_relationships_xml() {
        let mut rels = Relationships::new();
        rels.add("http://example.org/rel", "target.xml");
        let xml = rels.to_xml();
        assert!(xml.contains("Id=\"rId1\""));
        assert!(xml.contains("Target=\"target.xml\""));
        assert!(xml.contains("xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\""));
    }

    #[test]
    fn test_package_round_trip() {
        let mut writer = PackageWriter::new();
        writer
            .add_part("ppt/presentation.xml", "application/test+xml", b"<root/>")
            .unwrap();

        let mut rels = Relationships::new();
        rels.add("http://example.org/officeDocument", "ppt/presentation.xml");
        writer.add_relationships("", &rels).unwrap();

        let bytes = writer.finish_to_bytes().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"ppt/presentation.xml".to_string()));

        let mut content_types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut content_types)
            .unwrap();
        assert!(content_types.contains("PartName=\"/ppt/presentation.xml\""));
        assert!(content_types.contains("ContentType=\"application/test+xml\""));
    }

    #[test]
    fn test_deterministic_output() {
        let build = || {
            let mut writer = PackageWriter::new();
            writer
                .add_part("part.xml", "application/xml", b"<root/>")
                .unwrap();
            writer.finish_to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }
}
