//! The presentation document: slides, page geometry and core properties.

use super::package;
use super::slide::Slide;
use crate::common::error::Result;
use crate::common::xml::push_int_attr;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Default page size, 10 x 7.5 inches in EMUs.
pub const DEFAULT_SLIDE_WIDTH: i64 = 9_144_000;
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

const FIRST_SLIDE_ID: u32 = 256;

/// Document-level properties written to `docProps/core.xml`.
#[derive(Debug, Clone, Default)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Creation timestamp; `None` stamps the current time at save.
    pub created: Option<DateTime<Utc>>,
    /// Modification timestamp; `None` stamps the current time at save.
    pub modified: Option<DateTime<Utc>>,
}

/// An in-memory presentation document.
///
/// Slides are appended in order and serialized in the same order. The
/// document serializes fully into memory before anything touches the
/// filesystem, so a failed build never leaves a partial file behind.
///
/// # Examples
///
/// ```no_run
/// use slidesmith::pptx::{Document, Paragraph, TextFrame};
/// # use slidesmith::Result;
/// # fn example() -> Result<()> {
/// let mut doc = Document::new();
/// let slide = doc.add_slide();
/// slide.add_text_box(
///     914_400,
///     914_400,
///     4_572_000,
///     914_400,
///     TextFrame::new().paragraph(Paragraph::new("Hello").with_size(24.0)),
/// );
/// doc.save("hello.pptx")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
    properties: CoreProperties,
}

impl Document {
    /// Create an empty document with the default 10 x 7.5 inch page.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SLIDE_WIDTH, DEFAULT_SLIDE_HEIGHT)
    }

    /// Create an empty document with an explicit page size in EMUs.
    pub fn with_size(slide_width: i64, slide_height: i64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            slide_height,
            properties: CoreProperties::default(),
        }
    }

    /// Page width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Page height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Append a new empty slide and return it for authoring.
    pub fn add_slide(&mut self) -> &mut Slide {
        let index = self.slides.len();
        self.slides.push(Slide::new(FIRST_SLIDE_ID + index as u32));
        &mut self.slides[index]
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide by zero-based index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// All slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn properties(&self) -> &CoreProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.properties
    }

    /// Set the document title in the core properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.properties.title = Some(title.into());
    }

    /// Set the document author in the core properties.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.properties.author = Some(author.into());
    }

    /// Generate `ppt/presentation.xml`. `slide_rel_ids` pairs with the
    /// slides in order.
    pub(crate) fn presentation_xml(&self, slide_rel_ids: &[String]) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                xml.push_str("<p:sldId");
                push_int_attr(&mut xml, "id", i64::from(slide.slide_id()));
                xml.push_str(" r:id=\"");
                xml.push_str(rel_id);
                xml.push_str("\"/>");
            }
            xml.push_str("</p:sldIdLst>");
        }

        xml.push_str("<p:sldSz");
        push_int_attr(&mut xml, "cx", self.slide_width);
        push_int_attr(&mut xml, "cy", self.slide_height);
        xml.push_str("/>");
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        xml
    }

    /// Serialize the document to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::write_package(self)
    }

    /// Serialize the document and write it to `path` in one operation.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_create_document() {
        let doc = Document::new();
        assert_eq!(doc.slide_count(), 0);
        assert_eq!(doc.slide_width(), 9_144_000);
        assert_eq!(doc.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut doc = Document::new();
        doc.add_slide();
        doc.add_slide();
        assert_eq!(doc.slide(0).unwrap().slide_id(), 256);
        assert_eq!(doc.slide(1).unwrap().slide_id(), 257);
    }

    #[test]
    fn test_presentation_xml() {
        let mut doc = Document::with_size(12_192_000, 6_858_000);
        doc.add_slide();
        doc.add_slide();
        let rel_ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = doc.presentation_xml(&rel_ids);

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_without_slides() {
        let doc = Document::new();
        let xml = doc.presentation_xml(&[]);
        assert!(!xml.contains("<p:sldIdLst>"));
        assert!(xml.contains("<p:sldSz"));
    }

    #[test]
    fn test_to_bytes_is_zip() {
        let mut doc = Document::new();
        doc.add_slide();
        let bytes = doc.to_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_package_parts_present() {
        let mut doc = Document::new();
        doc.set_title("Part check");
        doc.add_slide();
        doc.add_slide();
        let bytes = doc.to_bytes().unwrap();

        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }

        let mut core = String::new();
        archive
            .by_name("docProps/core.xml")
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert!(core.contains("<dc:title>Part check</dc:title>"));

        let mut app = String::new();
        archive
            .by_name("docProps/app.xml")
            .unwrap()
            .read_to_string(&mut app)
            .unwrap();
        assert!(app.contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");

        let mut doc = Document::new();
        doc.add_slide();
        doc.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}
