//! OPC package assembly.
//!
//! Serializes a [`Document`](super::document::Document) into the ZIP-based
//! Open Packaging Conventions container: content types, relationship parts,
//! the presentation part, static template parts, one part per slide, and the
//! document properties.

use super::document::Document;
use super::template;
use crate::common::error::Result;
use crate::common::xml::{escape_xml, push_int};
use chrono::{SecondsFormat, Utc};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_XML: &str = "application/xml";
const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
const CT_VIEW_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
const CT_TABLE_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
const CT_CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_VIEW_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
const REL_TABLE_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";

/// Writer for the OPC ZIP container.
///
/// Parts are deflated; the archive is finished into a byte buffer so the
/// caller can write the whole file in one operation.
struct PackageWriter<W: Write + std::io::Seek> {
    zip_writer: ZipWriter<W>,
}

impl PackageWriter<std::io::Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory.
    fn new() -> Self {
        Self {
            zip_writer: ZipWriter::new(std::io::Cursor::new(Vec::new())),
        }
    }

    /// Finish the archive and return the raw bytes.
    fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl<W: Write + std::io::Seek> PackageWriter<W> {
    /// Add a part to the package.
    fn add_part(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content)?;
        Ok(())
    }
}

/// `[Content_Types].xml` builder.
struct ContentTypes {
    defaults: Vec<(&'static str, &'static str)>,
    overrides: Vec<(String, &'static str)>,
}

impl ContentTypes {
    fn new() -> Self {
        Self {
            defaults: vec![("rels", CT_RELATIONSHIPS), ("xml", CT_XML)],
            overrides: Vec::new(),
        }
    }

    fn add_override(&mut self, part_name: impl Into<String>, content_type: &'static str) {
        self.overrides.push((part_name.into(), content_type));
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (extension, content_type) in &self.defaults {
            xml.push_str("<Default Extension=\"");
            xml.push_str(extension);
            xml.push_str("\" ContentType=\"");
            xml.push_str(content_type);
            xml.push_str("\"/>");
        }
        for (part_name, content_type) in &self.overrides {
            xml.push_str("<Override PartName=\"");
            xml.push_str(part_name);
            xml.push_str("\" ContentType=\"");
            xml.push_str(content_type);
            xml.push_str("\"/>");
        }
        xml.push_str("</Types>");
        xml
    }
}

/// One relationship part (`*.rels`) builder. IDs are assigned sequentially
/// as `rId1`, `rId2`, ...
struct Relationships {
    entries: Vec<(String, &'static str, String)>,
}

impl Relationships {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add(&mut self, rel_type: &'static str, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push((id.clone(), rel_type, target.into()));
        id
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (id, rel_type, target) in &self.entries {
            xml.push_str("<Relationship Id=\"");
            xml.push_str(id);
            xml.push_str("\" Type=\"");
            xml.push_str(rel_type);
            xml.push_str("\" Target=\"");
            xml.push_str(target);
            xml.push_str("\"/>");
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// Serialize the whole document into OPC container bytes.
pub(crate) fn write_package(doc: &Document) -> Result<Vec<u8>> {
    let mut writer = PackageWriter::new();
    let slide_count = doc.slide_count();

    // Content types
    let mut content_types = ContentTypes::new();
    content_types.add_override("/ppt/presentation.xml", CT_PRESENTATION);
    content_types.add_override("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER);
    content_types.add_override("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT);
    content_types.add_override("/ppt/theme/theme1.xml", CT_THEME);
    content_types.add_override("/ppt/presProps.xml", CT_PRES_PROPS);
    content_types.add_override("/ppt/viewProps.xml", CT_VIEW_PROPS);
    content_types.add_override("/ppt/tableStyles.xml", CT_TABLE_STYLES);
    for index in 1..=slide_count {
        content_types.add_override(format!("/ppt/slides/slide{index}.xml"), CT_SLIDE);
    }
    content_types.add_override("/docProps/core.xml", CT_CORE_PROPS);
    content_types.add_override("/docProps/app.xml", CT_APP_PROPS);
    writer.add_part("[Content_Types].xml", content_types.to_xml().as_bytes())?;

    // Package-level relationships
    let mut package_rels = Relationships::new();
    package_rels.add(REL_OFFICE_DOCUMENT, "ppt/presentation.xml");
    package_rels.add(REL_CORE_PROPS, "docProps/core.xml");
    package_rels.add(REL_APP_PROPS, "docProps/app.xml");
    writer.add_part("_rels/.rels", package_rels.to_xml().as_bytes())?;

    // Presentation part and its relationships. The master takes rId1, the
    // slides follow, then the property parts and theme.
    let mut pres_rels = Relationships::new();
    pres_rels.add(REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let slide_rel_ids: Vec<String> = (1..=slide_count)
        .map(|index| pres_rels.add(REL_SLIDE, format!("slides/slide{index}.xml")))
        .collect();
    pres_rels.add(REL_PRES_PROPS, "presProps.xml");
    pres_rels.add(REL_VIEW_PROPS, "viewProps.xml");
    pres_rels.add(REL_THEME, "theme/theme1.xml");
    pres_rels.add(REL_TABLE_STYLES, "tableStyles.xml");
    writer.add_part("ppt/_rels/presentation.xml.rels", pres_rels.to_xml().as_bytes())?;
    writer.add_part(
        "ppt/presentation.xml",
        doc.presentation_xml(&slide_rel_ids).as_bytes(),
    )?;

    // Slide master, layout, theme
    let mut master_rels = Relationships::new();
    master_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(REL_THEME, "../theme/theme1.xml");
    writer.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        master_rels.to_xml().as_bytes(),
    )?;
    writer.add_part(
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master_xml().as_bytes(),
    )?;

    let mut layout_rels = Relationships::new();
    layout_rels.add(REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    writer.add_part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        layout_rels.to_xml().as_bytes(),
    )?;
    writer.add_part(
        "ppt/slideLayouts/slideLayout1.xml",
        template::slide_layout_xml().as_bytes(),
    )?;
    writer.add_part("ppt/theme/theme1.xml", template::theme_xml().as_bytes())?;

    writer.add_part("ppt/presProps.xml", template::pres_props_xml().as_bytes())?;
    writer.add_part("ppt/viewProps.xml", template::view_props_xml().as_bytes())?;
    writer.add_part("ppt/tableStyles.xml", template::table_styles_xml().as_bytes())?;

    // Slides
    for (index, slide) in doc.slides().iter().enumerate() {
        let part_number = index + 1;
        let mut slide_rels = Relationships::new();
        slide_rels.add(REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        writer.add_part(
            &format!("ppt/slides/_rels/slide{part_number}.xml.rels"),
            slide_rels.to_xml().as_bytes(),
        )?;
        writer.add_part(
            &format!("ppt/slides/slide{part_number}.xml"),
            slide.to_xml().as_bytes(),
        )?;
    }

    // Document properties
    writer.add_part("docProps/core.xml", core_properties_xml(doc).as_bytes())?;
    writer.add_part("docProps/app.xml", app_properties_xml(slide_count).as_bytes())?;

    let bytes = writer.finish_to_bytes()?;
    log::debug!(
        "packaged {} slide(s) into {} bytes",
        slide_count,
        bytes.len()
    );
    Ok(bytes)
}

fn core_properties_xml(doc: &Document) -> String {
    let props = doc.properties();
    let now = Utc::now();
    let created = props.created.unwrap_or(now);
    let modified = props.modified.unwrap_or(now);

    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

    if let Some(ref title) = props.title {
        xml.push_str("<dc:title>");
        xml.push_str(&escape_xml(title));
        xml.push_str("</dc:title>");
    }
    if let Some(ref author) = props.author {
        xml.push_str("<dc:creator>");
        xml.push_str(&escape_xml(author));
        xml.push_str("</dc:creator>");
        xml.push_str("<cp:lastModifiedBy>");
        xml.push_str(&escape_xml(author));
        xml.push_str("</cp:lastModifiedBy>");
    }
    xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
    xml.push_str("</dcterms:created>");
    xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
    xml.push_str("</dcterms:modified>");
    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_properties_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("<Slides>");
    push_int(&mut xml, slide_count as i64);
    xml.push_str("</Slides>");
    xml.push_str("<Application>slidesmith</Application>");
    xml.push_str("</Properties>");
    xml
}
