//! One slide: background, styled title and ordered shapes, plus `p:sld`
//! emission.
//!
//! Shapes are stored and written strictly in insertion order, which is what
//! determines z-order in the rendered slide. Within a slide the group shape
//! takes id 1 and the title placeholder id 2, so ordinary shapes start at 3.

use super::background::Background;
use super::shape::{Outline, Shape, ShapeId};
use super::text::{Align, TextFrame};
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::{push_escaped, push_int, push_int_attr};
use crate::style::Rgb;

const FIRST_SHAPE_ID: u32 = 3;

/// Styled title rendered as the slide's title placeholder.
///
/// The placeholder carries an explicit frame and run properties rather than
/// inheriting from a layout, so it renders identically in any viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub size_pt: f64,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub align: Align,
}

/// A slide under construction.
#[derive(Debug, Clone)]
pub struct Slide {
    pub(crate) slide_id: u32,
    pub(crate) title: Option<Title>,
    pub(crate) background: Option<Background>,
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            title: None,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: Title) {
        self.title = Some(title);
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Set the slide background.
    pub fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    /// Get the slide background.
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Add a text box at the given EMU position and extent.
    pub fn add_text_box(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        frame: TextFrame,
    ) -> ShapeId {
        let shape_id = self.next_shape_id();
        self.shapes
            .push(Shape::new_text_box(shape_id, x, y, width, height, frame));
        ShapeId(shape_id)
    }

    /// Add a rectangle at the given EMU position and extent.
    ///
    /// `line: None` writes an explicit empty outline, so the rectangle has no
    /// border regardless of theme defaults.
    pub fn add_rectangle(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Option<Rgb>,
        line: Option<Outline>,
    ) -> ShapeId {
        let shape_id = self.next_shape_id();
        self.shapes
            .push(Shape::new_rect(shape_id, x, y, width, height, fill, line));
        ShapeId(shape_id)
    }

    /// Look up a placed shape by handle.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.shape_id == id.0)
    }

    /// Look up a placed shape by handle, for further styling.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.shape_id == id.0)
    }

    /// All shapes in insertion (z-) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes on the slide, excluding the title placeholder.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + FIRST_SHAPE_ID
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before the shape tree
        if let Some(ref background) = self.background {
            background.write_xml(&mut xml);
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if let Some(ref title) = self.title {
            write_title_shape(&mut xml, title);
        }

        for shape in &self.shapes {
            shape.write_xml(&mut xml);
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        xml
    }
}

/// Write the title placeholder shape.
fn write_title_shape(xml: &mut String, title: &Title) {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    // Group shape uses id=1, so the title uses id=2
    xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str("<a:off");
    push_int_attr(xml, "x", title.x);
    push_int_attr(xml, "y", title.y);
    xml.push_str("/>");
    xml.push_str("<a:ext");
    push_int_attr(xml, "cx", title.width);
    push_int_attr(xml, "cy", title.height);
    xml.push_str("/>");
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr anchor=\"ctr\"/>");
    xml.push_str("<a:lstStyle/>");
    xml.push_str("<a:p>");
    match title.align {
        Align::Left => {},
        Align::Center => xml.push_str("<a:pPr algn=\"ctr\"/>"),
        Align::Right => xml.push_str("<a:pPr algn=\"r\"/>"),
    }
    xml.push_str("<a:r>");
    xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");
    xml.push_str(" sz=\"");
    push_int(xml, i64::from(pt_to_centipoints(title.size_pt)));
    xml.push('"');
    if title.bold {
        xml.push_str(" b=\"1\"");
    }
    if let Some(color) = title.color {
        xml.push('>');
        xml.push_str("<a:solidFill><a:srgbClr val=\"");
        xml.push_str(&color.to_hex());
        xml.push_str("\"/></a:solidFill>");
        xml.push_str("</a:rPr>");
    } else {
        xml.push_str("/>");
    }
    xml.push_str("<a:t>");
    push_escaped(xml, &title.text);
    xml.push_str("</a:t>");
    xml.push_str("</a:r>");
    xml.push_str("</a:p>");
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::text::Paragraph;

    fn title(text: &str) -> Title {
        Title {
            text: text.to_string(),
            x: 457_200,
            y: 274_320,
            width: 8_229_600,
            height: 731_520,
            size_pt: 36.0,
            bold: true,
            color: Some(Rgb::new(0, 75, 135)),
            align: Align::Center,
        }
    }

    #[test]
    fn test_empty_slide_xml() {
        let slide = Slide::new(256);
        let xml = slide.to_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains("<p:spTree>"));
        assert!(xml.contains(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = Slide::new(256);
        slide.set_background(Background::solid(Rgb::new(255, 255, 255)));
        let xml = slide.to_xml();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
    }

    #[test]
    fn test_title_placeholder() {
        let mut slide = Slide::new(256);
        slide.set_title(title("Agenda"));
        let xml = slide.to_xml();
        assert!(xml.contains(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#));
        assert!(xml.contains("<a:off x=\"457200\" y=\"274320\"/>"));
        assert!(xml.contains("sz=\"3600\" b=\"1\""));
        assert!(xml.contains("<a:t>Agenda</a:t>"));
    }

    #[test]
    fn test_shape_ids_and_order() {
        let mut slide = Slide::new(256);
        let first = slide.add_rectangle(0, 0, 10, 10, None, None);
        let second = slide.add_text_box(
            0,
            0,
            10,
            10,
            TextFrame::new().paragraph(Paragraph::new("x")),
        );
        assert_eq!(first, ShapeId(3));
        assert_eq!(second, ShapeId(4));
        assert_eq!(slide.shape_count(), 2);

        let xml = slide.to_xml();
        let rect = xml.find("Rectangle 3").unwrap();
        let text = xml.find("Text Box 4").unwrap();
        assert!(rect < text);
    }

    #[test]
    fn test_shape_lookup() {
        let mut slide = Slide::new(257);
        let id = slide.add_rectangle(1, 2, 3, 4, None, None);
        assert_eq!(slide.shape(id).unwrap().bounds(), (1, 2, 3, 4));
        assert!(slide.shape(ShapeId(99)).is_none());

        slide
            .shape_mut(id)
            .unwrap()
            .set_fill(Some(Rgb::new(1, 2, 3)));
        assert_eq!(slide.shape(id).unwrap().fill(), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_slide_xml_parses_back() {
        let mut slide = Slide::new(256);
        slide.set_background(Background::two_stop(
            Rgb::new(0, 32, 60),
            Rgb::new(0, 120, 210),
            90.0,
        ));
        slide.set_title(title("Q&A <recap>"));
        let card = slide.add_rectangle(
            457_200,
            1_371_600,
            2_743_200,
            1_828_800,
            Some(Rgb::new(248, 249, 250)),
            Some(Outline::new(Rgb::new(200, 10, 40), 2.0)),
        );
        slide.shape_mut(card).unwrap().set_text_frame(
            TextFrame::new().paragraph(Paragraph::new("5.9 Days").with_bold()),
        );
        slide.add_text_box(
            457_200,
            3_657_600,
            7_315_200,
            914_400,
            TextFrame::new().paragraph(Paragraph::new("line one\nline two")),
        );

        let xml = slide.to_xml();
        let mut reader = quick_xml::Reader::from_str(&xml);
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut sp_count = 0usize;
        let mut colors = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => {
                    depth += 1;
                    if e.name().as_ref() == b"p:sp" {
                        sp_count += 1;
                    }
                }
                Ok(quick_xml::events::Event::End(_)) => depth -= 1,
                Ok(quick_xml::events::Event::Empty(ref e)) => {
                    if e.name().as_ref() == b"a:srgbClr" {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"val" {
                                colors.push(String::from_utf8_lossy(&attr.value).to_string());
                            }
                        }
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => panic!("emitted XML failed to parse: {e}"),
                _ => {}
            }
            buf.clear();
        }

        assert_eq!(depth, 0);
        // Title, card and text box
        assert_eq!(sp_count, 3);
        assert!(colors.contains(&"F8F9FA".to_string()));
        assert!(colors.contains(&"C80A28".to_string()));
    }
}
