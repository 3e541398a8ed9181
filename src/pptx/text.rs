//! Text content for shapes: paragraphs, alignment, and `a:txBody` emission.
//!
//! Every paragraph carries its own run properties, which matches how the deck
//! layer maps one text run to one paragraph. Newlines inside paragraph text
//! become `<a:br/>` line breaks rather than new paragraphs, so a multi-line
//! card body stays one logical paragraph.

use crate::common::unit::pt_to_centipoints;
use crate::common::xml::{push_escaped, push_int};
use crate::style::Rgb;
use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// The `algn` attribute value, or `None` for the default.
    fn attr(self) -> Option<&'static str> {
        match self {
            Self::Left => None,
            Self::Center => Some("ctr"),
            Self::Right => Some("r"),
        }
    }
}

/// Vertical anchoring of text within its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    /// The `anchor` attribute value, or `None` for the default.
    fn attr(self) -> Option<&'static str> {
        match self {
            Self::Top => None,
            Self::Middle => Some("ctr"),
            Self::Bottom => Some("b"),
        }
    }
}

/// One paragraph with its own run properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub size_pt: Option<f64>,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub align: Align,
    /// Indent level, 0-based as in OOXML (`lvl` is omitted at 0).
    pub level: u8,
    pub space_before_pt: Option<f64>,
    /// Bullet glyph; `None` leaves the paragraph unbulleted.
    pub bullet: Option<char>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size_pt: None,
            bold: false,
            color: None,
            align: Align::Left,
            level: 0,
            space_before_pt: None,
            bullet: None,
        }
    }

    pub fn with_size(mut self, size_pt: f64) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_space_before(mut self, space_pt: f64) -> Self {
        self.space_before_pt = Some(space_pt);
        self
    }

    pub fn with_bullet(mut self, glyph: char) -> Self {
        self.bullet = Some(glyph);
        self
    }

    /// Write this paragraph as an `<a:p>` element.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:p>");
        self.write_paragraph_properties(xml);

        for (index, segment) in self.text.split('\n').enumerate() {
            if index > 0 {
                xml.push_str("<a:br/>");
            }
            self.write_run(xml, segment);
        }

        xml.push_str("</a:p>");
    }

    fn write_paragraph_properties(&self, xml: &mut String) {
        let algn = self.align.attr();
        let needs_ppr = self.level > 0
            || algn.is_some()
            || self.space_before_pt.is_some()
            || self.bullet.is_some();
        if !needs_ppr {
            return;
        }

        xml.push_str("<a:pPr");
        if self.level > 0 {
            xml.push_str(" lvl=\"");
            push_int(xml, i64::from(self.level));
            xml.push('"');
        }
        if let Some(algn) = algn {
            xml.push_str(" algn=\"");
            xml.push_str(algn);
            xml.push('"');
        }

        let has_children = self.space_before_pt.is_some() || self.bullet.is_some();
        if !has_children {
            xml.push_str("/>");
            return;
        }
        xml.push('>');

        if let Some(space) = self.space_before_pt {
            xml.push_str("<a:spcBef><a:spcPts val=\"");
            push_int(xml, i64::from(pt_to_centipoints(space)));
            xml.push_str("\"/></a:spcBef>");
        }
        if let Some(glyph) = self.bullet {
            xml.push_str("<a:buChar char=\"");
            let mut scratch = [0u8; 4];
            push_escaped(xml, glyph.encode_utf8(&mut scratch));
            xml.push_str("\"/>");
        }

        xml.push_str("</a:pPr>");
    }

    fn write_run(&self, xml: &mut String, text: &str) {
        xml.push_str("<a:r>");
        xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");

        if let Some(size) = self.size_pt {
            xml.push_str(" sz=\"");
            push_int(xml, i64::from(pt_to_centipoints(size)));
            xml.push('"');
        }
        if self.bold {
            xml.push_str(" b=\"1\"");
        }

        if let Some(color) = self.color {
            xml.push('>');
            xml.push_str("<a:solidFill><a:srgbClr val=\"");
            xml.push_str(&color.to_hex());
            xml.push_str("\"/></a:solidFill>");
            xml.push_str("</a:rPr>");
        } else {
            xml.push_str("/>");
        }

        xml.push_str("<a:t>");
        push_escaped(xml, text);
        xml.push_str("</a:t>");
        xml.push_str("</a:r>");
    }
}

/// Text content of a shape: ordered paragraphs plus frame-level options.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: Anchor,
    pub word_wrap: bool,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            anchor: Anchor::Top,
            word_wrap: true,
        }
    }
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Write this frame as a `<p:txBody>` element.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr wrap=\"");
        xml.push_str(if self.word_wrap { "square" } else { "none" });
        xml.push_str("\" rtlCol=\"0\"");
        if let Some(anchor) = self.anchor.attr() {
            xml.push_str(" anchor=\"");
            xml.push_str(anchor);
            xml.push('"');
        }
        xml.push_str("/>");
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            // A txBody must contain at least one paragraph
            xml.push_str("<a:p/>");
        } else {
            for paragraph in &self.paragraphs {
                paragraph.write_xml(xml);
            }
        }

        xml.push_str("</p:txBody>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(paragraph: &Paragraph) -> String {
        let mut xml = String::new();
        paragraph.write_xml(&mut xml);
        xml
    }

    #[test]
    fn test_plain_paragraph() {
        let xml = render(&Paragraph::new("hello"));
        assert_eq!(
            xml,
            "<a:p><a:r><a:rPr lang=\"en-US\" dirty=\"0\"/><a:t>hello</a:t></a:r></a:p>"
        );
    }

    #[test]
    fn test_styled_paragraph() {
        let paragraph = Paragraph::new("Total")
            .with_size(18.0)
            .with_bold()
            .with_color(Rgb::new(200, 10, 40))
            .with_align(Align::Center);
        let xml = render(&paragraph);
        assert!(xml.contains("<a:pPr algn=\"ctr\"/>"));
        assert!(xml.contains("sz=\"1800\""));
        assert!(xml.contains("b=\"1\""));
        assert!(xml.contains("<a:srgbClr val=\"C80A28\"/>"));
    }

    #[test]
    fn test_indent_and_bullet() {
        let paragraph = Paragraph::new("item").with_level(1).with_bullet('•');
        let xml = render(&paragraph);
        assert!(xml.contains("<a:pPr lvl=\"1\"><a:buChar char=\"•\"/></a:pPr>"));
    }

    #[test]
    fn test_space_before() {
        let paragraph = Paragraph::new("body").with_space_before(6.0);
        let xml = render(&paragraph);
        assert!(xml.contains("<a:spcBef><a:spcPts val=\"600\"/></a:spcBef>"));
    }

    #[test]
    fn test_newline_becomes_break() {
        let xml = render(&Paragraph::new("line one\nline two"));
        assert_eq!(xml.matches("<a:br/>").count(), 1);
        assert_eq!(xml.matches("<a:t>").count(), 2);
        assert!(xml.contains("<a:t>line one</a:t>"));
        assert!(xml.contains("<a:t>line two</a:t>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render(&Paragraph::new("P&L <draft>"));
        assert!(xml.contains("<a:t>P&amp;L &lt;draft&gt;</a:t>"));
    }

    #[test]
    fn test_frame_anchor_and_default_paragraph() {
        let mut xml = String::new();
        TextFrame::new()
            .with_anchor(Anchor::Middle)
            .write_xml(&mut xml);
        assert!(xml.starts_with("<p:txBody><a:bodyPr wrap=\"square\" rtlCol=\"0\" anchor=\"ctr\"/>"));
        assert!(xml.contains("<a:p/>"));
    }

    #[test]
    fn test_frame_paragraph_order() {
        let mut xml = String::new();
        TextFrame::new()
            .paragraph(Paragraph::new("first"))
            .paragraph(Paragraph::new("second"))
            .write_xml(&mut xml);
        let first = xml.find("first").unwrap();
        let second = xml.find("second").unwrap();
        assert!(first < second);
    }
}
