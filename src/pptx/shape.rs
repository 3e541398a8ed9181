//! Shapes placed on a slide.
//!
//! Two kinds cover the whole deck vocabulary: text boxes and rectangles.
//! Rectangles always emit an explicit outline element (solid or `a:noFill`)
//! so their appearance never depends on theme defaults.

use super::text::TextFrame;
use crate::common::unit::pt_to_emu;
use crate::common::xml::{push_int, push_int_attr};
use crate::style::Rgb;

/// Opaque handle to a shape placed on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub(crate) u32);

/// Outline stroke for rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    pub width_pt: f64,
}

impl Outline {
    pub fn new(color: Rgb, width_pt: f64) -> Self {
        Self { color, width_pt }
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    TextBox {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        frame: TextFrame,
    },
    Rect {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Option<Rgb>,
        line: Option<Outline>,
        frame: Option<TextFrame>,
    },
}

impl Shape {
    pub(crate) fn new_text_box(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        frame: TextFrame,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                frame,
            },
        }
    }

    pub(crate) fn new_rect(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Option<Rgb>,
        line: Option<Outline>,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Rect {
                x,
                y,
                width,
                height,
                fill,
                line,
                frame: None,
            },
        }
    }

    /// This shape's handle.
    pub fn id(&self) -> ShapeId {
        ShapeId(self.shape_id)
    }

    /// Position and extent as `(x, y, width, height)` in EMUs.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        match &self.kind {
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                ..
            }
            | ShapeKind::Rect {
                x,
                y,
                width,
                height,
                ..
            } => (*x, *y, *width, *height),
        }
    }

    /// Solid fill color, if any. Text boxes have no fill.
    pub fn fill(&self) -> Option<Rgb> {
        match &self.kind {
            ShapeKind::Rect { fill, .. } => *fill,
            ShapeKind::TextBox { .. } => None,
        }
    }

    /// Outline, if any.
    pub fn line(&self) -> Option<Outline> {
        match &self.kind {
            ShapeKind::Rect { line, .. } => *line,
            ShapeKind::TextBox { .. } => None,
        }
    }

    /// Text content, if the shape carries any.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox { frame, .. } => Some(frame),
            ShapeKind::Rect { frame, .. } => frame.as_ref(),
        }
    }

    /// Builder method: replace the fill (rectangles only).
    pub fn set_fill(&mut self, fill: Option<Rgb>) -> &mut Self {
        if let ShapeKind::Rect { fill: ref mut f, .. } = self.kind {
            *f = fill;
        }
        self
    }

    /// Builder method: replace the outline (rectangles only).
    pub fn set_line(&mut self, line: Option<Outline>) -> &mut Self {
        if let ShapeKind::Rect { line: ref mut l, .. } = self.kind {
            *l = line;
        }
        self
    }

    /// Builder method: attach or replace text content.
    pub fn set_text_frame(&mut self, text: TextFrame) -> &mut Self {
        match self.kind {
            ShapeKind::TextBox { ref mut frame, .. } => *frame = text,
            ShapeKind::Rect { ref mut frame, .. } => *frame = Some(text),
        }
        self
    }

    /// Generate the `p:sp` element for this shape.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        match &self.kind {
            ShapeKind::TextBox {
                x,
                y,
                width,
                height,
                frame,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                xml.push_str("<p:cNvPr id=\"");
                push_int(xml, i64::from(self.shape_id));
                xml.push_str("\" name=\"Text Box ");
                push_int(xml, i64::from(self.shape_id));
                xml.push_str("\"/>");
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height);
                xml.push_str("<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>");
                xml.push_str("</p:spPr>");

                frame.write_xml(xml);
                xml.push_str("</p:sp>");
            },
            ShapeKind::Rect {
                x,
                y,
                width,
                height,
                fill,
                line,
                frame,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                xml.push_str("<p:cNvPr id=\"");
                push_int(xml, i64::from(self.shape_id));
                xml.push_str("\" name=\"Rectangle ");
                push_int(xml, i64::from(self.shape_id));
                xml.push_str("\"/>");
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height);
                xml.push_str("<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>");

                match fill {
                    Some(color) => {
                        xml.push_str("<a:solidFill><a:srgbClr val=\"");
                        xml.push_str(&color.to_hex());
                        xml.push_str("\"/></a:solidFill>");
                    },
                    None => xml.push_str("<a:noFill/>"),
                }

                match line {
                    Some(outline) => {
                        xml.push_str("<a:ln");
                        push_int_attr(xml, "w", pt_to_emu(outline.width_pt));
                        xml.push('>');
                        xml.push_str("<a:solidFill><a:srgbClr val=\"");
                        xml.push_str(&outline.color.to_hex());
                        xml.push_str("\"/></a:solidFill>");
                        xml.push_str("</a:ln>");
                    },
                    None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                }

                xml.push_str("</p:spPr>");

                if let Some(frame) = frame {
                    frame.write_xml(xml);
                }
                xml.push_str("</p:sp>");
            },
        }
    }
}

fn write_xfrm(xml: &mut String, x: i64, y: i64, width: i64, height: i64) {
    xml.push_str("<a:xfrm>");
    xml.push_str("<a:off");
    push_int_attr(xml, "x", x);
    push_int_attr(xml, "y", y);
    xml.push_str("/>");
    xml.push_str("<a:ext");
    push_int_attr(xml, "cx", width);
    push_int_attr(xml, "cy", height);
    xml.push_str("/>");
    xml.push_str("</a:xfrm>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::text::Paragraph;

    #[test]
    fn test_text_box_xml() {
        let frame = TextFrame::new().paragraph(Paragraph::new("hi"));
        let shape = Shape::new_text_box(3, 100, 200, 300, 400, frame);
        let mut xml = String::new();
        shape.write_xml(&mut xml);

        assert!(xml.contains("<p:cNvPr id=\"3\" name=\"Text Box 3\"/>"));
        assert!(xml.contains("<p:cNvSpPr txBox=\"1\"/>"));
        assert!(xml.contains("<a:off x=\"100\" y=\"200\"/>"));
        assert!(xml.contains("<a:ext cx=\"300\" cy=\"400\"/>"));
        assert!(xml.contains("<a:t>hi</a:t>"));
        // Text boxes carry no explicit outline
        assert!(!xml.contains("<a:ln"));
    }

    #[test]
    fn test_rect_with_fill_and_outline() {
        let shape = Shape::new_rect(
            4,
            0,
            0,
            500,
            250,
            Some(Rgb::new(248, 249, 250)),
            Some(Outline::new(Rgb::new(0, 75, 135), 2.0)),
        );
        let mut xml = String::new();
        shape.write_xml(&mut xml);

        assert!(xml.contains("name=\"Rectangle 4\""));
        assert!(xml.contains("<a:solidFill><a:srgbClr val=\"F8F9FA\"/></a:solidFill>"));
        assert!(xml.contains("<a:ln w=\"25400\"><a:solidFill><a:srgbClr val=\"004B87\"/></a:solidFill></a:ln>"));
    }

    #[test]
    fn test_rect_without_outline() {
        let shape = Shape::new_rect(5, 0, 0, 100, 100, Some(Rgb::new(40, 167, 69)), None);
        let mut xml = String::new();
        shape.write_xml(&mut xml);
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_rect_text_frame_attaches() {
        let mut shape = Shape::new_rect(6, 0, 0, 100, 100, None, None);
        assert!(shape.text_frame().is_none());

        shape.set_text_frame(TextFrame::new().paragraph(Paragraph::new("label")));
        let mut xml = String::new();
        shape.write_xml(&mut xml);
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains("<a:t>label</a:t>"));
    }

    #[test]
    fn test_bounds() {
        let shape = Shape::new_rect(7, 10, 20, 30, 40, None, None);
        assert_eq!(shape.bounds(), (10, 20, 30, 40));
        assert_eq!(shape.id(), ShapeId(7));
    }
}
