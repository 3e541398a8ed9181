//! Slide backgrounds: solid fills and linear gradients.

use crate::common::unit::{degrees_to_angle_units, fraction_to_stop_units};
use crate::common::xml::push_int;
use crate::style::Rgb;

/// One gradient stop with a [0, 1] position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Rgb,
}

impl GradientStop {
    pub fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// Background fill of a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid { color: Rgb },
    LinearGradient { angle_deg: f64, stops: Vec<GradientStop> },
}

impl Background {
    pub fn solid(color: Rgb) -> Self {
        Self::Solid { color }
    }

    pub fn linear_gradient(angle_deg: f64, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient { angle_deg, stops }
    }

    /// Two-stop gradient from `start` (position 0) to `end` (position 1).
    pub fn two_stop(start: Rgb, end: Rgb, angle_deg: f64) -> Self {
        Self::LinearGradient {
            angle_deg,
            stops: vec![GradientStop::new(0.0, start), GradientStop::new(1.0, end)],
        }
    }

    /// Generate the `p:bg` element. Must be written before `p:spTree`.
    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<p:bg>");
        xml.push_str("<p:bgPr>");

        match self {
            Self::Solid { color } => {
                xml.push_str("<a:solidFill><a:srgbClr val=\"");
                xml.push_str(&color.to_hex());
                xml.push_str("\"/></a:solidFill>");
            },
            Self::LinearGradient { angle_deg, stops } => {
                xml.push_str("<a:gradFill rotWithShape=\"1\">");
                xml.push_str("<a:gsLst>");
                for stop in stops {
                    xml.push_str("<a:gs pos=\"");
                    push_int(xml, fraction_to_stop_units(stop.position));
                    xml.push_str("\">");
                    xml.push_str("<a:srgbClr val=\"");
                    xml.push_str(&stop.color.to_hex());
                    xml.push_str("\"/>");
                    xml.push_str("</a:gs>");
                }
                xml.push_str("</a:gsLst>");
                xml.push_str("<a:lin ang=\"");
                push_int(xml, degrees_to_angle_units(*angle_deg));
                xml.push_str("\" scaled=\"0\"/>");
                xml.push_str("</a:gradFill>");
            },
        }

        xml.push_str("<a:effectLst/>");
        xml.push_str("</p:bgPr>");
        xml.push_str("</p:bg>");
    }
}
