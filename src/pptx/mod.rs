//! Low-level PresentationML authoring.
//!
//! This module builds `.pptx` packages from scratch: slides, text boxes,
//! rectangles and backgrounds, serialized through a single shared slide
//! master and blank layout. It knows nothing about decks or color tokens;
//! the declarative layer in [`crate::deck`] sits on top of it.

pub mod background;
pub mod document;
mod package;
pub mod shape;
pub mod slide;
mod template;
pub mod text;

pub use background::{Background, GradientStop};
pub use document::{CoreProperties, Document, DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH};
pub use shape::{Outline, Shape, ShapeId};
pub use slide::{Slide, Title};
pub use text::{Align, Anchor, Paragraph, TextFrame};
