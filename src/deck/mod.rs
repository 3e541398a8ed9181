//! The declarative deck layer: specifications in, finished documents out.
//!
//! A deck is described entirely as data ([`DeckSpec`]), composed one slide
//! at a time ([`composer`]) through stateless shape primitives
//! ([`primitives`]), and driven by the [`DeckBuilder`], which either
//! produces a complete [`Document`](crate::pptx::Document) or fails with
//! the index of the offending slide.

pub mod builder;
pub mod composer;
pub mod primitives;
pub mod spec;

pub use builder::{build, DeckBuilder};
pub use composer::{compose, ComposeOptions};
pub use spec::{
    BulletItem, ContentBlock, DeckSpec, Fill, Frame, SlideSpec, SlideTitle, TextRun,
};
