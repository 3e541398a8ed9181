//! Slidesmith - A declarative slide-deck builder for PowerPoint files
//!
//! This library turns a data description of a slide deck (backgrounds,
//! titles, bullet lists, colored cards, progress bars, free text) into a
//! complete `.pptx` file. Slides are specified as values, composed in order,
//! and written atomically: a build either yields a whole document or fails
//! with the index of the slide that could not be rendered.
//!
//! # Features
//!
//! - **Declarative decks**: describe slides as [`deck::DeckSpec`] values or
//!   YAML documents; per-slide variation is data, not code
//! - **Semantic colors**: blocks reference registry tokens such as
//!   `brand-primary` or `success` that resolve to RGB at build time
//! - **Typed content blocks**: headings, bullet lists, cards, progress bars
//!   and free text, each with its own frame on the page
//! - **Self-contained writer**: emits the full PresentationML package
//!   (slides, master, layout, theme, properties) with no external templates
//! - **Atomic output**: the document serializes to memory first, so a failed
//!   build never leaves a partial file
//!
//! # Example - Building a deck
//!
//! ```
//! use slidesmith::deck::{build, BulletItem, ContentBlock, DeckSpec, Frame, SlideSpec, SlideTitle};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let deck = DeckSpec::new().with_slide(
//!     SlideSpec::new()
//!         .with_title(SlideTitle::new("Agenda"))
//!         .with_block(ContentBlock::bullet_list(
//!             Frame::from_inches(1.0, 1.5, 8.0, 4.0),
//!             vec![
//!                 BulletItem::new("Current metrics"),
//!                 BulletItem::new("Adoption model"),
//!                 BulletItem::new("Next steps"),
//!             ],
//!         )),
//! );
//!
//! let doc = build(&deck)?;
//! assert_eq!(doc.slide_count(), 1);
//! // doc.save("agenda.pptx")? would write the finished file
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Decks from YAML
//!
//! ```
//! use slidesmith::deck::{build, DeckSpec};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let deck = DeckSpec::from_yaml(r#"
//! slides:
//!   - title:
//!       text: Delivery
//!     content:
//!       - type: progress-bar
//!         frame: { x: 1371600, y: 1371600, width: 6400800, height: 457200 }
//!         fraction: 0.35
//!         label: Adoption
//! "#)?;
//!
//! let doc = build(&deck)?;
//! assert_eq!(doc.slide_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Direct document authoring
//!
//! ```no_run
//! use slidesmith::pptx::{Document, Paragraph, TextFrame};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let mut doc = Document::new();
//! let slide = doc.add_slide();
//! slide.add_text_box(
//!     914_400,
//!     2_286_000,
//!     7_315_200,
//!     914_400,
//!     TextFrame::new().paragraph(Paragraph::new("Hello").with_size(44.0).with_bold()),
//! );
//! doc.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared infrastructure: error taxonomy, unit conversions, XML helpers
pub mod common;

/// The declarative layer: deck specifications, shape primitives, slide
/// composition and the deck builder
pub mod deck;

/// Low-level PresentationML authoring and package serialization
pub mod pptx;

/// The color model and the semantic token registry
pub mod style;

// Re-export the types most callers touch
pub use common::{Error, Result};
pub use deck::{build, DeckBuilder, DeckSpec, SlideSpec};
pub use pptx::Document;
