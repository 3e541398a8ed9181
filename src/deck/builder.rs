//! Drives composition over a whole deck.
//!
//! The builder owns the document for the duration of one `build` call and
//! walks the slide specs in order. Any composition failure is wrapped with
//! the offending slide's index and the document is discarded, so a build
//! either yields a complete document or nothing.

use super::composer::{self, ComposeOptions};
use super::spec::DeckSpec;
use crate::common::error::Result;
use crate::pptx::Document;
use std::path::Path;

/// Builds finished documents from deck specifications.
///
/// # Examples
///
/// ```no_run
/// use slidesmith::deck::{DeckBuilder, DeckSpec, SlideSpec, SlideTitle};
/// # use slidesmith::Result;
/// # fn example() -> Result<()> {
/// let deck = DeckSpec::new()
///     .with_slide(SlideSpec::new().with_title(SlideTitle::new("Kickoff")));
/// DeckBuilder::new().build_to_file(&deck, "kickoff.pptx")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckBuilder {
    options: ComposeOptions,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escalate out-of-bounds block frames from warnings to hard failures.
    pub fn strict_bounds(mut self, strict: bool) -> Self {
        self.options.strict_bounds = strict;
        self
    }

    /// Compose every slide of `spec`, in order, into a new document.
    ///
    /// Fails with [`Error::Composition`](crate::Error::Composition) carrying
    /// the zero-based index of the first slide that could not be rendered.
    pub fn build(&self, spec: &DeckSpec) -> Result<Document> {
        let mut doc = Document::with_size(spec.width, spec.height);
        for (index, slide_spec) in spec.slides.iter().enumerate() {
            composer::compose(&mut doc, slide_spec, self.options)
                .map_err(|err| err.at_slide(index))?;
        }
        log::debug!("built deck with {} slide(s)", doc.slide_count());
        Ok(doc)
    }

    /// Build the deck and write it to `path`.
    ///
    /// The document is serialized only after every slide has composed, so a
    /// failed build leaves no file behind.
    pub fn build_to_file<P: AsRef<Path>>(&self, spec: &DeckSpec, path: P) -> Result<()> {
        let doc = self.build(spec)?;
        doc.save(path)
    }
}

/// Build a deck with default options.
pub fn build(spec: &DeckSpec) -> Result<Document> {
    DeckBuilder::new().build(spec)
}
