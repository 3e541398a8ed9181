//! Renders one slide specification into a document slide.
//!
//! The composer does not compute layout. Every block arrives with its own
//! frame; blocks render in spec order, which fixes their z-order, and the
//! only check performed here is that each frame stays on the page.

use super::primitives;
use super::spec::{ContentBlock, Frame, SlideSpec, TextRun};
use crate::common::error::{Error, Result};
use crate::common::unit::inches_to_emu;
use crate::pptx::{Anchor, Document, Slide, Title};

/// Side margin of the title band, inches.
const TITLE_MARGIN_IN: f64 = 0.5;
const TITLE_TOP_IN: f64 = 0.3;
const TITLE_HEIGHT_IN: f64 = 0.8;

/// Rendering options shared across one build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposeOptions {
    /// Escalate out-of-bounds frames from warnings to hard errors.
    pub strict_bounds: bool,
}

/// Append one slide rendering `spec` and return its zero-based index.
///
/// Applies the background first, then the title, then every content block
/// in order. On error the document may retain a partially rendered slide;
/// [`DeckBuilder`](crate::deck::DeckBuilder) discards the whole document in
/// that case.
pub fn compose(doc: &mut Document, spec: &SlideSpec, options: ComposeOptions) -> Result<usize> {
    let index = doc.slide_count();
    let page_width = doc.slide_width();
    let page_height = doc.slide_height();
    let slide = doc.add_slide();

    if let Some(fill) = &spec.background {
        primitives::set_background(slide, fill)?;
    }

    if let Some(title) = &spec.title {
        let color = title.color.resolve()?;
        let margin = inches_to_emu(TITLE_MARGIN_IN);
        slide.set_title(Title {
            text: title.text.clone(),
            x: margin,
            y: inches_to_emu(TITLE_TOP_IN),
            width: page_width - 2 * margin,
            height: inches_to_emu(TITLE_HEIGHT_IN),
            size_pt: title.size_pt,
            bold: true,
            color: Some(color),
            align: title.align,
        });
    }

    for block in &spec.content {
        check_bounds(block.frame(), page_width, page_height, options.strict_bounds)?;
        render_block(slide, block)?;
    }

    log::debug!(
        "composed slide {} with {} shape(s)",
        index,
        doc.slide(index).map_or(0, Slide::shape_count)
    );
    Ok(index)
}

fn check_bounds(frame: Frame, page_width: i64, page_height: i64, strict: bool) -> Result<()> {
    if frame.fits_within(page_width, page_height) {
        return Ok(());
    }
    let err = Error::OutOfBounds {
        x: frame.x,
        y: frame.y,
        width: frame.width,
        height: frame.height,
        page_width,
        page_height,
    };
    if strict {
        return Err(err);
    }
    log::warn!("{err}");
    Ok(())
}

fn render_block(slide: &mut Slide, block: &ContentBlock) -> Result<()> {
    match block {
        ContentBlock::Heading {
            frame,
            text,
            size_pt,
            color,
            align,
        } => {
            let run = TextRun::new(text.as_str())
                .with_size(*size_pt)
                .with_bold()
                .with_color(color.clone())
                .with_align(*align);
            primitives::place_text(slide, *frame, &[run], Anchor::Top)?;
        }
        ContentBlock::BulletList {
            frame,
            items,
            size_pt,
            color,
        } => {
            primitives::place_bullet_list(slide, *frame, items, *size_pt, color)?;
        }
        ContentBlock::Card {
            frame,
            title,
            body,
            icon,
            accent,
        } => {
            primitives::place_card(slide, *frame, title, body, icon.as_deref(), accent)?;
        }
        ContentBlock::ProgressBar {
            frame,
            fraction,
            label,
            color,
        } => {
            primitives::place_progress_bar(slide, *frame, *fraction, label, color)?;
        }
        ContentBlock::FreeText {
            frame,
            runs,
            anchor,
        } => {
            primitives::place_text(slide, *frame, runs, *anchor)?;
        }
    }
    Ok(())
}
