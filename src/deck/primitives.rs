//! Stateless shape primitives: one call places one visual element.
//!
//! Each primitive resolves its color tokens, appends shapes to the slide it
//! was handed and returns the new shape handles. Side effects are confined
//! to that slide; nothing else is read or written beyond the registry.

use super::spec::{BulletItem, Fill, Frame, TextRun};
use crate::common::error::{Error, Result};
use crate::common::unit::inches_to_emu;
use crate::pptx::{Align, Anchor, Background, Outline, Paragraph, ShapeId, Slide, TextFrame};
use crate::style::{self, ColorToken};

/// Card border weight in points.
const CARD_BORDER_PT: f64 = 2.0;
const CARD_ICON_PT: f64 = 32.0;
const CARD_TITLE_PT: f64 = 18.0;
const CARD_BODY_PT: f64 = 14.0;
const CARD_SPACING_PT: f64 = 6.0;

const BAR_LABEL_PT: f64 = 14.0;
const BAR_LABEL_WIDTH_IN: f64 = 1.2;

const BULLET_GLYPH: char = '•';

/// Place one text box rendering `runs` as successive paragraphs.
///
/// Each run becomes one paragraph carrying its own size, weight, color,
/// alignment, indent level and spacing. Fails with [`Error::UnknownToken`]
/// if a run references an unregistered color.
pub fn place_text(
    slide: &mut Slide,
    frame: Frame,
    runs: &[TextRun],
    anchor: Anchor,
) -> Result<ShapeId> {
    let mut text = TextFrame::new().with_anchor(anchor);
    for run in runs {
        text.push(paragraph_for(run)?);
    }
    Ok(slide.add_text_box(frame.x, frame.y, frame.width, frame.height, text))
}

fn paragraph_for(run: &TextRun) -> Result<Paragraph> {
    let mut paragraph = Paragraph::new(run.text.as_str())
        .with_align(run.align)
        .with_level(run.level);
    if let Some(size) = run.size_pt {
        paragraph = paragraph.with_size(size);
    }
    if run.bold {
        paragraph = paragraph.with_bold();
    }
    if let Some(token) = &run.color {
        paragraph = paragraph.with_color(token.resolve()?);
    }
    if let Some(space) = run.space_before_pt {
        paragraph = paragraph.with_space_before(space);
    }
    Ok(paragraph)
}

/// Place a bulleted list as one text box.
///
/// Items at indent level 1 and deeper carry an explicit bullet glyph;
/// level 0 lead-ins render without one.
pub fn place_bullet_list(
    slide: &mut Slide,
    frame: Frame,
    items: &[BulletItem],
    size_pt: f64,
    color: &ColorToken,
) -> Result<ShapeId> {
    let rgb = color.resolve()?;
    let mut text = TextFrame::new();
    for item in items {
        let mut paragraph = Paragraph::new(item.text.as_str())
            .with_size(size_pt)
            .with_color(rgb)
            .with_level(item.level);
        if item.bold {
            paragraph = paragraph.with_bold();
        }
        if item.level > 0 {
            paragraph = paragraph.with_bullet(BULLET_GLYPH);
        }
        text.push(paragraph);
    }
    Ok(slide.add_text_box(frame.x, frame.y, frame.width, frame.height, text))
}

/// Place a bordered card: neutral fill, accent border, centered text.
///
/// The card body is a rectangle filled with the `card-bg` tone and outlined
/// in the accent color at 2 pt. Its text is middle-anchored: an optional
/// 32 pt icon line, an 18 pt bold title line, both in the accent color, and
/// 14 pt body text in `ink`. Newlines in `body` become line breaks.
pub fn place_card(
    slide: &mut Slide,
    frame: Frame,
    title: &str,
    body: &str,
    icon: Option<&str>,
    accent: &ColorToken,
) -> Result<ShapeId> {
    let accent_rgb = accent.resolve()?;
    let fill = style::resolve("card-bg")?;
    let body_rgb = style::resolve("ink")?;

    let card = slide.add_rectangle(
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        Some(fill),
        Some(Outline::new(accent_rgb, CARD_BORDER_PT)),
    );

    let mut text = TextFrame::new().with_anchor(Anchor::Middle);
    if let Some(glyph) = icon {
        text.push(
            Paragraph::new(glyph)
                .with_size(CARD_ICON_PT)
                .with_bold()
                .with_color(accent_rgb)
                .with_align(Align::Center),
        );
    }
    let mut title_line = Paragraph::new(title)
        .with_size(CARD_TITLE_PT)
        .with_bold()
        .with_color(accent_rgb)
        .with_align(Align::Center);
    if icon.is_some() {
        title_line = title_line.with_space_before(CARD_SPACING_PT);
    }
    text.push(title_line);
    text.push(
        Paragraph::new(body)
            .with_size(CARD_BODY_PT)
            .with_color(body_rgb)
            .with_align(Align::Center)
            .with_space_before(CARD_SPACING_PT),
    );

    if let Some(shape) = slide.shape_mut(card) {
        shape.set_text_frame(text);
    }
    Ok(card)
}

/// Place a progress bar: track, overlay and percentage label.
///
/// The track spans the full frame in the neutral `track` tone; the overlay
/// covers `frame.width * fraction` of it in the given color; the label
/// reads `"{percent}% {label}"` and sits just past the bar's right edge.
/// Neither bar carries an outline. Returns the three shape handles in that
/// order. Fails with [`Error::InvalidFraction`] unless `fraction` lies in
/// `[0, 1]`.
pub fn place_progress_bar(
    slide: &mut Slide,
    frame: Frame,
    fraction: f64,
    label: &str,
    color: &ColorToken,
) -> Result<(ShapeId, ShapeId, ShapeId)> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::InvalidFraction(fraction));
    }
    let bar_rgb = color.resolve()?;
    let track_rgb = style::resolve("track")?;

    let track = slide.add_rectangle(
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        Some(track_rgb),
        None,
    );

    let overlay_width = (frame.width as f64 * fraction).round() as i64;
    let overlay = slide.add_rectangle(
        frame.x,
        frame.y,
        overlay_width,
        frame.height,
        Some(bar_rgb),
        None,
    );

    let percent = (fraction * 100.0).round() as i64;
    let text = TextFrame::new().with_anchor(Anchor::Middle).paragraph(
        Paragraph::new(format!("{percent}% {label}"))
            .with_size(BAR_LABEL_PT)
            .with_bold()
            .with_color(bar_rgb),
    );
    let label_x = frame.x + (frame.width as f64 * 1.05).round() as i64;
    let label_box = slide.add_text_box(
        label_x,
        frame.y,
        inches_to_emu(BAR_LABEL_WIDTH_IN),
        frame.height,
        text,
    );

    Ok((track, overlay, label_box))
}

/// Set the slide background to a solid token fill or a two-stop linear
/// gradient.
pub fn set_background(slide: &mut Slide, fill: &Fill) -> Result<()> {
    let background = match fill {
        Fill::Solid { color } => Background::solid(color.resolve()?),
        Fill::Gradient {
            start,
            end,
            angle_deg,
        } => Background::two_stop(start.resolve()?, end.resolve()?, *angle_deg),
    };
    slide.set_background(background);
    Ok(())
}
