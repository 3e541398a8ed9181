//! Builds a fictional platform program status deck.
//!
//! The whole presentation is one `DeckSpec` data table; nothing below
//! composes shapes by hand. Run with `RUST_LOG=debug` to watch the build.

use slidesmith::deck::{
    BulletItem, ContentBlock, DeckBuilder, DeckSpec, Fill, Frame, SlideSpec, SlideTitle, TextRun,
};
use slidesmith::pptx::Align;

fn title_slide() -> SlideSpec {
    SlideSpec::new()
        .with_background(Fill::gradient("midnight", "brand-secondary", 90.0))
        .with_block(ContentBlock::free_text(
            Frame::from_inches(0.5, 2.5, 9.0, 1.5),
            vec![TextRun::new("Atlas Platform: Program Status")
                .with_size(54.0)
                .with_bold()
                .with_color("white")
                .with_align(Align::Center)],
        ))
        .with_block(ContentBlock::free_text(
            Frame::from_inches(1.0, 4.2, 8.0, 0.8),
            vec![TextRun::new("Quarterly review for the delivery leadership team")
                .with_size(24.0)
                .with_color("sky")
                .with_align(Align::Center)],
        ))
        .with_block(ContentBlock::free_text(
            Frame::from_inches(1.0, 6.5, 8.0, 0.5),
            vec![TextRun::new("Platform Engineering | Q3 Review | August 2026")
                .with_size(14.0)
                .with_color("silver")
                .with_align(Align::Center)],
        ))
}

fn agenda_slide() -> SlideSpec {
    SlideSpec::new()
        .with_title(SlideTitle::new("Agenda"))
        .with_block(ContentBlock::bullet_list(
            Frame::from_inches(1.0, 1.4, 8.0, 5.0),
            vec![
                BulletItem::lead("Where we are"),
                BulletItem::new("Delivery metrics for the quarter"),
                BulletItem::new("Platform reliability and incident trends"),
                BulletItem::lead("Where we are going"),
                BulletItem::new("Migration roadmap and cutover dates"),
                BulletItem::new("Capacity planning for the next release train"),
                BulletItem::new("Open risks and asks"),
            ],
        ))
}

fn metrics_slide() -> SlideSpec {
    SlideSpec::new()
        .with_background(Fill::solid("paper"))
        .with_title(SlideTitle::new("Delivery Metrics"))
        .with_block(ContentBlock::icon_card(
            Frame::from_inches(0.5, 1.5, 3.0, 2.0),
            "📦",
            "4.2 Days",
            "Lead time per change",
            "brand-secondary",
        ))
        .with_block(ContentBlock::icon_card(
            Frame::from_inches(3.7, 1.5, 3.0, 2.0),
            "⏱",
            "18 Mins",
            "Mean time to detect",
            "warning",
        ))
        .with_block(ContentBlock::icon_card(
            Frame::from_inches(6.9, 1.5, 3.0, 2.0),
            "🛡",
            "99.95%",
            "Service availability",
            "success",
        ))
        .with_block(ContentBlock::heading(
            Frame::from_inches(0.5, 4.0, 9.0, 0.8),
            "Deploys per week doubled since the pipeline rework",
        ))
}

fn roadmap_slide() -> slidesmith::Result<SlideSpec> {
    let mut slide = SlideSpec::new().with_title(SlideTitle::new("Migration Roadmap"));
    let bars = [
        (1.6, 1.0, "Inventory service", "success"),
        (2.4, 0.72, "Billing pipeline", "brand-secondary"),
        (3.2, 0.45, "Reporting stack", "brand-secondary"),
        (4.0, 0.1, "Legacy archive", "warning"),
    ];
    for (y, fraction, label, color) in bars {
        slide = slide.with_block(ContentBlock::progress_bar(
            Frame::from_inches(1.0, y, 6.5, 0.45),
            fraction,
            label,
            color,
        )?);
    }
    Ok(slide.with_block(ContentBlock::free_text(
        Frame::from_inches(1.0, 5.2, 8.0, 1.0),
        vec![
            TextRun::new("All workloads off the old cluster by end of Q4.")
                .with_size(16.0)
                .with_color("ink"),
            TextRun::new("Billing cutover rehearsal scheduled for the first week of October.")
                .with_size(16.0)
                .with_color("muted")
                .with_space_before(6.0),
        ],
    )))
}

fn closing_slide() -> SlideSpec {
    SlideSpec::new()
        .with_background(Fill::solid("brand-primary"))
        .with_block(ContentBlock::free_text(
            Frame::from_inches(1.0, 2.8, 8.0, 1.2),
            vec![TextRun::new("Questions & Discussion")
                .with_size(48.0)
                .with_bold()
                .with_color("white")
                .with_align(Align::Center)],
        ))
        .with_block(ContentBlock::free_text(
            Frame::from_inches(1.0, 4.3, 8.0, 0.8),
            vec![TextRun::new("Detailed dashboards live in the platform wiki")
                .with_size(20.0)
                .with_color("sky")
                .with_align(Align::Center)],
        ))
}

fn main() -> slidesmith::Result<()> {
    env_logger::init();
    println!("Building the program status deck...");

    // The deck is pure data; edit the slide functions above to change it.
    let deck = DeckSpec::new()
        .with_slide(title_slide())
        .with_slide(agenda_slide())
        .with_slide(metrics_slide())
        .with_slide(roadmap_slide()?)
        .with_slide(closing_slide());

    let output_path = "status_deck.pptx";
    DeckBuilder::new().build_to_file(&deck, output_path)?;

    println!("✓ Wrote {} slides to {}", deck.slides.len(), output_path);
    Ok(())
}
