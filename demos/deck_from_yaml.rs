//! Loads a deck from an embedded YAML document and writes it out.
//!
//! The same YAML could live in a file next to the binary; everything the
//! builder needs is in the document itself.

use slidesmith::deck::{DeckBuilder, DeckSpec};

const DECK_YAML: &str = r#"
slides:
  - background:
      type: gradient
      start: midnight
      end: brand-secondary
      angle_deg: 90.0
    content:
      - type: free-text
        frame: { x: 457200, y: 2286000, width: 8229600, height: 1371600 }
        runs:
          - text: Atlas Platform Review
            size_pt: 54.0
            bold: true
            color: white
            align: center

  - title:
      text: Initiative Status
    content:
      - type: card
        frame: { x: 914400, y: 1371600, width: 2286000, height: 1097280 }
        title: Pipeline
        body: Completed
        icon: "✅"
        accent: success
      - type: card
        frame: { x: 3291840, y: 1371600, width: 2286000, height: 1097280 }
        title: Gateway
        body: In progress
        icon: "🔄"
        accent: warning
      - type: card
        frame: { x: 5669280, y: 1371600, width: 2286000, height: 1097280 }
        title: Agents
        body: Planned
        icon: "🕒"
        accent: brand-secondary
      - type: progress-bar
        frame: { x: 1371600, y: 3200400, width: 5486400, height: 457200 }
        fraction: 0.35
        label: Overall adoption
        color: brand-secondary

  - title:
      text: Next Steps
    content:
      - type: bullet-list
        frame: { x: 914400, y: 1371600, width: 7315200, height: 3657600 }
        items:
          - { text: "This quarter", level: 0, bold: true }
          - text: Finish the gateway rollout
          - text: Wire adoption metrics into the dashboard
          - { text: "Next quarter", level: 0, bold: true }
          - text: Pilot the agent workflows with two teams
"#;

fn main() -> slidesmith::Result<()> {
    env_logger::init();
    println!("Parsing the embedded YAML deck...");

    let deck = DeckSpec::from_yaml(DECK_YAML)?;
    println!("✓ Parsed {} slides.", deck.slides.len());

    let output_path = "yaml_deck.pptx";
    DeckBuilder::new().build_to_file(&deck, output_path)?;

    println!("✓ Wrote {}", output_path);
    Ok(())
}
