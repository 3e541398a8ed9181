//! The declarative deck model: everything a deck is, expressed as data.
//!
//! A [`DeckSpec`] is an ordered list of [`SlideSpec`]s plus page dimensions.
//! Each slide carries an optional background fill, an optional title and an
//! ordered list of [`ContentBlock`]s, every block with its own [`Frame`].
//! The whole model serializes through serde, so decks can live in YAML files
//! or be written as Rust literals; colors are referenced by registry token
//! name and resolve at build time.

use crate::common::error::{Error, Result};
use crate::common::unit::inches_to_emu;
use crate::pptx::{Align, Anchor, DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH};
use crate::style::ColorToken;
use serde::{Deserialize, Serialize};

/// Position and extent of one block on the page, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a frame from inch coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidesmith::deck::Frame;
    ///
    /// let frame = Frame::from_inches(0.5, 1.5, 3.0, 2.0);
    /// assert_eq!(frame.x, 457_200);
    /// assert_eq!(frame.width, 2_743_200);
    /// ```
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: inches_to_emu(x),
            y: inches_to_emu(y),
            width: inches_to_emu(width),
            height: inches_to_emu(height),
        }
    }

    /// Whether the frame lies entirely within a page of the given size.
    pub(crate) fn fits_within(&self, page_width: i64, page_height: i64) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + self.width <= page_width
            && self.y + self.height <= page_height
    }
}

/// One styled paragraph of free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub size_pt: Option<f64>,
    #[serde(default)]
    pub bold: bool,
    /// Registry token; `None` inherits the theme text color.
    #[serde(default)]
    pub color: Option<ColorToken>,
    #[serde(default)]
    pub align: Align,
    /// Indent level, 0-based as in the underlying format.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub space_before_pt: Option<f64>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size_pt: None,
            bold: false,
            color: None,
            align: Align::Left,
            level: 0,
            space_before_pt: None,
        }
    }

    pub fn with_size(mut self, size_pt: f64) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.color = Some(token.into());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_space_before(mut self, space_pt: f64) -> Self {
        self.space_before_pt = Some(space_pt);
        self
    }
}

/// One entry of a bulleted list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletItem {
    pub text: String,
    /// Indent level; plain items sit at level 1, lead-ins at level 0.
    #[serde(default = "default_item_level")]
    pub level: u8,
    #[serde(default)]
    pub bold: bool,
}

impl BulletItem {
    /// A plain bulleted item at indent level 1.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 1,
            bold: false,
        }
    }

    /// A bold lead-in line at indent level 0.
    pub fn lead(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 0,
            bold: true,
        }
    }
}

fn default_item_level() -> u8 {
    1
}

/// A slide background fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Fill {
    Solid {
        color: ColorToken,
    },
    /// Two-stop linear gradient from `start` to `end`.
    Gradient {
        start: ColorToken,
        end: ColorToken,
        angle_deg: f64,
    },
}

impl Fill {
    pub fn solid(color: impl Into<ColorToken>) -> Self {
        Self::Solid {
            color: color.into(),
        }
    }

    pub fn gradient(
        start: impl Into<ColorToken>,
        end: impl Into<ColorToken>,
        angle_deg: f64,
    ) -> Self {
        Self::Gradient {
            start: start.into(),
            end: end.into(),
            angle_deg,
        }
    }
}

/// The slide title, rendered into the fixed title band at the top of the
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideTitle {
    pub text: String,
    #[serde(default = "default_title_size")]
    pub size_pt: f64,
    #[serde(default = "default_heading_color")]
    pub color: ColorToken,
    #[serde(default = "default_center")]
    pub align: Align,
}

impl SlideTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size_pt: default_title_size(),
            color: default_heading_color(),
            align: Align::Center,
        }
    }

    pub fn with_size(mut self, size_pt: f64) -> Self {
        self.size_pt = size_pt;
        self
    }

    pub fn with_color(mut self, token: impl Into<ColorToken>) -> Self {
        self.color = token.into();
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

fn default_title_size() -> f64 {
    36.0
}

fn default_heading_color() -> ColorToken {
    ColorToken::new("heading")
}

fn default_center() -> Align {
    Align::Center
}

fn default_list_size() -> f64 {
    18.0
}

fn default_heading_block_size() -> f64 {
    20.0
}

fn default_ink_color() -> ColorToken {
    ColorToken::new("ink")
}

fn default_accent_color() -> ColorToken {
    ColorToken::new("brand-primary")
}

fn default_bar_color() -> ColorToken {
    ColorToken::new("success")
}

/// One discrete visual element of a slide.
///
/// The set of variants is closed; composition matches exhaustively and has
/// no fallback branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    /// A bold standalone heading line.
    Heading {
        frame: Frame,
        text: String,
        #[serde(default = "default_heading_block_size")]
        size_pt: f64,
        #[serde(default = "default_heading_color")]
        color: ColorToken,
        #[serde(default = "default_center")]
        align: Align,
    },
    /// An ordered bulleted list.
    BulletList {
        frame: Frame,
        items: Vec<BulletItem>,
        #[serde(default = "default_list_size")]
        size_pt: f64,
        #[serde(default = "default_ink_color")]
        color: ColorToken,
    },
    /// A bordered card with an optional icon glyph, a title and a body.
    Card {
        frame: Frame,
        title: String,
        body: String,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default = "default_accent_color")]
        accent: ColorToken,
    },
    /// A horizontal progress bar with a percentage label.
    ProgressBar {
        frame: Frame,
        fraction: f64,
        label: String,
        #[serde(default = "default_bar_color")]
        color: ColorToken,
    },
    /// Arbitrary styled paragraphs in one text box.
    FreeText {
        frame: Frame,
        runs: Vec<TextRun>,
        #[serde(default)]
        anchor: Anchor,
    },
}

impl ContentBlock {
    /// A heading line with the default 20 pt size, `heading` color and
    /// centered alignment.
    pub fn heading(frame: Frame, text: impl Into<String>) -> Self {
        Self::Heading {
            frame,
            text: text.into(),
            size_pt: default_heading_block_size(),
            color: default_heading_color(),
            align: Align::Center,
        }
    }

    /// A bulleted list with the default 18 pt size and `ink` color.
    pub fn bullet_list(frame: Frame, items: Vec<BulletItem>) -> Self {
        Self::BulletList {
            frame,
            items,
            size_pt: default_list_size(),
            color: default_ink_color(),
        }
    }

    /// A card with the given title, body and accent; no icon.
    pub fn card(
        frame: Frame,
        title: impl Into<String>,
        body: impl Into<String>,
        accent: impl Into<ColorToken>,
    ) -> Self {
        Self::Card {
            frame,
            title: title.into(),
            body: body.into(),
            icon: None,
            accent: accent.into(),
        }
    }

    /// A card with an icon glyph line above the title.
    pub fn icon_card(
        frame: Frame,
        icon: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        accent: impl Into<ColorToken>,
    ) -> Self {
        Self::Card {
            frame,
            title: title.into(),
            body: body.into(),
            icon: Some(icon.into()),
            accent: accent.into(),
        }
    }

    /// A progress bar. Fails with [`Error::InvalidFraction`] unless
    /// `fraction` lies in `[0, 1]`.
    pub fn progress_bar(
        frame: Frame,
        fraction: f64,
        label: impl Into<String>,
        color: impl Into<ColorToken>,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::InvalidFraction(fraction));
        }
        Ok(Self::ProgressBar {
            frame,
            fraction,
            label: label.into(),
            color: color.into(),
        })
    }

    /// A free text block anchored to the top of its frame.
    pub fn free_text(frame: Frame, runs: Vec<TextRun>) -> Self {
        Self::FreeText {
            frame,
            runs,
            anchor: Anchor::Top,
        }
    }

    /// The block's frame on the page.
    pub fn frame(&self) -> Frame {
        match self {
            Self::Heading { frame, .. }
            | Self::BulletList { frame, .. }
            | Self::Card { frame, .. }
            | Self::ProgressBar { frame, .. }
            | Self::FreeText { frame, .. } => *frame,
        }
    }
}

/// One slide: background, optional title, ordered content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideSpec {
    #[serde(default)]
    pub background: Option<Fill>,
    #[serde(default)]
    pub title: Option<SlideTitle>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl SlideSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, fill: Fill) -> Self {
        self.background = Some(fill);
        self
    }

    pub fn with_title(mut self, title: SlideTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }
}

/// The root object consumed by the deck builder: ordered slides plus page
/// dimensions in EMUs.
///
/// # Examples
///
/// ```
/// use slidesmith::deck::{BulletItem, ContentBlock, DeckSpec, Frame, SlideSpec, SlideTitle};
///
/// let deck = DeckSpec::new().with_slide(
///     SlideSpec::new()
///         .with_title(SlideTitle::new("Agenda"))
///         .with_block(ContentBlock::bullet_list(
///             Frame::from_inches(1.0, 1.5, 8.0, 4.0),
///             vec![BulletItem::new("Metrics"), BulletItem::new("Roadmap")],
///         )),
/// );
/// assert_eq!(deck.slides.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSpec {
    #[serde(default = "default_page_width")]
    pub width: i64,
    #[serde(default = "default_page_height")]
    pub height: i64,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

fn default_page_width() -> i64 {
    DEFAULT_SLIDE_WIDTH
}

fn default_page_height() -> i64 {
    DEFAULT_SLIDE_HEIGHT
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_SLIDE_WIDTH,
            height: DEFAULT_SLIDE_HEIGHT,
            slides: Vec::new(),
        }
    }
}

impl DeckSpec {
    /// An empty deck with the default 10 x 7.5 inch page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_slide(mut self, slide: SlideSpec) -> Self {
        self.slides.push(slide);
        self
    }

    /// Parse a deck from its YAML representation.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::YamlError(e.to_string()))
    }

    /// Serialize the deck to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::YamlError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_from_inches() {
        let frame = Frame::from_inches(1.0, 0.5, 2.0, 1.5);
        assert_eq!(frame.x, 914_400);
        assert_eq!(frame.y, 457_200);
        assert_eq!(frame.width, 1_828_800);
        assert_eq!(frame.height, 1_371_600);
    }

    #[test]
    fn test_frame_bounds() {
        let page = (9_144_000, 6_858_000);
        assert!(Frame::from_inches(0.0, 0.0, 10.0, 7.5).fits_within(page.0, page.1));
        assert!(!Frame::from_inches(9.5, 0.0, 1.0, 1.0).fits_within(page.0, page.1));
        assert!(!Frame::new(-1, 0, 100, 100).fits_within(page.0, page.1));
    }

    #[test]
    fn test_bullet_item_defaults() {
        let plain = BulletItem::new("point");
        assert_eq!(plain.level, 1);
        assert!(!plain.bold);

        let lead = BulletItem::lead("Phase 1");
        assert_eq!(lead.level, 0);
        assert!(lead.bold);
    }

    #[test]
    fn test_progress_bar_fraction_validation() {
        let frame = Frame::from_inches(1.0, 1.0, 7.0, 0.5);
        assert!(ContentBlock::progress_bar(frame, 0.0, "start", "success").is_ok());
        assert!(ContentBlock::progress_bar(frame, 1.0, "done", "success").is_ok());

        let err = ContentBlock::progress_bar(frame, 1.5, "overdone", "success").unwrap_err();
        assert!(matches!(err, Error::InvalidFraction(f) if f == 1.5));

        let err = ContentBlock::progress_bar(frame, -0.1, "negative", "success").unwrap_err();
        assert!(matches!(err, Error::InvalidFraction(_)));
    }

    #[test]
    fn test_deck_defaults() {
        let deck = DeckSpec::new();
        assert_eq!(deck.width, 9_144_000);
        assert_eq!(deck.height, 6_858_000);
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_yaml_round_trip() {
        let deck = DeckSpec::new().with_slide(
            SlideSpec::new()
                .with_background(Fill::gradient("midnight", "brand-secondary", 90.0))
                .with_title(SlideTitle::new("Status"))
                .with_block(ContentBlock::card(
                    Frame::from_inches(0.5, 1.5, 3.0, 2.0),
                    "5.9 Days",
                    "Per Feature",
                    "brand-secondary",
                ))
                .with_block(
                    ContentBlock::progress_bar(
                        Frame::from_inches(1.5, 4.0, 7.0, 0.5),
                        0.35,
                        "Adoption",
                        "success",
                    )
                    .unwrap(),
                ),
        );

        let yaml = deck.to_yaml().unwrap();
        let parsed = DeckSpec::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, deck);
    }

    #[test]
    fn test_yaml_deck_with_defaults() {
        let yaml = r#"
slides:
  - title:
      text: Agenda
    content:
      - type: bullet-list
        frame: { x: 914400, y: 1371600, width: 7315200, height: 3657600 }
        items:
          - text: Current metrics
          - text: Adoption model
          - { text: "Phase 1", level: 0, bold: true }
"#;
        let deck = DeckSpec::from_yaml(yaml).unwrap();
        assert_eq!(deck.width, 9_144_000);
        assert_eq!(deck.slides.len(), 1);

        let slide = &deck.slides[0];
        assert_eq!(slide.title.as_ref().unwrap().size_pt, 36.0);
        assert_eq!(slide.title.as_ref().unwrap().color.name(), "heading");

        match &slide.content[0] {
            ContentBlock::BulletList { items, size_pt, .. } => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].level, 1);
                assert_eq!(items[2].level, 0);
                assert!(items[2].bold);
                assert_eq!(*size_pt, 18.0);
            }
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_yaml_rejects_garbage() {
        assert!(matches!(
            DeckSpec::from_yaml("slides: [not a mapping"),
            Err(Error::YamlError(_))
        ));
    }

    #[test]
    fn test_block_frame_accessor() {
        let frame = Frame::from_inches(1.0, 2.0, 3.0, 1.0);
        let blocks = [
            ContentBlock::heading(frame, "h"),
            ContentBlock::bullet_list(frame, vec![]),
            ContentBlock::card(frame, "t", "b", "success"),
            ContentBlock::progress_bar(frame, 0.5, "l", "success").unwrap(),
            ContentBlock::free_text(frame, vec![TextRun::new("r")]),
        ];
        for block in &blocks {
            assert_eq!(block.frame(), frame);
        }
    }
}
