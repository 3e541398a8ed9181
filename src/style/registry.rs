//! The style registry: semantic color tokens resolved against a fixed palette.
//!
//! The palette is a compile-time perfect-hash map, so resolution is a plain
//! lookup with no initialization order to worry about and no way to mutate
//! the table at runtime. Content refers to colors exclusively through token
//! names; an unregistered name surfaces as [`Error::UnknownToken`] at the
//! first use.

use super::color::Rgb;
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed palette.
///
/// Brand tones plus the neutral tones the shape primitives rely on
/// (`card-bg`, `track`, `ink`). `heading` aliases the primary brand color
/// and is the default title tone.
static PALETTE: phf::Map<&'static str, Rgb> = phf::phf_map! {
    "brand-primary" => Rgb::new(0, 75, 135),
    "brand-secondary" => Rgb::new(0, 120, 210),
    "brand-red" => Rgb::new(200, 10, 40),
    "success" => Rgb::new(40, 167, 69),
    "warning" => Rgb::new(255, 140, 0),
    "ink" => Rgb::new(43, 43, 43),
    "muted" => Rgb::new(90, 90, 90),
    "silver" => Rgb::new(167, 170, 173),
    "track" => Rgb::new(167, 170, 173),
    "card-bg" => Rgb::new(248, 249, 250),
    "heading" => Rgb::new(0, 75, 135),
    "white" => Rgb::new(255, 255, 255),
    "paper" => Rgb::new(248, 249, 250),
    "sky" => Rgb::new(222, 235, 247),
    "midnight" => Rgb::new(0, 32, 60),
};

/// Resolve a token name to its RGB value.
///
/// # Examples
///
/// ```rust
/// use slidesmith::style::{resolve, Rgb};
///
/// assert_eq!(resolve("brand-red").unwrap(), Rgb::new(200, 10, 40));
/// assert!(resolve("not-a-color").is_err());
/// ```
pub fn resolve(token: &str) -> Result<Rgb> {
    PALETTE
        .get(token)
        .copied()
        .ok_or_else(|| Error::UnknownToken(token.to_string()))
}

/// Whether a token name exists in the palette.
#[inline]
pub fn is_registered(token: &str) -> bool {
    PALETTE.contains_key(token)
}

/// Iterate over all registered token names.
pub fn token_names() -> impl Iterator<Item = &'static str> {
    PALETTE.keys().copied()
}

/// A semantic color name, resolved through the registry at composition time.
///
/// Construction never fails; unknown names are reported when the token is
/// first resolved, so deserialized decks fail at build time with the
/// offending name in the error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Resolve against the palette.
    pub fn resolve(&self) -> Result<Rgb> {
        resolve(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ColorToken {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tokens() {
        assert_eq!(resolve("brand-primary").unwrap(), Rgb::new(0, 75, 135));
        assert_eq!(resolve("success").unwrap(), Rgb::new(40, 167, 69));
        assert_eq!(resolve("card-bg").unwrap(), Rgb::new(248, 249, 250));
        assert_eq!(resolve("track").unwrap(), resolve("silver").unwrap());
    }

    #[test]
    fn test_resolve_unknown_token() {
        let err = resolve("not-a-color").unwrap_err();
        match err {
            Error::UnknownToken(name) => assert_eq!(name, "not-a-color"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        assert!(resolve("Brand-Primary").is_err());
        assert!(resolve("INK").is_err());
    }

    #[test]
    fn test_every_registered_token_resolves() {
        for name in token_names() {
            assert!(is_registered(name));
            assert!(resolve(name).is_ok(), "token '{name}' failed to resolve");
        }
    }

    #[test]
    fn test_color_token_resolution() {
        let token = ColorToken::from("warning");
        assert_eq!(token.name(), "warning");
        assert_eq!(token.resolve().unwrap(), Rgb::new(255, 140, 0));

        let bogus = ColorToken::new("mystery-mauve");
        assert!(bogus.resolve().is_err());
    }
}
