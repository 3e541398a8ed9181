use crate::common::error::{Error, Result};
use std::fmt;

/// RGB color value.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255.
///
/// # Examples
///
/// ```rust
/// use slidesmith::style::Rgb;
///
/// // Create a red color
/// let red = Rgb::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = Rgb::from_hex("0000FF").unwrap();
/// assert_eq!(blue, Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "FF0000" or "#FF0000")
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slidesmith::style::Rgb;
    ///
    /// let red = Rgb::from_hex("FF0000").unwrap();
    /// let blue = Rgb::from_hex("#0000FF").unwrap();
    /// assert!(Rgb::from_hex("bogus").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim_start_matches('#');
        if trimmed.len() != 6 {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let parse = |range| {
            u8::from_str_radix(&trimmed[range], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    /// Convert to an uppercase hex string without a `#` prefix, the form
    /// `a:srgbClr` attributes expect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slidesmith::style::Rgb;
    ///
    /// assert_eq!(Rgb::new(255, 0, 0).to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("C80A28").unwrap(), Rgb::new(200, 10, 40));
        assert_eq!(Rgb::from_hex("#004B87").unwrap(), Rgb::new(0, 75, 135));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("FFF").is_err());
        assert!(Rgb::from_hex("GGGGGG").is_err());
        assert!(Rgb::from_hex("#12345").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(200, 10, 40).to_hex(), "C80A28");
        assert_eq!(Rgb::new(248, 249, 250).to_hex(), "F8F9FA");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "000000");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(255, 140, 0).to_string(), "#FF8C00");
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::new(43, 43, 43);
        assert_eq!(Rgb::from_hex(&color.to_hex()).unwrap(), color);
    }
}
