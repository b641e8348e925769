//! Display color carried by each body.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::error::WorldError;

/// An opaque 24-bit RGB display attribute.
///
/// The simulation never reads it; it only travels with the body so the
/// renderer can paint it and the picking interaction can replace it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Choices offered by the recolor menu, in menu order.
    pub const PALETTE: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::BLACK];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Color {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Packed `0xRRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Draw a random color, uniform over `0..0xFFFFFF`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Color::from_u32(rng.random_range(0..0x00ff_ffff))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = WorldError;

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(WorldError::InvalidColor);
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|_| WorldError::InvalidColor)?;
        match hex.len() {
            6 => Ok(Color::from_u32(packed)),
            3 => {
                let expand = |nibble: u32| ((nibble & 0xf) * 0x11) as u8;
                Ok(Color::rgb(expand(packed >> 8), expand(packed >> 4), expand(packed)))
            }
            _ => Err(WorldError::InvalidColor),
        }
    }
}
