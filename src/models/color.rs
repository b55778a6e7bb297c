//! Normalized RGBA color handling with hex parsing and named palette tokens.

// Allow intentional type casts for channel conversion
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color with each channel normalized to `0.0..=1.0`.
///
/// Channels are stored as `f64` and serialized by name, so a color written to a
/// document reads back bit-for-bit identical. Named palette tokens
/// ([`NamedColor`]) are only a construction shortcut; the stored form is
/// always the four components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodableColor {
    /// Red channel (0.0-1.0)
    pub red: f64,
    /// Green channel (0.0-1.0)
    pub green: f64,
    /// Blue channel (0.0-1.0)
    pub blue: f64,
    /// Alpha channel (0.0-1.0)
    pub alpha: f64,
}

impl CodableColor {
    /// Opaque white.
    pub const WHITE: Self = Self::raw(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::raw(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::raw(0.0, 0.0, 0.0, 0.0);
    /// Opaque system blue.
    pub const BLUE: Self = Self::raw(0.0, 0.478_431_372_549_019_6, 1.0, 1.0);

    const fn raw(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from normalized channels, clamping each into `0.0..=1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_studio::models::CodableColor;
    ///
    /// let color = CodableColor::new(1.4, 0.5, -0.2, 1.0);
    /// assert_eq!(color, CodableColor::new(1.0, 0.5, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// Creates an opaque color from normalized channels.
    #[must_use]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::raw(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// Parses a color from a hex string.
    ///
    /// Supports "#RRGGBB" and "#RRGGBBAA", with or without the leading '#'.
    ///
    /// # Examples
    ///
    /// ```
    /// use widget_studio::models::CodableColor;
    ///
    /// let color = CodableColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, CodableColor::rgb(1.0, 0.0, 0.0));
    ///
    /// let color = CodableColor::from_hex("00000000").unwrap();
    /// assert_eq!(color, CodableColor::CLEAR);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 && hex.len() != 8 {
            anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA)"
            );
        }

        let channel = |range: std::ops::Range<usize>, name: &str| -> Result<u8> {
            let digits = hex
                .get(range)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))?;
            u8::from_str_radix(digits, 16)
                .with_context(|| format!("Invalid {name} channel in hex color '{hex}'"))
        };

        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };

        Ok(Self::from_rgb8(r, g, b).with_alpha(f64::from(a) / 255.0))
    }

    /// Converts the color to an uppercase hex string.
    ///
    /// Opaque colors render as "#RRGGBB", translucent ones as "#RRGGBBAA".
    /// The conversion is lossy; the document format never relies on it.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let r = to_byte(self.red);
        let g = to_byte(self.green);
        let b = to_byte(self.blue);
        let a = to_byte(self.alpha);

        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Returns this color with a different alpha (clamped).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            ..self
        }
    }

    /// Checks that every channel is a finite value inside `0.0..=1.0`.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        [self.red, self.green, self.blue, self.alpha]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Returns the color with every channel clamped into `0.0..=1.0`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.red, self.green, self.blue, self.alpha)
    }

    /// Clamps every channel in place. Returns true when anything changed.
    pub(crate) fn normalize_in_place(&mut self) -> bool {
        if self.is_normalized() {
            return false;
        }
        *self = self.normalized();
        true
    }
}

impl fmt::Display for CodableColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for CodableColor {
    /// Default color is opaque white.
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<NamedColor> for CodableColor {
    fn from(named: NamedColor) -> Self {
        named.color()
    }
}

/// Clamps a channel into the unit range; NaN collapses to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_byte(channel: f64) -> u8 {
    (clamp_unit(channel) * 255.0).round() as u8
}

/// Small palette of named colors offered by the editor's quick picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamedColor {
    /// #FFFFFF
    White,
    /// #000000
    Black,
    /// #8E8E93
    Gray,
    /// #FF3B30
    Red,
    /// #FF9500
    Orange,
    /// #FFCC00
    Yellow,
    /// #34C759
    Green,
    /// #007AFF
    Blue,
    /// #AF52DE
    Purple,
    /// #FF2D55
    Pink,
    /// Fully transparent
    Clear,
}

impl NamedColor {
    /// Every named color in picker order.
    pub const ALL: [Self; 11] = [
        Self::White,
        Self::Black,
        Self::Gray,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Clear,
    ];

    /// Resolves the token to its RGBA value.
    #[must_use]
    pub fn color(self) -> CodableColor {
        match self {
            Self::White => CodableColor::WHITE,
            Self::Black => CodableColor::BLACK,
            Self::Gray => CodableColor::from_rgb8(0x8E, 0x8E, 0x93),
            Self::Red => CodableColor::from_rgb8(0xFF, 0x3B, 0x30),
            Self::Orange => CodableColor::from_rgb8(0xFF, 0x95, 0x00),
            Self::Yellow => CodableColor::from_rgb8(0xFF, 0xCC, 0x00),
            Self::Green => CodableColor::from_rgb8(0x34, 0xC7, 0x59),
            Self::Blue => CodableColor::BLUE,
            Self::Purple => CodableColor::from_rgb8(0xAF, 0x52, 0xDE),
            Self::Pink => CodableColor::from_rgb8(0xFF, 0x2D, 0x55),
            Self::Clear => CodableColor::CLEAR,
        }
    }

    /// Looks up a token by its lowercase name (e.g. "blue").
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|named| named.name() == name)
    }

    /// Lowercase token name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Clear => "clear",
        }
    }
}
