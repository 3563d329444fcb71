use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// 8-bit RGB color with an opacity channel.
///
/// Renders as `RRGGBB` when fully opaque and `RRGGBBAA` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xFF,
        }
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(hex.to_owned()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| ChartError::InvalidColor(hex.to_owned()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 0xFF };

        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
            alpha,
        })
    }

    /// Returns the same color with opacity given as a percentage in `[0, 100]`.
    pub fn with_opacity(self, percent: u8) -> ChartResult<Self> {
        if percent > 100 {
            return Err(ChartError::InvalidData(format!(
                "opacity must be in [0, 100], got {percent}"
            )));
        }
        let alpha = (f64::from(percent) * 255.0 / 100.0).round() as u8;
        Ok(Self { alpha, ..self })
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha == 0xFF
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)?;
        if !self.is_opaque() {
            write!(f, "{:02X}", self.alpha)?;
        }
        Ok(())
    }
}
