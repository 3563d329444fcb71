//! Data encodings for series values.
//!
//! Every scheme maps the normalized domain `[MIN_VALUE, MAX_VALUE]` onto a
//! token alphabet. Values outside the domain are rendered as the scheme's
//! missing-data sentinel instead of being rejected, which keeps sparse series
//! representable.

use serde::{Deserialize, Serialize};

use crate::core::primitives::round_half_up;
use crate::core::series::{MAX_VALUE, Series, in_domain};

const EXTENDED_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-.";
const SIMPLE_ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const EXTENDED_MAX_INDEX: f64 = 4095.0;
const SIMPLE_MAX_INDEX: f64 = 61.0;

const EXTENDED_MISSING: &str = "__";
const SIMPLE_MISSING: &str = "_";
const TEXT_MISSING: &str = "-1";

/// Token scheme used for the data parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DataEncoding {
    /// Two characters per value, 4096 levels.
    #[default]
    Extended,
    /// One character per value, 62 levels.
    Simple,
    /// Decimal text with one fractional digit.
    Text,
}

impl DataEncoding {
    /// Prefix written before the encoded series (`chd=e:...`).
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Extended => "e:",
            Self::Simple => "s:",
            Self::Text => "t:",
        }
    }

    /// Separator placed between consecutive series.
    #[must_use]
    pub fn series_separator(self) -> &'static str {
        match self {
            Self::Extended | Self::Simple => ",",
            Self::Text => "|",
        }
    }

    /// Token a missing or out-of-domain value is rendered as.
    #[must_use]
    pub fn missing_token(self) -> &'static str {
        match self {
            Self::Extended => EXTENDED_MISSING,
            Self::Simple => SIMPLE_MISSING,
            Self::Text => TEXT_MISSING,
        }
    }

    /// Encodes one series. An empty slice yields an empty string.
    #[must_use]
    pub fn encode(self, values: &[f64]) -> String {
        match self {
            Self::Extended => {
                let mut out = String::with_capacity(values.len() * 2);
                for &value in values {
                    match quantize(value, EXTENDED_MAX_INDEX) {
                        Some(index) => {
                            out.push(char::from(EXTENDED_ALPHABET[index / 64]));
                            out.push(char::from(EXTENDED_ALPHABET[index % 64]));
                        }
                        None => out.push_str(EXTENDED_MISSING),
                    }
                }
                out
            }
            Self::Simple => values
                .iter()
                .map(|&value| match quantize(value, SIMPLE_MAX_INDEX) {
                    Some(index) => char::from(SIMPLE_ALPHABET[index]).to_string(),
                    None => SIMPLE_MISSING.to_owned(),
                })
                .collect(),
            Self::Text => values
                .iter()
                .map(|&value| {
                    if in_domain(value) {
                        format!("{:.1}", round_half_up(value * 10.0) / 10.0)
                    } else {
                        TEXT_MISSING.to_owned()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Encodes several series, joined with the scheme's series separator.
    #[must_use]
    pub fn encode_series(self, series: &[Series]) -> String {
        series
            .iter()
            .map(|s| self.encode(s.values()))
            .collect::<Vec<_>>()
            .join(self.series_separator())
    }

    /// Decodes one encoded series back into normalized values.
    ///
    /// Sentinels and unknown tokens decode to `None`. The result is subject to
    /// the scheme's quantization error.
    #[must_use]
    pub fn decode(self, encoded: &str) -> Vec<Option<f64>> {
        match self {
            Self::Extended => encoded
                .as_bytes()
                .chunks(2)
                .map(|pair| match pair {
                    [hi, lo] => {
                        let hi = alphabet_index(EXTENDED_ALPHABET, *hi)?;
                        let lo = alphabet_index(EXTENDED_ALPHABET, *lo)?;
                        Some((hi * 64 + lo) as f64 / EXTENDED_MAX_INDEX * MAX_VALUE)
                    }
                    _ => None,
                })
                .collect(),
            Self::Simple => encoded
                .bytes()
                .map(|byte| {
                    alphabet_index(SIMPLE_ALPHABET, byte)
                        .map(|index| index as f64 / SIMPLE_MAX_INDEX * MAX_VALUE)
                })
                .collect(),
            Self::Text => {
                if encoded.is_empty() {
                    return Vec::new();
                }
                encoded
                    .split(',')
                    .map(|token| token.parse::<f64>().ok().filter(|value| in_domain(*value)))
                    .collect()
            }
        }
    }
}

fn quantize(value: f64, max_index: f64) -> Option<usize> {
    if !in_domain(value) {
        return None;
    }
    Some(round_half_up(value / MAX_VALUE * max_index) as usize)
}

fn alphabet_index(alphabet: &[u8], byte: u8) -> Option<usize> {
    alphabet.iter().position(|&candidate| candidate == byte)
}
