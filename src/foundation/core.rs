use std::{fmt, str::FromStr};

use crate::foundation::error::{StackError, StackResult};
use crate::foundation::math::round_to;

pub use kurbo::{Affine, Point, Size, Vec2};

/// Decimal places kept on `translate` before change detection.
pub const TRANSLATE_DECIMALS: u32 = 2;
/// Decimal places kept on `scale` before change detection.
pub const SCALE_DECIMALS: u32 = 3;

/// A threshold along the scroll axis: raw pixels or a share of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawLength", into = "RawLength")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the live viewport size (`20.0` means 20%).
    Percent(f64),
}

impl Length {
    /// Resolve against the current viewport size. Never cached by callers.
    pub fn resolve(self, viewport_size: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => (pct / 100.0) * viewport_size,
        }
    }

    pub(crate) fn is_finite(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v.is_finite(),
        }
    }
}

impl FromStr for Length {
    type Err = StackError;

    fn from_str(s: &str) -> StackResult<Self> {
        let s = s.trim();
        let (number, percent) = match s.strip_suffix('%') {
            Some(head) => (head, true),
            None => (s.strip_suffix("px").unwrap_or(s), false),
        };
        let v: f64 = number
            .trim()
            .parse()
            .map_err(|_| StackError::config(format!("invalid length '{s}'")))?;
        Ok(if percent {
            Self::Percent(v)
        } else {
            Self::Px(v)
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// JSON shape of a [`Length`] before the string form is parsed.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum RawLength {
    Number(f64),
    Text(String),
}

impl TryFrom<RawLength> for Length {
    type Error = StackError;

    fn try_from(raw: RawLength) -> StackResult<Self> {
        match raw {
            RawLength::Number(v) => Ok(Self::Px(v)),
            RawLength::Text(s) => s.parse(),
        }
    }
}

impl From<Length> for RawLength {
    fn from(len: Length) -> Self {
        match len {
            Length::Px(v) => Self::Number(v),
            Length::Percent(_) => Self::Text(len.to_string()),
        }
    }
}

/// The engine's only output: a translation along the active axis and a
/// uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StackTransform {
    /// Offset along the scroll axis, in pixels.
    pub translate: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for StackTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl StackTransform {
    /// No offset, full size.
    pub const IDENTITY: Self = Self {
        translate: 0.0,
        scale: 1.0,
    };

    /// Round both components to the precision used for change detection.
    pub fn quantized(self) -> Self {
        Self {
            translate: round_to(self.translate, TRANSLATE_DECIMALS),
            scale: round_to(self.scale, SCALE_DECIMALS),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
