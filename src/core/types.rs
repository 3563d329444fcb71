use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::series::in_domain;
use crate::error::{ChartError, ChartResult};

/// Largest width or height the service renders.
pub const MAX_SIDE_PX: u32 = 1000;
/// Largest pixel area the service renders.
pub const MAX_AREA_PX: u32 = 300_000;

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        let size = Self { width, height };
        if !size.is_valid() {
            return Err(ChartError::InvalidSize { width, height });
        }
        Ok(size)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        (1..=MAX_SIDE_PX).contains(&self.width)
            && (1..=MAX_SIDE_PX).contains(&self.height)
            && self.width * self.height <= MAX_AREA_PX
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 200,
            height: 125,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub color: Option<Color>,
    pub font_size: Option<u32>,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            font_size: None,
        }
    }

    /// Style is emitted only when both color and font size are present.
    pub fn with_style(mut self, color: Color, font_size: u32) -> ChartResult<Self> {
        if font_size == 0 {
            return Err(ChartError::InvalidData(
                "title font size must be > 0".to_owned(),
            ));
        }
        self.color = Some(color);
        self.font_size = Some(font_size);
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendPosition {
    Bottom,
    Top,
    Right,
    Left,
    BottomVertical,
    TopVertical,
}

impl LegendPosition {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Top => "t",
            Self::Right => "r",
            Self::Left => "l",
            Self::BottomVertical => "bv",
            Self::TopVertical => "tv",
        }
    }
}

/// Chart margins in pixels, optionally with legend box margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    pub legend: Option<(u32, u32)>,
}

impl Margins {
    #[must_use]
    pub fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            legend: None,
        }
    }

    #[must_use]
    pub fn with_legend_margins(mut self, width: u32, height: u32) -> Self {
        self.legend = Some((width, height));
        self
    }
}

/// Background grid; steps are percentages of the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    pub x_step: f64,
    pub y_step: f64,
    pub segment_length: u32,
    pub blank_length: u32,
}

impl GridLines {
    pub fn new(x_step: f64, y_step: f64) -> ChartResult<Self> {
        for (name, value) in [("x_step", x_step), ("y_step", y_step)] {
            if !in_domain(value) {
                return Err(ChartError::InvalidData(format!(
                    "grid `{name}` must be in [0, 100], got {value}"
                )));
            }
        }
        Ok(Self {
            x_step,
            y_step,
            segment_length: 1,
            blank_length: 0,
        })
    }

    #[must_use]
    pub fn with_dash(mut self, segment_length: u32, blank_length: u32) -> Self {
        self.segment_length = segment_length;
        self.blank_length = blank_length;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeOrientation {
    Horizontal,
    Vertical,
}

/// Band across the whole chart between two normalized positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeMarker {
    pub orientation: RangeOrientation,
    pub color: Color,
    pub start: f64,
    pub end: f64,
}

impl RangeMarker {
    pub fn new(
        orientation: RangeOrientation,
        color: Color,
        start: f64,
        end: f64,
    ) -> ChartResult<Self> {
        if !in_domain(start) || !in_domain(end) || start > end {
            return Err(ChartError::InvalidData(format!(
                "range marker must satisfy 0 <= start <= end <= 100, got [{start}, {end}]"
            )));
        }
        Ok(Self {
            orientation,
            color,
            start,
            end,
        })
    }
}

/// One pie slice; `percentage` is its share in the normalized domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub percentage: f64,
    pub color: Option<Color>,
    pub label: Option<String>,
    pub legend: Option<String>,
}

impl Slice {
    pub fn new(percentage: f64) -> ChartResult<Self> {
        if !in_domain(percentage) {
            return Err(ChartError::InvalidData(format!(
                "slice percentage must be in [0, 100], got {percentage}"
            )));
        }
        Ok(Self {
            percentage,
            color: None,
            label: None,
            legend: None,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }
}
