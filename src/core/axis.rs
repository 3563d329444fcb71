use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::error::{ChartError, ChartResult};

/// Edge of the chart an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSide {
    Bottom,
    Left,
    Top,
    Right,
}

impl AxisSide {
    /// Order in which sides receive axis indices.
    pub const ASSEMBLY_ORDER: [Self; 4] = [Self::Right, Self::Top, Self::Left, Self::Bottom];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Bottom => "x",
            Self::Left => "y",
            Self::Top => "t",
            Self::Right => "r",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisTextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl AxisTextAlignment {
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Center => 0,
            Self::Right => 1,
        }
    }

    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Center => Self::Center,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub text_color: Color,
    pub font_size: u32,
    pub alignment: AxisTextAlignment,
    pub draw_tick_marks: Option<bool>,
    pub tick_mark_length: Option<i32>,
    pub tick_mark_color: Option<Color>,
}

impl AxisStyle {
    pub fn new(
        text_color: Color,
        font_size: u32,
        alignment: AxisTextAlignment,
    ) -> ChartResult<Self> {
        if font_size == 0 {
            return Err(ChartError::InvalidData(
                "axis font size must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            text_color,
            font_size,
            alignment,
            draw_tick_marks: None,
            tick_mark_length: None,
            tick_mark_color: None,
        })
    }

    #[must_use]
    pub fn with_tick_marks(mut self, visible: bool) -> Self {
        self.draw_tick_marks = Some(visible);
        self
    }

    /// Negative lengths draw ticks inside the chart area.
    #[must_use]
    pub fn with_tick_mark_length(mut self, length: i32) -> Self {
        self.tick_mark_length = Some(length);
        self
    }

    /// Turns tick marks on unless [`AxisStyle::with_tick_marks`] says otherwise.
    #[must_use]
    pub fn with_tick_mark_color(mut self, color: Color) -> Self {
        self.tick_mark_color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub interval: Option<f64>,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(format!(
                "axis range must be finite with min < max, got [{min}, {max}]"
            )));
        }
        Ok(Self {
            min,
            max,
            interval: None,
        })
    }

    pub fn with_interval(mut self, interval: f64) -> ChartResult<Self> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis range interval must be finite and > 0".to_owned(),
            ));
        }
        self.interval = Some(interval);
        Ok(self)
    }
}

/// Labels, positions, range and style of one axis slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDefinition {
    side: AxisSide,
    labels: Vec<String>,
    positions: Vec<f64>,
    range: Option<AxisRange>,
    style: Option<AxisStyle>,
}

impl AxisDefinition {
    #[must_use]
    pub fn new(side: AxisSide) -> Self {
        Self {
            side,
            labels: Vec::new(),
            positions: Vec::new(),
            range: None,
            style: None,
        }
    }

    /// Axis whose labels are the numbers in `[min, max]`.
    pub fn numeric(side: AxisSide, min: f64, max: f64) -> ChartResult<Self> {
        Ok(Self::new(side).with_range(AxisRange::new(min, max)?))
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Label positions within the normalized domain.
    pub fn with_positions(mut self, positions: &[f64]) -> ChartResult<Self> {
        if let Some(bad) = positions
            .iter()
            .find(|value| !crate::core::series::in_domain(**value))
        {
            return Err(ChartError::InvalidData(format!(
                "axis label position must be in [0, 100], got {bad}"
            )));
        }
        self.positions = positions.to_vec();
        Ok(self)
    }

    #[must_use]
    pub fn with_range(mut self, range: AxisRange) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn side(&self) -> AxisSide {
        self.side
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[must_use]
    pub fn range(&self) -> Option<AxisRange> {
        self.range
    }

    #[must_use]
    pub fn style(&self) -> Option<AxisStyle> {
        self.style
    }
}
