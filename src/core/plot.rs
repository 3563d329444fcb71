use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::series::Series;
use crate::error::{ChartError, ChartResult};

/// Draw order of a series or marker relative to others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Self::Low => -1,
            Self::Normal => 0,
            Self::High => 1,
        }
    }
}

/// Stroke of a line series: thickness plus dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub thickness: f64,
    pub segment_length: f64,
    pub blank_length: f64,
}

impl LineStyle {
    /// Thickness 1, solid.
    pub const SOLID: Self = Self {
        thickness: 1.0,
        segment_length: 1.0,
        blank_length: 0.0,
    };

    pub fn new(thickness: f64, segment_length: f64, blank_length: f64) -> ChartResult<Self> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(ChartError::InvalidData(
                "line thickness must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("segment_length", segment_length),
            ("blank_length", blank_length),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "line style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(Self {
            thickness,
            segment_length,
            blank_length,
        })
    }

    pub fn solid(thickness: f64) -> ChartResult<Self> {
        Self::new(thickness, 1.0, 0.0)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::SOLID
    }
}

/// Marker glyph drawn at data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Arrow,
    Cross,
    Diamond,
    Circle,
    Square,
    VerticalLineToDataPoint,
    VerticalLineFullHeight,
    HorizontalLine,
    X,
}

impl Shape {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Arrow => "a",
            Self::Cross => "c",
            Self::Diamond => "d",
            Self::Circle => "o",
            Self::Square => "s",
            Self::VerticalLineToDataPoint => "v",
            Self::VerticalLineFullHeight => "V",
            Self::HorizontalLine => "h",
            Self::X => "x",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkerPayload {
    Shape(Shape),
    Text(String),
}

/// Visual part of a marker, independent of where it is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub payload: MarkerPayload,
    pub color: Color,
    pub size: u32,
    pub priority: Priority,
}

impl Marker {
    pub fn shape(shape: Shape, color: Color, size: u32) -> ChartResult<Self> {
        Self::with_payload(MarkerPayload::Shape(shape), color, size)
    }

    pub fn text(text: impl Into<String>, color: Color, size: u32) -> ChartResult<Self> {
        Self::with_payload(MarkerPayload::Text(text.into()), color, size)
    }

    fn with_payload(payload: MarkerPayload, color: Color, size: u32) -> ChartResult<Self> {
        if size == 0 {
            return Err(ChartError::InvalidData("marker size must be > 0".to_owned()));
        }
        Ok(Self {
            payload,
            color,
            size,
            priority: Priority::Normal,
        })
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Which points of a series a marker decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerPlacement {
    EveryPoint,
    Point(usize),
    /// Every `step`-th point in `[start, end)`.
    Range { start: usize, end: usize, step: usize },
}

impl MarkerPlacement {
    pub fn range(start: usize, end: usize, step: usize) -> ChartResult<Self> {
        if start >= end || step == 0 {
            return Err(ChartError::InvalidData(format!(
                "marker range needs start < end and step > 0, got {start}:{end}:{step}"
            )));
        }
        Ok(Self::Range { start, end, step })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotMarker {
    pub marker: Marker,
    pub placement: MarkerPlacement,
}

/// One series plus its decorations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Plot {
    x_series: Option<Series>,
    series: Series,
    color: Option<Color>,
    legend: Option<String>,
    line_style: Option<LineStyle>,
    fill_area_color: Option<Color>,
    zero_line: Option<f64>,
    priority: Option<Priority>,
    markers: Vec<PlotMarker>,
}

impl Plot {
    #[must_use]
    pub fn new(series: impl Into<Series>) -> Self {
        Self {
            series: series.into(),
            ..Self::default()
        }
    }

    /// Plot with explicit x coordinates, used by xy-line and scatter charts.
    #[must_use]
    pub fn xy(x_series: impl Into<Series>, y_series: impl Into<Series>) -> Self {
        Self {
            x_series: Some(x_series.into()),
            series: y_series.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = Some(line_style);
        self
    }

    #[must_use]
    pub fn with_fill_area_color(mut self, color: Color) -> Self {
        self.fill_area_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Bar charts only: baseline position within the normalized domain.
    pub fn with_zero_line(mut self, value: f64) -> ChartResult<Self> {
        if !crate::core::series::in_domain(value) {
            return Err(ChartError::InvalidData(format!(
                "zero line must be in [0, 100], got {value}"
            )));
        }
        self.zero_line = Some(value);
        Ok(self)
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker, placement: MarkerPlacement) -> Self {
        self.markers.push(PlotMarker { marker, placement });
        self
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn x_series(&self) -> Option<&Series> {
        self.x_series.as_ref()
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        self.legend.as_deref()
    }

    #[must_use]
    pub fn line_style(&self) -> Option<LineStyle> {
        self.line_style
    }

    #[must_use]
    pub fn fill_area_color(&self) -> Option<Color> {
        self.fill_area_color
    }

    #[must_use]
    pub fn zero_line(&self) -> Option<f64> {
        self.zero_line
    }

    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    #[must_use]
    pub fn markers(&self) -> &[PlotMarker] {
        &self.markers
    }
}
