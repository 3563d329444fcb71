use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineChartStyle {
    /// Evenly spaced points.
    #[default]
    Standard,
    /// Line chart without axes or decorations drawn by default.
    Sparkline,
    /// Each plot carries explicit x coordinates.
    Xy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarGrouping {
    #[default]
    Grouped,
    Stacked,
    Overlapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PieStyle {
    #[default]
    Flat,
    ThreeD,
}

/// Chart family and variant; decides the chart type code and which
/// composition stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line(LineChartStyle),
    Bar {
        orientation: BarOrientation,
        grouping: BarGrouping,
    },
    Radar {
        spline: bool,
    },
    Scatter,
    Pie(PieStyle),
}

impl ChartKind {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Line(LineChartStyle::Standard) => "lc",
            Self::Line(LineChartStyle::Sparkline) => "ls",
            Self::Line(LineChartStyle::Xy) => "lxy",
            Self::Bar {
                orientation,
                grouping,
            } => match (orientation, grouping) {
                (BarOrientation::Vertical, BarGrouping::Grouped) => "bvg",
                (BarOrientation::Vertical, BarGrouping::Stacked) => "bvs",
                (BarOrientation::Vertical, BarGrouping::Overlapped) => "bvo",
                (BarOrientation::Horizontal, BarGrouping::Grouped) => "bhg",
                (BarOrientation::Horizontal, BarGrouping::Stacked) => "bhs",
                (BarOrientation::Horizontal, BarGrouping::Overlapped) => "bho",
            },
            Self::Radar { spline: false } => "r",
            Self::Radar { spline: true } => "rs",
            Self::Scatter => "s",
            Self::Pie(PieStyle::Flat) => "p",
            Self::Pie(PieStyle::ThreeD) => "p3",
        }
    }

    /// Radial charts draw axes around a center, which changes how axis text
    /// alignment is emitted.
    #[must_use]
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Radar { .. })
    }

    #[must_use]
    pub fn requires_xy(self) -> bool {
        matches!(self, Self::Line(LineChartStyle::Xy) | Self::Scatter)
    }

    #[must_use]
    pub fn has_axes(self) -> bool {
        !matches!(self, Self::Pie(_))
    }

    /// Line-drawing kinds accept line styles and priority markers.
    #[must_use]
    pub fn draws_lines(self) -> bool {
        matches!(self, Self::Line(_) | Self::Radar { .. })
    }

    #[must_use]
    pub fn is_bar(self) -> bool {
        matches!(self, Self::Bar { .. })
    }

    #[must_use]
    pub fn is_pie(self) -> bool {
        matches!(self, Self::Pie(_))
    }
}
