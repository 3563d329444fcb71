use serde::{Deserialize, Serialize};

use crate::core::{DataEncoding, Series};

/// Every parameter the request can carry.
///
/// The set is closed: each kind maps to exactly one accumulator shape through
/// [`Parameter::empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    ChartType,
    Size,
    Data,
    Colors,
    SliceColors,
    Legends,
    LegendPosition,
    Title,
    TitleStyle,
    Margins,
    Fills,
    LineStyles,
    Markers,
    AxisTypes,
    AxisLabels,
    AxisPositions,
    AxisRanges,
    AxisStyles,
    AxisTickLengths,
    GridLines,
    BarWidth,
    ZeroLines,
    PieOrientation,
    PieLabels,
}

impl ParameterKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ChartType => "cht",
            Self::Size => "chs",
            Self::Data => "chd",
            Self::Colors | Self::SliceColors => "chco",
            Self::Legends => "chdl",
            Self::LegendPosition => "chdlp",
            Self::Title => "chtt",
            Self::TitleStyle => "chts",
            Self::Margins => "chma",
            Self::Fills => "chf",
            Self::LineStyles => "chls",
            Self::Markers => "chm",
            Self::AxisTypes => "chxt",
            Self::AxisLabels => "chxl",
            Self::AxisPositions => "chxp",
            Self::AxisRanges => "chxr",
            Self::AxisStyles => "chxs",
            Self::AxisTickLengths => "chxtc",
            Self::GridLines => "chg",
            Self::BarWidth => "chbh",
            Self::ZeroLines | Self::PieOrientation => "chp",
            Self::PieLabels => "chl",
        }
    }

    /// Separator between accumulated entries, `None` for single-valued kinds.
    #[must_use]
    pub fn separator(self) -> Option<&'static str> {
        match self {
            Self::Colors | Self::AxisTypes | Self::ZeroLines => Some(","),
            Self::SliceColors
            | Self::Legends
            | Self::Fills
            | Self::LineStyles
            | Self::Markers
            | Self::AxisLabels
            | Self::AxisPositions
            | Self::AxisRanges
            | Self::AxisStyles
            | Self::AxisTickLengths
            | Self::PieLabels => Some("|"),
            Self::ChartType
            | Self::Size
            | Self::Data
            | Self::LegendPosition
            | Self::Title
            | Self::TitleStyle
            | Self::Margins
            | Self::GridLines
            | Self::BarWidth
            | Self::PieOrientation => None,
        }
    }
}

/// Series data plus the scheme it is rendered with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataParameter {
    encoding: DataEncoding,
    series: Vec<Series>,
}

impl DataParameter {
    pub fn set_encoding(&mut self, encoding: DataEncoding) {
        self.encoding = encoding;
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    fn render(&self) -> String {
        if self.series.is_empty() {
            return String::new();
        }
        format!(
            "{}={}{}",
            ParameterKind::Data.key(),
            self.encoding.prefix(),
            self.encoding.encode_series(&self.series)
        )
    }
}

/// Ordered entries joined with the kind's separator.
#[derive(Debug, Clone, PartialEq)]
pub struct ListParameter {
    kind: ParameterKind,
    entries: Vec<String>,
}

impl ListParameter {
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let separator = self.kind.separator().unwrap_or(",");
        format!("{}={}", self.kind.key(), self.entries.join(separator))
    }
}

/// At most one value; a later write replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleParameter {
    kind: ParameterKind,
    value: Option<String>,
}

impl SingleParameter {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn render(&self) -> String {
        self.value
            .as_ref()
            .map(|value| format!("{}={value}", self.kind.key()))
            .unwrap_or_default()
    }
}

/// Accumulator for one parameter kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Data(DataParameter),
    List(ListParameter),
    Single(SingleParameter),
}

impl Parameter {
    /// Builds the empty accumulator for `kind`.
    #[must_use]
    pub fn empty(kind: ParameterKind) -> Self {
        match (kind, kind.separator()) {
            (ParameterKind::Data, _) => Self::Data(DataParameter::default()),
            (_, Some(_)) => Self::List(ListParameter {
                kind,
                entries: Vec::new(),
            }),
            (_, None) => Self::Single(SingleParameter { kind, value: None }),
        }
    }

    /// Renders `key=value`, or an empty string when nothing was accumulated.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Data(parameter) => parameter.render(),
            Self::List(parameter) => parameter.render(),
            Self::Single(parameter) => parameter.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulators_render_nothing() {
        for kind in [
            ParameterKind::Data,
            ParameterKind::Colors,
            ParameterKind::Title,
            ParameterKind::AxisLabels,
        ] {
            assert_eq!(Parameter::empty(kind).render(), "");
        }
    }

    #[test]
    fn list_kinds_join_with_their_separator() {
        let mut colors = Parameter::empty(ParameterKind::Colors);
        let mut slices = Parameter::empty(ParameterKind::SliceColors);
        for parameter in [&mut colors, &mut slices] {
            let Parameter::List(list) = parameter else {
                panic!("expected list accumulator");
            };
            list.push("FF0000");
            list.push("00FF00");
        }
        assert_eq!(colors.render(), "chco=FF0000,00FF00");
        assert_eq!(slices.render(), "chco=FF0000|00FF00");
    }

    #[test]
    fn single_kinds_keep_last_value() {
        let mut title = Parameter::empty(ParameterKind::Title);
        let Parameter::Single(single) = &mut title else {
            panic!("expected single accumulator");
        };
        single.set("first");
        single.set("second");
        assert_eq!(title.render(), "chtt=second");
    }
}
