//! Keeps per-series attribute lists index-aligned with the plot list.
//!
//! An attribute is emitted either for every plot or for none: as soon as one
//! plot sets it, plots that did not set it contribute a fixed default so that
//! entry `i` always describes series `i`.

use crate::core::{Color, LineStyle, Plot, Priority, Slice};

pub const DEFAULT_COLOR: Color = Color::BLACK;
pub const DEFAULT_LEGEND: &str = " ";
pub const DEFAULT_LINE_STYLE: LineStyle = LineStyle::SOLID;
pub const DEFAULT_PRIORITY: Priority = Priority::Normal;
pub const DEFAULT_ZERO_LINE: f64 = 0.0;
pub const DEFAULT_SLICE_LABEL: &str = "";

/// Returns one value per item when any item sets the attribute, `None`
/// otherwise. Unset items take `default`.
pub fn align<T, I>(attributes: I, default: T) -> Option<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = Option<T>>,
{
    let attributes = attributes.into_iter().collect::<Vec<_>>();
    if !attributes.iter().any(Option::is_some) {
        return None;
    }
    Some(
        attributes
            .into_iter()
            .map(|value| value.unwrap_or_else(|| default.clone()))
            .collect(),
    )
}

/// Aligned attribute lists for a chart's plots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedPlotAttributes {
    pub colors: Option<Vec<Color>>,
    pub legends: Option<Vec<String>>,
    pub line_styles: Option<Vec<LineStyle>>,
    pub priorities: Option<Vec<Priority>>,
    pub zero_lines: Option<Vec<f64>>,
}

impl AlignedPlotAttributes {
    #[must_use]
    pub fn resolve(plots: &[Plot]) -> Self {
        Self {
            colors: align(plots.iter().map(Plot::color), DEFAULT_COLOR),
            legends: align(
                plots.iter().map(|plot| plot.legend().map(str::to_owned)),
                DEFAULT_LEGEND.to_owned(),
            ),
            line_styles: align(plots.iter().map(Plot::line_style), DEFAULT_LINE_STYLE),
            priorities: align(plots.iter().map(Plot::priority), DEFAULT_PRIORITY),
            zero_lines: align(plots.iter().map(Plot::zero_line), DEFAULT_ZERO_LINE),
        }
    }

    /// Draw-order markers, present only when some plot sets a priority.
    ///
    /// Color and width come from the aligned colors and line styles, falling
    /// back to black and thickness 1 when those lists are absent.
    #[must_use]
    pub fn priority_markers(&self) -> Vec<PriorityMarker> {
        let Some(priorities) = &self.priorities else {
            return Vec::new();
        };

        priorities
            .iter()
            .enumerate()
            .map(|(series_index, &priority)| PriorityMarker {
                series_index,
                color: self
                    .colors
                    .as_ref()
                    .and_then(|colors| colors.get(series_index).copied())
                    .unwrap_or(DEFAULT_COLOR),
                width: self
                    .line_styles
                    .as_ref()
                    .and_then(|styles| styles.get(series_index))
                    .map_or(DEFAULT_LINE_STYLE.thickness, |style| style.thickness),
                priority,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityMarker {
    pub series_index: usize,
    pub color: Color,
    pub width: f64,
    pub priority: Priority,
}

/// Aligned attribute lists for pie slices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedSliceAttributes {
    pub colors: Option<Vec<Color>>,
    pub labels: Option<Vec<String>>,
    pub legends: Option<Vec<String>>,
}

impl AlignedSliceAttributes {
    #[must_use]
    pub fn resolve(slices: &[Slice]) -> Self {
        Self {
            colors: align(slices.iter().map(|slice| slice.color), DEFAULT_COLOR),
            labels: align(
                slices.iter().map(|slice| slice.label.clone()),
                DEFAULT_SLICE_LABEL.to_owned(),
            ),
            legends: align(
                slices.iter().map(|slice| slice.legend.clone()),
                DEFAULT_LEGEND.to_owned(),
            ),
        }
    }
}
