use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AxisDefinition, DataEncoding, Fill, GridLines, LegendPosition, Margins, Plot, RangeMarker,
    Series, Size, Slice, Title,
};
use crate::error::ChartResult;
use crate::request::serializer;

use super::composition::compose;
use super::validation::{
    ensure_kind, validate_bar_width, validate_chart_config, validate_orientation, validate_plot,
    validate_point_sizes,
};
use super::{ChartConfig, ChartKind};

/// Requests longer than this are commonly rejected as GET URLs.
pub const MAX_GET_URL_LEN: usize = 2048;

/// Bar thickness and gaps in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarWidth {
    pub width: u32,
    pub space_between_bars: u32,
    pub space_between_groups: u32,
}

/// A chart description that renders to a request string.
///
/// Mutators validate their input immediately; serialization never fails.
/// Every call to [`Chart::to_url`] composes into a fresh registry, so repeated
/// calls on an unchanged chart return identical strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: ChartKind,
    config: ChartConfig,
    title: Option<Title>,
    legend_position: Option<LegendPosition>,
    margins: Option<Margins>,
    background_fill: Option<Fill>,
    area_fill: Option<Fill>,
    grid_lines: Option<GridLines>,
    range_markers: Vec<RangeMarker>,
    axes: Vec<AxisDefinition>,
    plots: Vec<Plot>,
    point_sizes: Option<Series>,
    bar_width: Option<BarWidth>,
    slices: Vec<Slice>,
    pie_orientation: Option<f64>,
}

impl Chart {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            config: ChartConfig::default(),
            title: None,
            legend_position: None,
            margins: None,
            background_fill: None,
            area_fill: None,
            grid_lines: None,
            range_markers: Vec::new(),
            axes: Vec::new(),
            plots: Vec::new(),
            point_sizes: None,
            bar_width: None,
            slices: Vec::new(),
            pie_orientation: None,
        }
    }

    pub fn with_config(kind: ChartKind, config: ChartConfig) -> ChartResult<Self> {
        let mut chart = Self::new(kind);
        chart.config = validate_chart_config(config)?;
        Ok(chart)
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.config = validate_chart_config(config)?;
        Ok(())
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.config.size = Size::new(width, height)?;
        Ok(())
    }

    /// Overrides the data encoding for this chart only.
    pub fn set_data_encoding(&mut self, encoding: DataEncoding) {
        self.config.encoding = encoding;
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> ChartResult<()> {
        let config = self.config.clone().with_endpoint(endpoint);
        self.config = validate_chart_config(config)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: Title) {
        self.title = Some(title);
    }

    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.legend_position = Some(position);
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = Some(margins);
    }

    pub fn set_background_fill(&mut self, fill: Fill) {
        self.background_fill = Some(fill);
    }

    pub fn set_area_fill(&mut self, fill: Fill) {
        self.area_fill = Some(fill);
    }

    pub fn set_grid_lines(&mut self, grid: GridLines) -> ChartResult<()> {
        ensure_kind(self.kind, self.kind.has_axes(), "grid lines")?;
        self.grid_lines = Some(grid);
        Ok(())
    }

    pub fn add_range_marker(&mut self, marker: RangeMarker) -> ChartResult<()> {
        ensure_kind(self.kind, self.kind.has_axes(), "range marker")?;
        self.range_markers.push(marker);
        Ok(())
    }

    pub fn add_axis(&mut self, axis: AxisDefinition) -> ChartResult<()> {
        ensure_kind(self.kind, self.kind.has_axes(), "axis")?;
        self.axes.push(axis);
        Ok(())
    }

    /// Appends a plot; its position in the list is its series index.
    ///
    /// Scatter charts take a single x/y plot.
    pub fn add_plot(&mut self, plot: Plot) -> ChartResult<()> {
        validate_plot(self.kind, &plot)?;
        ensure_kind(
            self.kind,
            !matches!(self.kind, ChartKind::Scatter) || self.plots.is_empty(),
            "a second plot",
        )?;
        self.plots.push(plot);
        Ok(())
    }

    /// Scatter charts only: per-point marker sizes, emitted as a trailing series.
    ///
    /// Needs the plot first; one size per point.
    pub fn set_point_sizes(&mut self, sizes: impl Into<Series>) -> ChartResult<()> {
        ensure_kind(
            self.kind,
            matches!(self.kind, ChartKind::Scatter),
            "point sizes",
        )?;
        let sizes = sizes.into();
        self.point_sizes = Some(validate_point_sizes(&self.plots, sizes)?);
        Ok(())
    }

    pub fn set_bar_width(
        &mut self,
        width: u32,
        space_between_bars: u32,
        space_between_groups: u32,
    ) -> ChartResult<()> {
        ensure_kind(self.kind, self.kind.is_bar(), "bar width")?;
        self.bar_width = Some(BarWidth {
            width: validate_bar_width(width)?,
            space_between_bars,
            space_between_groups,
        });
        Ok(())
    }

    pub fn add_slice(&mut self, slice: Slice) -> ChartResult<()> {
        ensure_kind(self.kind, self.kind.is_pie(), "slice")?;
        self.slices.push(slice);
        Ok(())
    }

    /// Rotation of the first slice, in radians.
    pub fn set_pie_orientation(&mut self, radians: f64) -> ChartResult<()> {
        ensure_kind(self.kind, self.kind.is_pie(), "pie orientation")?;
        self.pie_orientation = Some(validate_orientation(radians)?);
        Ok(())
    }

    /// Rendered `key=value` fragments in registration order.
    #[must_use]
    pub fn fragments(&self) -> Vec<String> {
        compose(self).render()
    }

    /// Full request string: `endpoint?k=v&...`.
    #[must_use]
    pub fn to_url(&self) -> String {
        let fragments = self.fragments();
        let url = serializer::build(&self.config.endpoint, &fragments);
        debug!(
            kind = self.kind.code(),
            encoding = ?self.config.encoding,
            fragments = fragments.len(),
            url_len = url.len(),
            "serialized chart request"
        );
        if url.len() > MAX_GET_URL_LEN {
            warn!(
                url_len = url.len(),
                limit = MAX_GET_URL_LEN,
                "chart request is long for a GET url; consider posting `parameters()`"
            );
        }
        url
    }

    /// The same content as [`Chart::to_url`] as a `key -> value` map, for
    /// callers that POST the parameters instead.
    #[must_use]
    pub fn parameters(&self) -> IndexMap<String, String> {
        serializer::parameter_pairs(&self.fragments())
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn legend_position(&self) -> Option<LegendPosition> {
        self.legend_position
    }

    #[must_use]
    pub fn margins(&self) -> Option<Margins> {
        self.margins
    }

    #[must_use]
    pub fn background_fill(&self) -> Option<&Fill> {
        self.background_fill.as_ref()
    }

    #[must_use]
    pub fn area_fill(&self) -> Option<&Fill> {
        self.area_fill.as_ref()
    }

    #[must_use]
    pub fn grid_lines(&self) -> Option<GridLines> {
        self.grid_lines
    }

    #[must_use]
    pub fn range_markers(&self) -> &[RangeMarker] {
        &self.range_markers
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisDefinition] {
        &self.axes
    }

    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    #[must_use]
    pub fn point_sizes(&self) -> Option<&Series> {
        self.point_sizes.as_ref()
    }

    #[must_use]
    pub fn bar_width(&self) -> Option<BarWidth> {
        self.bar_width
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    #[must_use]
    pub fn pie_orientation(&self) -> Option<f64> {
        self.pie_orientation
    }
}
