//! Ordered composition stages that populate a parameter registry.
//!
//! Each chart kind lists its stages explicitly, generic ones first:
//! chart basics, then graph decorations (axes, grid, range markers), then the
//! kind-specific data stages. Every stage only appends to the shared context.

use tracing::{trace, warn};

use crate::core::{DataEncoding, FillTarget, MarkerPlacement, Series};
use crate::request::ParameterRegistry;

use super::axis_assembler::assemble_axes;
use super::series_alignment::{AlignedPlotAttributes, AlignedSliceAttributes};
use super::{Chart, ChartKind};

/// State shared by the stages of one serialization pass.
#[derive(Debug)]
pub struct CompositionContext {
    registry: ParameterRegistry,
    encoding: DataEncoding,
    radial: bool,
}

impl CompositionContext {
    #[must_use]
    pub fn new(encoding: DataEncoding, radial: bool) -> Self {
        Self {
            registry: ParameterRegistry::new(),
            encoding,
            radial,
        }
    }

    #[must_use]
    pub fn encoding(&self) -> DataEncoding {
        self.encoding
    }

    #[must_use]
    pub fn is_radial(&self) -> bool {
        self.radial
    }

    #[must_use]
    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ParameterRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn into_registry(self) -> ParameterRegistry {
        self.registry
    }
}

/// One named step of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct CompositionStage {
    pub name: &'static str,
    pub run: fn(&Chart, &mut CompositionContext),
}

pub const CHART_BASICS: CompositionStage = CompositionStage {
    name: "chart_basics",
    run: compose_chart_basics,
};
pub const GRAPH_DECORATIONS: CompositionStage = CompositionStage {
    name: "graph_decorations",
    run: compose_graph_decorations,
};
pub const PLOT_SERIES: CompositionStage = CompositionStage {
    name: "plot_series",
    run: compose_plot_series,
};
pub const BAR_LAYOUT: CompositionStage = CompositionStage {
    name: "bar_layout",
    run: compose_bar_layout,
};
pub const PIE_SLICES: CompositionStage = CompositionStage {
    name: "pie_slices",
    run: compose_pie_slices,
};

const PLOT_CHART_STAGES: &[CompositionStage] = &[CHART_BASICS, GRAPH_DECORATIONS, PLOT_SERIES];
const BAR_CHART_STAGES: &[CompositionStage] =
    &[CHART_BASICS, GRAPH_DECORATIONS, PLOT_SERIES, BAR_LAYOUT];
const PIE_CHART_STAGES: &[CompositionStage] = &[CHART_BASICS, PIE_SLICES];

/// Stage list for `kind`, in execution order.
#[must_use]
pub fn stages_for(kind: ChartKind) -> &'static [CompositionStage] {
    match kind {
        ChartKind::Line(_) | ChartKind::Radar { .. } | ChartKind::Scatter => PLOT_CHART_STAGES,
        ChartKind::Bar { .. } => BAR_CHART_STAGES,
        ChartKind::Pie(_) => PIE_CHART_STAGES,
    }
}

/// Runs every stage of `chart`'s kind against a fresh registry.
#[must_use]
pub fn compose(chart: &Chart) -> ParameterRegistry {
    let kind = chart.kind();
    let mut context = CompositionContext::new(chart.config().encoding, kind.is_radial());
    for stage in stages_for(kind) {
        (stage.run)(chart, &mut context);
        trace!(
            stage = stage.name,
            parameters = context.registry().len(),
            "composition stage done"
        );
    }
    context.into_registry()
}

/// Chart type, size, title, legend position, margins and fills.
pub fn compose_chart_basics(chart: &Chart, context: &mut CompositionContext) {
    let registry = context.registry_mut();
    registry.set_chart_type(chart.kind().code());
    registry.set_size(chart.config().size);

    if let Some(title) = chart.title() {
        registry.set_title(&title.text);
        if let (Some(color), Some(font_size)) = (title.color, title.font_size) {
            registry.set_title_style(color, font_size);
        }
    }
    if let Some(position) = chart.legend_position() {
        registry.set_legend_position(position);
    }
    if let Some(margins) = chart.margins() {
        registry.set_margins(margins);
    }
    if let Some(fill) = chart.background_fill() {
        registry.add_fill(FillTarget::Background, fill);
    }
    if let Some(fill) = chart.area_fill() {
        registry.add_fill(FillTarget::ChartArea, fill);
    }
}

/// Axes, grid lines and range markers.
pub fn compose_graph_decorations(chart: &Chart, context: &mut CompositionContext) {
    let radial = context.is_radial();
    let registry = context.registry_mut();
    assemble_axes(chart.axes(), radial, registry);

    if let Some(grid) = chart.grid_lines() {
        registry.set_grid_lines(grid);
    }
    for marker in chart.range_markers() {
        registry.add_range_marker(marker);
    }
}

/// Series data plus the aligned per-series attributes and markers.
pub fn compose_plot_series(chart: &Chart, context: &mut CompositionContext) {
    let kind = chart.kind();
    let encoding = context.encoding();
    let registry = context.registry_mut();
    let plots = chart.plots();
    if plots.is_empty() {
        return;
    }

    registry.set_data_encoding(encoding);
    for plot in plots {
        if let Some(x_series) = plot.x_series() {
            registry.add_data(x_series.clone());
        }
        registry.add_data(plot.series().clone());
    }
    if let Some(sizes) = chart.point_sizes() {
        registry.add_data(sizes.clone());
    }

    let aligned = AlignedPlotAttributes::resolve(plots);
    if let Some(colors) = &aligned.colors {
        for &color in colors {
            registry.add_color(color);
        }
    }
    if let Some(legends) = &aligned.legends {
        for legend in legends {
            registry.add_legend(legend);
        }
    }
    if kind.draws_lines() {
        if let Some(styles) = &aligned.line_styles {
            for &style in styles {
                registry.add_line_style(style);
            }
        }
    }

    for (series_index, plot) in plots.iter().enumerate() {
        if let Some(color) = plot.fill_area_color() {
            registry.add_fill_area_marker(series_index, color);
        }
    }
    for (series_index, plot) in plots.iter().enumerate() {
        for plot_marker in plot.markers() {
            warn_if_beyond_series(plot.series(), series_index, plot_marker.placement);
            registry.add_plot_marker(series_index, plot_marker);
        }
    }
    if kind.draws_lines() {
        for marker in aligned.priority_markers() {
            registry.add_priority_marker(
                marker.series_index,
                marker.color,
                marker.width,
                marker.priority,
            );
        }
    }
}

/// Bar width/spacing and aligned zero lines.
pub fn compose_bar_layout(chart: &Chart, context: &mut CompositionContext) {
    let registry = context.registry_mut();
    if let Some(bar_width) = chart.bar_width() {
        registry.set_bar_width(
            bar_width.width,
            bar_width.space_between_bars,
            bar_width.space_between_groups,
        );
    }
    if let Some(zero_lines) = AlignedPlotAttributes::resolve(chart.plots()).zero_lines {
        for value in zero_lines {
            registry.add_zero_line(value);
        }
    }
}

/// Slice percentages, colors, labels, legends and orientation.
pub fn compose_pie_slices(chart: &Chart, context: &mut CompositionContext) {
    let encoding = context.encoding();
    let registry = context.registry_mut();
    let slices = chart.slices();

    if !slices.is_empty() {
        registry.set_data_encoding(encoding);
        registry.add_data(Series::new(
            slices
                .iter()
                .map(|slice| slice.percentage)
                .collect::<Vec<_>>(),
        ));
    }

    let aligned = AlignedSliceAttributes::resolve(slices);
    if let Some(colors) = &aligned.colors {
        for &color in colors {
            registry.add_slice_color(color);
        }
    }
    if let Some(labels) = &aligned.labels {
        for label in labels {
            registry.add_pie_label(label);
        }
    }
    if let Some(legends) = &aligned.legends {
        for legend in legends {
            registry.add_legend(legend);
        }
    }
    if let Some(radians) = chart.pie_orientation() {
        registry.set_pie_orientation(radians);
    }
}

fn warn_if_beyond_series(series: &Series, series_index: usize, placement: MarkerPlacement) {
    let first_index = match placement {
        MarkerPlacement::EveryPoint => return,
        MarkerPlacement::Point(index) => index,
        MarkerPlacement::Range { start, .. } => start,
    };
    if first_index >= series.len() {
        warn!(
            series_index,
            point_index = first_index,
            series_len = series.len(),
            "marker points past the end of its series"
        );
    }
}
