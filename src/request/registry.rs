use indexmap::IndexMap;
use tracing::trace;

use crate::core::primitives::{format_number, url_encode_text};
use crate::core::{
    AxisRange, AxisSide, AxisStyle, AxisTextAlignment, Color, DataEncoding, Fill, FillTarget,
    GridLines, LegendPosition, LineStyle, Margins, MarkerPayload, MarkerPlacement, PlotMarker,
    Priority, RangeMarker, RangeOrientation, Series, Size,
};

use super::parameter::{DataParameter, ListParameter, Parameter, ParameterKind, SingleParameter};

/// Per-pass collection of parameter accumulators, one per kind.
///
/// Accumulators are created on first use and kept in registration order, so
/// fragments of equal length render in the order their kinds were first
/// touched.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    parameters: IndexMap<ParameterKind, Parameter>,
}

impl ParameterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.parameters.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, kind: ParameterKind) -> bool {
        self.parameters.contains_key(&kind)
    }

    #[must_use]
    pub fn get(&self, kind: ParameterKind) -> Option<&Parameter> {
        self.parameters.get(&kind)
    }

    /// Renders every populated kind, dropping the ones that render empty.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.parameters
            .values()
            .map(Parameter::render)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    pub fn set_chart_type(&mut self, code: &str) {
        self.single(ParameterKind::ChartType).set(code);
    }

    pub fn set_size(&mut self, size: Size) {
        self.single(ParameterKind::Size)
            .set(format!("{}x{}", size.width, size.height));
    }

    pub fn set_data_encoding(&mut self, encoding: DataEncoding) {
        self.data().set_encoding(encoding);
    }

    pub fn add_data(&mut self, series: Series) {
        self.data().push(series);
    }

    pub fn add_color(&mut self, color: Color) {
        self.list(ParameterKind::Colors).push(color.to_string());
    }

    pub fn add_slice_color(&mut self, color: Color) {
        self.list(ParameterKind::SliceColors).push(color.to_string());
    }

    pub fn add_legend(&mut self, legend: &str) {
        self.list(ParameterKind::Legends)
            .push(url_encode_text(legend));
    }

    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.single(ParameterKind::LegendPosition)
            .set(position.code());
    }

    pub fn set_title(&mut self, text: &str) {
        self.single(ParameterKind::Title).set(url_encode_text(text));
    }

    pub fn set_title_style(&mut self, color: Color, font_size: u32) {
        self.single(ParameterKind::TitleStyle)
            .set(format!("{color},{font_size}"));
    }

    pub fn set_margins(&mut self, margins: Margins) {
        let mut value = format!(
            "{},{},{},{}",
            margins.left, margins.right, margins.top, margins.bottom
        );
        if let Some((width, height)) = margins.legend {
            value.push_str(&format!("|{width},{height}"));
        }
        self.single(ParameterKind::Margins).set(value);
    }

    pub fn add_fill(&mut self, target: FillTarget, fill: &Fill) {
        self.list(ParameterKind::Fills).push(fill.render(target));
    }

    pub fn add_line_style(&mut self, style: LineStyle) {
        self.list(ParameterKind::LineStyles).push(format!(
            "{},{},{}",
            format_number(style.thickness),
            format_number(style.segment_length),
            format_number(style.blank_length)
        ));
    }

    /// Shape or text marker bound to series `series_index`.
    pub fn add_plot_marker(&mut self, series_index: usize, plot_marker: &PlotMarker) {
        let marker = &plot_marker.marker;
        let head = match &marker.payload {
            MarkerPayload::Shape(shape) => shape.code().to_owned(),
            MarkerPayload::Text(text) => format!("t{}", url_encode_text(text)),
        };
        let which = match plot_marker.placement {
            MarkerPlacement::EveryPoint => "-1".to_owned(),
            MarkerPlacement::Point(index) => index.to_string(),
            MarkerPlacement::Range { start, end, step } => format!("{start}:{end}:{step}"),
        };
        let mut entry = format!(
            "{head},{},{series_index},{which},{}",
            marker.color, marker.size
        );
        if marker.priority != Priority::Normal {
            entry.push_str(&format!(",{}", marker.priority.code()));
        }
        self.list(ParameterKind::Markers).push(entry);
    }

    /// Fills the area under series `series_index`.
    pub fn add_fill_area_marker(&mut self, series_index: usize, color: Color) {
        self.list(ParameterKind::Markers)
            .push(format!("B,{color},{series_index},0,0"));
    }

    /// Line marker that sets the draw order of series `series_index`.
    pub fn add_priority_marker(
        &mut self,
        series_index: usize,
        color: Color,
        width: f64,
        priority: Priority,
    ) {
        self.list(ParameterKind::Markers).push(format!(
            "D,{color},{series_index},0,{},{}",
            format_number(width),
            priority.code()
        ));
    }

    pub fn add_range_marker(&mut self, marker: &RangeMarker) {
        let code = match marker.orientation {
            RangeOrientation::Horizontal => "r",
            RangeOrientation::Vertical => "R",
        };
        self.list(ParameterKind::Markers).push(format!(
            "{code},{},0,{},{}",
            marker.color,
            format_number(marker.start / 100.0),
            format_number(marker.end / 100.0)
        ));
    }

    pub fn add_axis_type(&mut self, side: AxisSide) {
        self.list(ParameterKind::AxisTypes).push(side.code());
    }

    pub fn add_axis_labels(&mut self, axis_index: usize, labels: &[String]) {
        let mut entry = format!("{axis_index}:");
        for label in labels {
            entry.push('|');
            entry.push_str(&url_encode_text(label));
        }
        self.list(ParameterKind::AxisLabels).push(entry);
    }

    pub fn add_axis_positions(&mut self, axis_index: usize, positions: &[f64]) {
        let mut entry = axis_index.to_string();
        for &position in positions {
            entry.push(',');
            entry.push_str(&format_number(position));
        }
        self.list(ParameterKind::AxisPositions).push(entry);
    }

    pub fn add_axis_range(&mut self, axis_index: usize, range: AxisRange) {
        let mut entry = format!(
            "{axis_index},{},{}",
            format_number(range.min),
            format_number(range.max)
        );
        if let Some(interval) = range.interval {
            entry.push_str(&format!(",{}", format_number(interval)));
        }
        self.list(ParameterKind::AxisRanges).push(entry);
    }

    /// `alignment` is the value to emit, already corrected for the backend.
    pub fn add_axis_style(
        &mut self,
        axis_index: usize,
        style: &AxisStyle,
        alignment: AxisTextAlignment,
    ) {
        let mut entry = format!(
            "{axis_index},{},{},{}",
            style.text_color,
            style.font_size,
            alignment.code()
        );
        // A tick color alone implies visible tick marks.
        let draw_tick_marks = style
            .draw_tick_marks
            .or(style.tick_mark_color.map(|_| true));
        if let Some(draw_tick_marks) = draw_tick_marks {
            entry.push_str(if draw_tick_marks { ",lt" } else { ",l" });
            if let Some(tick_color) = style.tick_mark_color {
                entry.push_str(&format!(",{tick_color}"));
            }
        }
        self.list(ParameterKind::AxisStyles).push(entry);
    }

    pub fn add_axis_tick_length(&mut self, axis_index: usize, length: i32) {
        self.list(ParameterKind::AxisTickLengths)
            .push(format!("{axis_index},{length}"));
    }

    pub fn set_grid_lines(&mut self, grid: GridLines) {
        self.single(ParameterKind::GridLines).set(format!(
            "{},{},{},{}",
            format_number(grid.x_step),
            format_number(grid.y_step),
            grid.segment_length,
            grid.blank_length
        ));
    }

    pub fn set_bar_width(&mut self, width: u32, space_between_bars: u32, space_between_groups: u32) {
        self.single(ParameterKind::BarWidth).set(format!(
            "{width},{space_between_bars},{space_between_groups}"
        ));
    }

    /// `value` is a position in the normalized domain.
    pub fn add_zero_line(&mut self, value: f64) {
        self.list(ParameterKind::ZeroLines)
            .push(format_number(value / 100.0));
    }

    pub fn set_pie_orientation(&mut self, radians: f64) {
        self.single(ParameterKind::PieOrientation)
            .set(format_number(radians));
    }

    pub fn add_pie_label(&mut self, label: &str) {
        self.list(ParameterKind::PieLabels)
            .push(url_encode_text(label));
    }

    fn slot(&mut self, kind: ParameterKind) -> &mut Parameter {
        self.parameters.entry(kind).or_insert_with(|| {
            trace!(key = kind.key(), ?kind, "register parameter kind");
            Parameter::empty(kind)
        })
    }

    fn data(&mut self) -> &mut DataParameter {
        match self.slot(ParameterKind::Data) {
            Parameter::Data(parameter) => parameter,
            other => wiring_fault(ParameterKind::Data, other),
        }
    }

    fn list(&mut self, kind: ParameterKind) -> &mut ListParameter {
        match self.slot(kind) {
            Parameter::List(parameter) => parameter,
            other => wiring_fault(kind, other),
        }
    }

    fn single(&mut self, kind: ParameterKind) -> &mut SingleParameter {
        match self.slot(kind) {
            Parameter::Single(parameter) => parameter,
            other => wiring_fault(kind, other),
        }
    }
}

/// A slot holding the wrong accumulator shape is a registry defect, not bad
/// input, so it aborts the pass.
#[cold]
fn wiring_fault(kind: ParameterKind, found: &Parameter) -> ! {
    panic!("parameter registry wiring fault: {kind:?} slot holds {found:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Marker, Shape};

    #[test]
    fn kinds_are_created_once_and_accumulate() {
        let mut registry = ParameterRegistry::new();
        registry.add_color(Color::rgb(0xFF, 0, 0));
        registry.add_color(Color::rgb(0, 0xFF, 0));
        registry.set_chart_type("lc");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.render(), vec!["chco=FF0000,00FF00", "cht=lc"]);
    }

    #[test]
    fn clear_drops_accumulated_state() {
        let mut registry = ParameterRegistry::new();
        registry.add_legend("a");
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.render().is_empty());
    }

    #[test]
    fn markers_render_placement_and_priority() {
        let mut registry = ParameterRegistry::new();
        let circle = Marker::shape(Shape::Circle, Color::BLACK, 6).expect("marker");
        registry.add_plot_marker(
            1,
            &PlotMarker {
                marker: circle.clone(),
                placement: MarkerPlacement::EveryPoint,
            },
        );
        registry.add_plot_marker(
            0,
            &PlotMarker {
                marker: Marker::text("peak value", Color::WHITE, 10)
                    .expect("marker")
                    .with_priority(Priority::High),
                placement: MarkerPlacement::Point(3),
            },
        );
        registry.add_plot_marker(
            2,
            &PlotMarker {
                marker: circle,
                placement: MarkerPlacement::range(0, 10, 2).expect("range"),
            },
        );

        assert_eq!(
            registry.render(),
            vec!["chm=o,000000,1,-1,6|tpeak+value,FFFFFF,0,3,10,1|o,000000,2,0:10:2,6"]
        );
    }

    #[test]
    fn axis_style_appends_tick_controls_only_when_set() {
        let mut registry = ParameterRegistry::new();
        let plain = AxisStyle::new(Color::BLACK, 12, AxisTextAlignment::Center).expect("style");
        let ticks = plain
            .with_tick_marks(true)
            .with_tick_mark_color(Color::rgb(0, 0, 0xFF));
        registry.add_axis_style(0, &plain, AxisTextAlignment::Center);
        registry.add_axis_style(1, &ticks, AxisTextAlignment::Left);

        assert_eq!(registry.render(), vec!["chxs=0,000000,12,0|1,000000,12,-1,lt,0000FF"]);
    }

    #[test]
    fn axis_tick_color_alone_turns_tick_marks_on() {
        let mut registry = ParameterRegistry::new();
        let style = AxisStyle::new(Color::BLACK, 10, AxisTextAlignment::Center)
            .expect("style")
            .with_tick_mark_color(Color::rgb(0xFF, 0, 0));
        registry.add_axis_style(0, &style, AxisTextAlignment::Center);

        assert_eq!(registry.render(), vec!["chxs=0,000000,10,0,lt,FF0000"]);
    }
}
