use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{AxisDefinition, AxisRange, AxisSide, AxisTextAlignment, MAX_VALUE, MIN_VALUE};
use crate::request::ParameterRegistry;

/// Writes axis types, labels, positions, ranges, styles and tick lengths for
/// `axes` into `registry`.
///
/// Sides are visited right, top, left, bottom; definitions sharing a side keep
/// their insertion order. Each definition takes the next axis index.
/// Returns the number of axes emitted.
pub fn assemble_axes(
    axes: &[AxisDefinition],
    radial: bool,
    registry: &mut ParameterRegistry,
) -> usize {
    let mut axis_index = 0;
    for side in AxisSide::ASSEMBLY_ORDER {
        for definition in axes.iter().filter(|axis| axis.side() == side) {
            registry.add_axis_type(side);
            assemble_definition(axis_index, definition, radial, registry);
            axis_index += 1;
        }
    }
    axis_index
}

fn assemble_definition(
    axis_index: usize,
    definition: &AxisDefinition,
    radial: bool,
    registry: &mut ParameterRegistry,
) {
    let labels = definition.labels();
    let positions = definition.positions();

    match (positions.is_empty(), labels.is_empty()) {
        (true, false) => registry.add_axis_labels(axis_index, labels),
        (false, false) => {
            registry.add_axis_labels(axis_index, labels);
            registry.add_axis_positions(axis_index, positions);
            registry.add_axis_range(axis_index, full_domain());
        }
        (false, true) => {
            registry.add_axis_positions(axis_index, positions);
            registry.add_axis_range(axis_index, position_bounds(positions));
        }
        (true, true) => {
            if let Some(range) = definition.range() {
                registry.add_axis_range(axis_index, range);
            }
        }
    }

    if let Some(style) = definition.style() {
        let alignment = emitted_alignment(style.alignment, radial);
        registry.add_axis_style(axis_index, &style, alignment);
        if let Some(length) = style.tick_mark_length {
            registry.add_axis_tick_length(axis_index, length);
        }
    }

    trace!(
        axis_index,
        side = definition.side().code(),
        labels = labels.len(),
        positions = positions.len(),
        "assembled axis"
    );
}

/// The service renders LEFT and RIGHT text alignment mirrored on cartesian
/// axes, so they are swapped before emission. Radial axes are not affected.
fn emitted_alignment(alignment: AxisTextAlignment, radial: bool) -> AxisTextAlignment {
    if radial {
        alignment
    } else {
        alignment.mirrored()
    }
}

fn full_domain() -> AxisRange {
    AxisRange {
        min: MIN_VALUE,
        max: MAX_VALUE,
        interval: None,
    }
}

fn position_bounds(positions: &[f64]) -> AxisRange {
    let mut sorted: SmallVec<[OrderedFloat<f64>; 16]> =
        positions.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();
    AxisRange {
        min: sorted.first().map_or(MIN_VALUE, |value| value.0),
        max: sorted.last().map_or(MAX_VALUE, |value| value.0),
        interval: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_bounds_ignore_input_order() {
        let range = position_bounds(&[80.0, 10.0, 20.0]);
        assert_eq!((range.min, range.max), (10.0, 80.0));
    }

    #[test]
    fn alignment_is_mirrored_only_on_cartesian_axes() {
        assert_eq!(emitted_alignment(AxisTextAlignment::Left, false), AxisTextAlignment::Right);
        assert_eq!(emitted_alignment(AxisTextAlignment::Right, false), AxisTextAlignment::Left);
        assert_eq!(emitted_alignment(AxisTextAlignment::Center, false), AxisTextAlignment::Center);
        assert_eq!(emitted_alignment(AxisTextAlignment::Left, true), AxisTextAlignment::Left);
    }
}
