use chart_request::api::{Chart, ChartKind, LineChartStyle, assemble_axes};
use chart_request::core::{AxisDefinition, AxisRange, AxisSide, AxisStyle, AxisTextAlignment, Color};
use chart_request::request::ParameterRegistry;

fn assembled(axes: &[AxisDefinition], radial: bool) -> Vec<String> {
    let mut registry = ParameterRegistry::new();
    assemble_axes(axes, radial, &mut registry);
    registry.render()
}

#[test]
fn positions_without_labels_emit_sorted_bounds_and_original_order() {
    let axis = AxisDefinition::new(AxisSide::Bottom)
        .with_positions(&[80.0, 10.0, 20.0])
        .expect("positions");

    assert_eq!(
        assembled(&[axis], false),
        vec!["chxt=x", "chxp=0,80,10,20", "chxr=0,10,80"]
    );
}

#[test]
fn labels_with_positions_use_the_full_domain() {
    let axis = AxisDefinition::new(AxisSide::Left)
        .with_labels(["low", "high"])
        .with_positions(&[25.0, 75.0])
        .expect("positions");

    assert_eq!(
        assembled(&[axis], false),
        vec!["chxt=y", "chxl=0:|low|high", "chxp=0,25,75", "chxr=0,0,100"]
    );
}

#[test]
fn labels_alone_are_placed_implicitly() {
    let axis = AxisDefinition::new(AxisSide::Bottom)
        .with_labels(["Jan", "Feb", "Mar"])
        .with_range(AxisRange::new(0.0, 10.0).expect("range"));

    assert_eq!(assembled(&[axis], false), vec!["chxt=x", "chxl=0:|Jan|Feb|Mar"]);
}

#[test]
fn explicit_range_is_emitted_verbatim_with_interval() {
    let range = AxisRange::new(-5.0, 12.5)
        .expect("range")
        .with_interval(2.5)
        .expect("interval");
    let axis = AxisDefinition::new(AxisSide::Left).with_range(range);

    assert_eq!(assembled(&[axis], false), vec!["chxt=y", "chxr=0,-5,12.5,2.5"]);
}

#[test]
fn bare_axis_emits_only_its_type() {
    assert_eq!(assembled(&[AxisDefinition::new(AxisSide::Top)], false), vec!["chxt=t"]);
}

#[test]
fn sides_are_indexed_right_top_left_bottom_with_insertion_order_within_a_side() {
    let axes = vec![
        AxisDefinition::new(AxisSide::Bottom).with_labels(["a", "b"]),
        AxisDefinition::numeric(AxisSide::Left, 0.0, 50.0).expect("numeric"),
        AxisDefinition::new(AxisSide::Right).with_labels(["R1"]),
        AxisDefinition::new(AxisSide::Bottom).with_labels(["c"]),
    ];

    assert_eq!(
        assembled(&axes, false),
        vec!["chxt=r,y,x,x", "chxl=0:|R1|2:|a|b|3:|c", "chxr=1,0,50"]
    );
}

#[test]
fn axis_labels_are_url_encoded() {
    let axis = AxisDefinition::new(AxisSide::Bottom).with_labels(["Q1 2024", "a|b"]);
    assert_eq!(assembled(&[axis], false), vec!["chxt=x", "chxl=0:|Q1+2024|a%7Cb"]);
}

#[test]
fn left_and_right_alignment_are_swapped_on_cartesian_charts() {
    let left = AxisStyle::new(Color::rgb(0x33, 0x33, 0x33), 11, AxisTextAlignment::Left).expect("style");
    let right = AxisStyle::new(Color::rgb(0x33, 0x33, 0x33), 11, AxisTextAlignment::Right).expect("style");
    let axes = vec![
        AxisDefinition::new(AxisSide::Left).with_style(left),
        AxisDefinition::new(AxisSide::Bottom).with_style(right),
    ];

    assert_eq!(
        assembled(&axes, false),
        vec!["chxt=y,x", "chxs=0,333333,11,1|1,333333,11,-1"]
    );
}

#[test]
fn radial_charts_keep_alignment_as_given() {
    let left = AxisStyle::new(Color::BLACK, 10, AxisTextAlignment::Left).expect("style");
    let axis = AxisDefinition::new(AxisSide::Bottom).with_style(left);

    assert_eq!(assembled(&[axis], true), vec!["chxt=x", "chxs=0,000000,10,-1"]);
}

#[test]
fn tick_length_uses_the_same_axis_index_as_the_style() {
    let style = AxisStyle::new(Color::BLACK, 10, AxisTextAlignment::Center)
        .expect("style")
        .with_tick_marks(true)
        .with_tick_mark_length(-8);
    let axes = vec![
        AxisDefinition::new(AxisSide::Right),
        AxisDefinition::new(AxisSide::Bottom)
            .with_positions(&[50.0])
            .expect("positions")
            .with_style(style),
    ];

    assert_eq!(
        assembled(&axes, false),
        vec!["chxt=r,x", "chxp=1,50", "chxr=1,50,50", "chxs=1,000000,10,0,lt", "chxtc=1,-8"]
    );
}

#[test]
fn radar_chart_routes_axes_through_the_radial_path() {
    let style = AxisStyle::new(Color::BLACK, 10, AxisTextAlignment::Right).expect("style");
    let mut radar = Chart::new(ChartKind::Radar { spline: false });
    let mut line = Chart::new(ChartKind::Line(LineChartStyle::Standard));
    for chart in [&mut radar, &mut line] {
        chart
            .add_axis(AxisDefinition::new(AxisSide::Bottom).with_style(style))
            .expect("axis");
    }

    assert_eq!(radar.parameters()["chxs"], "0,000000,10,1");
    assert_eq!(line.parameters()["chxs"], "0,000000,10,-1");
}

#[test]
fn axis_positions_outside_the_domain_are_rejected() {
    assert!(AxisDefinition::new(AxisSide::Bottom).with_positions(&[10.0, 120.0]).is_err());
    assert!(AxisRange::new(5.0, 5.0).is_err());
    assert!(AxisRange::new(0.0, 1.0).expect("range").with_interval(0.0).is_err());
}
