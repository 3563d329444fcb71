use chart_request::api::{Chart, ChartKind, LineChartStyle};
use chart_request::core::{Color, LineStyle, Plot, Priority};

fn line_chart(plots: Vec<Plot>) -> Chart {
    let mut chart = Chart::new(ChartKind::Line(LineChartStyle::Standard));
    for plot in plots {
        chart.add_plot(plot).expect("plot");
    }
    chart
}

#[test]
fn one_legend_among_three_plots_yields_three_entries() {
    let chart = line_chart(vec![
        Plot::new(vec![10.0]),
        Plot::new(vec![20.0]).with_legend("Revenue"),
        Plot::new(vec![30.0]),
    ]);

    assert_eq!(chart.parameters()["chdl"], "+|Revenue|+");
}

#[test]
fn no_legends_means_no_legend_parameter() {
    let chart = line_chart(vec![Plot::new(vec![10.0]), Plot::new(vec![20.0])]);
    assert!(!chart.parameters().contains_key("chdl"));
    assert!(!chart.to_url().contains("chdl="));
}

#[test]
fn missing_colors_default_to_black() {
    let chart = line_chart(vec![
        Plot::new(vec![10.0]),
        Plot::new(vec![20.0]).with_color(Color::rgb(0x12, 0x34, 0x56)),
    ]);

    assert_eq!(chart.parameters()["chco"], "000000,123456");
}

#[test]
fn missing_line_styles_default_to_thin_solid_lines() {
    let chart = line_chart(vec![
        Plot::new(vec![10.0]).with_line_style(LineStyle::new(3.0, 6.0, 3.0).expect("style")),
        Plot::new(vec![20.0]),
    ]);

    assert_eq!(chart.parameters()["chls"], "3,6,3|1,1,0");
}

#[test]
fn priorities_emit_draw_order_markers_for_every_plot() {
    let chart = line_chart(vec![
        Plot::new(vec![10.0])
            .with_color(Color::rgb(0xFF, 0, 0))
            .with_line_style(LineStyle::solid(2.0).expect("style"))
            .with_priority(Priority::High),
        Plot::new(vec![20.0]),
    ]);

    assert_eq!(chart.parameters()["chm"], "D,FF0000,0,0,2,1|D,000000,1,0,1,0");
}

#[test]
fn priority_markers_fall_back_when_colors_and_styles_are_absent() {
    let chart = line_chart(vec![
        Plot::new(vec![10.0]),
        Plot::new(vec![20.0]).with_priority(Priority::Low),
    ]);

    let parameters = chart.parameters();
    assert_eq!(parameters["chm"], "D,000000,0,0,1,0|D,000000,1,0,1,-1");
    assert!(!parameters.contains_key("chco"));
    assert!(!parameters.contains_key("chls"));
}

#[test]
fn bar_charts_ignore_line_styles_and_priorities() {
    let mut chart = Chart::new(ChartKind::Bar {
        orientation: Default::default(),
        grouping: Default::default(),
    });
    chart
        .add_plot(
            Plot::new(vec![10.0])
                .with_line_style(LineStyle::solid(4.0).expect("style"))
                .with_priority(Priority::High),
        )
        .expect("plot");

    let parameters = chart.parameters();
    assert!(!parameters.contains_key("chls"));
    assert!(!parameters.contains_key("chm"));
}
