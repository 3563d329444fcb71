use chart_request::api::{
    Chart, ChartKind, LineChartStyle, PARAMETER_MAP_JSON_SCHEMA_V1, ParameterMapJsonContractV1,
};
use chart_request::core::{Color, Plot};

fn sample_chart() -> Chart {
    let mut chart = Chart::new(ChartKind::Line(LineChartStyle::Standard));
    chart
        .add_plot(
            Plot::new(vec![5.0, 95.0])
                .with_color(Color::rgb(0x3D, 0x7E, 0xAA))
                .with_legend("Load avg"),
        )
        .expect("plot");
    chart
}

#[test]
fn parameter_map_matches_request_order() {
    let chart = sample_chart();
    let contract = ParameterMapJsonContractV1::from_chart(&chart);

    assert_eq!(contract.schema_version, PARAMETER_MAP_JSON_SCHEMA_V1);
    assert_eq!(contract.to_url(), chart.to_url());
}

#[test]
fn contract_round_trips_through_json() {
    let json = sample_chart()
        .parameters_json_contract_v1_pretty()
        .expect("json");
    let parsed = ParameterMapJsonContractV1::from_json_str(&json).expect("parse");

    assert_eq!(parsed, ParameterMapJsonContractV1::from_chart(&sample_chart()));
    assert_eq!(parsed.parameters["chdl"], "Load+avg");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let mut contract = ParameterMapJsonContractV1::from_chart(&sample_chart());
    contract.schema_version = 99;
    let json = contract.to_json_pretty().expect("json");

    assert!(ParameterMapJsonContractV1::from_json_str(&json).is_err());
}
