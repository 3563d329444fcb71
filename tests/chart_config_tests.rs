use chart_request::ChartError;
use chart_request::api::{Chart, ChartConfig, ChartKind, DEFAULT_ENDPOINT, LineChartStyle};
use chart_request::core::{DataEncoding, Size};

#[test]
fn partial_json_config_falls_back_to_defaults() {
    let config = ChartConfig::from_json_str(r#"{ "encoding": "Simple" }"#).expect("config");

    assert_eq!(config.encoding, DataEncoding::Simple);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.size, Size::default());
}

#[test]
fn json_config_round_trips() {
    let config = ChartConfig::new(Size::new(320, 240).expect("size"))
        .with_encoding(DataEncoding::Text)
        .with_endpoint("https://charts.example.test/chart");
    let json = config.to_json_pretty().expect("json");

    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn oversized_config_is_rejected() {
    let err = ChartConfig::from_json_str(r#"{ "size": { "width": 1000, "height": 1000 } }"#)
        .expect_err("area above limit");
    assert!(matches!(err, ChartError::InvalidSize { width: 1000, height: 1000 }));
}

#[test]
fn malformed_json_config_is_invalid_data() {
    let err = ChartConfig::from_json_str("{ not json").expect_err("parse failure");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn endpoint_must_be_a_bare_url() {
    for endpoint in ["", "   ", "https://x.test/chart?cht=lc", "https://x.test/chart#top"] {
        let config = ChartConfig::default().with_endpoint(endpoint);
        assert!(
            Chart::with_config(ChartKind::Line(LineChartStyle::Standard), config).is_err(),
            "endpoint `{endpoint}` should be rejected"
        );
    }
}

#[test]
fn size_limits_follow_the_service() {
    assert!(Size::new(1000, 300).is_ok());
    assert!(Size::new(1001, 10).is_err());
    assert!(Size::new(0, 10).is_err());
    assert!(Size::new(600, 600).is_err());
}
