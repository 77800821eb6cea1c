use chart_viewport::core::{ChartData, ColumnType, Dataset, SeriesData};
use chart_viewport::render::Color;
use chart_viewport::ChartError;

const CHART_JSON: &str = r##"{
    "columns": [
        ["x", 1542412800000, 1542499200000, 1542585600000, 1542672000000],
        ["y0", 37, 20, 32, 39],
        ["y1", 22, 12, 30, 40]
    ],
    "types": {"y0": "line", "y1": "line", "x": "x"},
    "names": {"y0": "Joined", "y1": "Left"},
    "colors": {"y0": "#3DC23F", "y1": "#F34C44"}
}"##;

fn invalid_data_message(result: Result<Dataset, ChartError>) -> String {
    match result {
        Err(ChartError::InvalidData(message)) => message,
        other => panic!("expected invalid data, got {other:?}"),
    }
}

#[test]
fn parses_column_record_with_names_and_colors() {
    let data = ChartData::from_json_str(CHART_JSON).expect("parse");
    assert_eq!(data.types.get("x"), Some(&ColumnType::X));

    let dataset = data.into_dataset().expect("dataset");
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.axis()[0], 1_542_412_800_000.0);

    let series = dataset.series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "y0");
    assert_eq!(series[0].name, "Joined");
    assert_eq!(series[0].color.to_hex(), "#3dc23f");
    assert_eq!(&series[1].values[..], &[22.0, 12.0, 30.0, 40.0]);
}

#[test]
fn missing_names_and_colors_fall_back_to_defaults() {
    let json = r#"{
        "columns": [["x", 1, 2, 3], ["y0", 5, 6, 7]],
        "types": {"x": "x", "y0": "line"}
    }"#;
    let dataset = ChartData::from_json_str(json)
        .and_then(ChartData::into_dataset)
        .expect("dataset");
    let series = &dataset.series()[0];
    assert_eq!(series.name, "y0");
    assert_eq!(series.color, Color::DEFAULT_SERIES);
    assert_eq!(Color::DEFAULT_SERIES.to_hex(), "#31a8dc");
}

#[test]
fn rejects_a_decreasing_axis() {
    let message = invalid_data_message(Dataset::new(vec![1.0, 3.0, 2.0], Vec::new()));
    assert!(message.contains("non-decreasing"));
}

#[test]
fn accepts_repeated_axis_values() {
    let dataset = Dataset::new(
        vec![1.0, 2.0, 2.0, 3.0],
        vec![SeriesData::new("y", vec![0.0, 1.0, 2.0, 3.0])],
    )
    .expect("non-decreasing axis is valid");
    assert_eq!(dataset.len(), 4);
}

#[test]
fn rejects_length_mismatch_and_duplicate_labels() {
    let message = invalid_data_message(Dataset::new(
        vec![1.0, 2.0],
        vec![SeriesData::new("y", vec![1.0])],
    ));
    assert!(message.contains("has 1 values"));

    let message = invalid_data_message(Dataset::new(
        vec![1.0, 2.0],
        vec![
            SeriesData::new("y", vec![1.0, 2.0]),
            SeriesData::new("y", vec![3.0, 4.0]),
        ],
    ));
    assert!(message.contains("duplicate series label `y`"));
}

#[test]
fn rejects_empty_or_non_finite_axis() {
    assert!(Dataset::new(Vec::new(), Vec::new()).is_err());
    assert!(Dataset::new(vec![1.0, f64::NAN], Vec::new()).is_err());
}

#[test]
fn rejects_malformed_records() {
    let no_x = r#"{"columns": [["y0", 1, 2]], "types": {"y0": "line"}}"#;
    let untyped = r#"{"columns": [["x", 1, 2], ["y0", 1, 2]], "types": {"x": "x"}}"#;
    let two_x = r#"{"columns": [["x", 1, 2], ["t", 1, 2]], "types": {"x": "x", "t": "x"}}"#;
    let text_value =
        r#"{"columns": [["x", 1, 2], ["y0", 1, "two"]], "types": {"x": "x", "y0": "line"}}"#;
    let no_label = r#"{"columns": [[1, 2]], "types": {}}"#;
    let bad_color = r##"{
        "columns": [["x", 1, 2], ["y0", 1, 2]],
        "types": {"x": "x", "y0": "line"},
        "colors": {"y0": "#12345"}
    }"##;

    for (case, json) in [
        ("no x", no_x),
        ("untyped", untyped),
        ("two x", two_x),
        ("text value", text_value),
        ("no label", no_label),
        ("bad color", bad_color),
    ] {
        let result = ChartData::from_json_str(json).and_then(ChartData::into_dataset);
        assert!(
            matches!(result, Err(ChartError::InvalidData(_))),
            "{case}: {result:?}"
        );
    }

    assert!(ChartData::from_json_str("{not json").is_err());
}

#[test]
fn short_hex_colors_expand() {
    let color = Color::from_hex("#abc").expect("short hex");
    assert_eq!(color.to_hex(), "#aabbcc");
    assert!(Color::from_hex("#ggg").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn series_data_survives_a_json_round_trip() {
    let series = SeriesData::new("y0", vec![37.0, 20.5, 32.0]);
    let json = serde_json::to_string(&series).expect("serialize");
    assert!(json.contains("\"values\":[37.0,20.5,32.0]"));

    let parsed: SeriesData = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, series);
    assert_eq!(&parsed.values[..], &[37.0, 20.5, 32.0]);
}
