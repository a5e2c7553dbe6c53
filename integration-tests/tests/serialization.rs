use rootstep_session::{Config, Frame, Inputs, Session, StepReport, Summary};
use serde_json::{Value, json};

#[test]
fn records_serialize_as_flat_objects() {
    let mut session = Session::new();
    let records = session.calculate(&Inputs::example()).expect("solves");

    let value = serde_json::to_value(&records[0]).expect("serializes");
    assert_eq!(
        value,
        json!({
            "index": 1,
            "a": 1.0,
            "b": 2.0,
            "c": 1.5,
            "sign": "Positive",
            "fc": -0.125,
        })
    );

    let second = serde_json::to_value(&records[1]).expect("serializes");
    assert_eq!(second["sign"], "Negative");
}

#[test]
fn record_table_round_trips() {
    let mut session = Session::new();
    let records = session.calculate(&Inputs::example()).expect("solves").to_vec();

    let text = serde_json::to_string(&records).expect("serializes");
    let back: Vec<rootstep_session::IterationRecord> =
        serde_json::from_str(&text).expect("deserializes");

    assert_eq!(back, records);
}

#[test]
fn summary_and_step_report_shapes() {
    let mut session = Session::new();
    let report = session.step(&Inputs::example()).expect("steps");

    let value = serde_json::to_value(report).expect("serializes");
    assert_eq!(value["finished"], false);
    assert_eq!(value["record"]["c"], 1.5);

    let exhausted = StepReport {
        record: None,
        finished: true,
    };
    assert_eq!(
        serde_json::to_value(exhausted).expect("serializes"),
        json!({ "record": null, "finished": true })
    );

    let summary = Summary::from_records(session.records()).expect("one record");
    let value = serde_json::to_value(summary).expect("serializes");
    assert_eq!(
        value,
        json!({ "root": 1.5, "f_root": -0.125, "error": 1.0, "iterations": 1 })
    );
}

#[test]
fn frame_serializes_for_a_renderer() {
    let f = rootstep_expr::compile("x^3 - x - 2").expect("compiles");
    let frame = Frame::sample(&f, [1.0, 2.0], &[]);

    let value = serde_json::to_value(&frame).expect("serializes");
    assert_eq!(value["x_range"], json!([0.0, 3.0]));
    assert_eq!(value["overlay"], Value::Null);
    assert_eq!(value["curve"].as_array().map(Vec::len), Some(201));
}

#[test]
fn inputs_load_from_json_yaml_and_toml() {
    let expected = Inputs::new("x^3 - x - 2", [1.0, 2.0], Config::new(1e-4, 100));

    let from_json: Inputs = serde_json::from_str(
        r#"{
            "expression": "x^3 - x - 2",
            "bounds": [1.0, 2.0],
            "config": { "tolerance": 0.0001, "max_iters": 100 }
        }"#,
    )
    .expect("valid JSON");

    let from_yaml: Inputs = serde_yaml::from_str(
        "expression: x^3 - x - 2\n\
         bounds: [1.0, 2.0]\n\
         config:\n  tolerance: 0.0001\n  max_iters: 100\n",
    )
    .expect("valid YAML");

    let from_toml: Inputs = toml::from_str(
        r#"
        expression = "x^3 - x - 2"
        bounds = [1.0, 2.0]
        config = { tolerance = 0.0001, max_iters = 100 }
        "#,
    )
    .expect("valid TOML");

    assert_eq!(from_json, expected);
    assert_eq!(from_yaml, expected);
    assert_eq!(from_toml, expected);
    assert_eq!(expected, Inputs::example());
}
