use serde_json::{Value, json};

use datasmith_core::{Record, RecordBatch, TemplateDocument};
use datasmith_encode::{
    ArrayStyle, EncodeOptions, EncodingError, OutputFormat, encode, encode_with,
};

fn record(value: Value) -> Record {
    value.as_object().expect("record literal").clone()
}

fn template(name: &str) -> TemplateDocument {
    TemplateDocument::from_content(name, r#"{"type": "object"}"#).expect("template parses")
}

#[test]
fn empty_batch_outputs_are_degenerate_but_defined() {
    let batch: RecordBatch = Vec::new();
    let template = template("Healthcare Patients");

    let csv = encode(&batch, OutputFormat::Csv, &template).unwrap();
    assert_eq!(csv.body, "");

    let json = encode(&batch, OutputFormat::Json, &template).unwrap();
    assert_eq!(json.body, "[]");

    let sql = encode(&batch, OutputFormat::Sql, &template).unwrap();
    assert_eq!(sql.body, "");
}

#[test]
fn payload_metadata_is_derived_from_format_and_template() {
    let batch: RecordBatch = Vec::new();
    let template = template("Healthcare Patients");

    let payload = encode(&batch, OutputFormat::Csv, &template).unwrap();
    assert_eq!(payload.content_type, "text/csv");
    assert_eq!(payload.filename, "synthetic-data-healthcare-patients.csv");

    let payload = encode(&batch, OutputFormat::Json, &template).unwrap();
    assert_eq!(payload.content_type, "application/json");
    assert_eq!(payload.filename, "synthetic-data-healthcare-patients.json");

    let payload = encode(&batch, OutputFormat::Sql, &template).unwrap();
    assert_eq!(payload.content_type, "application/sql");
    assert_eq!(payload.filename, "synthetic-data-healthcare-patients.sql");
}

#[test]
fn header_swap_applies_without_moving_values() {
    let batch = vec![record(json!({
        "a": "first",
        "conditions": ["Asthma"],
        "lastVisit": "2026-08-01T00:00:00.000Z",
        "b": 2
    }))];
    let template = template("Healthcare Patients");

    let payload = encode(&batch, OutputFormat::Csv, &template).unwrap();
    let mut lines = payload.body.lines();
    assert_eq!(lines.next(), Some("a,lastVisit,conditions,b"));
    // Values follow the reordered header by key lookup, so each cell still
    // belongs to its own column.
    assert_eq!(
        lines.next(),
        Some(r#"first,2026-08-01T00:00:00.000Z,"[""Asthma""]",2"#)
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn header_swap_applies_in_either_declaration_order() {
    let batch = vec![record(json!({
        "lastVisit": "2026-08-01T00:00:00.000Z",
        "conditions": ["Asthma"]
    }))];
    let template = template("t");

    let payload = encode(&batch, OutputFormat::Csv, &template).unwrap();
    assert!(payload.body.starts_with("conditions,lastVisit\n"));
}

#[test]
fn csv_has_no_trailing_newline() {
    let batch = vec![
        record(json!({"name": "Ada"})),
        record(json!({"name": "Grace"})),
    ];
    let payload = encode(&batch, OutputFormat::Csv, &template("t")).unwrap();
    assert_eq!(payload.body, "name\nAda\nGrace");
}

#[test]
fn csv_round_trip_recovers_nested_json_exactly() {
    let conditions = json!(["High Cholesterol", "Migraine"]);
    let batch = vec![record(json!({
        "patientId": "abc",
        "history": conditions.clone()
    }))];
    let payload = encode(&batch, OutputFormat::Csv, &template("t")).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(payload.body.as_bytes());
    let row = reader.records().next().expect("one row").expect("parses");
    let recovered: Value = serde_json::from_str(&row[1]).expect("cell is JSON");
    assert_eq!(recovered, conditions);
}

#[test]
fn joined_array_style_flattens_scalar_arrays() {
    let batch = vec![record(json!({"tags": ["a", "b"], "n": 1}))];
    let options = EncodeOptions {
        arrays: ArrayStyle::Joined,
    };
    let payload = encode_with(&batch, OutputFormat::Csv, &template("t"), options).unwrap();
    assert_eq!(payload.body, "tags,n\na, b,1");
}

#[test]
fn sql_statements_align_columns_and_values() {
    let batch = vec![record(json!({
        "name": "O'Brien",
        "age": 41,
        "active": true,
        "conditions": ["Asthma", "Migraine"]
    }))];
    let template = template("E-commerce Orders");

    let payload = encode(&batch, OutputFormat::Sql, &template).unwrap();
    assert_eq!(
        payload.body,
        r#"INSERT INTO "e-commerce_orders" (name, age, active, conditions) VALUES ('O''Brien', 41, true, '["Asthma","Migraine"]');"#
    );
}

#[test]
fn sql_emits_one_statement_per_record() {
    let batch = vec![record(json!({"n": 1})), record(json!({"n": 2}))];
    let payload = encode(&batch, OutputFormat::Sql, &template("Rows")).unwrap();
    let lines: Vec<&str> = payload.body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("INSERT INTO \"rows\" (n) VALUES (1);"));
    assert!(lines[1].contains("VALUES (2);"));
}

#[test]
fn json_keeps_nested_values_native() {
    let batch = vec![record(json!({
        "items": [{"productId": "SKU-1000", "quantity": 2}],
        "total": 52.5
    }))];
    let payload = encode(&batch, OutputFormat::Json, &template("t")).unwrap();
    let parsed: Value = serde_json::from_str(&payload.body).unwrap();
    assert_eq!(
        parsed,
        json!([{"items": [{"productId": "SKU-1000", "quantity": 2}], "total": 52.5}])
    );
}

#[test]
fn heterogeneous_batches_are_rejected() {
    let batch = vec![
        record(json!({"a": 1, "b": 2})),
        record(json!({"a": 1, "c": 3})),
    ];
    let err = encode(&batch, OutputFormat::Csv, &template("t")).unwrap_err();
    assert!(matches!(err, EncodingError::HeterogeneousBatch(_)));

    let err = encode(&batch, OutputFormat::Sql, &template("t")).unwrap_err();
    assert!(matches!(err, EncodingError::HeterogeneousBatch(_)));
}
