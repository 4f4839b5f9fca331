use std::fs;
use std::path::Path;

use geoquiz_model::{CountryState, StateStyle};
use geoquiz_schema::{
    SchemaError, StyleSchema, build_schema, country_schema_to_string, load_country_schema,
    parse_regions, write_country_schema,
};

const SCHEMA: &str = "\
country,names,colour,order,disputed,regions
Italy,Italy;Italian Republic,C3,1,false,0
San Marino,San Marino;Republic of San Marino,C1,2,false,1
Vatican,Vatican;Holy See,C1,3,no,2
Kashmir,,C2,4,true,
";

const REGIONS: &str = "\
SOVEREIGNT,NAME,NAME_LONG,AREA,MAPCOLOR7
Italy,Italy,Italian Republic,30.0,6
San Marino,San Marino,Republic of San Marino,0.006,1
Vatican,Vatican,Vatican City,0.0001,1
";

fn style_json() -> String {
    let states = CountryState::ALL
        .iter()
        .map(|s| format!(r#""{s}": {{"outline": "black", "fill": "CCANDIDATE"}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r##"{{"country_style": {{{states}}}, "colour_codes": {{"CCANDIDATE": {{"C1": "#F5A573", "C3": "#F2EC7E"}}}}}}"##
    )
}

#[test]
fn loads_country_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("country_schema.csv");
    fs::write(&path, SCHEMA).unwrap();

    let records = load_country_schema(&path).unwrap();
    assert_eq!(records.len(), 4);

    let vatican = &records[2].schema;
    assert!(vatican.accepts("Holy See"));
    assert!(vatican.accepts("Vatican"));
    assert!(!vatican.disputed);
    assert_eq!(records[2].regions, vec![2]);

    let kashmir = &records[3];
    assert!(kashmir.schema.disputed);
    assert_eq!(kashmir.schema.names.len(), 1);
    assert!(kashmir.regions.is_empty());
}

#[test]
fn written_schema_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.csv");
    let target = dir.path().join("out.csv");
    fs::write(&source, SCHEMA).unwrap();

    let records = load_country_schema(&source).unwrap();
    write_country_schema(&target, &records).unwrap();
    assert_eq!(load_country_schema(&target).unwrap(), records);
}

#[test]
fn missing_file_reports_path() {
    let err = load_country_schema(Path::new("/nonexistent/country_schema.csv")).unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
    assert!(err.to_string().contains("country_schema.csv"));
}

#[test]
fn duplicate_country_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.csv");
    fs::write(
        &path,
        "country,names,colour,order,disputed\nChad,,C1,1,false\nChad,,C2,2,false\n",
    )
    .unwrap();

    let err = load_country_schema(&path).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateCountry { ref country, line: 3, .. } if country == "Chad"));
}

#[test]
fn bad_order_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "country,order\nChad,first\n").unwrap();

    let err = load_country_schema(&path).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidField { field: "order", .. }));
}

#[test]
fn loads_style_schema_and_resolves_palette() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style_schema.json");
    fs::write(&path, style_json()).unwrap();

    let schema = StyleSchema::load(&path).unwrap();
    let italy = schema.for_palette("C3").unwrap();
    assert_eq!(
        italy.for_state(CountryState::Verified),
        StateStyle::new("black", "#F2EC7E")
    );
    assert!(italy.missing_states().is_empty());
}

#[test]
fn style_schema_with_unknown_state_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style_schema.json");
    fs::write(
        &path,
        r#"{"country_style": {"sunken": {"outline": "black", "fill": "blue"}}}"#,
    )
    .unwrap();

    let err = StyleSchema::load(&path).unwrap_err();
    assert!(matches!(err, SchemaError::UnknownState { ref state } if state == "sunken"));
}

#[test]
fn malformed_style_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style_schema.json");
    fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        StyleSchema::load(&path).unwrap_err(),
        SchemaError::Json { .. }
    ));
}

#[test]
fn builder_output_snapshot() {
    let regions = parse_regions(REGIONS.as_bytes(), Path::new("regions.csv")).unwrap();
    let built = build_schema(regions);
    assert!(built.hidden.is_empty());

    let csv = country_schema_to_string(&built.records).unwrap();
    insta::assert_snapshot!(csv, @r"
    country,names,colour,order,disputed,regions
    Italy,Italian Republic;Italy,C6,1,false,0
    San Marino,Republic of San Marino;San Marino,C1,2,false,1
    Vatican,Vatican;Vatican City,C1,3,false,2
    ");
}

#[test]
fn region_with_bad_area_is_rejected() {
    let err = parse_regions(
        b"SOVEREIGNT,NAME,NAME_LONG,AREA,MAPCOLOR7\nChad,Chad,Chad,lots,2\n",
        Path::new("regions.csv"),
    )
    .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidField { field: "AREA", line: 2, .. }));
}
