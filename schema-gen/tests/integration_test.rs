use mcs_heat_loss::input::Input;
use schemars::schema_for;
use serde_json::Value;

#[test]
fn test_generate_json_schema() {
    let schema = schema_for!(Input);
    assert!(serde_json::to_string_pretty(&schema).is_ok());
}

#[test]
fn test_schema_describes_rooms_and_walls() {
    let schema: Value = serde_json::to_value(schema_for!(Input)).unwrap();
    let required = schema["required"].as_array().unwrap();
    for field in ["building_name", "postcode_area", "rooms"] {
        assert!(required.iter().any(|value| value == field));
    }
    assert!(schema["definitions"]["WallInput"]["properties"]["boundary"].is_object());
}
