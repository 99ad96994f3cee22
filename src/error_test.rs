use super::*;

#[test]
fn missing_attribute_names_element_and_attribute() {
    let err = EnhanceError::MissingAttribute {
        id: "visual-hash-canvas".to_owned(),
        attr: "data-image".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "element #visual-hash-canvas is missing attribute `data-image`"
    );
}

#[test]
fn wrong_element_type_names_expected_tag() {
    let err = EnhanceError::WrongElementType {
        id: "name".to_owned(),
        expected: "input",
    };
    assert_eq!(err.to_string(), "element #name is not a <input>");
}

#[test]
fn status_error_formats_endpoint_and_code() {
    let err = EnhanceError::Status {
        endpoint: "/random-name".to_owned(),
        status: 503,
    };
    assert_eq!(err.to_string(), "/random-name answered with status 503");
}

#[test]
fn serde_errors_become_config_errors() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = EnhanceError::from(parse);
    assert!(matches!(err, EnhanceError::Config(_)));
    assert!(err.to_string().starts_with("invalid config:"));
}
