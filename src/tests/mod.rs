use super::*;

// Shared test helpers
const PERSON_JSON: &str =
    r#"{"name": "John", "age": 30, "array": [1,2,3], "obj": {"nested": "value"}}"#;
const PERSON_XML: &str = "<root><name>John</name><age>30</age></root>";

fn view(s: Option<Seeker<'_>>) -> Option<&str> {
    s.map(|s| s.as_str())
}

mod json_props;
mod positioning;
