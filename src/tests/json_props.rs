use super::*;

#[test]
fn json_property_kinds() {
    let s = Seeker::new(PERSON_JSON);
    assert_eq!(view(s.json_property("name")), Some("John"));
    assert_eq!(view(s.json_property("age")), Some("30"));
    assert_eq!(view(s.json_property("array")), Some("[1,2,3]"));
    assert_eq!(view(s.json_property("obj")), Some(r#"{"nested": "value"}"#));
    assert_eq!(view(s.json_property("nested")), Some("value"));
    // receiver is untouched
    assert_eq!(s, PERSON_JSON);
}

#[test]
fn json_property_missing_or_malformed() {
    let s = Seeker::new(r#"{"a" 1, "b": [1, 2, "c":}"#);
    assert!(s.json_property("zzz").is_none());
    // no colon after the key
    assert!(s.json_property("a").is_none());
    // unterminated array
    assert!(s.json_property("b").is_none());
}

#[test]
fn json_property_scalars() {
    let s = Seeker::new("{\"t\":true,\"n\" :\tnull}\n");
    assert_eq!(view(s.json_property("t")), Some("true"));
    assert_eq!(view(s.json_property("n")), Some("null"));
}

#[test]
fn json_property_unterminated_scalar_fails() {
    // a scalar needs a terminator from `, \r\n]}`
    let s = Seeker::new(r#""k": 12"#);
    assert!(s.json_property("k").is_none());
}

#[test]
fn json_property_empty_string_is_found() {
    let s = Seeker::new(r#"{"k": ""}"#);
    let got = s.json_property("k").unwrap();
    assert!(got.is_empty());
    assert_eq!(got.offset(), 7);
}

#[test]
fn json_property_escaped_quote_ends_early() {
    let s = Seeker::new(r#"{"q": "say \"hi\""}"#);
    assert_eq!(view(s.json_property("q")), Some("say \\"));
}

#[test]
fn json_property_offsets_point_into_source() {
    let s = Seeker::new(PERSON_JSON);
    let age = s.json_property("age").unwrap();
    assert_eq!(&PERSON_JSON[age.offset()..age.end_offset()], "30");
}

#[test]
fn json_property_chained_on_derived_cursor() {
    let doc = r#"{"user": {"name": "Ann", "tags": ["a", "b"]}, "name": "root"}"#;
    let s = Seeker::new(doc);
    let user = s.json_property("user").unwrap();
    assert_eq!(view(user.json_property("name")), Some("Ann"));
    assert_eq!(view(user.json_property("tags")), Some(r#"["a", "b"]"#));
}
