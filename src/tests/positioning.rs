use super::*;

#[test]
fn basic_view_queries() {
    let s = Seeker::new("Hello, World!");
    assert_eq!(s.len(), 13);
    assert!(!s.is_empty());
    assert!(s.is_not_empty());
    assert_eq!(s.to_string(), "Hello, World!");
}

#[test]
fn expect_consumes_only_on_match() {
    let mut s = Seeker::new("Hello, World!");
    assert!(s.expect("Hello"));
    assert_eq!(s, ", World!");
    assert!(!s.expect("Goodbye"));
    assert_eq!(s, ", World!");
    assert_eq!(s.offset(), 5);
}

#[test]
fn expect_agrees_with_starts_with() {
    let cases = ["", "H", "Hello", "Hello, World!", "Hello, World!!", "ello", "h"];
    for lit in cases {
        let mut s = Seeker::new("Hello, World!");
        let before = s.starts_with(lit);
        let consumed = s.expect(lit);
        assert_eq!(before, consumed, "lit={:?}", lit);
        let want = if consumed { lit.len() } else { 0 };
        assert_eq!(s.offset(), want, "lit={:?}", lit);
    }
}

#[test]
fn starts_with_never_moves() {
    let s = Seeker::new("Hello, World!");
    for _ in 0..3 {
        assert!(s.starts_with("Hello"));
        assert!(!s.starts_with("World"));
    }
    assert_eq!(s, "Hello, World!");
    assert_eq!(s.offset(), 0);
}

#[test]
fn seek_to_modes() {
    let mut s = Seeker::new("Hello, World!");
    assert!(s.seek_to(",", MoveMode::After));
    assert_eq!(s, " World!");

    let mut s2 = Seeker::new("Hello, World!");
    assert!(s2.seek_to("World", MoveMode::Before));
    assert_eq!(s2, "World!");

    let mut s3 = Seeker::new("Hello, World!");
    assert!(s3.seek_to("World", MoveMode::Keep));
    assert_eq!(s3, "Hello, World!");
}

#[test]
fn seek_to_missing_leaves_view() {
    let mut s = Seeker::new("Hello, World!");
    assert!(!s.seek_to("xyz", MoveMode::After));
    assert_eq!(s, "Hello, World!");
}

#[test]
fn skip_whitespace_runs() {
    let mut s = Seeker::new("   \t\n  Hello");
    s.skip_whitespace();
    assert_eq!(s, "Hello");
    s.skip_whitespace();
    assert_eq!(s, "Hello");
    let mut blank = Seeker::new(" \r\n");
    blank.skip_whitespace();
    assert!(blank.is_empty());
}

#[test]
fn skip_clamps_and_respects_code_points() {
    let mut s = Seeker::new("héllo");
    s.skip(Len(2)); // would split 'é'
    assert_eq!(s, "éllo");
    s.skip(Len(100));
    assert!(s.is_empty());
    assert_eq!(s.offset(), "héllo".len());
}

#[test]
fn copies_are_independent() {
    let original = Seeker::new("a,b,c");
    let mut copy = original;
    assert!(copy.seek_to(",", MoveMode::After));
    assert_eq!(copy, "b,c");
    assert_eq!(original, "a,b,c");
}

#[test]
fn sentinel_is_safe_to_use() {
    let mut s = Seeker::empty();
    assert!(s.is_empty());
    assert_eq!(s.offset(), 0);
    assert!(!s.expect("x"));
    assert!(s.expect(""));
    assert!(!s.seek_to("x", MoveMode::After));
    assert!(s.extract_until("x", MoveMode::After).is_none());
    assert_eq!(s.take_unsigned(), None);
    assert!(s.json_property("a").is_none());
    assert_eq!(Seeker::default().as_str(), "");
}
