//! Integration tests for the section/property model through the public API.

use inidoc::{Document, FromValue, NameComparison, Property, Section, ToValue, ValueError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Loud = 2,
}

inidoc::value_enum!(Verbosity {
    Quiet = 0,
    Normal = 1,
    Loud = 2,
});

#[test]
fn test_set_then_get_returns_stored_value() {
    let mut doc = Document::new();
    let triples = [
        ("", "name", "value"),
        ("s", "empty", ""),
        ("s", "spaces", "  padded  "),
        ("t", "unicode", "héllo wörld"),
        ("a [b] c", "key", "x=y"),
    ];
    for (section, name, value) in triples {
        doc.set(section, name, value).unwrap();
    }
    for (section, name, value) in triples {
        assert_eq!(doc.value(section, name), Some(value));
        assert_eq!(doc.property(section, name).unwrap().unwrap().value(), value);
    }

    let before: Vec<String> = doc.section("s").unwrap().iter().map(|p| p.name().to_string()).collect();
    doc.set("s", "empty", "now set").unwrap();
    let after: Vec<&str> = doc.section("s").unwrap().iter().map(Property::name).collect();
    assert_eq!(before, after);
    assert_eq!(doc.value("s", "empty"), Some("now set"));
}

#[test]
fn test_int_range_bounds_are_inclusive() {
    let mut doc = Document::new();
    for (n, min, max) in [(5, 5, 10), (10, 5, 10), (i32::MIN, i32::MIN, 0), (i32::MAX, 0, i32::MAX)] {
        doc.set("r", "n", n).unwrap();
        assert_eq!(doc.try_get_int("r", "n", min, max).unwrap(), Some(n));
        assert_eq!(doc.get_int("r", "n", min, max, -99).unwrap(), n);
    }

    doc.set("r", "n", 4).unwrap();
    assert_eq!(doc.try_get_int("r", "n", 5, 10).unwrap(), None);
    doc.set("r", "n", 11).unwrap();
    assert_eq!(doc.try_get_int("r", "n", 5, 10).unwrap(), None);
    assert_eq!(doc.get_int("r", "n", 5, 10, -99).unwrap(), -99);

    doc.set("r", "n", "2147483648").unwrap();
    assert_eq!(doc.get_int("r", "n", i32::MIN, i32::MAX, 7).unwrap(), 7);
}

#[test]
fn test_remove_section_changes_count_by_at_most_one() {
    let mut doc: Document = "[a]\nx=1\n[b]\ny=2".parse().unwrap();
    assert!(doc.remove_section("a"));
    assert_eq!(doc.len(), 1);
    assert!(!doc.remove_section("a"));
    assert_eq!(doc.len(), 1);

    assert!(doc.remove("b", "y").unwrap());
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.section("b").unwrap().len(), 0);
}

#[test]
fn test_independent_comparison_policies() {
    let mut doc =
        Document::with_comparison(NameComparison::CaseSensitive, NameComparison::IgnoreCase);
    doc.set("S", "k", "upper section").unwrap();
    doc.set("s", "K", "lower section").unwrap();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.value("S", "K"), Some("upper section"));
    assert_eq!(doc.value("s", "k"), Some("lower section"));

    doc.set("S", "K", "replaced").unwrap();
    assert_eq!(doc.section("S").unwrap().len(), 1);
    assert_eq!(doc.value("S", "k"), Some("replaced"));
    assert_eq!(doc.section("S").unwrap().properties()[0].name(), "k");
}

#[test]
fn test_enum_values() {
    let mut doc = Document::new();
    doc.set("log", "verbosity", Verbosity::Loud).unwrap();
    assert_eq!(doc.value("log", "verbosity"), Some("Loud"));
    assert_eq!(
        doc.get_or("log", "verbosity", Verbosity::Normal).unwrap(),
        Verbosity::Loud
    );

    doc.set("log", "verbosity", 0).unwrap();
    assert_eq!(
        doc.try_get::<Verbosity>("log", "verbosity").unwrap(),
        Some(Verbosity::Quiet)
    );

    doc.set("log", "verbosity", 1234).unwrap();
    assert_eq!(doc.try_get::<Verbosity>("log", "verbosity").unwrap(), None);
    assert_eq!(
        doc.get_or("log", "verbosity", Verbosity::Normal).unwrap(),
        Verbosity::Normal
    );
    assert_eq!(Verbosity::from_value("loud"), Some(Verbosity::Loud));
    assert_eq!(Verbosity::Quiet.to_value(), "Quiet");
}

#[test]
fn test_typed_values() {
    let mut section = Section::new("typed", NameComparison::CaseSensitive);
    section.set("flag", true).unwrap();
    section.set("ratio", 0.25).unwrap();
    section.set("big", u64::MAX).unwrap();
    section.set("letter", 'z').unwrap();
    section.set("owned", String::from("text")).unwrap();

    assert_eq!(section.get_or("flag", false).unwrap(), true);
    assert_eq!(section.get_or("ratio", 0.0).unwrap(), 0.25);
    assert_eq!(section.get_or("big", 0u64).unwrap(), u64::MAX);
    assert_eq!(section.get_or("letter", 'a').unwrap(), 'z');
    assert_eq!(section.get_or("owned", String::new()).unwrap(), "text");
    assert_eq!(section.get_or("big", 0i32).unwrap(), 0);
}

#[test]
fn test_property_as_int_errors() {
    let prop = Property::new("n", "12x").unwrap();
    assert_eq!(
        prop.as_int(),
        Err(ValueError::InvalidFormat {
            value: "12x".to_string()
        })
    );
    let prop = Property::new("n", "-2147483649").unwrap();
    assert!(matches!(prop.as_int(), Err(ValueError::OutOfRange { .. })));
}
