use super::*;
use crate::format::format_type;

fn roundtrip(input: &str) -> String {
    let interner = TypeInterner::new();
    let type_id = parse_type(&interner, input).expect("type should parse");
    format_type(&interner, type_id)
}

#[test]
fn test_parse_intrinsics_and_aliases() {
    let interner = TypeInterner::new();
    assert_eq!(parse_type(&interner, "int").unwrap(), TypeId::INT);
    assert_eq!(parse_type(&interner, "integer").unwrap(), TypeId::INT);
    assert_eq!(parse_type(&interner, "Boolean").unwrap(), TypeId::BOOL);
    assert_eq!(parse_type(&interner, "null").unwrap(), TypeId::NULL);
}

#[test]
fn test_parse_class_and_nullable_forms() {
    assert_eq!(roundtrip("\\App\\Entity\\User"), "App\\Entity\\User");
    assert_eq!(roundtrip("?App\\A"), "App\\A|null");
    assert_eq!(roundtrip("null|App\\A"), "App\\A|null");
}

#[test]
fn test_parse_question_mark_and_union_agree() {
    let interner = TypeInterner::new();
    let a = parse_type(&interner, "?App\\A").unwrap();
    let b = parse_type(&interner, "App\\A|null").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parse_collection_intersection() {
    assert_eq!(
        roundtrip("\\Doctrine\\Common\\Collections\\Collection&iterable<\\App\\A>"),
        "Doctrine\\Common\\Collections\\Collection&iterable<App\\A>"
    );
}

#[test]
fn test_parse_iterable_arities() {
    assert_eq!(roundtrip("iterable"), "iterable");
    assert_eq!(roundtrip("iterable<App\\A>"), "iterable<App\\A>");
    assert_eq!(roundtrip("iterable<int, App\\A>"), "iterable<int, App\\A>");
    assert_eq!(roundtrip("list<App\\A>"), "array<int, App\\A>");
}

#[test]
fn test_parse_array_suffix() {
    assert_eq!(roundtrip("App\\A[]"), "array<App\\A>");
    assert_eq!(roundtrip("App\\A[][]"), "array<array<App\\A>>");
}

#[test]
fn test_parse_parenthesized_group() {
    assert_eq!(
        roundtrip("(Doctrine\\Common\\Collections\\Collection&iterable<App\\A>)|null"),
        "(Doctrine\\Common\\Collections\\Collection&iterable<App\\A>)|null"
    );
}

#[test]
fn test_parse_generic_class() {
    assert_eq!(
        roundtrip("Doctrine\\Common\\Collections\\Collection<int, App\\A>"),
        "Doctrine\\Common\\Collections\\Collection<int, App\\A>"
    );
}

#[test]
fn test_parse_errors() {
    let interner = TypeInterner::new();
    assert!(matches!(
        parse_type(&interner, ""),
        Err(TypeParseError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        parse_type(&interner, "App\\A|"),
        Err(TypeParseError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        parse_type(&interner, "App\\A $x"),
        Err(TypeParseError::UnexpectedToken { offset: 6, .. })
    ));
    assert!(matches!(
        parse_type(&interner, "iterable<int, string"),
        Err(TypeParseError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        parse_type(&interner, "App\\A B"),
        Err(TypeParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_parse_invalid_arguments() {
    let interner = TypeInterner::new();
    assert_eq!(
        parse_type(&interner, "int<string>"),
        Err(TypeParseError::InvalidArguments {
            name: "int".to_string(),
            count: 1
        })
    );
    assert!(matches!(
        parse_type(&interner, "list<int, string>"),
        Err(TypeParseError::InvalidArguments { count: 2, .. })
    ));
    assert!(matches!(
        parse_type(&interner, "iterable<int, string, bool>"),
        Err(TypeParseError::InvalidArguments { count: 3, .. })
    ));
}

#[test]
fn test_parse_too_deep() {
    let interner = TypeInterner::new();
    let depth = MAX_TYPE_PARSE_DEPTH as usize + 1;
    let input = format!("{}int{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse_type(&interner, &input),
        Err(TypeParseError::TooDeep {
            limit: MAX_TYPE_PARSE_DEPTH
        })
    );
}

#[test]
fn test_parse_error_messages() {
    let interner = TypeInterner::new();
    let err = parse_type(&interner, "App\\A $x").unwrap_err();
    assert_eq!(err.to_string(), "unexpected `$` at offset 6 in `App\\A $x`");
}
