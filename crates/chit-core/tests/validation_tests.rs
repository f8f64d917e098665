//! Integration tests for code validation and normalization.

use chit_core::CodeSchema;

#[test]
fn test_accepts_canonical_code() {
    let schema = CodeSchema::default();
    assert!(schema.validate("82EK-76V6-417V"));
    assert!(schema.validate("C9B3-1XUG-97G5"));
}

#[test]
fn test_accepts_sloppy_input() {
    let schema = CodeSchema::default();

    assert!(schema.validate("82ek-76v6-417v"), "Lowercase should validate");
    assert!(
        schema.validate("82EK-76V6-4I7V"),
        "'I' should be read as '1'"
    );
    assert!(
        schema.validate("82ek-76v6-4i7v"),
        "Lowercase confusables should validate"
    );
    assert!(
        schema.validate("82EK76V6417V"),
        "Separators are optional on input"
    );
    assert!(
        schema.validate(" 82ek 76v6 417v "),
        "Spacing is stripped on input"
    );
}

#[test]
fn test_rejects_truncated_codes() {
    let schema = CodeSchema::default();
    assert!(!schema.validate("82EK-76V6"));
    assert!(!schema.validate("82EK"));
    assert!(!schema.validate(""));
    assert!(!schema.validate("82EK-76V6-417"));
    assert!(!schema.validate("82EK-76V6-417V-82EK"));
}

#[test]
fn test_rejects_single_character_corruption() {
    let schema = CodeSchema::default();
    assert!(!schema.validate("92EK-76V6-417V"));
    assert!(!schema.validate("82EK-76V6-417W"));
    assert!(!schema.validate("82EK-76W6-417V"));
}

#[test]
fn test_rejects_swapped_parts() {
    // Each part's checksum is seeded with its position, so reordering
    // otherwise-valid parts breaks the code.
    let schema = CodeSchema::default();
    assert!(!schema.validate("76V6-82EK-417V"));
    assert!(!schema.validate("417V-76V6-82EK"));

    let two = CodeSchema::new("", '-', 2, 4).unwrap();
    assert!(two.validate("82EK-76V6"));
    assert!(!two.validate("76V6-82EK"));
}

#[test]
fn test_rejects_garbage() {
    let schema = CodeSchema::default();
    assert!(!schema.validate("hello world"));
    assert!(!schema.validate("----"));
    assert!(!schema.validate("!!!!-!!!!-!!!!"));
}

#[test]
fn test_normalize_canonicalizes_display_form() {
    let schema = CodeSchema::default();
    assert_eq!(schema.normalize("I9oD-V467-8D52"), "190D-V467-8D52");
    assert_eq!(schema.normalize("82ek76v6417v"), "82EK-76V6-417V");
    assert_eq!(schema.normalize(" 82ek 76v6 417v "), "82EK-76V6-417V");
}

#[test]
fn test_prefixed_codes() {
    let schema = CodeSchema::new("GIFT", '-', 3, 4).unwrap();
    let code = schema.generate_from_seed(b"123456890").unwrap();
    assert_eq!(code, "GIFT-82EK-76V6-417V");

    assert!(schema.validate(&code));
    assert!(schema.validate("gift-82ek-76v6-417v"));
    assert!(schema.validate("82EK-76V6-417V"), "Prefix may be omitted");
    assert!(!schema.validate("WXYT-82EK-76V6-417V"));
    assert!(!schema.validate("GIFT-76V6-82EK-417V"));

    assert_eq!(
        schema.normalize("gift-82ek-76v6-417v"),
        "GIFT-82EK-76V6-417V"
    );
}

#[test]
fn test_parse_round_trip() {
    let schema = CodeSchema::default();
    for i in 0..100u32 {
        let generated = schema.generate_from_seed(i.to_string().as_bytes()).unwrap();
        let sloppy = generated.to_lowercase().replace('-', " ");
        let parsed = schema.parse(&sloppy).expect("sloppy re-entry should parse");
        assert_eq!(parsed.as_str(), generated);
    }
}
