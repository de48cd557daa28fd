use crate::ast::Literal;
use crate::ast::LiteralKind;

#[test]
fn from_name_classifies_identifiers() {
    assert_eq!(Literal::from_name("true").kind, LiteralKind::Boolean);
    assert_eq!(Literal::from_name("false").kind, LiteralKind::Boolean);
    assert_eq!(Literal::from_name("null").kind, LiteralKind::Null);
    assert_eq!(Literal::from_name("GREEN").kind, LiteralKind::Enum);
    // Case matters.
    assert_eq!(Literal::from_name("True").kind, LiteralKind::Enum);
    assert_eq!(Literal::from_name("NULL").kind, LiteralKind::Enum);
}

#[test]
fn accessors_check_kind() {
    let int = Literal::new(LiteralKind::Int, "12");
    assert_eq!(int.as_i64(), Some(12));
    assert_eq!(int.as_f64(), Some(12.0));
    assert_eq!(int.as_bool(), None);

    // A string that looks like a number is still a string.
    let string = Literal::new(LiteralKind::String, "12");
    assert_eq!(string.as_i64(), None);
    assert_eq!(string.as_f64(), None);

    let float = Literal::new(LiteralKind::Float, "2.5");
    assert_eq!(float.as_i64(), None);
    assert_eq!(float.as_f64(), Some(2.5));

    assert_eq!(Literal::from_name("true").as_bool(), Some(true));
    assert!(Literal::from_name("null").is_null());
    assert!(!Literal::from_name("nothing").is_null());
}

#[test]
fn display_quotes_only_strings() {
    assert_eq!(Literal::new(LiteralKind::String, "hi \"x\"").to_string(), r#""hi \"x\"""#);
    assert_eq!(Literal::new(LiteralKind::Float, "1e3").to_string(), "1e3");
    assert_eq!(Literal::from_name("null").to_string(), "null");
}
