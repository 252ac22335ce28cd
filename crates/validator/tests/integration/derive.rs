//! Shapes accepted by `#[derive(Record)]` and the tables it produces.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use fieldrules::prelude::*;
use fieldrules::{FieldType, FieldValue, validate};
use pretty_assertions::assert_eq;

// ============================================================================
// DESCRIPTOR TABLE
// ============================================================================

#[allow(dead_code)]
#[derive(Record)]
struct Account {
    #[validate("min:3 max:16")]
    pub login: String,
    pub age: u8,
    #[validate("min:8")]
    password: String,
}

#[test]
fn descriptors_follow_declaration_order() {
    let names: Vec<_> = Account::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, ["login", "age", "password"]);
}

#[test]
fn descriptors_capture_type_visibility_and_rules() {
    let [login, age, password] = Account::FIELDS else {
        panic!("expected three fields");
    };

    assert_eq!(login.type_name, "String");
    assert_eq!(login.field_type, FieldType::String);
    assert!(login.exported);
    assert_eq!(login.rules, "min:3 max:16");

    assert_eq!(age.field_type, FieldType::Other);
    assert_eq!(age.rules, "");

    assert!(!password.exported);
    assert_eq!(password.field_type, FieldType::String);
}

#[test]
fn private_fields_are_never_exposed() {
    let account = Account {
        login: "root".into(),
        age: 30,
        password: "secret".into(),
    };

    assert_eq!(account.field_value(0), FieldValue::Str("root"));
    assert_eq!(account.field_value(1), FieldValue::Opaque);
    assert_eq!(account.field_value(2), FieldValue::Opaque);
    assert_eq!(account.field_value(99), FieldValue::Opaque);
}

#[allow(dead_code)]
#[derive(Record)]
struct Keyworded<'a> {
    #[validate("min:3")]
    pub r#type: String,
    pub r#ref: &'a str,
    pub pairs: Vec<(String, u8)>,
}

#[test]
fn raw_identifiers_are_reported_without_prefix() {
    assert_eq!(Keyworded::FIELDS[0].name, "type");
    assert_eq!(Keyworded::FIELDS[1].name, "ref");

    let record = Keyworded {
        r#type: "a".into(),
        r#ref: "",
        pairs: vec![],
    };
    assert_eq!(
        validate(&record).unwrap_err().to_string(),
        "type: invalid validator syntax"
    );
}

#[test]
fn type_names_read_like_source() {
    let names: Vec<_> = Keyworded::FIELDS.iter().map(|f| f.type_name).collect();
    assert_eq!(names, ["String", "&'a str", "Vec<(String, u8)>"]);
}

// ============================================================================
// ATTRIBUTE FORMS
// ============================================================================

#[derive(Record)]
struct Forms {
    #[validate = "len:2"]
    pub name_value: String,
    #[validate("min:1")]
    #[validate("max:3")]
    pub repeated: String,
}

#[test]
fn name_value_and_repeated_attributes() {
    assert_eq!(Forms::FIELDS[0].rules, "len:2");
    assert_eq!(Forms::FIELDS[1].rules, "min:1 max:3");

    let forms = Forms {
        name_value: "ok".into(),
        repeated: "four".into(),
    };
    let err = validate(&forms).unwrap_err();
    assert_eq!(err.to_string(), "repeated: invalid validator syntax");
}

// ============================================================================
// STRING-LIKE FIELD TYPES
// ============================================================================

#[derive(Record)]
struct Borrowed<'a> {
    #[validate("len:3")]
    pub slice: &'a str,
    #[validate("len:3")]
    pub cow: Cow<'a, str>,
    #[validate("len:3")]
    pub boxed: Box<str>,
    #[validate("len:3")]
    pub shared: Arc<str>,
    #[validate("len:3")]
    pub local: Rc<str>,
}

#[test]
fn string_like_types_are_measured() {
    let ok = Borrowed {
        slice: "abc",
        cow: Cow::Borrowed("abc"),
        boxed: "abc".into(),
        shared: Arc::from("abc"),
        local: Rc::from("abc"),
    };
    assert!(validate(&ok).is_ok());

    let bad = Borrowed {
        slice: "ab",
        cow: Cow::Owned("abcd".to_owned()),
        boxed: "".into(),
        shared: Arc::from("abc"),
        local: Rc::from("x"),
    };
    let err = validate(&bad).unwrap_err();
    let fields: Vec<_> = err
        .violations()
        .unwrap()
        .iter()
        .filter_map(|e| e.field())
        .collect();
    assert_eq!(fields, ["slice", "cow", "boxed", "local"]);
}

// ============================================================================
// TUPLE, UNIT AND GENERIC STRUCTS
// ============================================================================

#[derive(Record)]
struct Pair(#[validate("len:2")] pub String, #[validate("min:1")] pub String);

#[derive(Record)]
struct Marker;

#[allow(dead_code)]
#[derive(Record)]
struct Wrapper<T: Clone> {
    #[validate("max:4")]
    pub label: String,
    #[validate("min:x")]
    pub inner: T,
}

#[test]
fn tuple_fields_are_named_by_index() {
    let err = validate(&Pair("abc".into(), String::new())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "0: invalid validator syntax\n1: invalid validator syntax"
    );
}

#[test]
fn unit_struct_has_no_fields() {
    assert!(Marker::FIELDS.is_empty());
    assert_eq!(<Marker as Record>::KIND, Kind::Struct);
    assert!(validate(&Marker).is_ok());
}

#[test]
fn generic_structs_are_supported() {
    let wrapper = Wrapper {
        label: "label".into(),
        inner: 7_u32,
    };
    let err = validate(&wrapper).unwrap_err();
    let errors = err.violations().unwrap();

    // `inner` is a type parameter, so its malformed rule is never parsed.
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].field(), Some("label"));
}

// ============================================================================
// ENUMS, POINTERS, METHOD SYNTAX
// ============================================================================

#[derive(Record)]
enum Status {
    Active,
}

#[test]
fn enums_report_enum_kind() {
    assert_eq!(<Status as Record>::KIND, Kind::Enum);
    assert!(validate(&Status::Active).unwrap_err().is_not_a_struct());
}

#[test]
fn boxed_records_validate_like_the_record() {
    let boxed = Box::new(Pair("ab".into(), "x".into()));
    assert!(validate(&boxed).is_ok());

    let shared = Arc::new(Pair("a".into(), "x".into()));
    assert!(validate(&shared).is_err());
}

#[test]
fn record_ext_provides_method_syntax() {
    let pair = Pair("ab".into(), String::new());
    assert_eq!(pair.validate(), validate(&pair));
}
