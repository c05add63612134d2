use super::*;
use pretty_assertions::assert_eq;

fn dotted(name: &str) -> Dotted {
    Dotted::new(name).unwrap()
}

#[test]
fn test_parse_primitives() {
    assert_eq!(
        TypeDescriptor::from_descriptor("I").unwrap(),
        TypeDescriptor::int()
    );
    assert_eq!(
        TypeDescriptor::from_descriptor("Z").unwrap(),
        TypeDescriptor::primitive(PrimitiveType::Boolean)
    );
    assert_eq!(
        TypeDescriptor::from_descriptor("D").unwrap(),
        TypeDescriptor::primitive(PrimitiveType::Double)
    );
}

#[test]
fn test_parse_reference() {
    let parsed = TypeDescriptor::from_descriptor("Ljava/util/List;").unwrap();
    assert_eq!(
        parsed,
        TypeDescriptor::reference(dotted("java.util.List"), TypeShape::Unknown)
    );
    assert_eq!(parsed.reference_name(), Some(&dotted("java.util.List")));
}

#[test]
fn test_parse_nested_arrays() {
    let parsed = TypeDescriptor::from_descriptor("[[Ljava/lang/String;").unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed.to_string(), "java.lang.String[][]");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        TypeDescriptor::from_descriptor(""),
        Err(DescriptorError::Empty)
    );
    assert!(matches!(
        TypeDescriptor::from_descriptor("Q"),
        Err(DescriptorError::UnknownTag { tag: 'Q', .. })
    ));
    assert!(matches!(
        TypeDescriptor::from_descriptor("Ljava/util/List"),
        Err(DescriptorError::Unterminated { .. })
    ));
    assert!(matches!(
        TypeDescriptor::from_descriptor("["),
        Err(DescriptorError::Unterminated { .. })
    ));
    assert!(matches!(
        TypeDescriptor::from_descriptor("II"),
        Err(DescriptorError::Trailing { .. })
    ));
    assert!(matches!(
        TypeDescriptor::from_descriptor("L;"),
        Err(DescriptorError::Name(_))
    ));
}

#[test]
fn test_array_dimension_limit() {
    let widest = format!("{}I", "[".repeat(MAX_ARRAY_DIMENSIONS));
    let parsed = TypeDescriptor::from_descriptor(&widest).unwrap();
    assert_eq!(
        parsed.to_string(),
        format!("int{}", "[]".repeat(MAX_ARRAY_DIMENSIONS))
    );

    let too_wide = format!("{}I", "[".repeat(MAX_ARRAY_DIMENSIONS + 1));
    assert!(matches!(
        TypeDescriptor::from_descriptor(&too_wide),
        Err(DescriptorError::TooManyDimensions { .. })
    ));
}

#[test]
fn test_deeply_nested_array_is_rejected_without_recursing() {
    let hostile = format!("{}Ljava/lang/Object;", "[".repeat(100_000));
    let err = TypeDescriptor::from_descriptor(&hostile).unwrap_err();
    assert!(matches!(err, DescriptorError::TooManyDimensions { .. }));
    assert!(err.to_string().contains("more than 255 dimensions"));
}

#[test]
fn test_display_with_type_arguments() {
    let map = TypeDescriptor::interface(dotted("java.util.Map")).with_type_arguments(vec![
        TypeDescriptor::concrete(dotted("java.lang.String"), true),
        TypeDescriptor::interface(dotted("java.util.List"))
            .with_type_arguments(vec![TypeDescriptor::concrete(dotted("java.util.Date"), false)]),
    ]);
    assert_eq!(
        map.to_string(),
        "java.util.Map<java.lang.String, java.util.List<java.util.Date>>"
    );
}

#[test]
fn test_type_arguments_ignored_on_primitives() {
    let int = TypeDescriptor::int().with_type_arguments(vec![TypeDescriptor::int()]);
    assert_eq!(int, TypeDescriptor::int());
}

#[test]
fn test_shape_is_abstract() {
    assert!(TypeShape::Interface.is_abstract());
    assert!(TypeShape::Abstract.is_abstract());
    assert!(!TypeShape::Concrete { is_final: false }.is_abstract());
    assert!(!TypeShape::Unknown.is_abstract());
}

#[test]
fn test_shape_admits_subtypes() {
    assert!(TypeShape::Interface.admits_subtypes());
    assert!(TypeShape::Abstract.admits_subtypes());
    assert!(TypeShape::Concrete { is_final: false }.admits_subtypes());
    assert!(TypeShape::Unknown.admits_subtypes());
    assert!(!TypeShape::Concrete { is_final: true }.admits_subtypes());
}
