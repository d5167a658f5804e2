//! Tuple, array and opaque registries through the facade.

use fieldwise::{FieldTrail, Reflect, RegistryKind, for_each, get, get_mut, has_registry};

#[test]
fn test_anonymous_triple() {
    type Triple = (i32, f32, String);

    assert_eq!(Triple::FIELD_COUNT, 3);
    assert_eq!(Triple::TYPE_INFO.kind, RegistryKind::Tuple);
    assert_eq!(Triple::type_name(), "(i32, f32, String)");

    let mut t: Triple = (0, 0.0, String::new());
    *get_mut::<0, _>(&mut t) = -7;
    *get_mut::<1, _>(&mut t) = 0.5;
    *get_mut::<2, _>(&mut t) = "seven".to_string();

    assert_eq!(*get::<0, _>(&t), -7);
    assert_eq!(*get::<1, _>(&t), 0.5);
    assert_eq!(get::<2, _>(&t), "seven");
}

#[test]
fn test_visit_counts_match_field_counts() {
    let mut calls = 0;
    for_each(&(1u8, 2u16, 3u32, 4u64), |_, _| calls += 1);
    assert_eq!(calls, 4);

    let mut trail = FieldTrail::default();
    [7i8; 5].for_each_full(&mut trail);
    assert_eq!(trail.labels, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn test_unregistered_types_have_no_fields() {
    struct Handle(u64);
    fieldwise::reflect_opaque!(Handle);

    assert_eq!(Handle::FIELD_COUNT, 0);
    assert!(Handle::field_names().is_empty());
    assert!(!has_registry!(Handle));

    let mut calls = 0;
    for_each(&Handle(3), |_, _| calls += 1);
    for_each(&vec![1, 2, 3], |_, _| calls += 1);
    for_each(&Some(1.5f64), |_, _| calls += 1);
    assert_eq!(calls, 0);
    assert_eq!(Handle(3).0, 3);
}

#[test]
fn test_nested_registries_are_visited_as_values() {
    let nested = ((1u8, 2u8), [3u8, 4u8]);

    let mut trail = FieldTrail::default();
    nested.for_each(&mut trail);
    assert_eq!(trail.labels, vec!["0", "1"]);

    let mut inner_total = 0u32;
    for_each(&nested, |_, v| {
        if let Some(pair) = v.downcast_ref::<(u8, u8)>() {
            for_each(pair, |_, x| {
                inner_total += u32::from(*x.downcast_ref::<u8>().unwrap_or(&0))
            });
        }
    });
    assert_eq!(inner_total, 3);
}
