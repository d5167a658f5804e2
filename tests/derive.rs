//! Registries generated by `#[derive(Reflect)]`.

use fieldwise::{
    Field, FieldType, Homogeneous, Inherits, Reflect, RegistryKind, Visitor, VisitorMut, get,
    get_mut, has_registry,
};

#[derive(Debug, Reflect)]
struct TestStruct {
    a: i32,
    b: f32,
    c: String,
}

fn test_struct() -> TestStruct {
    TestStruct {
        a: 42,
        b: 13.13,
        c: "Hello".to_string(),
    }
}

#[derive(Reflect)]
#[reflect(homogeneous)]
#[repr(C)]
struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Reflect)]
struct Meters(f64, String);

#[derive(Reflect)]
struct Unit;

#[derive(Reflect)]
struct Tagged<T> {
    tag: u8,
    value: T,
}

#[derive(Reflect)]
struct Slot<V> {
    key: u32,
    value: V,
}

#[derive(Reflect)]
struct Keyword {
    r#type: u8,
    r#match: String,
}

#[derive(Reflect)]
#[reflect(name = "Account")]
struct AccountRecord {
    #[reflect(rename = "id")]
    account_id: u64,
    #[reflect(skip)]
    _secret: String,
    balance: i64,
}

#[derive(Reflect)]
struct Labelled {
    label: String,
}

#[derive(Reflect)]
struct Weighted(#[reflect(parent)] Labelled, f32);

/// Adds 20 to numbers and appends to strings.
struct Update;

impl VisitorMut for Update {
    fn visit_mut<T: 'static>(&mut self, _field: &fieldwise::FieldInfo, value: &mut T) {
        let value = value as &mut dyn std::any::Any;
        if let Some(i) = value.downcast_mut::<i32>() {
            *i += 20;
        } else if let Some(f) = value.downcast_mut::<f32>() {
            *f += 20.0;
        } else if let Some(s) = value.downcast_mut::<String>() {
            s.push_str(" Hello");
        }
    }
}

/// Collects `name=value` for printable fields.
struct Print(Vec<String>);

impl Visitor for Print {
    fn visit<T: 'static>(&mut self, field: &fieldwise::FieldInfo, value: &T) {
        let value = value as &dyn std::any::Any;
        let text = if let Some(i) = value.downcast_ref::<i32>() {
            i.to_string()
        } else if let Some(s) = value.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("?")
        };
        self.0.push(format!("{}={}", field.label(), text));
    }
}

#[test]
fn test_typed_access() {
    let mut s = test_struct();

    *get_mut::<0, _>(&mut s) += 3;
    assert_eq!(*get::<0, _>(&s), 45);

    get_mut::<2, _>(&mut s).replace_range(0..1, "f");
    assert_eq!(s.c, "fello");

    let b: &FieldType<TestStruct, 1> = get::<1, _>(&s);
    assert_eq!(*b, 13.13f32);
    assert_eq!(s.field::<2>(), "fello");
}

#[test]
fn test_registry_metadata() {
    assert_eq!(TestStruct::FIELD_COUNT, 3);
    assert!(TestStruct::HAS_REGISTRY);
    assert_eq!(TestStruct::TYPE_INFO.kind, RegistryKind::Declared);
    assert_eq!(TestStruct::type_name(), "TestStruct");
    assert_eq!(TestStruct::field_names(), vec!["a", "b", "c"]);
    assert_eq!(TestStruct::field_name(1), Some("b"));
    assert_eq!(TestStruct::field_name(3), None);
    assert!(TestStruct::TYPE_INFO.parent.is_none());

    let info = <TestStruct as Field<2>>::info();
    assert_eq!(info.index(), 2);
    assert!(info.ty().is::<String>());
    assert_eq!(info.ty().canonical_name(), "String");
}

#[test]
fn test_visitor_updates_every_field() {
    let mut s = test_struct();
    *get_mut::<0, _>(&mut s) += 3;
    get_mut::<2, _>(&mut s).replace_range(0..1, "f");

    s.for_each_mut(&mut Update);

    assert_eq!(s.a, 65);
    assert!((s.b - 33.13).abs() < 1e-4);
    assert_eq!(s.c, "fello Hello");

    let mut print = Print(Vec::new());
    s.for_each(&mut print);
    assert_eq!(print.0, vec!["a=65", "b=?", "c=fello Hello"]);
}

#[test]
fn test_homogeneous_struct() {
    let mut v = Vec3 {
        x: 1.0,
        y: 2.0,
        z: 3.0,
    };

    assert_eq!(Vec3::TYPE_INFO.kind, RegistryKind::Homogeneous);
    assert_eq!(<Vec3 as Homogeneous>::LEN, 3);
    assert_eq!(Vec3::FIELD_COUNT, 3);
    assert_eq!(v.element(1), Some(&2.0));
    assert_eq!(v.element(3), None);

    if let Some(z) = v.element_mut(2) {
        *z = 9.0;
    }
    assert_eq!(v.elements().sum::<f32>(), 12.0);
    assert_eq!(*get::<2, _>(&v), 9.0);
}

#[test]
fn test_tuple_struct() {
    let mut m = Meters(2.5, "m".into());

    assert_eq!(Meters::TYPE_INFO.kind, RegistryKind::Tuple);
    assert_eq!(Meters::field_names(), vec!["0", "1"]);
    assert_eq!(Meters::field_name(0), None);

    *get_mut::<0, _>(&mut m) *= 2.0;
    assert_eq!(m.0, 5.0);
    assert_eq!(get::<1, _>(&m), "m");
}

#[test]
fn test_unit_struct_has_no_fields() {
    assert_eq!(Unit::FIELD_COUNT, 0);
    assert!(Unit::HAS_REGISTRY);

    let mut calls = 0;
    fieldwise::for_each(&Unit, |_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_generic_struct_name_is_synthesized() {
    assert_eq!(Tagged::<String>::type_name(), "Tagged<String>");
    assert_eq!(Tagged::<(u8, u8)>::type_name(), "Tagged<(u8, u8)>");

    let t = Tagged {
        tag: 1,
        value: vec![1u8, 2],
    };
    assert_eq!(get::<1, _>(&t).len(), 2);
    assert!(<Tagged<u16> as Field<1>>::info().ty().is::<u16>());
}

#[test]
fn test_name_rename_and_skip() {
    let mut record = AccountRecord {
        account_id: 7,
        _secret: "hunter2".into(),
        balance: -10,
    };

    assert_eq!(AccountRecord::type_name(), "Account");
    assert_eq!(AccountRecord::FIELD_COUNT, 2);
    assert_eq!(AccountRecord::field_names(), vec!["id", "balance"]);
    assert_eq!(AccountRecord::field_index("account_id"), None);

    // Indices follow the reflected fields, not the declaration.
    *get_mut::<1, _>(&mut record) += 15;
    assert_eq!(record.balance, 5);
    assert_eq!(*get::<0, _>(&record), 7);
}

#[test]
fn test_tuple_struct_with_parent() {
    let w = Weighted(
        Labelled {
            label: "heavy".into(),
        },
        9.5,
    );

    assert_eq!(Weighted::FIELD_COUNT, 1);
    assert_eq!(Weighted::TYPE_INFO.full_field_count(), 2);
    assert_eq!(*get::<0, _>(&w), 9.5);
    assert_eq!(w.parent().label, "heavy");
}

#[test]
fn test_has_registry() {
    assert!(has_registry!(TestStruct));
    assert!(has_registry!(Vec3));
    assert!(has_registry!((i32, TestStruct)));
    assert!(!has_registry!(i32));
    assert!(!has_registry!(Vec<TestStruct>));
    assert!(!has_registry!(std::time::Duration));
}

#[test]
fn test_type_parameter_named_like_a_visitor() {
    let mut slot = Slot {
        key: 1,
        value: String::from("v"),
    };

    assert_eq!(Slot::<String>::field_names(), vec!["key", "value"]);
    assert_eq!(Slot::<String>::type_name(), "Slot<String>");

    fieldwise::for_each_mut(&mut slot, |_, v| {
        if let Some(s) = v.downcast_mut::<String>() {
            s.push('!');
        }
    });
    assert_eq!(get::<1, _>(&slot), "v!");

    let mut trail = fieldwise::FieldTrail::default();
    slot.for_each(&mut trail);
    assert_eq!(trail.labels, vec!["key", "value"]);
}

#[test]
fn test_raw_identifier_fields_register_without_prefix() {
    let mut k = Keyword {
        r#type: 3,
        r#match: "all".into(),
    };

    assert_eq!(Keyword::field_name(0), Some("type"));
    assert_eq!(Keyword::field_names(), vec!["type", "match"]);
    assert_eq!(Keyword::field_index("type"), Some(0));
    assert_eq!(Keyword::field_index("r#type"), None);

    *fieldwise::get_by_name_mut::<u8, _>(&mut k, "type").unwrap() += 1;
    assert_eq!(k.r#type, 4);
    assert_eq!(
        fieldwise::get_by_name::<String, _>(&k, "match").unwrap(),
        "all"
    );
}
