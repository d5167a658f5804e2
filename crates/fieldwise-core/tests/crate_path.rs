//! The derive pointed at this crate directly, without the facade.

use fieldwise_core::{Field, Homogeneous, Reflect, RegistryKind, for_each_mut, get};
use fieldwise_macros::Reflect;

#[derive(Reflect)]
#[reflect(crate = "fieldwise_core")]
struct Gauge {
    value: u16,
    unit: &'static str,
}

#[derive(Reflect)]
#[reflect(crate = "fieldwise_core", homogeneous)]
struct Pair(u32, u32);

#[test]
fn test_derive_with_crate_path() {
    let mut g = Gauge {
        value: 12,
        unit: "kPa",
    };

    assert_eq!(Gauge::FIELD_COUNT, 2);
    assert_eq!(Gauge::field_names(), vec!["value", "unit"]);
    assert_eq!(*get::<1, _>(&g), "kPa");
    assert!(<Gauge as Field<1>>::info().ty().is::<&'static str>());

    for_each_mut(&mut g, |_, v| {
        if let Some(n) = v.downcast_mut::<u16>() {
            *n *= 2;
        }
    });
    assert_eq!(g.value, 24);
}

#[test]
fn test_homogeneous_tuple_struct() {
    let p = Pair(3, 4);
    assert_eq!(Pair::TYPE_INFO.kind, RegistryKind::Homogeneous);
    assert_eq!(<Pair as Homogeneous>::LEN, 2);
    assert_eq!(p.elements().copied().collect::<Vec<_>>(), vec![3, 4]);
}
