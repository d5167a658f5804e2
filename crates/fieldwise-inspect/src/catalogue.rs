//! Sample types covering every registry backend.
//!
//! The types are only inspected, never built.

#![allow(dead_code)]

use fieldwise::{Reflect, TypeInfo};

#[derive(Reflect)]
pub struct Base {
    pub a: i32,
    pub b: f32,
    pub c: String,
}

#[derive(Reflect)]
pub struct Middle {
    #[reflect(parent)]
    pub base: Base,
    pub a: i32,
}

#[derive(Reflect)]
pub struct Leaf {
    #[reflect(parent)]
    pub middle: Middle,
    pub s: String,
}

#[derive(Reflect)]
#[reflect(homogeneous)]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Reflect)]
pub struct Pair(pub u32, pub String);

#[derive(Reflect)]
pub struct Wrapper<T> {
    pub value: T,
}

#[derive(Reflect)]
#[reflect(name = "Settings")]
pub struct RawSettings {
    #[reflect(rename = "verbose")]
    pub is_verbose: bool,
    #[reflect(skip)]
    pub cache: Vec<u8>,
    pub depth: u8,
}

/// Registries of every bundled type, in display order.
pub fn catalogue() -> Vec<&'static TypeInfo> {
    vec![
        Base::TYPE_INFO,
        Middle::TYPE_INFO,
        Leaf::TYPE_INFO,
        Rgb::TYPE_INFO,
        Pair::TYPE_INFO,
        Wrapper::<Vec<u8>>::TYPE_INFO,
        RawSettings::TYPE_INFO,
        <(i32, f64, String)>::TYPE_INFO,
        <[u16; 4]>::TYPE_INFO,
        <()>::TYPE_INFO,
        String::TYPE_INFO,
    ]
}

/// Find a catalogue entry by display name. Exact matches win over
/// case-insensitive ones.
pub fn find(name: &str) -> Option<&'static TypeInfo> {
    let entries = catalogue();
    entries
        .iter()
        .find(|info| info.name() == name)
        .or_else(|| {
            entries
                .iter()
                .find(|info| info.name().eq_ignore_ascii_case(name))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldwise::RegistryKind;

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<_> = catalogue().iter().map(|info| info.name()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_catalogue_covers_every_backend() {
        let kinds: Vec<_> = catalogue().iter().map(|info| info.kind).collect();
        for kind in [
            RegistryKind::Declared,
            RegistryKind::Tuple,
            RegistryKind::Homogeneous,
            RegistryKind::Opaque,
        ] {
            assert!(kinds.contains(&kind), "missing {kind}");
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("Leaf").map(|i| i.full_field_count()), Some(5));
        assert_eq!(find("rgb").map(|i| i.kind), Some(RegistryKind::Homogeneous));
        assert_eq!(find("Wrapper<Vec<u8>>").map(|i| i.field_count()), Some(1));
        assert_eq!(
            find("Settings").map(|i| i.field_names()),
            Some(vec!["verbose".into(), "depth".into()])
        );
        assert!(find("RawSettings").is_none());
        assert!(find("Nope").is_none());
    }
}
