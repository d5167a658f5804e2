//! Registries for tuples, fields identified by position.

use std::any::Any;

use fieldwise_types::{FieldInfo, RegistryKind, TypeInfo, TypeName};

use crate::registry::{Field, Reflect};
use crate::visit::{Visitor, VisitorMut};

macro_rules! tuple_registry {
    (@fields $all:tt $($idx:tt => $F:ident),+) => {
        $( tuple_registry!(@field $all $idx => $F); )+
    };
    (@field [$($T:ident),+] $idx:tt => $F:ident) => {
        impl<$($T: 'static),+> Field<$idx> for ($($T,)+) {
            type Type = $F;

            fn get(&self) -> &$F {
                &self.$idx
            }

            fn get_mut(&mut self) -> &mut $F {
                &mut self.$idx
            }
        }
    };
    ($($idx:tt => $T:ident),+) => {
        impl<$($T: 'static),+> Reflect for ($($T,)+) {
            const TYPE_INFO: &'static TypeInfo = &TypeInfo {
                name: TypeName::of::<Self>(),
                kind: RegistryKind::Tuple,
                fields: &[$(FieldInfo::positional::<$T>($idx)),+],
                parent: None,
            };

            fn for_each<V: Visitor>(&self, visitor: &mut V) {
                $( visitor.visit(&Self::TYPE_INFO.fields[$idx], &self.$idx); )+
            }

            fn for_each_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
                $( visitor.visit_mut(&Self::TYPE_INFO.fields[$idx], &mut self.$idx); )+
            }

            fn field_any(&self, index: usize) -> Option<&dyn Any> {
                match index {
                    $( $idx => Some(&self.$idx), )+
                    _ => None,
                }
            }

            fn field_any_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
                match index {
                    $( $idx => Some(&mut self.$idx), )+
                    _ => None,
                }
            }
        }

        tuple_registry!(@fields [$($T),+] $($idx => $T),+);
    };
}

impl Reflect for () {
    const TYPE_INFO: &'static TypeInfo = &TypeInfo {
        name: TypeName::of::<()>(),
        kind: RegistryKind::Tuple,
        fields: &[],
        parent: None,
    };

    fn for_each<V: Visitor>(&self, _visitor: &mut V) {}

    fn for_each_mut<V: VisitorMut>(&mut self, _visitor: &mut V) {}

    fn field_any(&self, _index: usize) -> Option<&dyn Any> {
        None
    }

    fn field_any_mut(&mut self, _index: usize) -> Option<&mut dyn Any> {
        None
    }
}

tuple_registry!(0 => A);
tuple_registry!(0 => A, 1 => B);
tuple_registry!(0 => A, 1 => B, 2 => C);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => I);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => I, 8 => J);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => I, 8 => J, 9 => K);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => I, 8 => J, 9 => K, 10 => L);
tuple_registry!(0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => I, 8 => J, 9 => K, 10 => L, 11 => M);

#[cfg(test)]
mod tests {
    use crate::registry::{FieldType, Reflect, get, get_mut};
    use fieldwise_types::RegistryKind;

    type Triple = (i32, f32, String);

    #[test]
    fn test_registry_shape() {
        assert_eq!(Triple::FIELD_COUNT, 3);
        assert!(Triple::HAS_REGISTRY);
        assert_eq!(Triple::TYPE_INFO.kind, RegistryKind::Tuple);
        assert_eq!(Triple::type_name(), "(i32, f32, String)");
        assert_eq!(Triple::field_name(0), None);
        assert_eq!(Triple::field_names(), vec!["0", "1", "2"]);
        assert!(Triple::field_info(2).unwrap().ty().is::<String>());
        assert_eq!(<()>::FIELD_COUNT, 0);
    }

    #[test]
    fn test_positional_round_trip() {
        let mut t: Triple = (42, 42.42, "4242".to_string());
        assert_eq!(*get::<0, _>(&t), 42);
        assert_eq!(*get::<1, _>(&t), 42.42f32);
        assert_eq!(get::<2, _>(&t), "4242");

        *get_mut::<0, _>(&mut t) = 13;
        *t.field_mut::<1>() = 13.13;
        *t.field_mut::<2>() = "1313".to_string();

        assert_eq!(t, (13, 13.13, "1313".to_string()));

        let second: &FieldType<Triple, 1> = t.field::<1>();
        assert_eq!(*second, 13.13f32);
    }

    #[test]
    fn test_sum_across_fields() {
        let t: Triple = (13, 13.0, "1313".to_string());
        let mut acc = 30.0f64;
        crate::visit::for_each(&t, |_, v| {
            if let Some(s) = v.downcast_ref::<String>() {
                acc += s.len() as f64;
            } else if let Some(i) = v.downcast_ref::<i32>() {
                acc += f64::from(*i);
            } else if let Some(f) = v.downcast_ref::<f32>() {
                acc += f64::from(*f);
            }
        });
        assert_eq!(acc, 60.0);
    }

    #[test]
    fn test_largest_arity() {
        let t = (0u8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>::FIELD_COUNT, 12);
        assert_eq!(*t.field::<11>(), 11);
        assert_eq!(t.field_any(11).and_then(|v| v.downcast_ref::<u8>()), Some(&11));
        assert!(t.field_any(12).is_none());
    }
}
