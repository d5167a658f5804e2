//! Registries for types that have not opted in.
//!
//! An opaque registry has zero fields and an empty name list. Visiting it is a
//! no-op. This lets generic code call `for_each` on any field without first
//! checking whether the field's type is itself registered.

use crate::registry::Reflect;

/// Items of an opaque `Reflect` impl. Expanded inside `impl Reflect for ...`.
#[doc(hidden)]
#[macro_export]
macro_rules! __opaque_body {
    () => {
        const TYPE_INFO: &'static $crate::TypeInfo =
            &$crate::TypeInfo::opaque($crate::TypeName::of::<Self>());

        fn for_each<V: $crate::Visitor>(&self, _visitor: &mut V) {}

        fn for_each_mut<V: $crate::VisitorMut>(&mut self, _visitor: &mut V) {}

        fn field_any(&self, _index: usize) -> ::core::option::Option<&dyn ::core::any::Any> {
            ::core::option::Option::None
        }

        fn field_any_mut(
            &mut self,
            _index: usize,
        ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
            ::core::option::Option::None
        }
    };
}

/// Register concrete types as opaque: zero fields, `HAS_REGISTRY == false`.
///
/// ```
/// use fieldwise_core::{Reflect, reflect_opaque};
///
/// struct Handle(u64);
/// reflect_opaque!(Handle);
///
/// assert!(!Handle::HAS_REGISTRY);
/// assert_eq!(Handle::FIELD_COUNT, 0);
/// ```
#[macro_export]
macro_rules! reflect_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                $crate::__opaque_body!();
            }
        )+
    };
}

reflect_opaque!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str,
);

impl<T: 'static> Reflect for Vec<T> {
    crate::__opaque_body!();
}

impl<T: 'static> Reflect for Option<T> {
    crate::__opaque_body!();
}

impl<T: ?Sized + 'static> Reflect for Box<T> {
    crate::__opaque_body!();
}
