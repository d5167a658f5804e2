//! Registries for containers whose fields all share one element type.
//!
//! Arrays are covered directly. Structs opt in with
//! `#[derive(Reflect)] #[reflect(homogeneous)]`; the derive asserts at compile
//! time that the struct is exactly `LEN` elements with no padding or extra
//! data, so the element count and the declared field count cannot disagree.

use std::any::Any;

use fieldwise_types::{FieldInfo, RegistryKind, TypeInfo, TypeName, positional_fields};

use crate::registry::{Field, Reflect};
use crate::visit::{Visitor, VisitorMut};

/// A registered type made of `LEN` fields of type `Element`.
pub trait Homogeneous: Reflect {
    type Element: 'static;

    const LEN: usize;

    fn element(&self, index: usize) -> Option<&Self::Element>;

    fn element_mut(&mut self, index: usize) -> Option<&mut Self::Element>;

    /// All elements in field order.
    fn elements(&self) -> impl Iterator<Item = &Self::Element> + '_
    where
        Self: Sized,
    {
        (0..Self::LEN).filter_map(move |i| self.element(i))
    }
}

/// Compile-time layout check for derived homogeneous types.
///
/// Fails constant evaluation unless `C` is exactly `len` values of `E`.
#[doc(hidden)]
pub const fn assert_packed<C, E>(len: usize) {
    assert!(
        size_of::<C>() == len * size_of::<E>(),
        "homogeneous type must be a packed sequence of its element type"
    );
}

impl<T: 'static, const N: usize> Reflect for [T; N] {
    const TYPE_INFO: &'static TypeInfo = &TypeInfo {
        name: TypeName::of::<Self>(),
        kind: RegistryKind::Homogeneous,
        fields: &positional_fields::<T, N>(),
        parent: None,
    };

    fn for_each<V: Visitor>(&self, visitor: &mut V) {
        for (field, value) in Self::TYPE_INFO.fields.iter().zip(self.iter()) {
            visitor.visit(field, value);
        }
    }

    fn for_each_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        for (field, value) in Self::TYPE_INFO.fields.iter().zip(self.iter_mut()) {
            visitor.visit_mut(field, value);
        }
    }

    fn field_any(&self, index: usize) -> Option<&dyn Any> {
        self.as_slice().get(index).map(|v| v as &dyn Any)
    }

    fn field_any_mut(&mut self, index: usize) -> Option<&mut dyn Any> {
        self.as_mut_slice().get_mut(index).map(|v| v as &mut dyn Any)
    }
}

impl<T: 'static, const N: usize, const I: usize> Field<I> for [T; N] {
    type Type = T;

    fn get(&self) -> &T {
        const { assert!(I < N, "field index out of range") };
        &self.as_slice()[I]
    }

    fn get_mut(&mut self) -> &mut T {
        const { assert!(I < N, "field index out of range") };
        &mut self.as_mut_slice()[I]
    }

    fn info() -> &'static FieldInfo {
        const { assert!(I < N, "field index out of range") };
        &Self::TYPE_INFO.fields[I]
    }
}

impl<T: 'static, const N: usize> Homogeneous for [T; N] {
    type Element = T;

    const LEN: usize = N;

    fn element(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}
