//! The registry and accessor traits.
//!
//! [`Reflect`] is the per-type registry: a `'static` [`TypeInfo`] plus the
//! methods that drive a visitor across the fields. [`Field<N>`] is the typed
//! accessor for field `N`; it is implemented once per declared field, so an
//! out-of-range index is a missing impl and fails to compile.

use std::any::Any;
use std::borrow::Cow;

use fieldwise_types::{FieldInfo, TypeInfo};

use crate::visit::{Visitor, VisitorMut};

/// A type whose fields are described by a static registry.
///
/// Usually implemented with `#[derive(Reflect)]`. A hand-written impl must
/// keep `TYPE_INFO.fields`, the visiting order and the [`Field`] impls in the
/// same order; the derive guarantees this by generating all three from one
/// field list.
pub trait Reflect: 'static {
    /// The type's registry.
    const TYPE_INFO: &'static TypeInfo;

    /// Number of fields declared by this type (parents excluded).
    const FIELD_COUNT: usize = Self::TYPE_INFO.fields.len();

    /// Whether the type opted in. `false` for opaque types.
    const HAS_REGISTRY: bool = Self::TYPE_INFO.kind.has_registry();

    /// Visit the type's own fields in declaration order.
    fn for_each<V: Visitor>(&self, visitor: &mut V);

    /// Visit the type's own fields mutably, in declaration order.
    fn for_each_mut<V: VisitorMut>(&mut self, visitor: &mut V);

    /// Visit every field along the inheritance chain, ancestors first.
    ///
    /// Types without a parent visit only their own fields.
    fn for_each_full<V: Visitor>(&self, visitor: &mut V) {
        self.for_each(visitor);
    }

    /// Mutable counterpart of [`Reflect::for_each_full`].
    fn for_each_full_mut<V: VisitorMut>(&mut self, visitor: &mut V) {
        self.for_each_mut(visitor);
    }

    /// Type-erased view of own field `index`.
    fn field_any(&self, index: usize) -> Option<&dyn Any>;

    /// Type-erased mutable view of own field `index`.
    fn field_any_mut(&mut self, index: usize) -> Option<&mut dyn Any>;

    /// Canonical display name.
    fn type_name() -> Cow<'static, str> {
        Self::TYPE_INFO.name()
    }

    fn field_info(index: usize) -> Option<&'static FieldInfo> {
        Self::TYPE_INFO.field(index)
    }

    /// Declared name of own field `index`.
    fn field_name(index: usize) -> Option<&'static str> {
        Self::TYPE_INFO.field_name(index)
    }

    /// Labels of all own fields, in order. Empty for opaque types.
    fn field_names() -> Vec<Cow<'static, str>> {
        Self::TYPE_INFO.field_names()
    }

    fn field_index(name: &str) -> Option<usize> {
        Self::TYPE_INFO.field_index(name)
    }

    /// Borrow field `N`.
    fn field<const N: usize>(&self) -> &FieldType<Self, N>
    where
        Self: Field<N>,
    {
        <Self as Field<N>>::get(self)
    }

    /// Mutably borrow field `N`.
    fn field_mut<const N: usize>(&mut self) -> &mut FieldType<Self, N>
    where
        Self: Field<N>,
    {
        <Self as Field<N>>::get_mut(self)
    }
}

/// Typed access to field `N` of a registered type.
pub trait Field<const N: usize>: Reflect {
    /// The declared type of the field.
    type Type: 'static;

    fn get(&self) -> &Self::Type;

    fn get_mut(&mut self) -> &mut Self::Type;

    /// Descriptor of the field.
    ///
    /// `N` must be below the length of `TYPE_INFO.fields`. A hand-written
    /// registry that implements `Field<N>` past its descriptor list fails
    /// to compile where `info` is used:
    ///
    /// ```compile_fail
    /// use std::any::Any;
    /// use fieldwise_core::{
    ///     Field, FieldInfo, Reflect, RegistryKind, TypeInfo, TypeName, Visitor, VisitorMut,
    /// };
    ///
    /// struct Short(u8, u8);
    ///
    /// impl Reflect for Short {
    ///     const TYPE_INFO: &'static TypeInfo = &TypeInfo {
    ///         name: TypeName::Declared("Short"),
    ///         kind: RegistryKind::Tuple,
    ///         fields: &[FieldInfo::positional::<u8>(0)],
    ///         parent: None,
    ///     };
    ///     fn for_each<V: Visitor>(&self, _visitor: &mut V) {}
    ///     fn for_each_mut<V: VisitorMut>(&mut self, _visitor: &mut V) {}
    ///     fn field_any(&self, _index: usize) -> Option<&dyn Any> { None }
    ///     fn field_any_mut(&mut self, _index: usize) -> Option<&mut dyn Any> { None }
    /// }
    ///
    /// impl Field<1> for Short {
    ///     type Type = u8;
    ///     fn get(&self) -> &u8 { &self.1 }
    ///     fn get_mut(&mut self) -> &mut u8 { &mut self.1 }
    /// }
    ///
    /// let _ = <Short as Field<1>>::info();
    /// ```
    fn info() -> &'static FieldInfo {
        const {
            assert!(
                N < Self::TYPE_INFO.fields.len(),
                "Field<N> implemented past the end of TYPE_INFO.fields"
            )
        };
        &Self::TYPE_INFO.fields[N]
    }
}

/// The declared type of field `N` of `T`.
pub type FieldType<T, const N: usize> = <T as Field<N>>::Type;

/// A registered type that embeds a registered parent.
///
/// The parent's fields are not part of the child's own field list; they are
/// reached through [`Reflect::for_each_full`] or [`Inherits::parent`].
pub trait Inherits: Reflect {
    type Parent: Reflect;

    fn parent(&self) -> &Self::Parent;

    fn parent_mut(&mut self) -> &mut Self::Parent;
}

/// Borrow field `N` of `instance`.
///
/// ```
/// use fieldwise_core::get;
///
/// let pair = (7u8, 'x');
/// assert_eq!(*get::<1, _>(&pair), 'x');
/// ```
pub fn get<const N: usize, T: Field<N>>(instance: &T) -> &T::Type {
    <T as Field<N>>::get(instance)
}

/// Mutably borrow field `N` of `instance`.
pub fn get_mut<const N: usize, T: Field<N>>(instance: &mut T) -> &mut T::Type {
    <T as Field<N>>::get_mut(instance)
}
