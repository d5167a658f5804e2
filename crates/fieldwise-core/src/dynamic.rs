//! Field access by runtime index or name.
//!
//! The typed accessors in [`crate::registry`] cannot fail. This module is for
//! callers that only learn the field at runtime (a name read from input, an
//! index from a loop); every lookup is checked against the registry and the
//! requested value type.

use crate::registry::Reflect;
use crate::{Error, Result};

fn out_of_range<T: Reflect>(index: usize) -> Error {
    let err = Error::IndexOutOfRange {
        type_name: T::type_name().into_owned(),
        index,
        count: T::FIELD_COUNT,
    };
    log::debug!("dynamic field lookup failed: {err}");
    err
}

fn no_such_field<T: Reflect>(name: &str) -> Error {
    let err = Error::NoSuchField {
        type_name: T::type_name().into_owned(),
        name: name.to_string(),
    };
    log::debug!("dynamic field lookup failed: {err}");
    err
}

fn type_mismatch<T: Reflect, V>(index: usize) -> Error {
    let info = T::TYPE_INFO;
    let (field, found) = match info.field(index) {
        Some(f) => (f.label().into_owned(), f.ty().canonical_name()),
        None => (index.to_string(), String::from("?")),
    };
    let err = Error::TypeMismatch {
        type_name: info.name().into_owned(),
        field,
        expected: fieldwise_types::name::type_name_of::<V>(),
        found,
    };
    log::debug!("dynamic field lookup failed: {err}");
    err
}

/// Borrow own field `index` of `instance` as a `V`.
pub fn get_dyn<V: 'static, T: Reflect>(instance: &T, index: usize) -> Result<&V> {
    let value = instance
        .field_any(index)
        .ok_or_else(|| out_of_range::<T>(index))?;
    value
        .downcast_ref::<V>()
        .ok_or_else(|| type_mismatch::<T, V>(index))
}

/// Mutably borrow own field `index` of `instance` as a `V`.
pub fn get_dyn_mut<V: 'static, T: Reflect>(instance: &mut T, index: usize) -> Result<&mut V> {
    let value = instance
        .field_any_mut(index)
        .ok_or_else(|| out_of_range::<T>(index))?;
    value
        .downcast_mut::<V>()
        .ok_or_else(|| type_mismatch::<T, V>(index))
}

/// Borrow the own field labelled `name` as a `V`.
///
/// Positional fields are labelled by their index (`"0"`, `"1"`, ...).
pub fn get_by_name<'a, V: 'static, T: Reflect>(instance: &'a T, name: &str) -> Result<&'a V> {
    let index = T::field_index(name).ok_or_else(|| no_such_field::<T>(name))?;
    get_dyn(instance, index)
}

pub fn get_by_name_mut<'a, V: 'static, T: Reflect>(
    instance: &'a mut T,
    name: &str,
) -> Result<&'a mut V> {
    let index = T::field_index(name).ok_or_else(|| no_such_field::<T>(name))?;
    get_dyn_mut(instance, index)
}
