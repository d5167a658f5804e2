//! Field registry, typed accessors and visitor traversal for fieldwise.
//!
//! A type opts in by implementing [`Reflect`] (normally through
//! `#[derive(Reflect)]` from `fieldwise-macros`). Its registry is a
//! `&'static TypeInfo` computed at compile time. Fields are read and written
//! by position through [`Field<N>`], and a [`Visitor`] can be driven across
//! all of them, optionally ancestors first.
//!
//! # Example
//!
//! ```
//! use fieldwise_core::{Reflect, for_each, get};
//!
//! let point = (3i32, 4i32);
//! assert_eq!(<(i32, i32)>::FIELD_COUNT, 2);
//! assert_eq!(*get::<1, _>(&point), 4);
//!
//! let mut sum = 0;
//! for_each(&point, |_, v| sum += v.downcast_ref::<i32>().copied().unwrap_or(0));
//! assert_eq!(sum, 7);
//! ```
//!
//! # Backends
//!
//! | kind | types | fields |
//! |------|-------|--------|
//! | [`RegistryKind::Declared`] | derived structs | named, declaration order |
//! | [`RegistryKind::Tuple`] | tuples, derived tuple structs | positional |
//! | [`RegistryKind::Homogeneous`] | arrays, `#[reflect(homogeneous)]` structs | positional, one element type |
//! | [`RegistryKind::Opaque`] | primitives, `String`, `Vec<T>`, ... | none |

mod dynamic;
mod homogeneous;
mod opaque;
mod registry;
mod tuple;
mod visit;

#[doc(hidden)]
pub mod probe;

pub use dynamic::{get_by_name, get_by_name_mut, get_dyn, get_dyn_mut};
pub use homogeneous::{Homogeneous, assert_packed};
pub use registry::{Field, FieldType, Inherits, Reflect, get, get_mut};
pub use visit::{
    FieldTrail, VisitFn, Visitor, VisitorMut, for_each, for_each_full, for_each_full_mut,
    for_each_mut,
};

pub use fieldwise_types::{
    FieldInfo, FieldSchema, RegistryKind, TypeInfo, TypeName, TypeRef, TypeSchema, name,
};

/// Errors from runtime field lookups.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{type_name}` has no field named `{name}`")]
    NoSuchField { type_name: String, name: String },

    #[error("field index {index} is out of range for `{type_name}` ({count} fields)")]
    IndexOutOfRange {
        type_name: String,
        index: usize,
        count: usize,
    },

    #[error("field `{field}` of `{type_name}` is `{found}`, not `{expected}`")]
    TypeMismatch {
        type_name: String,
        field: String,
        expected: String,
        found: String,
    },
}

/// Result type for runtime field lookups.
pub type Result<T> = std::result::Result<T, Error>;
