//! # fieldwise
//!
//! Compile-time field reflection for Rust. A type opts in with
//! `#[derive(Reflect)]` and gets:
//!
//! - a `'static` registry ([`TypeInfo`]) with its field names, types and count
//! - typed access to field `N` through [`get`] / [`get_mut`], checked at
//!   compile time
//! - visitor traversal over its fields, optionally through its whole
//!   inheritance chain, ancestors first
//!
//! Tuples and arrays are registered out of the box; primitives and standard
//! containers are registered as opaque (zero fields).
//!
//! ## Quick Start
//!
//! ```
//! use fieldwise::{Reflect, get, get_mut, for_each_mut};
//!
//! #[derive(Reflect)]
//! struct TestStruct {
//!     a: i32,
//!     b: f32,
//!     c: String,
//! }
//!
//! let mut s = TestStruct { a: 42, b: 13.13, c: "Hello".into() };
//!
//! assert_eq!(TestStruct::FIELD_COUNT, 3);
//! assert_eq!(TestStruct::field_name(2), Some("c"));
//!
//! *get_mut::<0, _>(&mut s) += 3;
//! assert_eq!(*get::<0, _>(&s), 45);
//!
//! for_each_mut(&mut s, |_, value| {
//!     if let Some(text) = value.downcast_mut::<String>() {
//!         text.push_str(" World");
//!     }
//! });
//! assert_eq!(s.c, "Hello World");
//! ```
//!
//! ## Inheritance
//!
//! A registry can embed one parent registry. The parent's fields are not part
//! of the child's own field list; [`for_each_full`] visits them first.
//!
//! ```
//! use fieldwise::{FieldTrail, Reflect};
//!
//! #[derive(Reflect)]
//! struct Base {
//!     id: u32,
//! }
//!
//! #[derive(Reflect)]
//! struct Named {
//!     #[reflect(parent)]
//!     base: Base,
//!     name: String,
//! }
//!
//! let value = Named { base: Base { id: 1 }, name: "one".into() };
//! let mut trail = FieldTrail::default();
//! value.for_each_full(&mut trail);
//!
//! assert_eq!(Named::FIELD_COUNT, 1);
//! assert_eq!(trail.labels, vec!["id", "name"]);
//! ```
//!
//! ## Runtime lookups
//!
//! When the field is only known at runtime, [`get_by_name`] and [`get_dyn`]
//! check the request against the registry and return an [`Error`] instead.
//!
//! ```
//! use fieldwise::{Error, Reflect, get_by_name};
//!
//! #[derive(Reflect)]
//! struct Config {
//!     depth: u8,
//! }
//!
//! let config = Config { depth: 3 };
//! assert_eq!(get_by_name::<u8, _>(&config, "depth").unwrap(), &3);
//! assert!(matches!(
//!     get_by_name::<u8, _>(&config, "width"),
//!     Err(Error::NoSuchField { .. })
//! ));
//! ```
//!
//! ## Compile-time rejection
//!
//! Field indices are checked statically. Out of range on a derived struct:
//!
//! ```compile_fail
//! use fieldwise::{Reflect, get};
//!
//! #[derive(Reflect)]
//! struct Two {
//!     a: u8,
//!     b: u8,
//! }
//!
//! let two = Two { a: 1, b: 2 };
//! let _ = get::<2, _>(&two);
//! ```
//!
//! On a tuple:
//!
//! ```compile_fail
//! let pair = (1u8, 2u8);
//! let _ = fieldwise::get::<2, _>(&pair);
//! ```
//!
//! On an array:
//!
//! ```compile_fail
//! let cells = [1u8, 2, 3];
//! let _ = *fieldwise::get::<3, _>(&cells);
//! ```
//!
//! The derive rejects enums:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! enum Choice {
//!     A,
//!     B,
//! }
//! ```
//!
//! more than one parent:
//!
//! ```compile_fail
//! use fieldwise::Reflect;
//!
//! #[derive(Reflect)]
//! struct A {
//!     x: u8,
//! }
//!
//! #[derive(Reflect)]
//! struct B {
//!     #[reflect(parent)]
//!     first: A,
//!     #[reflect(parent)]
//!     second: A,
//! }
//! ```
//!
//! homogeneous types whose fields differ in type:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! #[reflect(homogeneous)]
//! struct Mixed {
//!     a: u8,
//!     b: u16,
//! }
//! ```
//!
//! homogeneous types that are not a packed run of their element:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! #[reflect(homogeneous)]
//! #[repr(C, align(16))]
//! struct Padded {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//! ```
//!
//! homogeneous types with a parent:
//!
//! ```compile_fail
//! use fieldwise::Reflect;
//!
//! #[derive(Reflect)]
//! struct Base {
//!     a: u8,
//! }
//!
//! #[derive(Reflect)]
//! #[reflect(homogeneous)]
//! struct Run {
//!     #[reflect(parent)]
//!     base: Base,
//!     b: u8,
//! }
//! ```
//!
//! homogeneous types with a skipped field:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! #[reflect(homogeneous)]
//! struct Run {
//!     a: u8,
//!     #[reflect(skip)]
//!     b: u8,
//! }
//! ```
//!
//! homogeneous types with no fields:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! #[reflect(homogeneous)]
//! struct Nothing {}
//! ```
//!
//! lifetime parameters:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! struct Borrowed<'a> {
//!     text: &'a str,
//! }
//! ```
//!
//! `rename` on a positional field:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! struct Celsius(#[reflect(rename = "degrees")] f32);
//! ```
//!
//! `parent` combined with `skip`:
//!
//! ```compile_fail
//! use fieldwise::Reflect;
//!
//! #[derive(Reflect)]
//! struct Base {
//!     a: u8,
//! }
//!
//! #[derive(Reflect)]
//! struct Child {
//!     #[reflect(parent, skip)]
//!     base: Base,
//!     b: u8,
//! }
//! ```
//!
//! `parent` combined with `rename`:
//!
//! ```compile_fail
//! use fieldwise::Reflect;
//!
//! #[derive(Reflect)]
//! struct Base {
//!     a: u8,
//! }
//!
//! #[derive(Reflect)]
//! struct Child {
//!     #[reflect(parent, rename = "up")]
//!     base: Base,
//!     b: u8,
//! }
//! ```
//!
//! unknown container attributes:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! #[reflect(flatten)]
//! struct Flat {
//!     a: u8,
//! }
//! ```
//!
//! and unknown field attributes:
//!
//! ```compile_fail
//! #[derive(fieldwise::Reflect)]
//! struct Flat {
//!     #[reflect(default)]
//!     a: u8,
//! }
//! ```
//!
//! The same shapes are accepted when the attributes are valid:
//!
//! ```
//! use fieldwise::{Homogeneous, Reflect};
//!
//! #[derive(Reflect)]
//! #[reflect(homogeneous)]
//! #[repr(C)]
//! struct Packed {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//!
//! #[derive(Reflect)]
//! struct Celsius(f32);
//!
//! assert_eq!(<Packed as Homogeneous>::LEN, 3);
//! assert_eq!(Celsius::FIELD_COUNT, 1);
//! ```

pub use fieldwise_core::*;
pub use fieldwise_macros::Reflect;

/// The metadata model, for tooling that works with registries directly.
pub use fieldwise_types as types;
