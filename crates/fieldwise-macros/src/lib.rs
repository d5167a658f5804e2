//! Derive macro for fieldwise field registries.
//!
//! `#[derive(Reflect)]` implements `Reflect`, one `Field<N>` per reflected
//! field and, where requested, `Inherits` and `Homogeneous`. Use it through
//! the `fieldwise` facade, which re-exports it next to the traits it targets.
//!
//! # Attributes
//!
//! Container:
//!
//! - `#[reflect(name = "...")]` overrides the registered type name
//! - `#[reflect(homogeneous)]` registers every field as one element type
//! - `#[reflect(crate = "path")]` points the generated code at another path
//!   than `::fieldwise`
//!
//! Field:
//!
//! - `#[reflect(parent)]` marks the embedded parent registry (at most one)
//! - `#[reflect(skip)]` leaves the field out of the registry
//! - `#[reflect(rename = "...")]` registers a named field under another name
//!
//! ```ignore
//! use fieldwise::Reflect;
//!
//! #[derive(Reflect)]
//! struct Base {
//!     id: u32,
//! }
//!
//! #[derive(Reflect)]
//! struct Derived {
//!     #[reflect(parent)]
//!     base: Base,
//!     label: String,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod reflect;

/// Derive `Reflect` and the positional `Field<N>` accessors for a struct.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
