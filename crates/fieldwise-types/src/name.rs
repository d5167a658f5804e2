//! Canonical display names recovered from compiler-synthesized type names.
//!
//! `core::any::type_name` returns text such as
//! `my_app::shapes::Point<alloc::string::String>`. Its exact contents are not
//! a stable ABI: the standard library documents that the output may change
//! between compiler versions. Everything in this module is therefore
//! best-effort display metadata, never an identifier. Use `TypeId` (or an
//! explicit `#[reflect(name = "...")]`) where stability matters.

/// Strip module paths from a compiler-provided type name.
///
/// Generic arguments, tuples, arrays, references, lifetimes, function
/// pointers and trait-object bounds are preserved; only the `a::b::` prefix
/// of every path is dropped.
///
/// ```
/// use fieldwise_types::name::canonical_name;
///
/// assert_eq!(canonical_name("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
/// assert_eq!(canonical_name("(i32, f32, alloc::string::String)"), "(i32, f32, String)");
/// ```
///
/// Malformed input (unbalanced brackets, stray separators) yields a
/// best-effort string and never panics.
pub fn canonical_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut segment = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if is_ident_char(c) {
            segment.push(c);
            continue;
        }

        if c == ':' && chars.peek() == Some(&':') {
            if segment.is_empty() {
                // `<T as Trait>::Assoc` keeps its separator.
                chars.next();
                out.push_str("::");
            } else {
                // A module prefix: discard it together with the separator.
                chars.next();
                segment.clear();
            }
            continue;
        }

        out.push_str(&segment);
        segment.clear();
        out.push(c);
    }

    out.push_str(&segment);
    out
}

/// The canonical name of `T`.
pub fn type_name_of<T: ?Sized>() -> String {
    canonical_name(core::any::type_name::<T>())
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
