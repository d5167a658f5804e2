//! Support for [`has_registry!`](crate::has_registry), which answers for any
//! concrete type, including types that do not implement `Reflect` at all.
//!
//! Method resolution prefers `ProbeRegistered` on `Probe<T>` when
//! `T: Reflect` and falls back to `ProbeFallback` on `&Probe<T>` otherwise.
//! The choice is made statically at the call site, so it only works where the
//! type is concrete; generic code should bound on `Reflect` and read
//! `T::HAS_REGISTRY` instead.

use std::marker::PhantomData;

use crate::registry::Reflect;

pub struct Probe<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> Probe<T> {
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

pub trait ProbeRegistered {
    fn has_registry(&self) -> bool;
}

impl<T: Reflect> ProbeRegistered for Probe<T> {
    fn has_registry(&self) -> bool {
        T::HAS_REGISTRY
    }
}

pub trait ProbeFallback {
    fn has_registry(&self) -> bool;
}

impl<T: ?Sized> ProbeFallback for &Probe<T> {
    fn has_registry(&self) -> bool {
        false
    }
}

/// Whether a concrete type has opted into the registry.
///
/// `false` for opaque types and for types that do not implement `Reflect`.
///
/// ```
/// use fieldwise_core::has_registry;
///
/// struct Plain;
///
/// assert!(has_registry!((i32, String)));
/// assert!(!has_registry!(u64));
/// assert!(!has_registry!(Plain));
/// ```
#[macro_export]
macro_rules! has_registry {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{ProbeFallback as _, ProbeRegistered as _};
        (&$crate::probe::Probe::<$ty>::new()).has_registry()
    }};
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    struct NotReflected {
        _inner: u8,
    }

    #[test]
    fn test_probe_distinguishes_registered_types() {
        assert!(has_registry!((u8, u8)));
        assert!(has_registry!([f32; 3]));
        assert!(has_registry!(()));
        assert!(!has_registry!(bool));
        assert!(!has_registry!(NotReflected));
        assert!(!has_registry!(HashMap<String, u32>));
        assert!(!has_registry!(str));
    }
}
