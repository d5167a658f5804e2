//! Visitors and the traversal entry points.
//!
//! A visitor is called once per field, in declaration order, with the field's
//! descriptor and a reference of the field's concrete type. Visiting is fully
//! static: each call site is monomorphized for the field type.
//!
//! Closures are accepted through [`VisitFn`], which erases each field to
//! `&dyn Any` so a single closure can handle every field type.

use std::any::Any;

use fieldwise_types::FieldInfo;

use crate::registry::Reflect;

/// Called once per field with a shared reference.
pub trait Visitor {
    fn visit<T: 'static>(&mut self, field: &FieldInfo, value: &T);
}

/// Called once per field with a mutable reference.
pub trait VisitorMut {
    fn visit_mut<T: 'static>(&mut self, field: &FieldInfo, value: &mut T);
}

/// Adapts a closure over type-erased fields into a visitor.
pub struct VisitFn<F>(pub F);

impl<F> Visitor for VisitFn<F>
where
    F: FnMut(&FieldInfo, &dyn Any),
{
    fn visit<T: 'static>(&mut self, field: &FieldInfo, value: &T) {
        (self.0)(field, value as &dyn Any)
    }
}

impl<F> VisitorMut for VisitFn<F>
where
    F: FnMut(&FieldInfo, &mut dyn Any),
{
    fn visit_mut<T: 'static>(&mut self, field: &FieldInfo, value: &mut T) {
        (self.0)(field, value as &mut dyn Any)
    }
}

/// Apply `f` to each own field of `instance`.
///
/// ```
/// use fieldwise_core::for_each;
///
/// let mut total = 0i64;
/// for_each(&(1i64, 2i64, 3i64), |_, v| total += v.downcast_ref::<i64>().unwrap());
/// assert_eq!(total, 6);
/// ```
pub fn for_each<T, F>(instance: &T, f: F)
where
    T: Reflect,
    F: FnMut(&FieldInfo, &dyn Any),
{
    instance.for_each(&mut VisitFn(f));
}

pub fn for_each_mut<T, F>(instance: &mut T, f: F)
where
    T: Reflect,
    F: FnMut(&FieldInfo, &mut dyn Any),
{
    instance.for_each_mut(&mut VisitFn(f));
}

/// Apply `f` to each field along the inheritance chain, ancestors first.
pub fn for_each_full<T, F>(instance: &T, f: F)
where
    T: Reflect,
    F: FnMut(&FieldInfo, &dyn Any),
{
    instance.for_each_full(&mut VisitFn(f));
}

pub fn for_each_full_mut<T, F>(instance: &mut T, f: F)
where
    T: Reflect,
    F: FnMut(&FieldInfo, &mut dyn Any),
{
    instance.for_each_full_mut(&mut VisitFn(f));
}

/// Records the labels of visited fields in visit order.
#[derive(Debug, Default)]
pub struct FieldTrail {
    pub labels: Vec<String>,
}

impl Visitor for FieldTrail {
    fn visit<T: 'static>(&mut self, field: &FieldInfo, _value: &T) {
        self.labels.push(field.label().into_owned());
    }
}

impl VisitorMut for FieldTrail {
    fn visit_mut<T: 'static>(&mut self, field: &FieldInfo, _value: &mut T) {
        self.labels.push(field.label().into_owned());
    }
}
