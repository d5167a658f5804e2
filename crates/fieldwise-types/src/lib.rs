//! Static metadata model for fieldwise.
//!
//! Every reflected type owns exactly one [`TypeInfo`], built in a `const`
//! item and never mutated. A [`TypeInfo`] lists the type's declared fields as
//! [`FieldInfo`] descriptors in declaration order, names the registry backend
//! that produced it ([`RegistryKind`]), and links to the parent registry when
//! the type declares one.
//!
//! [`TypeSchema`] is the owned, serializable snapshot of a registry, used by
//! tooling that wants to print or diff the metadata.

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod name;

// ============================================================================
// Registry Kinds
// ============================================================================

/// The backend a registry was produced by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// Named fields declared by the type author.
    Declared,
    /// Positional fields of a tuple or tuple struct.
    Tuple,
    /// Positional fields sharing a single element type.
    Homogeneous,
    /// A type that has not opted in. Zero fields.
    Opaque,
}

impl RegistryKind {
    /// Whether the type opted into the registry.
    pub const fn has_registry(self) -> bool {
        !matches!(self, RegistryKind::Opaque)
    }

    /// Whether fields are identified by position rather than by name.
    pub const fn is_positional(self) -> bool {
        matches!(self, RegistryKind::Tuple | RegistryKind::Homogeneous)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistryKind::Declared => "declared",
            RegistryKind::Tuple => "tuple",
            RegistryKind::Homogeneous => "homogeneous",
            RegistryKind::Opaque => "opaque",
        };
        f.pad(s)
    }
}

// ============================================================================
// Type Identity
// ============================================================================

/// How a registry names its type.
#[derive(Clone, Copy)]
pub enum TypeName {
    /// Supplied by the type author (or the derive's identifier).
    Declared(&'static str),
    /// Recovered from `core::any::type_name` through [`name::canonical_name`].
    Synthesized(fn() -> &'static str),
}

impl TypeName {
    /// The name for `T`, synthesized by the compiler.
    pub const fn of<T: ?Sized>() -> Self {
        TypeName::Synthesized(core::any::type_name::<T>)
    }

    /// The unprocessed name: the declared string or the full compiler path.
    pub fn raw(&self) -> &'static str {
        match self {
            TypeName::Declared(name) => name,
            TypeName::Synthesized(thunk) => thunk(),
        }
    }

    /// The display name, with module paths stripped from synthesized names.
    pub fn canonical(&self) -> Cow<'static, str> {
        match self {
            TypeName::Declared(name) => Cow::Borrowed(name),
            TypeName::Synthesized(thunk) => Cow::Owned(name::canonical_name(thunk())),
        }
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Declared(name) => f.debug_tuple("Declared").field(name).finish(),
            TypeName::Synthesized(thunk) => f.debug_tuple("Synthesized").field(&thunk()).finish(),
        }
    }
}

/// A field's declared type, captured as compiler-provided thunks.
#[derive(Clone, Copy)]
pub struct TypeRef {
    name: fn() -> &'static str,
    id: fn() -> TypeId,
}

impl TypeRef {
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: core::any::type_name::<T>,
            id: TypeId::of::<T>,
        }
    }

    /// Full compiler path of the type.
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    /// Display name with module paths stripped.
    pub fn canonical_name(&self) -> String {
        name::canonical_name(self.name())
    }

    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// Whether this is the type `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id() == TypeId::of::<T>()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeRef {}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Field Descriptors
// ============================================================================

/// One entry of a registry's field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    index: usize,
    name: Option<&'static str>,
    ty: TypeRef,
}

impl FieldInfo {
    /// A field identified by its declared name.
    pub const fn named<T: 'static>(index: usize, name: &'static str) -> Self {
        Self {
            index,
            name: Some(name),
            ty: TypeRef::of::<T>(),
        }
    }

    /// A field identified only by its position.
    pub const fn positional<T: 'static>(index: usize) -> Self {
        Self {
            index,
            name: None,
            ty: TypeRef::of::<T>(),
        }
    }

    /// Position within the declaring type, starting at zero.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The declared name, or `None` for positional fields.
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub const fn ty(&self) -> TypeRef {
        self.ty
    }

    /// The declared name, falling back to the index for positional fields.
    pub fn label(&self) -> Cow<'static, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.index.to_string()),
        }
    }

    /// Owned snapshot of this descriptor.
    pub fn schema(&self) -> FieldSchema {
        FieldSchema {
            index: self.index,
            name: self.name.map(str::to_string),
            ty: self.ty.canonical_name(),
        }
    }
}

/// `N` positional descriptors sharing the element type `T`.
pub const fn positional_fields<T: 'static, const N: usize>() -> [FieldInfo; N] {
    let mut fields = [FieldInfo::positional::<T>(0); N];
    let mut i = 0;
    while i < N {
        fields[i] = FieldInfo::positional::<T>(i);
        i += 1;
    }
    fields
}

// ============================================================================
// Type Registries
// ============================================================================

/// The registry of one type: its name, backend, fields and parent.
///
/// Registries are built as `const` items, so the fields are public to allow
/// struct-literal construction in constant context.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: TypeName,
    pub kind: RegistryKind,
    /// Fields declared by this type itself, in declaration order.
    pub fields: &'static [FieldInfo],
    pub parent: Option<&'static TypeInfo>,
}

impl TypeInfo {
    /// The registry of a type that has not opted in.
    pub const fn opaque(name: TypeName) -> Self {
        Self {
            name,
            kind: RegistryKind::Opaque,
            fields: &[],
            parent: None,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> Cow<'static, str> {
        self.name.canonical()
    }

    pub const fn has_registry(&self) -> bool {
        self.kind.has_registry()
    }

    pub const fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// Declared name of field `index`. `None` when out of range or positional.
    pub fn field_name(&self, index: usize) -> Option<&'static str> {
        self.fields.get(index).and_then(FieldInfo::name)
    }

    /// Labels of all own fields, in order.
    pub fn field_names(&self) -> Vec<Cow<'static, str>> {
        self.fields.iter().map(FieldInfo::label).collect()
    }

    /// Position of the first own field whose label is `name`.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.label() == name)
    }

    /// The inheritance chain, root ancestor first and `self` last.
    pub fn lineage(&self) -> Vec<&TypeInfo> {
        let mut chain = vec![self];
        let mut current = self.parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = parent.parent;
        }
        chain.reverse();
        chain
    }

    /// Every field along the inheritance chain, ancestor fields first.
    pub fn full_fields(&self) -> Vec<&'static FieldInfo> {
        self.lineage()
            .into_iter()
            .flat_map(|info| info.fields.iter())
            .collect()
    }

    pub fn full_field_count(&self) -> usize {
        self.lineage().iter().map(|info| info.field_count()).sum()
    }

    /// Owned snapshot of this registry and its ancestors.
    pub fn schema(&self) -> TypeSchema {
        TypeSchema {
            name: self.name().into_owned(),
            kind: self.kind,
            fields: self.fields.iter().map(FieldInfo::schema).collect(),
            parent: self.parent.map(|p| Box::new(p.schema())),
        }
    }
}

// ============================================================================
// Schema Snapshots
// ============================================================================

/// Serializable description of a registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSchema {
    /// Canonical display name
    pub name: String,
    /// Backend that produced the registry
    pub kind: RegistryKind,
    /// Own fields, in declaration order
    pub fields: Vec<FieldSchema>,
    /// Parent registry, when one is declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<TypeSchema>>,
}

impl TypeSchema {
    /// Number of fields across the whole inheritance chain.
    pub fn full_field_count(&self) -> usize {
        self.fields.len() + self.parent.as_ref().map_or(0, |p| p.full_field_count())
    }
}

/// Serializable description of one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSchema {
    pub index: usize,
    /// Declared name; absent for positional fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canonical type name
    #[serde(rename = "type")]
    pub ty: String,
}
