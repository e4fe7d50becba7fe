//! Property tables for configurable targets.
//!
//! Every target type declares its settable properties once, at compile time,
//! as a slice of [`PropertyDescriptor`]s. The value kind and the setter are a
//! single [`Setter`] variant, so a descriptor cannot be handed a value of the
//! wrong kind.

use std::fmt;

use collections::FxHashMap;

/// Nick → integer table for enum-valued properties.
pub type EnumNicks = &'static [(&'static str, i32)];

/// The value kind a property expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Bool,
    Int32,
    UInt32,
    Int64,
    Float64,
    Enum(EnumNicks),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => f.write_str("string"),
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::Int32 => f.write_str("int32"),
            ValueKind::UInt32 => f.write_str("uint32"),
            ValueKind::Int64 => f.write_str("int64"),
            ValueKind::Float64 => f.write_str("float64"),
            ValueKind::Enum(_) => f.write_str("enum"),
        }
    }
}

/// Typed setter for one property of `T`.
pub enum Setter<T> {
    String(fn(&mut T, String)),
    Bool(fn(&mut T, bool)),
    Int32(fn(&mut T, i32)),
    UInt32(fn(&mut T, u32)),
    Int64(fn(&mut T, i64)),
    Float64(fn(&mut T, f64)),
    Enum { nicks: EnumNicks, set: fn(&mut T, i32) },
}

impl<T> Setter<T> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Setter::String(_) => ValueKind::String,
            Setter::Bool(_) => ValueKind::Bool,
            Setter::Int32(_) => ValueKind::Int32,
            Setter::UInt32(_) => ValueKind::UInt32,
            Setter::Int64(_) => ValueKind::Int64,
            Setter::Float64(_) => ValueKind::Float64,
            Setter::Enum { nicks, .. } => ValueKind::Enum(*nicks),
        }
    }
}

/// A named, settable property of `T`.
pub struct PropertyDescriptor<T> {
    pub name: &'static str,
    pub setter: Setter<T>,
}

impl<T> PropertyDescriptor<T> {
    pub const fn new(name: &'static str, setter: Setter<T>) -> Self {
        Self { name, setter }
    }

    pub fn kind(&self) -> ValueKind {
        self.setter.kind()
    }
}

impl<T> fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// A type whose state can be driven from the key file.
pub trait Configurable: Sized + 'static {
    /// Dispatch table of every settable property.
    fn properties() -> &'static [PropertyDescriptor<Self>];
}

/// Name → descriptor lookup for one target type.
pub struct PropertyRegistry<T: Configurable> {
    by_name: FxHashMap<&'static str, &'static PropertyDescriptor<T>>,
}

impl<T: Configurable> PropertyRegistry<T> {
    /// Build the lookup table from `T::properties()`.
    pub fn describe() -> Self {
        let table = T::properties();
        let mut by_name = FxHashMap::default();
        by_name.reserve(table.len());
        for descriptor in table {
            if by_name.insert(descriptor.name, descriptor).is_some() {
                tracing::warn!(
                    "Property '{}' declared twice on {}; the last entry wins",
                    descriptor.name,
                    std::any::type_name::<T>()
                );
            }
        }
        Self { by_name }
    }

    /// Look up a property by name.
    pub fn find(&self, name: &str) -> Option<&'static PropertyDescriptor<T>> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Registered property names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<T: Configurable> fmt::Debug for PropertyRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("target", &std::any::type_name::<T>())
            .field("properties", &self.names())
            .finish()
    }
}
