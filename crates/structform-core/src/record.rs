//! Record reflection: static field tables and field access

use crate::field::Resolved;
use std::fmt;
use std::ops::Deref;

/// Whether code outside the declaring module may read a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared plain `pub`
    Public,
    /// Private or restricted (`pub(crate)`, `pub(super)`, `pub(in ..)`)
    Hidden,
}

impl Visibility {
    pub const fn is_visible(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// One entry of a record's static field table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    /// Declared field name
    pub name: &'static str,
    pub visibility: Visibility,
}

impl FieldInfo {
    /// Table entry for a visible field
    pub const fn public(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
        }
    }

    /// Table entry for a field external callers cannot read
    pub const fn hidden(name: &'static str) -> Self {
        Self {
            name,
            visibility: Visibility::Hidden,
        }
    }
}

/// A value with a fixed, statically known, named set of fields
///
/// Usually implemented through `#[derive(Form)]`. Hand-written impls must
/// keep `fields()` in declaration order and return `Some` from `field()` for
/// every visible index.
///
/// # Example
///
/// ```ignore
/// struct Login {
///     pub user: String,
///     token: String,
/// }
///
/// impl Record for Login {
///     fn record_name(&self) -> &'static str {
///         "Login"
///     }
///
///     fn fields(&self) -> &'static [FieldInfo] {
///         const FIELDS: &[FieldInfo] = &[FieldInfo::public("user"), FieldInfo::hidden("token")];
///         FIELDS
///     }
///
///     fn field(&self, index: usize) -> Option<Resolved<'_>> {
///         match index {
///             0 => Some(self.user.resolve()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Type name of the record, for diagnostics
    fn record_name(&self) -> &'static str;

    /// Every declared field, visible or not, in declaration order
    fn fields(&self) -> &'static [FieldInfo];

    /// Resolved value of the field at `index` in [`Record::fields`]
    ///
    /// Returns `None` for hidden fields and out-of-range indices.
    fn field(&self, index: usize) -> Option<Resolved<'_>>;
}

/// A record reached during resolution: either borrowed from the input, or
/// synthesized as the zero value of an absent pointee
pub enum RecordRef<'a> {
    Borrowed(&'a (dyn Record + 'a)),
    Owned(Box<dyn Record + 'a>),
}

impl<'a> Deref for RecordRef<'a> {
    type Target = dyn Record + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            RecordRef::Borrowed(record) => *record,
            RecordRef::Owned(record) => record.as_ref(),
        }
    }
}

impl fmt::Debug for RecordRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            RecordRef::Borrowed(_) => "Borrowed",
            RecordRef::Owned(_) => "Owned",
        };
        f.debug_tuple(kind).field(&self.record_name()).finish()
    }
}

/// Resolves the zero value of one field of a record type
pub type ZeroFieldFn = fn(usize) -> Option<Resolved<'static>>;

/// Zero-valued instance of a record type
///
/// Stands in for the pointee of an absent `Option<T>`. Every visible field
/// resolves to the zero value of its own declared type, so nested records
/// expand and scalars report `""`, `0` or `false`.
pub struct ZeroRecord {
    name: &'static str,
    fields: &'static [FieldInfo],
    zero_field: ZeroFieldFn,
}

impl ZeroRecord {
    pub fn new(name: &'static str, fields: &'static [FieldInfo], zero_field: ZeroFieldFn) -> Self {
        Self {
            name,
            fields,
            zero_field,
        }
    }
}

impl Record for ZeroRecord {
    fn record_name(&self) -> &'static str {
        self.name
    }

    fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    fn field(&self, index: usize) -> Option<Resolved<'_>> {
        (self.zero_field)(index)
    }
}
