//! Field slots and reference resolution

use crate::record::RecordRef;
use crate::value::FieldValue;
use std::rc::Rc;
use std::sync::Arc;

/// Outcome of resolving a field slot through any reference layers
#[derive(Debug)]
pub enum Resolved<'a> {
    /// A record; its fields are enumerated
    Record(RecordRef<'a>),
    /// A scalar; becomes one descriptor
    Scalar(FieldValue),
}

impl Resolved<'_> {
    /// Whether the value is record-shaped
    pub fn is_record(&self) -> bool {
        matches!(self, Resolved::Record(_))
    }

    /// Short description of what was resolved, used in error messages
    pub fn kind(&self) -> String {
        match self {
            Resolved::Record(record) => format!("record {}", record.record_name()),
            Resolved::Scalar(value) => format!("scalar {}", value.kind()),
        }
    }
}

/// Anything that can occupy a field slot or be passed to the extractor
///
/// Resolution is total: references are followed, `None` becomes the zero
/// value of the pointee type, and every path ends in a record or a scalar.
/// Sequences and maps deliberately have no impl.
pub trait Field {
    /// Resolve this value
    fn resolve(&self) -> Resolved<'_>;

    /// Resolve the zero value of this type
    fn zero() -> Resolved<'static>;
}

macro_rules! scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(impl Field for $ty {
            fn resolve(&self) -> Resolved<'_> {
                Resolved::Scalar(FieldValue::from(*self))
            }

            fn zero() -> Resolved<'static> {
                Resolved::Scalar(FieldValue::from(<$ty>::default()))
            }
        })*
    };
}

scalar_field!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

impl Field for String {
    fn resolve(&self) -> Resolved<'_> {
        Resolved::Scalar(FieldValue::Str(self.clone()))
    }

    fn zero() -> Resolved<'static> {
        Resolved::Scalar(FieldValue::Str(String::new()))
    }
}

impl Field for str {
    fn resolve(&self) -> Resolved<'_> {
        Resolved::Scalar(FieldValue::Str(self.to_string()))
    }

    fn zero() -> Resolved<'static> {
        Resolved::Scalar(FieldValue::Str(String::new()))
    }
}

// Nullable reference: the only path to an absent pointee
impl<T: Field> Field for Option<T> {
    fn resolve(&self) -> Resolved<'_> {
        match self {
            Some(inner) => inner.resolve(),
            None => T::zero(),
        }
    }

    fn zero() -> Resolved<'static> {
        T::zero()
    }
}

impl<T: Field + ?Sized> Field for &T {
    fn resolve(&self) -> Resolved<'_> {
        (**self).resolve()
    }

    fn zero() -> Resolved<'static> {
        T::zero()
    }
}

impl<T: Field + ?Sized> Field for &mut T {
    fn resolve(&self) -> Resolved<'_> {
        (**self).resolve()
    }

    fn zero() -> Resolved<'static> {
        T::zero()
    }
}

impl<T: Field + ?Sized> Field for Box<T> {
    fn resolve(&self) -> Resolved<'_> {
        (**self).resolve()
    }

    fn zero() -> Resolved<'static> {
        T::zero()
    }
}

impl<T: Field + ?Sized> Field for Rc<T> {
    fn resolve(&self) -> Resolved<'_> {
        (**self).resolve()
    }

    fn zero() -> Resolved<'static> {
        T::zero()
    }
}

impl<T: Field + ?Sized> Field for Arc<T> {
    fn resolve(&self) -> Resolved<'_> {
        (**self).resolve()
    }

    fn zero() -> Resolved<'static> {
        T::zero()
    }
}
