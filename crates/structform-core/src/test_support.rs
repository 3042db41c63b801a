//! Hand-written records shared by unit tests

use crate::{Field, FieldInfo, Record, RecordRef, Resolved, ZeroRecord};

#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl Contact {
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo::public("name"),
        FieldInfo::public("email"),
        FieldInfo::public("age"),
    ];

    pub fn new(name: &str, email: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

impl Record for Contact {
    fn record_name(&self) -> &'static str {
        "Contact"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        Self::FIELDS
    }

    fn field(&self, index: usize) -> Option<Resolved<'_>> {
        match index {
            0 => Some(self.name.resolve()),
            1 => Some(self.email.resolve()),
            2 => Some(self.age.resolve()),
            _ => None,
        }
    }
}

impl Field for Contact {
    fn resolve(&self) -> Resolved<'_> {
        Resolved::Record(RecordRef::Borrowed(self))
    }

    fn zero() -> Resolved<'static> {
        Resolved::Record(RecordRef::Owned(Box::new(ZeroRecord::new(
            "Contact",
            Self::FIELDS,
            |index| match index {
                0 => Some(String::zero()),
                1 => Some(String::zero()),
                2 => Some(i32::zero()),
                _ => None,
            },
        ))))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    #[allow(dead_code)]
    pub(crate) geohash: String,
}

impl Address {
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo::public("street"),
        FieldInfo::public("city"),
        FieldInfo::hidden("geohash"),
    ];

    pub fn new(street: &str, city: &str) -> Self {
        Self {
            street: street.to_string(),
            city: city.to_string(),
            geohash: "u3qcnhz".to_string(),
        }
    }
}

impl Record for Address {
    fn record_name(&self) -> &'static str {
        "Address"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        Self::FIELDS
    }

    fn field(&self, index: usize) -> Option<Resolved<'_>> {
        match index {
            0 => Some(self.street.resolve()),
            1 => Some(self.city.resolve()),
            _ => None,
        }
    }
}

impl Field for Address {
    fn resolve(&self) -> Resolved<'_> {
        Resolved::Record(RecordRef::Borrowed(self))
    }

    fn zero() -> Resolved<'static> {
        Resolved::Record(RecordRef::Owned(Box::new(ZeroRecord::new(
            "Address",
            Self::FIELDS,
            |index| match index {
                0 | 1 => Some(String::zero()),
                _ => None,
            },
        ))))
    }
}

/// Mixes hidden fields, nesting, and optional references
#[derive(Debug, Clone, Default)]
pub struct Customer {
    pub name: String,
    password: String,
    pub address: Address,
    pub billing: Option<Box<Address>>,
    pub nickname: Option<String>,
    pub score: Option<u8>,
}

impl Customer {
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo::public("name"),
        FieldInfo::hidden("password"),
        FieldInfo::public("address"),
        FieldInfo::public("billing"),
        FieldInfo::public("nickname"),
        FieldInfo::public("score"),
    ];

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            password: "hunter2".to_string(),
            address: Address::new("1 Main St", "Springfield"),
            billing: None,
            nickname: None,
            score: None,
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Record for Customer {
    fn record_name(&self) -> &'static str {
        "Customer"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        Self::FIELDS
    }

    fn field(&self, index: usize) -> Option<Resolved<'_>> {
        match index {
            0 => Some(self.name.resolve()),
            2 => Some(self.address.resolve()),
            3 => Some(self.billing.resolve()),
            4 => Some(self.nickname.resolve()),
            5 => Some(self.score.resolve()),
            _ => None,
        }
    }
}

impl Field for Customer {
    fn resolve(&self) -> Resolved<'_> {
        Resolved::Record(RecordRef::Borrowed(self))
    }

    fn zero() -> Resolved<'static> {
        Resolved::Record(RecordRef::Owned(Box::new(ZeroRecord::new(
            "Customer",
            Self::FIELDS,
            |index| match index {
                0 => Some(String::zero()),
                2 => Some(Address::zero()),
                3 => Some(<Option<Box<Address>>>::zero()),
                4 => Some(<Option<String>>::zero()),
                5 => Some(<Option<u8>>::zero()),
                _ => None,
            },
        ))))
    }
}

/// Record whose table claims a visible field it cannot produce
pub struct Inconsistent;

impl Record for Inconsistent {
    fn record_name(&self) -> &'static str {
        "Inconsistent"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        const FIELDS: &[FieldInfo] = &[FieldInfo::public("ghost"), FieldInfo::public("real")];
        FIELDS
    }

    fn field(&self, index: usize) -> Option<Resolved<'_>> {
        match index {
            1 => Some(Resolved::Scalar("here".into())),
            _ => None,
        }
    }
}

impl Field for Inconsistent {
    fn resolve(&self) -> Resolved<'_> {
        Resolved::Record(RecordRef::Borrowed(self))
    }

    fn zero() -> Resolved<'static> {
        Resolved::Record(RecordRef::Owned(Box::new(Inconsistent)))
    }
}
