//! Form field descriptors

use crate::value::FieldValue;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Input type used when no configuration overrides it
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// One renderable input element
///
/// Serialized with PascalCase keys (`Label`, `Name`, `Type`, `Placeholder`,
/// `Value`), which is the data context templates see, plus a derived
/// `HasValue` key equal to `!value.is_empty()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Declared name of the leaf field
    pub label: String,

    /// Dotted path from the top-level record to the leaf field
    pub name: String,

    /// Input kind, `"text"` by default
    pub input_type: String,

    /// Declared name of the leaf field
    pub placeholder: String,

    /// Current value of the leaf field
    pub value: FieldValue,
}

impl FieldDescriptor {
    /// Create a descriptor for a top-level scalar field
    pub fn new(name: impl Into<String>, input_type: impl Into<String>, value: FieldValue) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            placeholder: name.clone(),
            name,
            input_type: input_type.into(),
            value,
        }
    }

    /// Prefix the machine name with an ancestor field name
    ///
    /// `Label` and `Placeholder` keep the leaf name.
    pub fn nested_under(mut self, parent: &str, separator: &str) -> Self {
        self.name = format!("{}{}{}", parent, separator, self.name);
        self
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldDescriptor", 6)?;
        state.serialize_field("Label", &self.label)?;
        state.serialize_field("Name", &self.name)?;
        state.serialize_field("Type", &self.input_type)?;
        state.serialize_field("Placeholder", &self.placeholder)?;
        state.serialize_field("Value", &self.value)?;
        state.serialize_field("HasValue", &!self.value.is_empty())?;
        state.end()
    }
}
