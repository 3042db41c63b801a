//! Field extraction: flattening a record into descriptors

use crate::config::{DEFAULT_SEPARATOR, FormConfig};
use crate::descriptor::{DEFAULT_INPUT_TYPE, FieldDescriptor};
use crate::error::{ExtractError, ExtractResult};
use crate::field::{Field, Resolved};
use crate::record::Record;

/// Extract descriptors from `value` with the default configuration
///
/// # Example
///
/// ```ignore
/// #[derive(Form)]
/// struct Contact {
///     pub name: String,
///     pub age: u32,
/// }
///
/// let fields = extract(&Contact { name: "Kasia".into(), age: 123 })?;
/// assert_eq!(fields[1].name, "age");
/// ```
pub fn extract<T: Field + ?Sized>(value: &T) -> ExtractResult<Vec<FieldDescriptor>> {
    Extractor::default().extract(value)
}

/// Walks records and produces descriptors in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    input_type: String,
    separator: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            input_type: DEFAULT_INPUT_TYPE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            input_type: config.input_type.clone(),
            separator: config.separator.clone(),
        }
    }

    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Extract descriptors from any record, or reference to one
    ///
    /// Fails with [`ExtractError::InvalidInputKind`] when `value` resolves to
    /// a scalar.
    pub fn extract<T: Field + ?Sized>(&self, value: &T) -> ExtractResult<Vec<FieldDescriptor>> {
        match value.resolve() {
            Resolved::Record(record) => {
                let fields = self.extract_record(&*record);
                tracing::debug!(
                    record = record.record_name(),
                    fields = fields.len(),
                    "extracted form fields"
                );
                Ok(fields)
            }
            resolved @ Resolved::Scalar(_) => {
                let kind = resolved.kind();
                tracing::debug!(kind = %kind, "rejected non-record input");
                Err(ExtractError::InvalidInputKind { kind })
            }
        }
    }

    /// Extract descriptors from an already-resolved record
    pub fn extract_record(&self, record: &dyn Record) -> Vec<FieldDescriptor> {
        let mut out = Vec::new();
        self.collect(record, &mut out);
        out
    }

    fn collect(&self, record: &dyn Record, out: &mut Vec<FieldDescriptor>) {
        for (index, info) in record.fields().iter().enumerate() {
            if !info.visibility.is_visible() {
                tracing::trace!(
                    record = record.record_name(),
                    field = info.name,
                    "skipping hidden field"
                );
                continue;
            }
            let Some(resolved) = record.field(index) else {
                tracing::warn!(
                    record = record.record_name(),
                    field = info.name,
                    "visible field has no value; skipping"
                );
                continue;
            };
            match resolved {
                Resolved::Record(nested) => {
                    tracing::trace!(
                        record = record.record_name(),
                        field = info.name,
                        nested = nested.record_name(),
                        "descending into nested record"
                    );
                    let children = self.extract_record(&*nested);
                    out.extend(
                        children
                            .into_iter()
                            .map(|child| child.nested_under(info.name, &self.separator)),
                    );
                }
                Resolved::Scalar(value) => {
                    out.push(FieldDescriptor::new(info.name, self.input_type.as_str(), value));
                }
            }
        }
    }
}
