//! # structform
//!
//! Turn any struct into a list of HTML form inputs.
//!
//! structform walks a record's fields in declaration order and produces one
//! [`FieldDescriptor`] per visible scalar field:
//! - Only `pub` fields are included, at every nesting level
//! - Nested records flatten into dotted names (`address.street`)
//! - `Option`, `Box`, `Rc`, `Arc` and references are followed; `None` yields
//!   zero values, so an absent nested record still renders its inputs
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! structform = "0.3"
//! structform-core = "0.3"
//! ```
//!
//! `#[derive(Form)]` emits paths into `structform_core`, so both crates are
//! needed.
//!
//! ## Rendering a Form
//!
//! ```ignore
//! use structform::prelude::*;
//!
//! #[derive(Form, Default)]
//! pub struct Address {
//!     pub street: String,
//!     pub city: String,
//! }
//!
//! #[derive(Form, Default)]
//! pub struct Signup {
//!     pub name: String,
//!     pub email: String,
//!     pub address: Option<Address>,
//!     password_hash: String,
//! }
//!
//! let template = HandlebarsTemplate::input()?;
//! let html = render(&template, &Signup::default())?;
//! // <input type="text" name="name"><input type="text" name="email">
//! // <input type="text" name="address.street"><input type="text" name="address.city">
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`structform_core`] - Reflection traits, extractor, renderer, templates
//! - [`structform_macros`] - `#[derive(Form)]`
//!
//! and adds [`logging`] setup.

pub mod logging;

// Re-export core types
pub use structform_core::{
    ConfigError, DEFAULT_INPUT_TEMPLATE, DEFAULT_INPUT_TYPE, DEFAULT_SEPARATOR, ExtractError,
    ExtractResult, Extractor, Field, FieldDescriptor, FieldInfo, FieldValue, FormConfig,
    HandlebarsTemplate, Html, LogLevel, Record, RecordRef, RenderError, RenderResult, Renderer,
    Resolved, Template, TemplateError, Visibility, ZeroFieldFn, ZeroRecord, extract, render,
};

// Re-export the derive
pub use structform_macros::Form;

// Re-export common dependencies that template authors need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use structform::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Derive: `Form`
/// - Traits: `Field`, `Record`, `Template`
/// - Types: `FieldDescriptor`, `FieldValue`, `FormConfig`, `HandlebarsTemplate`, `Html`
/// - Entry points: `extract`, `render`, `Extractor`, `Renderer`
pub mod prelude {
    pub use crate::{
        ExtractError, Extractor, Field, FieldDescriptor, FieldValue, FormConfig,
        HandlebarsTemplate, Html, Record, RenderError, Renderer, Template, extract, render,
    };

    pub use structform_macros::Form;
}
