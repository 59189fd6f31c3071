//! Field descriptors for CMS modules and themes
//!
//! `cms-fields` turns loosely-typed attribute bags into normalized field
//! descriptors ready to be written into a fields document. It fills defaults;
//! it does not validate. Consumers own I/O and any schema checks.
//!
//! # Architecture
//!
//! - **One normalization**: every kind runs [`FieldDescriptor::with_defaults`]
//!   with its own [`VariantDefaults`] record
//! - **Closed kinds**: [`Field`] is a tagged union over the supported kinds
//! - **Passthrough**: unrecognized input keys survive verbatim in `extra`
//! - **Infallible builds**: only parsing and rendering return [`Result`]
//!
//! ```rust,ignore
//! let data = cms_fields::parse_json(r#"{"label": "Show logo"}"#)?;
//! let set = FieldSet::new().with(BooleanField::new(&data));
//! let json = set.to_json()?;
//! ```

pub mod bag;
pub mod casing;
pub mod error;
pub mod field;
pub mod kinds;
pub mod set;

pub use bag::{bag_from_value, is_truthy, parse_json, parse_yaml, DataBag};
pub use casing::{to_sentence_case, to_snake_case};
pub use error::{FieldsError, Result};
pub use field::{Derivation, FieldDescriptor, VariantDefaults, HALF_WIDTH};
pub use kinds::{BooleanField, Field, FieldKind, LogoDefault, LogoField, VideoField};
pub use set::{FieldSet, OutputFormat};
