//! Boolean field: lets editors switch functionality on or off.

use serde::Serialize;
use serde_json::Value;

use crate::bag::DataBag;
use crate::field::{Derivation, FieldDescriptor, VariantDefaults};

pub const DEFAULTS: VariantDefaults = VariantDefaults {
    type_tag: Some("boolean"),
    default_label: "Boolean field",
    default_name: "boolean_field",
    derivation: Derivation::NameFromLabel,
    reserved: &["default", "display"],
};

/// A true/false field rendered as a checkbox or a toggle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BooleanField {
    #[serde(flatten)]
    pub base: FieldDescriptor,
    /// Caller-supplied default state. Left unset when not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// `"checkbox"` or `"toggle"`, passed through as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Value>,
}

impl BooleanField {
    pub fn new(data: &DataBag) -> Self {
        Self {
            base: FieldDescriptor::with_defaults(data, &DEFAULTS),
            default: data.get("default").cloned(),
            display: data.get("display").cloned(),
        }
    }

    /// The default state, when the caller gave a real boolean.
    pub fn default_state(&self) -> Option<bool> {
        self.default.as_ref().and_then(Value::as_bool)
    }
}
