//! Logo field: picks a logo image, inheriting the site's logo by default.

use serde::Serialize;
use serde_json::Value;

use crate::bag::{truthy_value, DataBag};
use crate::field::{Derivation, FieldDescriptor, VariantDefaults};

pub const DEFAULTS: VariantDefaults = VariantDefaults {
    type_tag: Some("logo"),
    default_label: "Logo field",
    default_name: "logo_field",
    derivation: Derivation::NameFromLabel,
    reserved: &["default"],
};

/// Logo value used when the caller gives none.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LogoDefault {
    pub override_inherited_src: bool,
    pub src: Option<String>,
    pub alt: Option<String>,
}

impl LogoDefault {
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "override_inherited_src": self.override_inherited_src,
            "src": self.src,
            "alt": self.alt,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogoField {
    #[serde(flatten)]
    pub base: FieldDescriptor,
    /// Caller value replaces the fallback wholesale, never merged.
    pub default: Value,
}

impl LogoField {
    pub fn new(data: &DataBag) -> Self {
        let default = truthy_value(data, "default")
            .cloned()
            .unwrap_or_else(|| LogoDefault::default().to_value());
        Self {
            base: FieldDescriptor::with_defaults(data, &DEFAULTS),
            default,
        }
    }
}
