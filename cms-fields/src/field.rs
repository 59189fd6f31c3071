//! Base field descriptor and the shared normalization every kind runs.
//!
//! A descriptor is built once from a [`DataBag`] and is never mutated by this
//! crate afterwards. Recognized attributes are always well-formed; anything
//! else the caller supplied survives untouched in [`FieldDescriptor::extra`].

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::bag::{flag, truthy_str, truthy_value, DataBag};
use crate::casing::{to_sentence_case, to_snake_case};

/// Keys the base descriptor owns. They never appear in the passthrough bag.
const BASE_KEYS: &[&str] = &[
    "type",
    "name",
    "label",
    "help_text",
    "inline_help_text",
    "id",
    "locked",
    "required",
    "visibility",
    "display_width",
];

/// Layout marker that pairs a field with the next half-width field.
pub const HALF_WIDTH: &str = "half_width";

/// Which of `name` / `label` is resolved first when one is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// `label` defaults first; a missing `name` is snake-cased from it.
    NameFromLabel,
    /// `name` defaults first; a missing `label` is sentence-cased from it.
    LabelFromName,
}

/// Per-kind defaults fed to the shared normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDefaults {
    /// Fixed `type` tag. `None` passes the caller's `type` through.
    pub type_tag: Option<&'static str>,
    pub default_label: &'static str,
    pub default_name: &'static str,
    pub derivation: Derivation,
    /// Kind-specific keys the kind handles itself; kept out of `extra`.
    pub reserved: &'static [&'static str],
}

impl VariantDefaults {
    /// Defaults for a plain field with no kind of its own.
    pub const BASE: Self = Self {
        type_tag: None,
        default_label: "Field",
        default_name: "field",
        derivation: Derivation::NameFromLabel,
        reserved: &[],
    };

    /// True if `key` is normalized by the base or by this kind.
    pub fn recognizes(&self, key: &str) -> bool {
        BASE_KEYS.contains(&key) || self.reserved.contains(&key)
    }
}

/// The attributes every field shares.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<Value>,
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_help_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub locked: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Value>,
    /// Serialized as `null` when unset.
    pub display_width: Option<Value>,
    /// Unrecognized input keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: DataBag,
}

impl FieldDescriptor {
    /// Normalize a bag into a plain field.
    pub fn new(data: &DataBag) -> Self {
        Self::with_defaults(data, &VariantDefaults::BASE)
    }

    /// Normalize a bag using a kind's defaults.
    pub fn with_defaults(data: &DataBag, defaults: &VariantDefaults) -> Self {
        let (name, label) = match defaults.derivation {
            Derivation::NameFromLabel => {
                let label = truthy_str(data, "label").unwrap_or(defaults.default_label);
                (name_from_label(data, label, defaults), label.to_string())
            }
            Derivation::LabelFromName => {
                let name = match truthy_str(data, "name") {
                    Some(name) => name.to_string(),
                    None => {
                        debug!(name = defaults.default_name, "using default field name");
                        defaults.default_name.to_string()
                    }
                };
                let label = truthy_str(data, "label")
                    .map(str::to_string)
                    .unwrap_or_else(|| to_sentence_case(&name));
                (name, label)
            }
        };

        let type_ = match defaults.type_tag {
            Some(tag) => Some(Value::String(tag.to_string())),
            None => data.get("type").cloned(),
        };

        let extra: DataBag = data
            .iter()
            .filter(|(key, _)| !defaults.recognizes(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        trace!(%name, extra = extra.len(), "normalized field descriptor");

        Self {
            type_,
            name,
            label,
            help_text: data.get("help_text").cloned(),
            inline_help_text: data.get("inline_help_text").cloned(),
            id: data.get("id").cloned(),
            locked: flag(data, "locked"),
            required: flag(data, "required"),
            visibility: data.get("visibility").cloned(),
            display_width: truthy_value(data, "display_width").cloned(),
            extra,
        }
    }

    /// The `type` tag, when it is a string.
    pub fn field_type(&self) -> Option<&str> {
        self.type_.as_ref().and_then(Value::as_str)
    }

    /// True when the field is laid out side by side with its neighbour.
    pub fn is_half_width(&self) -> bool {
        self.display_width.as_ref().and_then(Value::as_str) == Some(HALF_WIDTH)
    }
}

/// Explicit name, then snake-cased label, then the kind's hardcoded name.
fn name_from_label(data: &DataBag, label: &str, defaults: &VariantDefaults) -> String {
    if let Some(name) = truthy_str(data, "name") {
        return name.to_string();
    }
    let derived = to_snake_case(label);
    if derived.is_empty() {
        debug!(label, name = defaults.default_name, "label yields no name, using default");
        return defaults.default_name.to_string();
    }
    debug!(label, name = %derived, "derived field name from label");
    derived
}
