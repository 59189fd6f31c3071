//! Video player field.

use serde::Serialize;

use crate::bag::DataBag;
use crate::field::{Derivation, FieldDescriptor, VariantDefaults};

/// Name resolves before label here; the label is derived from the name.
///
/// The `"blog"` tag is what existing fields documents carry for this kind.
/// It does not match the field's purpose; change it only together with the
/// consumer of the serialized document.
pub const DEFAULTS: VariantDefaults = VariantDefaults {
    type_tag: Some("blog"),
    default_label: "Videoplayer field",
    default_name: "videoplayer_field",
    derivation: Derivation::LabelFromName,
    reserved: &[],
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoField {
    #[serde(flatten)]
    pub base: FieldDescriptor,
}

impl VideoField {
    pub fn new(data: &DataBag) -> Self {
        Self {
            base: FieldDescriptor::with_defaults(data, &DEFAULTS),
        }
    }
}
