//! Field kinds and the closed set of built descriptors.
//!
//! Each kind module owns its `DEFAULTS` record and a builder. [`Field`] is the
//! tagged union a fields document is made of.

pub mod boolean;
pub mod logo;
pub mod video;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bag::DataBag;
use crate::error::FieldsError;
use crate::field::FieldDescriptor;

pub use boolean::BooleanField;
pub use logo::{LogoDefault, LogoField};
pub use video::VideoField;

/// Which builder to run for a data bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Generic,
    Boolean,
    Logo,
    Video,
}

impl FieldKind {
    pub const ALL: [Self; 4] = [Self::Generic, Self::Boolean, Self::Logo, Self::Video];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "field",
            Self::Boolean => "boolean",
            Self::Logo => "logo",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FieldsError::UnknownFieldKind {
                name: s.to_string(),
            })
    }
}

/// A built field of any kind. Serializes as the inner descriptor.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Field {
    Generic(FieldDescriptor),
    Boolean(BooleanField),
    Logo(LogoField),
    Video(VideoField),
}

impl Field {
    /// Run the builder for `kind` over `data`.
    pub fn build(kind: FieldKind, data: &DataBag) -> Self {
        match kind {
            FieldKind::Generic => Self::Generic(FieldDescriptor::new(data)),
            FieldKind::Boolean => Self::Boolean(BooleanField::new(data)),
            FieldKind::Logo => Self::Logo(LogoField::new(data)),
            FieldKind::Video => Self::Video(VideoField::new(data)),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Generic(_) => FieldKind::Generic,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Logo(_) => FieldKind::Logo,
            Self::Video(_) => FieldKind::Video,
        }
    }

    /// The shared attributes of whichever kind this is.
    pub fn descriptor(&self) -> &FieldDescriptor {
        match self {
            Self::Generic(d) => d,
            Self::Boolean(f) => &f.base,
            Self::Logo(f) => &f.base,
            Self::Video(f) => &f.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.descriptor().name
    }

    pub fn label(&self) -> &str {
        &self.descriptor().label
    }
}

impl From<FieldDescriptor> for Field {
    fn from(d: FieldDescriptor) -> Self {
        Self::Generic(d)
    }
}

impl From<BooleanField> for Field {
    fn from(f: BooleanField) -> Self {
        Self::Boolean(f)
    }
}

impl From<LogoField> for Field {
    fn from(f: LogoField) -> Self {
        Self::Logo(f)
    }
}

impl From<VideoField> for Field {
    fn from(f: VideoField) -> Self {
        Self::Video(f)
    }
}
