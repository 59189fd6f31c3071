//! Ordered field collections and their rendered fields document.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::kinds::Field;

/// Output encoding for a fields document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(FieldsError::UnknownOutputFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Fields in authoring order. Serializes as a plain array.
///
/// Sibling names should be unique, but that is the caller's invariant;
/// [`FieldSet::duplicate_names`] reports violations without rejecting them.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<Field>) {
        self.fields.push(field.into());
    }

    /// Add a field, builder style.
    pub fn with(mut self, field: impl Into<Field>) -> Self {
        self.push(field);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// First field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// Names used by more than one field, in first-repeat order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for name in self.names() {
            if !seen.insert(name) && !dupes.contains(&name) {
                dupes.push(name);
            }
        }
        dupes
    }

    /// Render the document in the given format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        debug!(fields = self.len(), %format, "rendering fields document");
        let out = match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Yaml => serde_yaml_ng::to_string(self)?,
        };
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String> {
        self.render(OutputFormat::Json)
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
