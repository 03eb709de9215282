//! Field-level security: the include/exclude field list and its wire encoding
//!
//! On the wire, FLS is a flat list of field names where exclusion is marked by a
//! `~` prefix on every entry. A non-empty list is either all-prefixed (exclude)
//! or all-unprefixed (include). In memory the two cases are an explicit tagged
//! variant; the prefix exists only at the serialization edge.

use crate::error::PanelError;
use serde::{Deserialize, Serialize};

/// Wire marker prefixed to every field of an exclude list
pub const FLS_EXCLUDE_PREFIX: char = '~';

/// Whether the field list names the visible fields or the hidden ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlsMethod {
    Include,
    Exclude,
}

impl FlsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlsMethod::Include => "include",
            FlsMethod::Exclude => "exclude",
        }
    }
}

impl std::str::FromStr for FlsMethod {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "include" => Ok(FlsMethod::Include),
            "exclude" => Ok(FlsMethod::Exclude),
            other => Err(PanelError(format!("Unknown FLS method: {}", other))),
        }
    }
}

impl std::fmt::Display for FlsMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the method from a wire field list.
///
/// Any token carrying the exclude marker forces `Exclude`; an empty list is
/// `Include`.
pub fn detect_method(fls: &[String]) -> FlsMethod {
    if fls.iter().any(|f| f.starts_with(FLS_EXCLUDE_PREFIX)) {
        FlsMethod::Exclude
    } else {
        FlsMethod::Include
    }
}

/// An FLS field list with its method made explicit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLevelSecurity {
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl FieldLevelSecurity {
    pub fn from_parts(method: FlsMethod, fields: Vec<String>) -> Self {
        match method {
            FlsMethod::Include => FieldLevelSecurity::Include(fields),
            FlsMethod::Exclude => FieldLevelSecurity::Exclude(fields),
        }
    }

    /// Decode a wire field list, stripping the exclude marker where present.
    ///
    /// Field names are otherwise taken literally; a token like `~~a` decodes to
    /// `~a` under exclude and nothing tries to be clever about it.
    pub fn from_wire(fls: &[String]) -> Self {
        match detect_method(fls) {
            FlsMethod::Include => FieldLevelSecurity::Include(fls.to_vec()),
            FlsMethod::Exclude => FieldLevelSecurity::Exclude(
                fls.iter()
                    .map(|f| {
                        f.strip_prefix(FLS_EXCLUDE_PREFIX)
                            .map(str::to_string)
                            .unwrap_or_else(|| f.clone())
                    })
                    .collect(),
            ),
        }
    }

    /// Encode back to the wire list, re-prefixing every field of an exclude list
    pub fn to_wire(&self) -> Vec<String> {
        match self {
            FieldLevelSecurity::Include(fields) => fields.clone(),
            FieldLevelSecurity::Exclude(fields) => fields
                .iter()
                .map(|f| format!("{}{}", FLS_EXCLUDE_PREFIX, f))
                .collect(),
        }
    }

    pub fn method(&self) -> FlsMethod {
        match self {
            FieldLevelSecurity::Include(_) => FlsMethod::Include,
            FieldLevelSecurity::Exclude(_) => FlsMethod::Exclude,
        }
    }

    pub fn fields(&self) -> &[String] {
        match self {
            FieldLevelSecurity::Include(fields) | FieldLevelSecurity::Exclude(fields) => fields,
        }
    }

    pub fn into_parts(self) -> (FlsMethod, Vec<String>) {
        match self {
            FieldLevelSecurity::Include(fields) => (FlsMethod::Include, fields),
            FieldLevelSecurity::Exclude(fields) => (FlsMethod::Exclude, fields),
        }
    }
}
