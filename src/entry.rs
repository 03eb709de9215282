//! Editable form state for one index-permission entry

use crate::fls::FlsMethod;
use serde::{Deserialize, Serialize};

/// Collapsed-section title shown when an entry has no index patterns yet
pub const EMPTY_PATTERNS_PLACEHOLDER: &str = "(no index patterns)";

/// One row of the index-permissions panel, as the operator edits it.
///
/// The whole array of entries is owned by the role-edit page; this crate only
/// shapes it. FLS is held as a separate method + field list so the method
/// selector and the field multi-select stay independently editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPermissionEntry {
    pub index_patterns: Vec<String>,
    pub allowed_actions: Vec<String>,
    pub dls: String,
    pub fls_method: FlsMethod,
    pub fls_fields: Vec<String>,
    pub masked_fields: Vec<String>,
}

impl Default for IndexPermissionEntry {
    /// The new-entry default: everything empty, method exclude
    fn default() -> Self {
        Self {
            index_patterns: Vec::new(),
            allowed_actions: Vec::new(),
            dls: String::new(),
            fls_method: FlsMethod::Exclude,
            fls_fields: Vec::new(),
            masked_fields: Vec::new(),
        }
    }
}

impl IndexPermissionEntry {
    /// Human-readable title for the collapsed section: the joined index
    /// patterns, or a placeholder when none are set yet
    pub fn summary(&self) -> String {
        if self.index_patterns.is_empty() {
            EMPTY_PATTERNS_PLACEHOLDER.to_string()
        } else {
            self.index_patterns.join(", ")
        }
    }
}
