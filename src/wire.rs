//! Backend wire shape for index permissions and conversion to/from form state

use crate::entry::IndexPermissionEntry;
use crate::fls::FieldLevelSecurity;
use serde::{Deserialize, Serialize};

/// One index permission as it appears in a stored security-role document.
///
/// `fls` carries the `~`-prefix convention; everything else is literal. All
/// fields are optional on read so partial role documents deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireIndexPermission {
    #[serde(default)]
    pub index_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dls: String,
    #[serde(default)]
    pub fls: Vec<String>,
    #[serde(default)]
    pub masked_fields: Vec<String>,
    #[serde(default)]
    pub allowed_actions: Vec<String>,
}

/// Map wire permissions to editable entries.
///
/// Index patterns and `dls` are copied verbatim and `fls` is decoded through
/// [`FieldLevelSecurity::from_wire`]. `allowed_actions` and `masked_fields`
/// are deliberately left empty in this direction; the role-edit page fills
/// them in from its own option sets. Callers must preserve that asymmetry.
pub fn build_index_permission_state(perms: &[WireIndexPermission]) -> Vec<IndexPermissionEntry> {
    perms
        .iter()
        .map(|p| {
            let (fls_method, fls_fields) = FieldLevelSecurity::from_wire(&p.fls).into_parts();
            IndexPermissionEntry {
                index_patterns: p.index_patterns.clone(),
                allowed_actions: Vec::new(),
                dls: p.dls.clone(),
                fls_method,
                fls_fields,
                masked_fields: Vec::new(),
            }
        })
        .collect()
}

/// Map editable entries back to the wire shape for role submission.
///
/// The inverse of [`build_index_permission_state`], except that actions and
/// masked fields are carried through here since submission needs them.
pub fn unbuild_index_permission_state(entries: &[IndexPermissionEntry]) -> Vec<WireIndexPermission> {
    entries
        .iter()
        .map(|e| WireIndexPermission {
            index_patterns: e.index_patterns.clone(),
            dls: e.dls.clone(),
            fls: FieldLevelSecurity::from_parts(e.fls_method, e.fls_fields.clone()).to_wire(),
            masked_fields: e.masked_fields.clone(),
            allowed_actions: e.allowed_actions.clone(),
        })
        .collect()
}
