//! Panel update events and the reducer that applies them
//!
//! The panel never mutates the entry array it renders. Each user action becomes
//! a typed [`PanelEvent`]; the owner of the array runs it through [`apply`].
//! Events are serde-tagged so the server feature can accept them as JSON.

use crate::entry::IndexPermissionEntry;
use crate::error::{PanelError, Result};
use crate::fls::FlsMethod;
use serde::{Deserialize, Serialize};

/// Replacement value for one editable row of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EntryUpdate {
    IndexPatterns(Vec<String>),
    AllowedActions(Vec<String>),
    Dls(String),
    FlsMethod(FlsMethod),
    FlsFields(Vec<String>),
    MaskedFields(Vec<String>),
}

/// The multi-select attributes a newly typed token can be appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAttribute {
    IndexPatterns,
    AllowedActions,
    FlsFields,
    MaskedFields,
}

/// One user action on the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    /// Append a fresh entry with the new-entry defaults
    Add,
    /// Delete the entry at `index`, preserving the order of the rest
    Remove { index: usize },
    /// Replace one attribute of the entry at `index`
    Set { index: usize, update: EntryUpdate },
    /// Append a newly typed token to one of the entry's token sets
    AppendOption {
        index: usize,
        attribute: EntryAttribute,
        token: String,
    },
}

fn entry_at(entries: &mut [IndexPermissionEntry], index: usize) -> Result<&mut IndexPermissionEntry> {
    let len = entries.len();
    entries
        .get_mut(index)
        .ok_or_else(|| PanelError(format!("No index permission entry at {} (have {})", index, len)))
}

/// Append `token` to the set unless it is already present
fn append_token(tokens: &mut Vec<String>, token: String) {
    if !tokens.iter().any(|t| *t == token) {
        tokens.push(token);
    }
}

/// Apply one event to the entry array.
///
/// Out-of-range indices error and leave the array untouched.
pub fn apply(entries: &mut Vec<IndexPermissionEntry>, event: PanelEvent) -> Result<()> {
    match event {
        PanelEvent::Add => entries.push(IndexPermissionEntry::default()),
        PanelEvent::Remove { index } => {
            entry_at(entries, index)?;
            entries.remove(index);
        }
        PanelEvent::Set { index, update } => {
            let entry = entry_at(entries, index)?;
            match update {
                EntryUpdate::IndexPatterns(v) => entry.index_patterns = v,
                EntryUpdate::AllowedActions(v) => entry.allowed_actions = v,
                EntryUpdate::Dls(v) => entry.dls = v,
                EntryUpdate::FlsMethod(v) => entry.fls_method = v,
                EntryUpdate::FlsFields(v) => entry.fls_fields = v,
                EntryUpdate::MaskedFields(v) => entry.masked_fields = v,
            }
        }
        PanelEvent::AppendOption { index, attribute, token } => {
            let entry = entry_at(entries, index)?;
            let tokens = match attribute {
                EntryAttribute::IndexPatterns => &mut entry.index_patterns,
                EntryAttribute::AllowedActions => &mut entry.allowed_actions,
                EntryAttribute::FlsFields => &mut entry.fls_fields,
                EntryAttribute::MaskedFields => &mut entry.masked_fields,
            };
            append_token(tokens, token);
        }
    }
    Ok(())
}
