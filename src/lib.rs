//! Rolepanel - index-permission panel state for a security-role editor
//!
//! Per index-permission entry an operator declares index patterns, allowed
//! actions, a document-level security query, an include/exclude field-level
//! security list, and masked (anonymized) fields. This crate holds the
//! editable entry state, the typed update events and reducer the panel emits,
//! and the conversion to and from the stored role document's wire shape.
//!
//! The optional `server` feature hosts the panel in a browser against an
//! in-memory draft; nothing here persists roles.

pub mod actions;
pub mod entry;
pub mod error;
pub mod fls;
pub mod panel;
pub mod wire;

pub use actions::{is_builtin_action, CLUSTER_ACTION_GROUPS, INDEX_ACTION_GROUPS};
pub use entry::{IndexPermissionEntry, EMPTY_PATTERNS_PLACEHOLDER};
pub use error::{err, PanelError, Result};
pub use fls::{detect_method, FieldLevelSecurity, FlsMethod, FLS_EXCLUDE_PREFIX};
pub use panel::{apply, EntryAttribute, EntryUpdate, PanelEvent};
pub use wire::{build_index_permission_state, unbuild_index_permission_state, WireIndexPermission};
