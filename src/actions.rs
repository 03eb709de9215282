//! Built-in allowed-action option universe
//!
//! These are the action-group tokens offered by the permission multi-select.
//! Nothing validates against them; an operator can always type an arbitrary
//! token and it is kept literally.

/// Action groups that apply per index pattern
pub const INDEX_ACTION_GROUPS: &[&str] = &[
    "crud",
    "create_index",
    "data_access",
    "delete",
    "get",
    "index",
    "indices_all",
    "indices_monitor",
    "manage",
    "manage_aliases",
    "read",
    "search",
    "suggest",
    "unlimited",
    "write",
];

/// Cluster-wide action groups, listed for completeness of the option universe
pub const CLUSTER_ACTION_GROUPS: &[&str] = &[
    "cluster_all",
    "cluster_composite_ops",
    "cluster_composite_ops_ro",
    "cluster_manage_pipelines",
    "cluster_monitor",
    "manage_snapshots",
];

/// Whether a token names one of the built-in action groups
pub fn is_builtin_action(token: &str) -> bool {
    INDEX_ACTION_GROUPS.contains(&token) || CLUSTER_ACTION_GROUPS.contains(&token)
}
