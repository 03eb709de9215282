//! Tests for FLS encoding and wire/state conversion

use rolepanel::*;

// === Method detection ===

#[test]
fn test_detect_method_empty_is_include() {
    assert_eq!(detect_method(&[]), FlsMethod::Include);
}

#[test]
fn test_detect_method_unprefixed_is_include() {
    let fls = vec!["a".to_string(), "b".to_string()];
    assert_eq!(detect_method(&fls), FlsMethod::Include);
}

#[test]
fn test_detect_method_prefixed_is_exclude() {
    let fls = vec!["~a".to_string()];
    assert_eq!(detect_method(&fls), FlsMethod::Exclude);
}

#[test]
fn test_detect_method_any_prefixed_token_forces_exclude() {
    let fls = vec!["a".to_string(), "~b".to_string()];
    assert_eq!(detect_method(&fls), FlsMethod::Exclude);
}

// === Packing ===

#[test]
fn test_pack_include_is_identity() {
    let fls = FieldLevelSecurity::Include(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(fls.to_wire(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_pack_exclude_prefixes_every_field() {
    let fls = FieldLevelSecurity::Exclude(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(fls.to_wire(), vec!["~a".to_string(), "~b".to_string()]);
}

#[test]
fn test_pack_empty_list_is_empty_either_way() {
    assert!(FieldLevelSecurity::Include(vec![]).to_wire().is_empty());
    assert!(FieldLevelSecurity::Exclude(vec![]).to_wire().is_empty());
}

// === Unpacking ===

#[test]
fn test_from_wire_strips_marker_under_exclude() {
    let fls = FieldLevelSecurity::from_wire(&["~a".to_string(), "~b".to_string()]);
    assert_eq!(fls.method(), FlsMethod::Exclude);
    assert_eq!(fls.fields(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn test_from_wire_mixed_list_passes_unprefixed_through() {
    let fls = FieldLevelSecurity::from_wire(&["a".to_string(), "~b".to_string()]);
    assert_eq!(fls.method(), FlsMethod::Exclude);
    assert_eq!(fls.fields(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn test_already_marked_token_is_literal() {
    // "~~a" strips one marker; packing "~a" re-adds one. No normalization.
    let fls = FieldLevelSecurity::from_wire(&["~~a".to_string()]);
    assert_eq!(fls.fields(), &["~a".to_string()]);
    assert_eq!(fls.to_wire(), vec!["~~a".to_string()]);
}

#[test]
fn test_marker_inside_token_is_not_a_marker() {
    let fls = FieldLevelSecurity::from_wire(&["a~b".to_string()]);
    assert_eq!(fls.method(), FlsMethod::Include);
    assert_eq!(fls.to_wire(), vec!["a~b".to_string()]);
}

// === Build / unbuild ===

fn wire(patterns: &[&str], dls: &str, fls: &[&str]) -> WireIndexPermission {
    WireIndexPermission {
        index_patterns: patterns.iter().map(|s| s.to_string()).collect(),
        dls: dls.to_string(),
        fls: fls.iter().map(|s| s.to_string()).collect(),
        masked_fields: vec!["ssn".to_string()],
        allowed_actions: vec!["read".to_string()],
    }
}

#[test]
fn test_build_copies_patterns_and_dls_verbatim() {
    let state = build_index_permission_state(&[wire(
        &["logs-*"],
        r#"{"term":{"public":true}}"#,
        &[],
    )]);
    assert_eq!(state.len(), 1);
    assert_eq!(state[0].index_patterns, vec!["logs-*".to_string()]);
    assert_eq!(state[0].dls, r#"{"term":{"public":true}}"#);
}

#[test]
fn test_build_leaves_actions_and_masked_fields_empty() {
    // The wire shape carries both, but this direction never populates them.
    let state = build_index_permission_state(&[wire(&["logs-*"], "", &["a"])]);
    assert!(state[0].allowed_actions.is_empty());
    assert!(state[0].masked_fields.is_empty());
}

#[test]
fn test_build_unpacks_exclude_fls() {
    let state = build_index_permission_state(&[wire(&[], "", &["~a", "~b"])]);
    assert_eq!(state[0].fls_method, FlsMethod::Exclude);
    assert_eq!(state[0].fls_fields, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_fls_round_trips_through_build_and_unbuild() {
    for fls in [&[][..], &["a", "b"][..], &["~a", "~b"][..]] {
        let input = wire(&["logs-*"], "q", fls);
        let back = unbuild_index_permission_state(&build_index_permission_state(&[input.clone()]));
        assert_eq!(back[0].fls, input.fls);
        assert_eq!(back[0].index_patterns, input.index_patterns);
        assert_eq!(back[0].dls, input.dls);
        // The documented asymmetry: these did not survive the trip.
        assert!(back[0].allowed_actions.is_empty());
        assert!(back[0].masked_fields.is_empty());
    }
}

#[test]
fn test_unbuild_carries_actions_and_masked_fields() {
    let entry = IndexPermissionEntry {
        index_patterns: vec!["logs-*".to_string()],
        allowed_actions: vec!["read".to_string(), "search".to_string()],
        dls: String::new(),
        fls_method: FlsMethod::Include,
        fls_fields: vec!["timestamp".to_string()],
        masked_fields: vec!["ip".to_string()],
    };
    let wire = unbuild_index_permission_state(&[entry]);
    assert_eq!(wire[0].allowed_actions, vec!["read".to_string(), "search".to_string()]);
    assert_eq!(wire[0].masked_fields, vec!["ip".to_string()]);
    assert_eq!(wire[0].fls, vec!["timestamp".to_string()]);
}

// === Wire JSON shape ===

#[test]
fn test_wire_json_field_names() {
    let p = wire(&["logs-*"], "q", &["~a"]);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["index_patterns"][0], "logs-*");
    assert_eq!(json["dls"], "q");
    assert_eq!(json["fls"][0], "~a");
    assert_eq!(json["masked_fields"][0], "ssn");
    assert_eq!(json["allowed_actions"][0], "read");
}

#[test]
fn test_empty_dls_is_omitted_from_json() {
    let p = wire(&["logs-*"], "", &[]);
    let json = serde_json::to_value(&p).unwrap();
    assert!(json.get("dls").is_none());
}

#[test]
fn test_partial_wire_document_deserializes_with_defaults() {
    let p: WireIndexPermission = serde_json::from_str(r#"{"index_patterns":["x"]}"#).unwrap();
    assert_eq!(p.index_patterns, vec!["x".to_string()]);
    assert!(p.dls.is_empty());
    assert!(p.fls.is_empty());
    assert!(p.masked_fields.is_empty());
    assert!(p.allowed_actions.is_empty());
}

#[test]
fn test_fls_method_serde_is_lowercase() {
    assert_eq!(serde_json::to_string(&FlsMethod::Exclude).unwrap(), "\"exclude\"");
    let m: FlsMethod = serde_json::from_str("\"include\"").unwrap();
    assert_eq!(m, FlsMethod::Include);
    assert!("hidden".parse::<FlsMethod>().is_err());
}
