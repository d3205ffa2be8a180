#![forbid(unsafe_code)]

use qatalog_core::{Catalog, Tool};
use qatalog_filter::{extract_filter_options, filter_tools, matches, FilterState};

fn catalog() -> Catalog {
    let raw = serde_json::json!([
        {"Tools": "SonarQube", "Familly": "SAST", "Type": "Core", "Is Microsoft": false, "API": true},
        {"Tools": "GitHub Advanced Security", "Familly": "SAST", "Type": "Plugin", "Is Microsoft": true, "API": true},
        {"Tools": "Prettier", "Familly": "Formatting", "Type": "Core", "Is Microsoft": false, "API": false}
    ]);
    Catalog::new(
        raw.as_array()
            .unwrap()
            .iter()
            .map(Tool::from_value)
            .collect(),
    )
}

fn names(catalog: &Catalog, state: &FilterState) -> Vec<String> {
    filter_tools(catalog, state)
        .into_iter()
        .map(|t| t.name.clone())
        .collect()
}

fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

#[test]
fn all_unset_state_returns_the_catalog_in_order() {
    let c = catalog();
    assert_eq!(
        names(&c, &FilterState::default()),
        vec!["SonarQube", "GitHub Advanced Security", "Prettier"]
    );
}

#[test]
fn category_selection_narrows_in_order() {
    let c = catalog();
    let state = FilterState {
        selected_category: Some("SAST".into()),
        ..Default::default()
    };
    assert_eq!(names(&c, &state), vec!["SonarQube", "GitHub Advanced Security"]);
}

#[test]
fn microsoft_flag_selects_the_explicit_true() {
    let c = catalog();
    let state = FilterState {
        microsoft: Some(true),
        ..Default::default()
    };
    assert_eq!(names(&c, &state), vec!["GitHub Advanced Security"]);
}

#[test]
fn facets_and_query_conjoin() {
    let c = catalog();
    let state = FilterState {
        selected_category: Some("SAST".into()),
        has_api: Some(true),
        query: "git".into(),
        ..Default::default()
    };
    assert_eq!(names(&c, &state), vec!["GitHub Advanced Security"]);
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let c = catalog();
    let state = FilterState {
        query: "  PRET  ".into(),
        ..Default::default()
    };
    assert_eq!(names(&c, &state), vec!["Prettier"]);
}

#[test]
fn contradictory_facets_yield_the_empty_subset() {
    let c = catalog();
    let state = FilterState {
        selected_kind: Some("Core".into()),
        microsoft: Some(true),
        ..Default::default()
    };
    assert!(names(&c, &state).is_empty());
}

#[test]
fn extracted_domains_are_sorted_and_unique() {
    let opts = extract_filter_options(&catalog());
    assert_eq!(opts.categories, vec!["Formatting", "SAST"]);
    assert_eq!(opts.kinds, vec!["Core", "Plugin"]);
}

#[test]
fn selection_outside_the_domain_matches_nothing() {
    let c = catalog();
    let opts = extract_filter_options(&c);
    assert!(!opts.categories.contains(&"DAST".to_string()));
    let state = FilterState {
        selected_category: Some("DAST".into()),
        ..Default::default()
    };
    assert!(names(&c, &state).is_empty());
}

#[test]
fn evaluation_is_pure_and_leaves_inputs_unchanged() {
    let c = catalog();
    let before = c.clone();
    let state = FilterState {
        query: "sonar".into(),
        ..Default::default()
    };
    let first = names(&c, &state);
    let second = names(&c, &state);
    assert_eq!(first, second);
    assert_eq!(c.tools, before.tools);
    assert_eq!(state.query, "sonar");
}

#[test]
fn output_is_a_subsequence_of_the_catalog() {
    let c = catalog();
    let all = names(&c, &FilterState::default());
    for state in [
        FilterState { query: "e".into(), ..Default::default() },
        FilterState { selected_kind: Some("Core".into()), ..Default::default() },
        FilterState { has_api: Some(true), ..Default::default() },
    ] {
        assert!(is_subsequence(&names(&c, &state), &all));
    }
}

#[test]
fn tightening_a_state_only_shrinks_the_subset() {
    let c = catalog();
    let mut state = FilterState::default();
    let mut prev = names(&c, &state);
    state.selected_category = Some("SAST".into());
    let step = names(&c, &state);
    assert!(is_subsequence(&step, &prev));
    prev = step;
    state.has_api = Some(true);
    let step = names(&c, &state);
    assert!(is_subsequence(&step, &prev));
    prev = step;
    state.query = "git".into();
    let step = names(&c, &state);
    assert!(is_subsequence(&step, &prev));
}

#[test]
fn query_upcasing_does_not_change_results() {
    let c = catalog();
    for q in ["git", "PrEt", "sonarqube", "q"] {
        let lower = FilterState { query: q.into(), ..Default::default() };
        let upper = FilterState { query: q.to_uppercase(), ..Default::default() };
        assert_eq!(names(&c, &lower), names(&c, &upper), "query {q:?}");
    }
}

#[test]
fn membership_agrees_with_the_single_entry_predicate() {
    let c = catalog();
    let state = FilterState {
        selected_category: Some("SAST".into()),
        query: "s".into(),
        ..Default::default()
    };
    let kept = names(&c, &state);
    for tool in &c.tools {
        assert_eq!(kept.contains(&tool.name), matches(tool, &state), "{}", tool.name);
    }
}
