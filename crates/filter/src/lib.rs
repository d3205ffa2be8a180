//! Qatalog filter engine: pure evaluation of the current filter state over a
//! catalog snapshot, plus option-domain extraction for the facet dropdowns.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use tracing::trace;

use qatalog_core::{Catalog, Tool, TriState};

/// The current selection across all facets. `None`/empty imposes no
/// constraint.
///
/// The checkboxes in the UI only ever produce `Some(true)` or `None`;
/// `Some(false)` is nonetheless a legal engine input, distinct from unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_category: Option<String>,
    pub selected_kind: Option<String>,
    pub microsoft: Option<bool>,
    pub local: Option<bool>,
    pub has_api: Option<bool>,
    pub quality_gate: Option<bool>,
    pub query: String,
}

impl FilterState {
    /// True when no facet constrains the subset.
    pub fn is_neutral(&self) -> bool {
        self.selected_category.is_none()
            && self.selected_kind.is_none()
            && self.microsoft.is_none()
            && self.local.is_none()
            && self.has_api.is_none()
            && self.quality_gate.is_none()
            && self.query.trim().is_empty()
    }

    /// Reset every facet to unset and the query to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sorted distinct values the two enumerable facets may take, derived from
/// the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub kinds: Vec<String>,
}

/// Derive the facet option domains in one pass.
///
/// Values are trimmed before collection and empties are skipped; `BTreeSet`
/// yields unique values in ascending code-point order (no locale collation).
pub fn extract_filter_options(catalog: &Catalog) -> FilterOptions {
    let mut categories: BTreeSet<String> = BTreeSet::new();
    let mut kinds: BTreeSet<String> = BTreeSet::new();
    for tool in &catalog.tools {
        let c = tool.category.trim();
        if !c.is_empty() {
            categories.insert(c.to_string());
        }
        let k = tool.kind.trim();
        if !k.is_empty() {
            kinds.insert(k.to_string());
        }
    }
    FilterOptions {
        categories: categories.into_iter().collect(),
        kinds: kinds.into_iter().collect(),
    }
}

/// Per-stage survivor counts of one evaluation, for the status bar and logs.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct FilterDebugInfo {
    pub total: usize,
    pub after_category: usize,
    pub after_kind: usize,
    pub after_flags: usize,
    pub after_query: usize,
}

fn flag_ok(want: Option<bool>, have: TriState) -> bool {
    match want {
        None => true,
        // An absent field fails a set flag; `Some(false)` only matches an
        // explicit `false`.
        Some(w) => have == Some(w),
    }
}

fn category_ok(tool: &Tool, state: &FilterState) -> bool {
    match &state.selected_category {
        None => true,
        // Raw, untrimmed comparison. Selections come from the trimmed option
        // domain, so an entry whose raw category carries stray whitespace
        // never matches any selection. Long-standing dataset behavior.
        Some(cat) => &tool.category == cat,
    }
}

fn kind_ok(tool: &Tool, state: &FilterState) -> bool {
    match &state.selected_kind {
        None => true,
        Some(kind) => &tool.kind == kind,
    }
}

fn flags_ok(tool: &Tool, state: &FilterState) -> bool {
    flag_ok(state.microsoft, tool.is_microsoft)
        && flag_ok(state.local, tool.is_local)
        && flag_ok(state.has_api, tool.has_api)
        && flag_ok(state.quality_gate, tool.quality_gate)
}

// Comparison is ASCII-lowercased on both sides; equivalence under case
// changes is only guaranteed within the ASCII subset.
fn query_ok(tool: &Tool, lowered_query: &str) -> bool {
    lowered_query.is_empty() || tool.name.to_ascii_lowercase().contains(lowered_query)
}

/// Conjunction of all active predicates for a single entry.
pub fn matches(tool: &Tool, state: &FilterState) -> bool {
    let q = state.query.trim().to_ascii_lowercase();
    category_ok(tool, state) && kind_ok(tool, state) && flags_ok(tool, state) && query_ok(tool, &q)
}

/// Evaluate the state over the catalog, returning the indices of matching
/// entries in catalog order plus per-stage survivor counts.
///
/// Pure: mutates neither input, and equal inputs yield equal output.
pub fn filter_with_debug(catalog: &Catalog, state: &FilterState) -> (Vec<usize>, FilterDebugInfo) {
    let started = std::time::Instant::now();
    let q = state.query.trim().to_ascii_lowercase();
    let mut dbg = FilterDebugInfo {
        total: catalog.len(),
        ..Default::default()
    };
    let mut out = Vec::new();
    for (i, tool) in catalog.tools.iter().enumerate() {
        if !category_ok(tool, state) {
            continue;
        }
        dbg.after_category += 1;
        if !kind_ok(tool, state) {
            continue;
        }
        dbg.after_kind += 1;
        if !flags_ok(tool, state) {
            continue;
        }
        dbg.after_flags += 1;
        if !query_ok(tool, &q) {
            continue;
        }
        dbg.after_query += 1;
        out.push(i);
    }
    metrics::histogram!("filter_eval_ms", started.elapsed().as_secs_f64() * 1_000.0);
    trace!(total = dbg.total, kept = out.len(), "filter evaluated");
    (out, dbg)
}

/// Matching indices in catalog order.
pub fn filter_indices(catalog: &Catalog, state: &FilterState) -> Vec<usize> {
    filter_with_debug(catalog, state).0
}

/// Matching entries in catalog order.
pub fn filter_tools<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Tool> {
    filter_with_debug(catalog, state)
        .0
        .into_iter()
        .map(|i| &catalog.tools[i])
        .collect()
}
