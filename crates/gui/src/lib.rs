#![forbid(unsafe_code)]

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use tracing::info;

use qatalog_core::Catalog;
use qatalog_filter::{FilterDebugInfo, FilterOptions};
use qatalog_store::{CatalogHandle, FilterStore, LoadPhase};

mod model;
mod ui;

use model::SearchBox;

/// Entry point used by the binary to launch the GUI.
pub fn run_native(catalog: CatalogHandle) -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    let app = QatalogApp::new(catalog);
    eframe::run_native("Qatalog", options, Box::new(|_cc| Ok(Box::new(app))))
}

pub struct QatalogApp {
    // load-once catalog + lifecycle phase
    catalog: CatalogHandle,
    snapshot: Arc<Catalog>,
    phase: LoadPhase,
    // facet dropdown domains, extracted once the catalog is ready
    options: FilterOptions,
    // current selection + debounced search input
    filters: FilterStore,
    search: SearchBox,
    // visible subset (indices into the snapshot), cached per store generation
    visible: Vec<usize>,
    explain: FilterDebugInfo,
    rendered_gen: Option<u64>,
}

impl QatalogApp {
    pub fn new(catalog: CatalogHandle) -> Self {
        let snapshot = catalog.current();
        Self {
            catalog,
            snapshot,
            phase: LoadPhase::Loading,
            options: FilterOptions::default(),
            filters: FilterStore::new(),
            search: SearchBox::default(),
            visible: Vec::new(),
            explain: FilterDebugInfo::default(),
            rendered_gen: None,
        }
    }

    fn poll_phase(&mut self) {
        let phase = self.catalog.phase();
        if phase == self.phase {
            return;
        }
        if phase == LoadPhase::Ready {
            self.snapshot = self.catalog.current();
            self.options = qatalog_filter::extract_filter_options(&self.snapshot);
            self.rendered_gen = None;
            info!(
                tools = self.snapshot.len(),
                categories = self.options.categories.len(),
                kinds = self.options.kinds.len(),
                "catalog visible to the UI"
            );
        }
        self.phase = phase;
    }

    // Trailing edge: only the last change inside the quiescent window reaches
    // the store.
    fn tick_search_debounce(&mut self) {
        if let Some(t0) = self.search.changed_at {
            if t0.elapsed().as_millis() as u64 >= self.search.debounce_ms {
                self.filters.set_query(self.search.query.clone());
                self.search.changed_at = None;
            }
        }
    }

    fn reevaluate_if_dirty(&mut self) {
        if self.rendered_gen != Some(self.filters.generation()) {
            let (visible, explain) =
                qatalog_filter::filter_with_debug(&self.snapshot, self.filters.state());
            self.visible = visible;
            self.explain = explain;
            self.rendered_gen = Some(self.filters.generation());
        }
    }

    /// Reset every facet, cancelling a pending debounce so a late firing
    /// cannot resurrect the cleared query.
    pub(crate) fn clear_filters(&mut self) {
        self.search.query.clear();
        self.search.changed_at = None;
        self.filters.reset();
    }

    pub(crate) fn clear_search(&mut self) {
        self.search.query.clear();
        self.search.changed_at = None;
        self.filters.set_query(String::new());
    }

    pub(crate) fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub(crate) fn load_error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl eframe::App for QatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_phase();
        self.tick_search_debounce();
        self.reevaluate_if_dirty();

        ui::topbar::ui_topbar(self, ctx);
        ui::filters::ui_filters(self, ctx);
        ui::statusbar::ui_statusbar(self, ctx);
        ui::cards::ui_cards(self, ctx);

        // keep ticking while a load or a debounce window is pending
        if self.loading() || self.search.changed_at.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
