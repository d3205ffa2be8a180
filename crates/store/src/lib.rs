//! Qatalog store: the once-assigned catalog snapshot and the mutable filter
//! state the controller drives.

#![forbid(unsafe_code)]

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::watch;
use tracing::{info, warn};

use qatalog_core::Catalog;
use qatalog_fetch::CatalogSource;
use qatalog_filter::FilterState;

/// Lifecycle of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    /// Terminal; carries the user-visible message for the error banner.
    Failed(String),
}

/// Read handle over the catalog snapshot.
///
/// The snapshot is stored exactly once, at load completion; every read after
/// that observes the same catalog.
#[derive(Clone)]
pub struct CatalogHandle {
    snap: Arc<ArcSwap<Catalog>>,
    phase_rx: watch::Receiver<LoadPhase>,
}

impl CatalogHandle {
    pub fn current(&self) -> Arc<Catalog> {
        self.snap.load_full()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase_rx.borrow().clone()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<LoadPhase> {
        self.phase_rx.clone()
    }
}

/// Spawn the one-shot load task and return the read handle.
///
/// There is no cancellation surface; process exit discards an in-flight load.
pub fn spawn_load(source: Arc<dyn CatalogSource>) -> CatalogHandle {
    let snap = Arc::new(ArcSwap::from_pointee(Catalog::default()));
    let (phase_tx, phase_rx) = watch::channel(LoadPhase::Loading);
    let snap_bg = Arc::clone(&snap);
    tokio::spawn(async move {
        match source.load().await {
            Ok(catalog) => {
                info!(tools = catalog.len(), "catalog ready");
                metrics::gauge!("catalog_tools", catalog.len() as f64);
                snap_bg.store(Arc::new(catalog));
                let _ = phase_tx.send(LoadPhase::Ready);
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                metrics::counter!("catalog_load_failures_total", 1u64);
                let _ = phase_tx.send(LoadPhase::Failed(err.user_message()));
            }
        }
    });
    CatalogHandle { snap, phase_rx }
}

/// Owns the current filter state.
///
/// Mutations are synchronous; every effective mutation bumps `generation`,
/// and the controller re-evaluates when the generation it last rendered no
/// longer matches.
#[derive(Debug, Default)]
pub struct FilterStore {
    state: FilterState,
    generation: u64,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_category(&mut self, value: Option<String>) {
        if self.state.selected_category != value {
            self.state.selected_category = value;
            self.bump();
        }
    }

    pub fn set_kind(&mut self, value: Option<String>) {
        if self.state.selected_kind != value {
            self.state.selected_kind = value;
            self.bump();
        }
    }

    pub fn set_microsoft(&mut self, value: Option<bool>) {
        if self.state.microsoft != value {
            self.state.microsoft = value;
            self.bump();
        }
    }

    pub fn set_local(&mut self, value: Option<bool>) {
        if self.state.local != value {
            self.state.local = value;
            self.bump();
        }
    }

    pub fn set_has_api(&mut self, value: Option<bool>) {
        if self.state.has_api != value {
            self.state.has_api = value;
            self.bump();
        }
    }

    pub fn set_quality_gate(&mut self, value: Option<bool>) {
        if self.state.quality_gate != value {
            self.state.quality_gate = value;
            self.bump();
        }
    }

    pub fn set_query(&mut self, value: String) {
        if self.state.query != value {
            self.state.query = value;
            self.bump();
        }
    }

    /// Reset every facet to unset and the query to empty.
    pub fn reset(&mut self) {
        if self.state != FilterState::default() {
            self.state.clear();
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.generation += 1;
    }
}
