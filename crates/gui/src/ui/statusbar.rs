#![forbid(unsafe_code)]

use eframe::egui;

use crate::QatalogApp;
use qatalog_store::LoadPhase;

pub(crate) fn ui_statusbar(app: &mut QatalogApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("tools: {}", app.snapshot.len()));
            match &app.phase {
                LoadPhase::Loading => {
                    ui.separator();
                    ui.label("loading…");
                }
                LoadPhase::Ready => {
                    if !app.filters.state().is_neutral() {
                        ui.separator();
                        let e = &app.explain;
                        ui.label(format!(
                            "match: {} (category {} · type {} · flags {} · name {})",
                            app.visible.len(),
                            e.after_category,
                            e.after_kind,
                            e.after_flags,
                            e.after_query
                        ));
                    }
                }
                LoadPhase::Failed(message) => {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(message.as_str())
                            .color(ui.visuals().warn_fg_color),
                    );
                }
            }
        });
    });
}
