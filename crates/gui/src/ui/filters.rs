#![forbid(unsafe_code)]

use eframe::egui;

use crate::QatalogApp;

// The synthetic "all" rows map back to an unset facet.
const ALL_CATEGORIES: &str = "All categories";
const ALL_TYPES: &str = "All types";

pub(crate) fn ui_filters(app: &mut QatalogApp, ctx: &egui::Context) {
    egui::SidePanel::left("filter_panel")
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Filters");
            ui.separator();

            let selected = app.filters.state().selected_category.clone();
            egui::ComboBox::from_label("Category")
                .selected_text(selected.clone().unwrap_or_else(|| ALL_CATEGORIES.to_string()))
                .show_ui(ui, |ui| {
                    if ui.selectable_label(selected.is_none(), ALL_CATEGORIES).clicked() {
                        app.filters.set_category(None);
                    }
                    for category in app.options.categories.clone() {
                        let is_sel = selected.as_deref() == Some(category.as_str());
                        if ui.selectable_label(is_sel, &category).clicked() {
                            app.filters.set_category(Some(category.clone()));
                        }
                    }
                });

            let selected = app.filters.state().selected_kind.clone();
            egui::ComboBox::from_label("Type")
                .selected_text(selected.clone().unwrap_or_else(|| ALL_TYPES.to_string()))
                .show_ui(ui, |ui| {
                    if ui.selectable_label(selected.is_none(), ALL_TYPES).clicked() {
                        app.filters.set_kind(None);
                    }
                    for kind in app.options.kinds.clone() {
                        let is_sel = selected.as_deref() == Some(kind.as_str());
                        if ui.selectable_label(is_sel, &kind).clicked() {
                            app.filters.set_kind(Some(kind.clone()));
                        }
                    }
                });

            ui.separator();

            // Checked maps to an explicit `true`; unchecked imposes no
            // constraint (it is not "must be false").
            let mut microsoft = app.filters.state().microsoft == Some(true);
            if ui.checkbox(&mut microsoft, "Microsoft").changed() {
                app.filters.set_microsoft(microsoft.then_some(true));
            }
            let mut local = app.filters.state().local == Some(true);
            if ui.checkbox(&mut local, "Runs locally").changed() {
                app.filters.set_local(local.then_some(true));
            }
            let mut has_api = app.filters.state().has_api == Some(true);
            if ui.checkbox(&mut has_api, "Has API").changed() {
                app.filters.set_has_api(has_api.then_some(true));
            }
            let mut quality_gate = app.filters.state().quality_gate == Some(true);
            if ui.checkbox(&mut quality_gate, "Quality gate").changed() {
                app.filters.set_quality_gate(quality_gate.then_some(true));
            }

            ui.separator();
            if ui.button("Clear all filters").clicked() {
                app.clear_filters();
            }
        });
}
