#![forbid(unsafe_code)]

use eframe::egui;
use std::time::Instant;

use crate::QatalogApp;

pub(crate) fn ui_topbar(app: &mut QatalogApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Qatalog");
            ui.separator();
            let te = egui::TextEdit::singleline(&mut app.search.query)
                .hint_text("Search tools by name…")
                .desired_width(280.0);
            let re = ui.add(te);
            if re.changed() {
                app.search.changed_at = Some(Instant::now());
            }
            if re.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                app.clear_search();
            }
            if !app.search.query.is_empty()
                && ui.button("×").on_hover_text("Clear search").clicked()
            {
                app.clear_search();
            }
            if app.loading() {
                ui.add(egui::Spinner::new());
            }
        });
    });
}
