#![forbid(unsafe_code)]

use eframe::egui;

use qatalog_core::{Lifecycle, Tool};

use crate::QatalogApp;

pub(crate) fn ui_cards(app: &mut QatalogApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(message) = app.load_error() {
            ui.add_space(8.0);
            ui.colored_label(ui.visuals().error_fg_color, message);
            return;
        }
        if app.loading() {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Loading tools…");
            });
            return;
        }

        let total = app.snapshot.len();
        let showing = app.visible.len();
        if showing == total {
            ui.label(format!("Showing all {} tools", total));
        } else {
            ui.label(format!("Showing {} of {} tools", showing, total));
        }
        ui.separator();

        if app.visible.is_empty() {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("No tools found matching your filters.")
                    .italics()
                    .weak(),
            );
            ui.label(
                egui::RichText::new(
                    "Try adjusting your filter criteria or click the \"Clear all filters\" button to start over.",
                )
                .weak(),
            );
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for &i in &app.visible {
                    tool_card(ui, &app.snapshot.tools[i]);
                }
            });
    });
}

fn tool_card(ui: &mut egui::Ui, tool: &Tool) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.heading(&tool.name);
        let description = if tool.description.is_empty() {
            "No description available"
        } else {
            tool.description.as_str()
        };
        ui.label(description);
        ui.horizontal(|ui| {
            let category = if tool.category.is_empty() {
                "Uncategorized"
            } else {
                tool.category.as_str()
            };
            ui.label(egui::RichText::new(category).small().strong());
            if !tool.kind.is_empty() {
                ui.separator();
                ui.label(egui::RichText::new(&tool.kind).small());
            }
            if !tool.maturity.is_empty() {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("maturity: {}", tool.maturity))
                        .small()
                        .weak(),
                );
            }
            if let Some(link) = &tool.product_link {
                ui.separator();
                ui.hyperlink_to(egui::RichText::new("product page").small(), link);
            }
            if let Some(demo) = &tool.demo {
                ui.separator();
                ui.hyperlink_to(egui::RichText::new("demo").small(), demo);
            }
        });
        let phases = covered_phases(&tool.lifecycle);
        if !phases.is_empty() {
            ui.label(
                egui::RichText::new(format!("lifecycle: {}", phases.join(", ")))
                    .small()
                    .weak(),
            );
        }
    });
    ui.add_space(6.0);
}

fn covered_phases(lc: &Lifecycle) -> Vec<&'static str> {
    [
        (lc.code, "code"),
        (lc.build, "build"),
        (lc.test, "test"),
        (lc.release, "release"),
        (lc.deploy, "deploy"),
        (lc.operate, "operate"),
        (lc.monitor, "monitor"),
        (lc.plan, "plan"),
    ]
    .into_iter()
    .filter(|(covered, _)| *covered == Some(true))
    .map(|(_, name)| name)
    .collect()
}
