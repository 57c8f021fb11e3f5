//! About dialog

use eframe::egui;

use crate::shell::window::WindowSpec;

pub struct AboutWindow;

impl AboutWindow {
    /// Show the modal About window; returns true once it should close
    pub fn show(ctx: &egui::Context, spec: &WindowSpec) -> bool {
        let response = egui::Modal::new(egui::Id::new("about_window")).show(ctx, |ui| {
            ui.set_width(spec.width);
            ui.set_min_height(spec.height);

            let mut close = false;
            ui.vertical_centered(|ui| {
                ui.heading("Folio");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.weak(env!("CARGO_PKG_DESCRIPTION"));
                ui.add_space(12.0);
                close = ui.button("OK").clicked();
            });
            close
        });

        response.inner || response.should_close()
    }
}
