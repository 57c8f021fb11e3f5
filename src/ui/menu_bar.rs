//! Menu bar and custom title bar for the frameless primary window

use eframe::egui;

use crate::shell::menu::{AppMenu, MenuAction, MenuEntry, MenuItem};

/// Renders an [`AppMenu`] and reports the clicked action
pub struct MenuBar;

impl MenuBar {
    /// Show the menu bar; returns the action clicked this frame, if any
    pub fn show(ui: &mut egui::Ui, menu: &AppMenu, title: &str) -> Option<MenuAction> {
        let mut clicked = None;

        #[allow(deprecated)]
        egui::menu::bar(ui, |ui| {
            for top in &menu.menus {
                ui.menu_button(top.label, |ui| {
                    Self::show_entries(ui, &top.entries, &mut clicked);
                });
            }

            if let Some(action) = Self::title_bar(ui, title) {
                clicked = Some(action);
            }
        });

        clicked
    }

    fn show_entries(ui: &mut egui::Ui, entries: &[MenuEntry], clicked: &mut Option<MenuAction>) {
        for entry in entries {
            match entry {
                MenuEntry::Separator => {
                    ui.separator();
                }
                MenuEntry::Item(item) if item.has_submenu() => {
                    ui.add_enabled_ui(item.enabled, |ui| {
                        ui.menu_button(item.label.as_str(), |ui| {
                            Self::show_entries(ui, &item.submenu, clicked);
                        });
                    });
                }
                MenuEntry::Item(item) => Self::show_item(ui, item, clicked),
            }
        }
    }

    fn show_item(ui: &mut egui::Ui, item: &MenuItem, clicked: &mut Option<MenuAction>) {
        let mut button = egui::Button::new(item.label.as_str());
        if let Some(accelerator) = item.accelerator {
            button = button.shortcut_text(accelerator.label());
        }

        if ui.add_enabled(item.enabled, button).clicked() {
            *clicked = item.action.clone();
            ui.close();
        }
    }

    /// Title, drag area and window buttons on the right of the menu bar
    fn title_bar(ui: &mut egui::Ui, title: &str) -> Option<MenuAction> {
        let mut action = None;
        let ctx = ui.ctx().clone();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                action = Some(MenuAction::Quit);
            }

            let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
            if ui.button("\u{25A1}").on_hover_text("Maximize").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
            }
            if ui.button("\u{2013}").on_hover_text("Minimize").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }

            // Remaining space moves the window
            let rect = ui.available_rect_before_wrap();
            let response = ui.interact(rect, egui::Id::new("title_bar"), egui::Sense::click_and_drag());
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                title,
                egui::FontId::proportional(14.0),
                ui.visuals().text_color(),
            );

            if response.double_clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
            } else if response.drag_started_by(egui::PointerButton::Primary) {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }
        });

        action
    }
}
