//! Main application state and UI coordination

use std::path::PathBuf;

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::recent::RecentDocuments;
use crate::shell::ipc;
use crate::shell::menu::MenuAction;
use crate::shell::{Shell, UiCommand};
use crate::ui::{about::AboutWindow, document_view::DocumentView, menu_bar::MenuBar};

/// Main application state
pub struct FolioApp {
    /// Menu, windows and recent list
    shell: Shell,
    /// Document panel fed by the shell
    view: DocumentView,
}

impl FolioApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig, args: Vec<String>) -> Self {
        let store_path = AppConfig::recent_store_path().unwrap_or_else(|| {
            tracing::warn!("Could not determine config directory, using working directory");
            PathBuf::from("config.toml")
        });
        let recent = RecentDocuments::open(store_path);

        let (shell_end, view_end) = ipc::channel();
        let shell = Shell::new(recent, &config.window, shell_end);
        shell.forward_arguments(args);

        Self {
            shell,
            view: DocumentView::new(view_end),
        }
    }

    /// Ask for a single PDF and open it
    fn open_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF Files", &["pdf"])
            .pick_file()
        {
            self.shell.open_document(&path);
        }
    }

    /// Run a menu action and whatever UI work it hands back
    fn run_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match self.shell.handle_action(action) {
            Some(UiCommand::ShowOpenDialog) => self.open_dialog(),
            Some(UiCommand::Quit) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            None => {}
        }
        ctx.request_repaint();
    }

    /// Handle keyboard accelerators of enabled menu items
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let pressed: Vec<MenuAction> = self
            .shell
            .menu()
            .shortcuts()
            .into_iter()
            .filter(|(shortcut, _)| ctx.input_mut(|i| i.consume_shortcut(shortcut)))
            .map(|(_, action)| action)
            .collect();

        for action in pressed {
            self.run_action(ctx, action);
        }
    }

    fn title(&self) -> String {
        let app_title = self
            .shell
            .windows()
            .primary()
            .map(|spec| spec.title)
            .unwrap_or("Folio");
        match self.view.document() {
            Some(doc) => format!("{} - {}", doc.title(), app_title),
            None => app_title.to_string(),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Exchange messages with the view before drawing
        self.view.poll(ctx);
        self.shell.process_view_requests();

        if ctx.input(|i| i.viewport().close_requested()) {
            self.shell.windows_mut().close_primary();
            return;
        }

        self.handle_shortcuts(ctx);

        // Render menu bar
        let title = self.title();
        let clicked = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| MenuBar::show(ui, self.shell.menu(), &title))
            .inner;
        if let Some(action) = clicked {
            self.run_action(ctx, action);
        }

        // Render main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui);
        });

        if let Some(spec) = self.shell.windows().about().cloned() {
            if AboutWindow::show(ctx, &spec) {
                self.shell.windows_mut().close_about();
            }
        }
    }
}
