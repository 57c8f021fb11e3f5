//! Application shell: menu, windows and the recent list wired together
//!
//! Everything here is free of rendering so the shell can be driven from
//! tests. `crate::app` feeds it clicks and shortcuts and carries out the
//! [`UiCommand`]s it hands back.

pub mod ipc;
pub mod menu;
pub mod window;

use std::path::Path;

use crate::core::config::WindowConfig;
use crate::core::recent::RecentDocuments;
use ipc::{ShellEndpoint, ShellEvent, ViewRequest};
use menu::{AppMenu, MenuAction};
use window::WindowManager;

/// Work the shell cannot do without the UI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    ShowOpenDialog,
    Quit,
}

/// Owns the recent list and the menu built from it
pub struct Shell {
    recent: RecentDocuments,
    menu: AppMenu,
    windows: WindowManager,
    view: ShellEndpoint,
}

impl Shell {
    pub fn new(recent: RecentDocuments, window: &WindowConfig, view: ShellEndpoint) -> Self {
        let mut shell = Self {
            recent,
            menu: AppMenu::build(),
            windows: WindowManager::new(window),
            view,
        };
        shell.refresh_recent_menu();
        shell
    }

    #[allow(dead_code)]
    pub fn recent(&self) -> &RecentDocuments {
        &self.recent
    }

    pub fn menu(&self) -> &AppMenu {
        &self.menu
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    /// Hand a document to the view and remember it
    pub fn open_document(&mut self, path: &Path) {
        tracing::info!("Opening document: {}", path.display());
        self.view.send(ShellEvent::FileOpen(path.to_path_buf()));

        if let Err(e) = self.recent.record_opened(path.to_string_lossy()) {
            tracing::error!("Failed to update recent documents: {}", e);
        }
        self.refresh_recent_menu();
        self.view.send(ShellEvent::UpdateMenu);
    }

    pub fn clear_recent(&mut self) {
        if let Err(e) = self.recent.clear() {
            tracing::error!("Failed to clear recent documents: {}", e);
        }
        self.refresh_recent_menu();
        self.view.send(ShellEvent::UpdateMenu);
    }

    /// Forward this launch's command-line arguments to the view
    pub fn forward_arguments(&self, args: Vec<String>) {
        if !args.is_empty() {
            self.view.send(ShellEvent::ExternalFileOpen(args));
        }
    }

    /// Run a menu action, returning whatever the UI still has to do
    pub fn handle_action(&mut self, action: MenuAction) -> Option<UiCommand> {
        tracing::debug!("Menu action: {:?}", action);
        match action {
            MenuAction::OpenDialog => return Some(UiCommand::ShowOpenDialog),
            MenuAction::Quit => return Some(UiCommand::Quit),
            MenuAction::OpenRecent(doc) => self.open_document(Path::new(&doc)),
            MenuAction::ClearRecent => self.clear_recent(),
            MenuAction::Print => self.view.send(ShellEvent::FilePrint),
            MenuAction::Properties => self.view.send(ShellEvent::FileProperties),
            MenuAction::Close => self.view.send(ShellEvent::FileClose),
            MenuAction::ToggleFullscreen => self.view.send(ShellEvent::ViewFullscreen),
            MenuAction::About => {
                self.windows.open_about();
            }
        }
        None
    }

    /// Apply everything the view asked for since the last frame
    pub fn process_view_requests(&mut self) {
        for request in self.view.drain_requests() {
            match request {
                ViewRequest::ToggleMenuItems(enabled) => {
                    self.menu.set_document_items_enabled(enabled)
                }
                ViewRequest::OpenDocument(path) => self.open_document(&path),
            }
        }
    }

    fn refresh_recent_menu(&mut self) {
        self.menu.update_recent(self.recent.list());
    }
}
