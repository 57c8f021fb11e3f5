//! Document panel standing in for the renderer
//!
//! The panel consumes [`ShellEvent`]s, keeps track of the open document and
//! reports back through [`ViewRequest`]s. It shows file information only.

use std::path::PathBuf;
use std::time::SystemTime;

use eframe::egui;

use crate::core::document::{is_pdf, PdfDocument};
use crate::shell::ipc::{ShellEvent, ViewEndpoint, ViewRequest};

/// Side effects that need the egui context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    ToggleFullscreen,
    Repaint,
}

/// View state for the currently open document
pub struct DocumentView {
    endpoint: ViewEndpoint,
    document: Option<PdfDocument>,
    show_properties: bool,
    status: Option<String>,
}

impl DocumentView {
    pub fn new(endpoint: ViewEndpoint) -> Self {
        Self {
            endpoint,
            document: None,
            show_properties: false,
            status: None,
        }
    }

    pub fn document(&self) -> Option<&PdfDocument> {
        self.document.as_ref()
    }

    /// Process every pending shell event
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Some(event) = self.endpoint.try_recv() {
            match self.handle_event(event) {
                Some(ViewEffect::ToggleFullscreen) => {
                    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
                Some(ViewEffect::Repaint) => ctx.request_repaint(),
                None => {}
            }
        }
    }

    fn handle_event(&mut self, event: ShellEvent) -> Option<ViewEffect> {
        match event {
            ShellEvent::FileOpen(path) => self.load(path),
            ShellEvent::ExternalFileOpen(args) => {
                // The first argument that names a PDF wins
                if let Some(path) = args.iter().map(PathBuf::from).find(|p| is_pdf(p)) {
                    self.endpoint.request(ViewRequest::OpenDocument(path));
                }
            }
            ShellEvent::UpdateMenu => return Some(ViewEffect::Repaint),
            ShellEvent::FilePrint => {
                if let Some(doc) = &self.document {
                    tracing::info!("Print requested for {}", doc.path.display());
                    self.status = Some(format!("Sent \"{}\" to the renderer for printing", doc.title()));
                }
            }
            ShellEvent::FileProperties => self.show_properties = self.document.is_some(),
            ShellEvent::FileClose => {
                self.document = None;
                self.show_properties = false;
                self.status = None;
                self.endpoint.request(ViewRequest::ToggleMenuItems(false));
            }
            ShellEvent::ViewFullscreen => {
                if self.document.is_some() {
                    return Some(ViewEffect::ToggleFullscreen);
                }
            }
        }
        None
    }

    fn load(&mut self, path: PathBuf) {
        match PdfDocument::open(&path) {
            Ok(doc) => {
                self.document = Some(doc);
                self.show_properties = false;
                self.status = None;
                self.endpoint.request(ViewRequest::ToggleMenuItems(true));
            }
            Err(e) => {
                tracing::error!("Failed to open document: {:#}", e);
                self.status = Some(format!("{:#}", e));
            }
        }
    }

    /// Show the document panel
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(status) = &self.status {
            ui.colored_label(ui.visuals().warn_fg_color, status);
            ui.separator();
        }

        match &self.document {
            Some(doc) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading(doc.title());
                    ui.label(doc.path.display().to_string());
                    ui.weak(doc.display_size());
                });
            }
            None => Self::show_empty(ui),
        }

        self.show_properties_window(ui.ctx());
    }

    fn show_properties_window(&mut self, ctx: &egui::Context) {
        let Some(doc) = &self.document else {
            return;
        };

        egui::Window::new("Properties")
            .open(&mut self.show_properties)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("properties_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Title");
                    ui.label(doc.title());
                    ui.end_row();
                    ui.label("Location");
                    ui.label(doc.path.display().to_string());
                    ui.end_row();
                    ui.label("Size");
                    ui.label(doc.display_size());
                    ui.end_row();
                    ui.label("Modified");
                    ui.label(doc.last_modified.map(modified_ago).unwrap_or_else(|| "-".to_string()));
                    ui.end_row();
                });
            });
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("No document open");
            ui.label("Use File > Open... to choose a PDF");
        });
    }
}

fn modified_ago(time: SystemTime) -> String {
    let secs = match time.elapsed() {
        Ok(elapsed) => elapsed.as_secs(),
        Err(_) => return "just now".to_string(),
    };
    match secs {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{} min ago", secs / 60),
        3600..=86_399 => format!("{} h ago", secs / 3600),
        _ => format!("{} days ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::shell::ipc::{self, ShellEndpoint};
    use tempfile::TempDir;

    fn view() -> (DocumentView, ShellEndpoint) {
        let (shell, view) = ipc::channel();
        (DocumentView::new(view), shell)
    }

    fn sample_pdf(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("sample.pdf");
        std::fs::write(&path, b"%PDF-1.4\n").unwrap();
        path
    }

    #[test]
    fn test_open_enables_document_items() {
        let dir = TempDir::new().unwrap();
        let (mut view, shell) = view();
        let path = sample_pdf(&dir);

        assert_eq!(view.handle_event(ShellEvent::FileOpen(path.clone())), None);
        assert_eq!(view.document().unwrap().path, path);
        assert_eq!(shell.drain_requests(), vec![ViewRequest::ToggleMenuItems(true)]);
    }

    #[test]
    fn test_open_missing_file_keeps_items_disabled() {
        let dir = TempDir::new().unwrap();
        let (mut view, shell) = view();
        view.handle_event(ShellEvent::FileOpen(dir.path().join("gone.pdf")));

        assert!(view.document().is_none());
        assert!(view.status.is_some());
        assert!(shell.drain_requests().is_empty());
    }

    #[test]
    fn test_close_disables_document_items() {
        let dir = TempDir::new().unwrap();
        let (mut view, shell) = view();
        view.handle_event(ShellEvent::FileOpen(sample_pdf(&dir)));
        view.handle_event(ShellEvent::FileClose);

        assert!(view.document().is_none());
        assert_eq!(
            shell.drain_requests(),
            vec![
                ViewRequest::ToggleMenuItems(true),
                ViewRequest::ToggleMenuItems(false)
            ]
        );
    }

    #[test]
    fn test_external_open_picks_first_pdf() {
        let (mut view, shell) = view();
        view.handle_event(ShellEvent::ExternalFileOpen(vec![
            "folio".to_string(),
            "--verbose".to_string(),
            "/docs/a.pdf".to_string(),
            "/docs/b.pdf".to_string(),
        ]));
        assert_eq!(
            shell.drain_requests(),
            vec![ViewRequest::OpenDocument(PathBuf::from("/docs/a.pdf"))]
        );
    }

    #[test]
    fn test_fullscreen_needs_document() {
        let dir = TempDir::new().unwrap();
        let (mut view, _shell) = view();
        assert_eq!(view.handle_event(ShellEvent::ViewFullscreen), None);

        view.handle_event(ShellEvent::FileOpen(sample_pdf(&dir)));
        assert_eq!(
            view.handle_event(ShellEvent::ViewFullscreen),
            Some(ViewEffect::ToggleFullscreen)
        );
    }

    #[test]
    fn test_properties_only_with_document() {
        let dir = TempDir::new().unwrap();
        let (mut view, _shell) = view();
        view.handle_event(ShellEvent::FileProperties);
        assert!(!view.show_properties);

        view.handle_event(ShellEvent::FileOpen(sample_pdf(&dir)));
        view.handle_event(ShellEvent::FileProperties);
        assert!(view.show_properties);
    }

    #[test]
    fn test_update_menu_repaints() {
        let (mut view, _shell) = view();
        assert_eq!(
            view.handle_event(ShellEvent::UpdateMenu),
            Some(ViewEffect::Repaint)
        );
    }

    #[test]
    fn test_modified_ago() {
        let now = SystemTime::now();
        assert_eq!(modified_ago(now), "just now");
        assert_eq!(modified_ago(now - Duration::from_secs(120)), "2 min ago");
        assert_eq!(modified_ago(now - Duration::from_secs(3 * 86_400)), "3 days ago");
    }
}
