//! Window specs and lifecycle for the primary and About windows

use crate::core::config::WindowConfig;

/// Windows the shell can own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Primary,
    #[allow(dead_code)]
    About,
}

/// Geometry and chrome of a window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    pub min_size: Option<[f32; 2]>,
    pub resizable: bool,
    /// Draw our own title bar instead of the platform one
    pub frameless: bool,
    /// Blocks input to its parent while open
    #[allow(dead_code)]
    pub modal: bool,
    #[allow(dead_code)]
    pub parent: Option<WindowKind>,
}

impl WindowSpec {
    pub fn primary(config: &WindowConfig) -> Self {
        Self {
            title: "Folio",
            width: config.width,
            height: config.height,
            min_size: Some([config.min_width, config.min_height]),
            resizable: true,
            frameless: true,
            modal: false,
            parent: None,
        }
    }

    pub fn about() -> Self {
        Self {
            title: "About Folio",
            width: 300.0,
            height: 150.0,
            min_size: None,
            resizable: false,
            frameless: true,
            modal: true,
            parent: Some(WindowKind::Primary),
        }
    }

    /// Viewport builder for windows that get their own native viewport
    pub fn viewport(&self) -> egui::ViewportBuilder {
        let mut builder = egui::ViewportBuilder::default()
            .with_title(self.title)
            .with_inner_size([self.width, self.height])
            .with_resizable(self.resizable)
            .with_decorations(!self.frameless);
        if let Some(min_size) = self.min_size {
            builder = builder.with_min_inner_size(min_size);
        }
        builder
    }
}

/// Tracks the single primary window and the optional About window
#[derive(Debug)]
pub struct WindowManager {
    primary: Option<WindowSpec>,
    about: Option<WindowSpec>,
}

impl WindowManager {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            primary: Some(WindowSpec::primary(config)),
            about: None,
        }
    }

    pub fn primary(&self) -> Option<&WindowSpec> {
        self.primary.as_ref()
    }

    pub fn about(&self) -> Option<&WindowSpec> {
        self.about.as_ref()
    }

    /// Open the About window unless it is already open.
    ///
    /// Returns true if a new window was created.
    pub fn open_about(&mut self) -> bool {
        if self.primary.is_none() || self.about.is_some() {
            return false;
        }
        self.about = Some(WindowSpec::about());
        tracing::debug!("Opened About window");
        true
    }

    pub fn close_about(&mut self) {
        self.about = None;
    }

    /// Closing the primary window also drops its child
    pub fn close_primary(&mut self) {
        self.primary = None;
        self.about = None;
        tracing::info!("Primary window closed");
    }
}
