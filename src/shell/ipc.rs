//! Message channel between the shell and the document view

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Messages the shell sends to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Show this document
    FileOpen(PathBuf),
    /// Arguments forwarded from the command line
    ExternalFileOpen(Vec<String>),
    /// The application menu changed
    UpdateMenu,
    FilePrint,
    FileProperties,
    FileClose,
    ViewFullscreen,
}

/// Messages the view sends back to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    /// Enable or disable the menu items that need an open document
    ToggleMenuItems(bool),
    /// Open a document through the shell so it lands in the recent list
    OpenDocument(PathBuf),
}

/// Shell side of the channel
pub struct ShellEndpoint {
    events: Sender<ShellEvent>,
    requests: Receiver<ViewRequest>,
}

/// View side of the channel
pub struct ViewEndpoint {
    events: Receiver<ShellEvent>,
    requests: Sender<ViewRequest>,
}

/// Create a connected pair of endpoints
pub fn channel() -> (ShellEndpoint, ViewEndpoint) {
    let (events_tx, events_rx) = mpsc::channel();
    let (requests_tx, requests_rx) = mpsc::channel();
    (
        ShellEndpoint {
            events: events_tx,
            requests: requests_rx,
        },
        ViewEndpoint {
            events: events_rx,
            requests: requests_tx,
        },
    )
}

impl ShellEndpoint {
    /// Send an event to the view; a closed view is not an error
    pub fn send(&self, event: ShellEvent) {
        if let Err(e) = self.events.send(event) {
            tracing::debug!("View is gone, dropping {:?}", e.0);
        }
    }

    /// Drain every pending request from the view
    pub fn drain_requests(&self) -> Vec<ViewRequest> {
        let mut requests = Vec::new();
        loop {
            match self.requests.try_recv() {
                Ok(request) => requests.push(request),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        requests
    }
}

impl ViewEndpoint {
    /// Next pending event, if any
    pub fn try_recv(&self) -> Option<ShellEvent> {
        self.events.try_recv().ok()
    }

    pub fn request(&self, request: ViewRequest) {
        if let Err(e) = self.requests.send(request) {
            tracing::debug!("Shell is gone, dropping {:?}", e.0);
        }
    }
}
