//! UI components for Folio

pub mod about;
pub mod document_view;
pub mod menu_bar;
