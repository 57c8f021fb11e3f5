//! Core functionality: configuration, document handles and the recent list

pub mod config;
pub mod document;
pub mod recent;
