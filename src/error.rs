//! Error types for the menu pager.
//!
//! Missing links are not errors: an absent active link or neighbour is
//! reported as an empty [`NavigationResult`](crate::NavigationResult).
//! The variants below cover malformed input and collaborator faults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all menu pager operations.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum MenuPagerError {
    /// Configuration parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),

    /// The requested menu is not registered.
    #[error("menu {0} not found")]
    Menu(String),

    /// Menu link definition errors.
    #[error("{0}")]
    Link(String),

    /// A link appears on its own ancestor path.
    #[error("menu link {link} is its own ancestor")]
    TreeCycle {
        link: String,
    },

    /// Invalid ignore-target glob pattern.
    #[error("{0}")]
    Pattern(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<std::io::Error> for MenuPagerError {
    fn from(error: std::io::Error) -> Self {
        MenuPagerError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for MenuPagerError {
    fn from(error: serde_json::Error) -> Self {
        MenuPagerError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for MenuPagerError {
    fn from(error: toml::de::Error) -> Self {
        MenuPagerError::Config(error.to_string())
    }
}

impl From<globset::Error> for MenuPagerError {
    fn from(error: globset::Error) -> Self {
        MenuPagerError::Pattern(error.to_string())
    }
}
