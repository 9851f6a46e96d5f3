//! # Application Module
//!
//! Core application logic for the vitrine shell. The application follows a
//! model-view-update architecture:
//! - **Model** - Application state and the mounted component tree
//! - **View** - Screen layout and popup overlay rendering
//! - **Update** - Message handling and navigation

/// Core application model and the screen destination set
pub mod model;
/// Component remounting helpers
pub mod remount;
/// Message processing and state transitions
pub mod update;
/// Screen layout and rendering
pub mod view;
