// Core components
pub mod common;
pub mod state;

// Demo screens
pub mod badge_screen;
pub mod dialog_screen;
pub mod form_screen;
pub mod main_menu;
pub mod progress_screen;
pub mod switch_screen;

// Popup components
pub mod confirmation_popup;
pub mod error_popup;
pub mod success_popup;

// Display components
pub mod help_bar;
pub mod text_label;

// System components
pub mod global_key_watcher;
