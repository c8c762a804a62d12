//! Launcher core: theme store, drag tracking, fade-in, commands, and window state.

pub mod commands;
pub mod drag;
pub mod fade;
pub mod state;
pub mod theme;
