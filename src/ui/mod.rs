//! UI layer: LauncherApp orchestrator, Region trait, assets, widgets, and regions.

pub mod app;
pub mod assets;
pub mod colors;
pub mod regions;
pub mod widgets;
pub mod window;
