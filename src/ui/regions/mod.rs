//! Window regions, each implementing `Region`.

pub mod identity_view;
pub mod launch_view;
pub mod theme_menu;
pub mod title_bar;
