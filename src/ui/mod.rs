pub mod app_shell;
pub mod layout;
pub mod palette;
pub mod view;
