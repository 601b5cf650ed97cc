pub mod controller;
pub mod document;
pub mod events;
pub mod modal;
pub mod state;
pub mod theme;
