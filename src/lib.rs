// guest-shell library - exposes the interpreter core and UI for testing

pub mod app;
pub mod command;
pub mod config;
pub mod crash;
pub mod history;
pub mod nav;
pub mod session;
pub mod services;
pub mod transcript;
pub mod ui;
pub mod vfs;
