pub mod app;
pub mod file_io;
pub mod logging;
pub mod state;
pub mod syntax;

mod action;
mod input;
mod ui;
