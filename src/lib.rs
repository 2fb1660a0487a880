pub mod bank;
pub mod cli;
pub mod feedback;
pub mod model;
pub mod persist;
pub mod session;
pub mod settings;
pub mod state;
pub mod store;
pub mod timer;
pub mod tui;
pub mod ui;
