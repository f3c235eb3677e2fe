pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod pin;
pub mod scheduler;
pub mod shutdown;
pub mod ui;
