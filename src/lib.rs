pub mod config;
pub mod followers;
pub mod github;
pub mod logging;
pub mod ui;
