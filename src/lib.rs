pub mod config;
pub mod logging;
pub mod mvi;
pub mod quiz;
pub mod shutdown;
pub mod ui;
