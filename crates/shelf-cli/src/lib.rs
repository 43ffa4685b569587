//! CLI library components for the Bookshelf terminal browser.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
