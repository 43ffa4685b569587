//! Bookshelf - GUI library
//!
//! This module exposes the app internals for testing.

pub mod app;
pub mod views;
