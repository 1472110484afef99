//! Shared test utilities for the font-manager workspace.
//!
//! This crate provides a standard install fixture so crate test suites do
//! not each rebuild the `public/` layout by hand. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`install`] - [`TestInstall`] builder for a temporary web app install

pub mod install;

pub use install::{FONT_DIR, STYLESHEET, TestInstall};
