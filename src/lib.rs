//! cmlog - changelog viewer for CyanogenMod builds
//!
//! A TUI that reads the build properties of the local system or an
//! adb-connected device and shows the changelog for that build.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`changelog`]: Changelog feed fetching and decoding
//! - [`cli`]: Command line arguments
//! - [`config`]: User configuration
//! - [`device`]: Device property reading and build classification
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logger setup
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod device;
pub mod keys;
pub mod logging;
pub mod model;
pub mod ui;
