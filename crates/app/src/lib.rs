//! Pantry demo application: settings and the sample walkthrough.

pub mod config;
pub mod demo;
