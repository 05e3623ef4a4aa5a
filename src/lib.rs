//! Ecoscope - 3D drill-down data explorer
//!
//! Navigates an ecosystem of channels, campaigns and individual entities
//! across three levels, reconciling clicks, keyboard shortcuts, a guided
//! tour and zoom stepping into one camera target.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod visualization;
