//! I/O helpers for `toolbox` commands.

pub mod actions;
pub mod config;
