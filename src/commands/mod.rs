//! CLI commands for waypath

pub mod demo;
pub mod dispatch;
pub mod output;
pub mod search;
