//! Affiliate Reader terminal client
//!
//! ブラウザ版と同じ状態遷移（`affiliate-reader-common`）を端末上で動かす。

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod runner;
