use super::args::*;

pub mod config;
mod dispatch;
pub mod matching;

pub use dispatch::dispatch;
