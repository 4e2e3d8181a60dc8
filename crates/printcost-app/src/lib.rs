//! Application service layer - config, presets, quote flows, export

pub mod config;
pub mod constants;
pub mod export;
pub mod quote;
pub mod scanner;
