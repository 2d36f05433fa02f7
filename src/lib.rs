// src/lib.rs

pub mod api;
pub mod config;
pub mod debate;
pub mod llm;
pub mod state;
