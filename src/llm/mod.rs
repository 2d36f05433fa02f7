// src/llm/mod.rs

pub mod provider;
