// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod questionnaire;
pub mod session;
pub mod state;
