// src/prompt/mod.rs

pub mod builder;
pub mod fallback;
pub mod guidance;
pub mod verse;

pub use builder::assemble;
