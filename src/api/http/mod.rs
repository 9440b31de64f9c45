// src/api/http/mod.rs

pub mod chat;
pub mod handlers;
pub mod router;
pub mod verse;

pub use router::{create_router, http_router};
