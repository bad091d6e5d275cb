// src/error/mod.rs
//
// Error layer - typed failures for every public boundary

mod types;

pub use types::{AppError, AppResult};
