//! Remote inference layer: HTTP model invocation, response cache, retry policy.

mod cache;
mod client;
mod error;
mod models;

pub use cache::{CacheKey, ResponseCache};
pub use client::{InferenceBackend, InferenceClient, RetryPolicy};
pub use error::InferenceError;
pub use models::ModelSet;
