//! Generation service client.
//!
//! The actual pixel synthesis happens remotely; this module owns the
//! provider trait, the Gemini implementation, and the high-level client
//! that maps studio operations onto provider calls.

mod client;
mod gemini;
mod provider;

pub use client::GenerationClient;
pub use gemini::GeminiProvider;
pub use provider::{
    resolve_env_var, GenerationProvider, GenerationProviderFactory, GenerationRequest, ImagePart,
};
