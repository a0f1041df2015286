pub mod metrics;
pub mod prompt;
pub mod providers;

pub use providers::{CompletionProvider, GenerationParams, ProviderError};
