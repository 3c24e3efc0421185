//! The NLU collaborator: turns a sentence into an annotation tree.

pub mod wit;

use async_trait::async_trait;
use omnibar_common::annotation::AnnotationTree;
pub use omnibar_common::error::NluError;
use std::sync::Arc;

pub use wit::WitClient;

/// Anything that can classify a sentence.
///
/// Implementations own their transport concerns (timeouts, auth); the caller
/// makes exactly one call per request and never retries.
#[async_trait]
pub trait NluClient: Send + Sync {
    async fn classify(&self, sentence: &str) -> Result<AnnotationTree, NluError>;
}

#[async_trait]
impl<T: NluClient + ?Sized> NluClient for Arc<T> {
    async fn classify(&self, sentence: &str) -> Result<AnnotationTree, NluError> {
        (**self).classify(sentence).await
    }
}
