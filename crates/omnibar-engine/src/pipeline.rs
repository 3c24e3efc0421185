//! sentence → NLU → resolution → actions

use crate::formatter::summarize;
use crate::nlu::{NluClient, NluError};
use crate::resolution::{ActionList, ResolutionEngine};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("NLU classification failed: {0}")]
    Nlu(#[from] NluError),
}

pub struct Pipeline {
    client: Box<dyn NluClient>,
    engine: ResolutionEngine,
}

impl Pipeline {
    pub fn new(client: impl NluClient + 'static) -> Self {
        Self::with_engine(client, ResolutionEngine::default())
    }

    pub fn with_engine(client: impl NluClient + 'static, engine: ResolutionEngine) -> Self {
        Self {
            client: Box::new(client),
            engine,
        }
    }

    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }

    /// Classify `sentence` and resolve it. Blank input resolves to no actions
    /// without contacting the NLU service. A failed classification returns
    /// the error and runs no resolver.
    pub async fn resolve(&self, sentence: &str) -> Result<ActionList, PipelineError> {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return Ok(ActionList::new());
        }

        let tree = self.client.classify(sentence).await.map_err(|e| {
            warn!("NLU call failed: {}", e);
            e
        })?;

        let actions = self.engine.resolve(&tree);
        debug!(actions = %summarize(actions.as_slice()), "resolved sentence");
        Ok(actions)
    }
}
