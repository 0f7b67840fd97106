//! Batch Orchestrator
//!
//! Runs a list of requests through [`SummarizationService::summarize`] one at
//! a time. Results keep request order. The first failing item aborts the
//! whole batch and no partial results are returned.

use tracing::{info, warn};

use crate::error::SummarizeError;
use crate::summarize::SummarizationService;
use crate::types::{SummarizationRequest, SummarizationResult};

impl SummarizationService {
    /// Summarize every request in order, failing fast
    ///
    /// `result[i]` corresponds to `requests[i]`. An empty batch yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::BatchItem`] wrapping the first item's error.
    pub async fn summarize_batch(
        &self,
        requests: &[SummarizationRequest],
    ) -> Result<Vec<SummarizationResult>, SummarizeError> {
        let mut results = Vec::with_capacity(requests.len());

        for (index, request) in requests.iter().enumerate() {
            match self.summarize(request).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(
                        index,
                        batch_size = requests.len(),
                        stage = %e.stage(),
                        retryable = e.is_retryable(),
                        error = %e,
                        "Batch item failed, aborting batch"
                    );
                    return Err(SummarizeError::BatchItem {
                        index,
                        source: Box::new(e),
                    });
                }
            }
        }

        info!(batch_size = requests.len(), "Batch summarized");
        Ok(results)
    }
}
