//! Sequential fold summarisation.

use llm_client::ModelClient;
use prompt::fold_step_messages;
use tracing::{debug, info};

use crate::RouterError;

/// Summarises `chunks` strictly in order: each step sends the running summary together with the
/// next chunk, and the last step's output is the result.
pub async fn fold_summarize(
    model: &dyn ModelClient,
    system_prompt: &str,
    chunks: &[String],
) -> Result<String, RouterError> {
    let total = chunks.len();
    let mut summary: Option<String> = None;

    for (index, chunk) in chunks.iter().enumerate() {
        let messages = fold_step_messages(system_prompt, summary.as_deref(), chunk, index, total);
        let step = model.chat_completion(&messages).await?;
        debug!(part = index + 1, total, summary_len = step.len(), "Folded chunk");
        summary = Some(step);
    }

    let summary = summary.ok_or(RouterError::EmptyContent)?;
    info!(chunk_count = total, "Summary complete");
    Ok(summary)
}
