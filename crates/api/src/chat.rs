use chrono::Utc;
use fleet_action_recorder::ActionRecorder;
use fleet_blob_store::BlobStore;
use fleet_summary_store::{ChatLog, SummaryStore, TelemetrySummary};
use fleet_window_extractor::WindowExtractor;
use tracing::debug;

use crate::Gateway;
use crate::error::ApiError;

const NO_DATE_REPLY: &str = "Sorry, I couldn't understand the date in your question.";
const NO_DATA_REPLY: &str = "No telemetry data found in that time range.";

/// Answers one chat message: resolve the time window, pull the overlapping
/// summaries (and raw batches when asked for), render the report, and
/// persist the exchange. Unanswerable questions are not persisted.
pub(crate) async fn answer<E, S, B, R>(
    gateway: &Gateway<E, S, B, R>,
    message: &str,
) -> Result<String, ApiError>
where
    E: WindowExtractor,
    S: SummaryStore,
    B: BlobStore,
    R: ActionRecorder,
{
    let Some(window) = gateway
        .extractor
        .extract(message)
        .await
        .map_err(ApiError::collaborator)?
    else {
        debug!("no time window found in chat message");
        return Ok(NO_DATE_REPLY.to_owned());
    };

    let summaries = gateway
        .summaries
        .summaries(window.start.timestamp(), window.end.timestamp())
        .await
        .map_err(ApiError::collaborator)?;
    debug!(count = summaries.len(), "summaries overlapping window");

    let mut report = if summaries.is_empty() {
        NO_DATA_REPLY.to_owned()
    } else {
        summaries
            .iter()
            .map(render_summary)
            .collect::<Vec<_>>()
            .join("\n")
    };

    if window.needs_raw_logs {
        for summary in &summaries {
            let Some(path) = &summary.s3_path else {
                continue;
            };
            let bytes = gateway
                .blobs
                .fetch_object(path)
                .await
                .map_err(ApiError::collaborator)?;
            report.push_str("\n--- raw batch ");
            report.push_str(path);
            report.push_str(" ---\n");
            report.push_str(&String::from_utf8_lossy(&bytes));
        }
    }

    gateway
        .summaries
        .insert_chat_log(ChatLog {
            timestamp: Utc::now(),
            user_message: message.to_owned(),
            ai_response: report.clone(),
            range_start: window.start,
            range_end: window.end,
            s3_used: window.needs_raw_logs,
        })
        .await
        .map_err(ApiError::collaborator)?;

    Ok(report)
}

fn render_summary(summary: &TelemetrySummary) -> String {
    format!(
        "[{} - {}] Threats: {}, Unhealthy: {}, Reasons: {}",
        summary.start_time,
        summary.end_time,
        summary.threat_count,
        summary.unhealthy_count,
        summary.reasons
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_summary_line_shape() {
        let summary = TelemetrySummary {
            start_time: 1_751_328_000,
            end_time: 1_751_331_600,
            threat_count: 3,
            unhealthy_count: 1,
            reasons: json!(["fan stall", "overtemp"]),
            s3_path: None,
        };

        assert_eq!(
            render_summary(&summary),
            "[1751328000 - 1751331600] Threats: 3, Unhealthy: 1, \
             Reasons: [\"fan stall\",\"overtemp\"]"
        );
    }
}
