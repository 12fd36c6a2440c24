use serde::Serialize;

/// Response body for the generated spending summary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
