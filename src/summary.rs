use async_trait::async_trait;

use crate::spending::repo::SpendingRecord;

/// Text returned while no external AI provider is configured.
pub const CANNED_SUMMARY: &str = "Based on your spending, you are doing great! Keep it up.";

/// Turns spending records into a short human-readable summary.
///
/// A real implementation would call a third-party AI service with the
/// spending data; [`CannedSummarizer`] stands in until one is wired up.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, spending: &[SpendingRecord]) -> anyhow::Result<String>;
}

/// Fixed-text summarizer. Ignores the spending data entirely.
#[derive(Clone)]
pub struct CannedSummarizer;

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(&self, _spending: &[SpendingRecord]) -> anyhow::Result<String> {
        Ok(CANNED_SUMMARY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn canned_summarizer_returns_fixed_text() {
        let summary = CannedSummarizer.summarize(&[]).await.expect("summarize");
        assert_eq!(summary, CANNED_SUMMARY);
    }

    #[tokio::test]
    async fn canned_summarizer_ignores_records() {
        let records = vec![SpendingRecord {
            category: "Food".into(),
            amount: Decimal::new(15050, 2),
        }];
        let summary = CannedSummarizer
            .summarize(&records)
            .await
            .expect("summarize");
        assert_eq!(summary, CANNED_SUMMARY);
    }
}
