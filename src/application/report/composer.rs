//! Concurrent collection of both rate sources.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::domain::{currency_glyph, RatesReport, SourceError, TextFormat};
use crate::error::Result;
use crate::port::{P2pRateSource, TickerRateSource};

use super::render::render_report;

/// Builds rates reports from a P2P source and a ticker source.
///
/// Cheap to clone; sources are shared read-only.
#[derive(Clone)]
pub struct ReportComposer {
    p2p: Arc<dyn P2pRateSource>,
    ticker: Arc<dyn TickerRateSource>,
}

impl ReportComposer {
    #[must_use]
    pub fn new(p2p: Arc<dyn P2pRateSource>, ticker: Arc<dyn TickerRateSource>) -> Self {
        Self { p2p, ticker }
    }

    /// Collect a report stamped with the current local time.
    pub async fn compose(&self) -> RatesReport {
        self.compose_at(Local::now()).await
    }

    /// Collect a report stamped with `generated_at`.
    ///
    /// Both sources run as separate tasks, so an error or a panic in one
    /// is recorded in the report without affecting the other.
    pub async fn compose_at(&self, generated_at: DateTime<Local>) -> RatesReport {
        let p2p_info = self.p2p.info();
        let ticker_info = self.ticker.info();

        let p2p_task = tokio::spawn({
            let source = Arc::clone(&self.p2p);
            async move { source.fetch_p2p().await }
        });
        let ticker_task = tokio::spawn({
            let source = Arc::clone(&self.ticker);
            async move { source.fetch_ticker().await }
        });
        let (p2p, ticker) = tokio::join!(p2p_task, ticker_task);

        let report = RatesReport {
            generated_at,
            p2p_glyph: currency_glyph(&p2p_info.currency).to_string(),
            p2p_title: p2p_info.title,
            p2p: settle(p2p_info.name, p2p),
            ticker_glyph: currency_glyph(&ticker_info.currency).to_string(),
            ticker_title: ticker_info.title,
            ticker: settle(ticker_info.name, ticker),
        };

        info!(
            p2p_ok = report.p2p.is_ok(),
            ticker_ok = report.ticker.is_ok(),
            "Rates report composed"
        );
        report
    }

    /// Collect and render a report in one step.
    pub async fn render(&self, format: TextFormat) -> String {
        render_report(&self.compose().await, format)
    }
}

fn settle<T>(
    source_name: &'static str,
    joined: std::result::Result<Result<T>, JoinError>,
) -> std::result::Result<T, SourceError> {
    match joined {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            warn!(source = source_name, error = %e, "Rate source failed");
            Err(SourceError::new(source_name, e.to_string()))
        }
        Err(e) => {
            warn!(source = source_name, error = %e, "Rate source task aborted");
            Err(SourceError::new(source_name, "internal error"))
        }
    }
}
