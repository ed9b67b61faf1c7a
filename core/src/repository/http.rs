use anyhow::Result;
use async_trait::async_trait;
use futures::future::select_ok;
use tracing::{debug, warn};

use crate::model::source::ContributionDocument;
use crate::repository::traits::ContributionSource;

/// Site-relative locations the data file may live at. All candidates are
/// requested concurrently and the first success wins.
pub const DEFAULT_CANDIDATES: [&str; 3] = [
    "contributions.json",
    "data/contributions.json",
    "assets/contributions.json",
];

pub struct HttpContributionSource {
    client: reqwest::Client,
    candidates: Vec<String>,
}

impl HttpContributionSource {
    /// Source that tries the default candidate paths under `base_url`.
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let candidates = DEFAULT_CANDIDATES
            .iter()
            .map(|path| format!("{}/{}", base, path))
            .collect();
        Self::with_candidates(candidates)
    }

    pub fn with_candidates(candidates: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            candidates,
        }
    }

    async fn fetch_candidate(
        client: &reqwest::Client,
        url: &str,
    ) -> Result<ContributionDocument> {
        let response = client.get(url).send().await?.error_for_status()?;
        let document = response.json::<ContributionDocument>().await?;
        debug!(url = %url, "contribution data fetched");
        Ok(document)
    }
}

#[async_trait]
impl ContributionSource for HttpContributionSource {
    /// Race all candidates; losers are dropped, total failure is "no data".
    /// No retries, and no timeout beyond what the transport applies.
    async fn fetch(&self) -> Result<Option<ContributionDocument>> {
        if self.candidates.is_empty() {
            return Ok(None);
        }
        let races: Vec<_> = self
            .candidates
            .iter()
            .map(|url| Box::pin(Self::fetch_candidate(&self.client, url)))
            .collect();
        match select_ok(races).await {
            Ok((document, _losers)) => Ok(Some(document)),
            Err(err) => {
                warn!(error = %err, "every contribution data candidate failed");
                Ok(None)
            }
        }
    }
}
