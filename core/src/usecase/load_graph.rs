use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::repository::ContributionSource;
use crate::service::dto::ContributionGraph;
use crate::service::graph_service::build_graph;

pub struct LoadGraphUseCase<'a, S: ContributionSource> {
    source: &'a S,
}

impl<'a, S: ContributionSource> LoadGraphUseCase<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Acquire the document and normalize it. Every degradation yields
    /// `Ok(None)`; the renderer decides what a missing graph looks like.
    pub async fn load(&self, today: NaiveDate) -> Result<Option<ContributionGraph>> {
        let Some(document) = self.source.fetch().await? else {
            debug!("no contribution document available");
            return Ok(None);
        };
        Ok(Some(build_graph(document, today)))
    }
}
