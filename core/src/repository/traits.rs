use anyhow::Result;
use async_trait::async_trait;

use crate::model::source::ContributionDocument;

/// Where the raw contribution document comes from. Implementations map every
/// degradation (unreachable resource, malformed JSON, unrecognized shape) to
/// `Ok(None)` so callers never have to distinguish the failure modes.
#[async_trait]
pub trait ContributionSource {
    async fn fetch(&self) -> Result<Option<ContributionDocument>>;
}
