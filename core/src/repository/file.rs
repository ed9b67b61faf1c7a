use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::warn;

use crate::model::source::ContributionDocument;
use crate::repository::traits::ContributionSource;

const DATA_FILE_NAME: &str = "contributions.json";

/// Reads the data file a site would ship next to the page. Defaults to
/// `~/.streakmap/contributions.json`.
pub struct FileContributionSource {
    file_path: PathBuf,
}

impl FileContributionSource {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let file_path = match path {
            Some(p) => p,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".streakmap").join(DATA_FILE_NAME)
            }
        };
        Ok(FileContributionSource { file_path })
    }
}

#[async_trait]
impl ContributionSource for FileContributionSource {
    async fn fetch(&self) -> Result<Option<ContributionDocument>> {
        let file = match File::open(&self.file_path) {
            Ok(f) => f,
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "contribution data file unreadable");
                return Ok(None);
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(document) => Ok(Some(document)),
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "contribution data file is not valid JSON");
                Ok(None)
            }
        }
    }
}
