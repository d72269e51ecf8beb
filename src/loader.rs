use chrono::Utc;
use spdlog::{debug, info};

use crate::payload::DashboardPayload;
use crate::report::{Report, Reporter};
use crate::source::{ClientError, DataClient};

pub const DASHBOARD_RESOURCE: &str = "data/processed/dashboard.json";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] ClientError),

    #[error("payload is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches the dashboard resource once, parses it and hands it to the reporter.
/// Any failure stops the pipeline before the reporter sees anything.
pub struct Loader<R: Reporter> {
    client: DataClient,
    reporter: R,
    resource: String,
}

impl<R: Reporter> Loader<R> {
    pub fn new(client: DataClient, reporter: R) -> Self {
        Loader {
            client,
            reporter,
            resource: DASHBOARD_RESOURCE.to_string(),
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    #[cfg(test)]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.client.get(&self.resource).await?)
    }

    pub async fn load(&self) -> Result<DashboardPayload, LoadError> {
        let body = self.fetch().await?;
        debug!("Fetched {} bytes", body.len());

        Ok(DashboardPayload::parse(&body)?)
    }

    pub async fn run(&self) -> Result<Report, LoadError> {
        let location = self.client.location(&self.resource)?;
        info!("Loading {}...", location);

        let payload = self.load().await?;
        let report = Report {
            location,
            payload,
            loaded_at: Utc::now(),
        };
        self.reporter.report(&report);

        Ok(report)
    }
}
