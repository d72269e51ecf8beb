use chrono::{DateTime, Utc};
use spdlog::{debug, info};

use crate::payload::DashboardPayload;

#[derive(Debug, Clone)]
pub struct Report {
    pub location: String,
    pub payload: DashboardPayload,
    pub loaded_at: DateTime<Utc>,
}

/// Receives each successfully loaded payload. Chart rendering would hook in here.
pub trait Reporter {
    fn report(&self, report: &Report);
}

#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pretty: bool,
}

impl ConsoleReporter {
    pub fn new(pretty: bool) -> Self {
        ConsoleReporter { pretty }
    }

    pub fn render(&self, payload: &DashboardPayload) -> String {
        if self.pretty {
            format!("Data loaded: {}", payload.to_pretty_string())
        } else {
            format!("Data loaded: {}", payload)
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, report: &Report) {
        debug!("Loaded {} at {}", report.location, report.loaded_at);
        info!("{}", self.render(&report.payload));
    }
}
