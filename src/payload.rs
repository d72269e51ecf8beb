use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Dashboard data exactly as the processing step exported it. Nothing inside
/// is read or validated here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DashboardPayload(Value);

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl DashboardPayload {
    /// Parses the raw document. A leading UTF-8 byte order mark is skipped and
    /// invalid UTF-8 is a parse error.
    pub fn parse(body: &[u8]) -> Result<DashboardPayload, serde_json::Error> {
        serde_json::from_slice(body.strip_prefix(UTF8_BOM).unwrap_or(body))
    }

    #[cfg(test)]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl fmt::Display for DashboardPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
