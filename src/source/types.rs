use std::{fmt, path::PathBuf};

use url::Url;

use crate::source::error::ClientError;

/// Where the dashboard resource is read from. HTTP bases behave like the page
/// origin of a relative `fetch`, file roots like a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(Url),
    File(PathBuf),
}

impl Source {
    pub fn parse(source: &str) -> Result<Source, ClientError> {
        let lowered = source.to_ascii_lowercase();
        if lowered.starts_with("file://") {
            let path = Url::parse(source)?
                .to_file_path()
                .map_err(|_| ClientError::NotLocalFile(source.to_string()))?;
            return Ok(Source::File(path));
        }
        if !(lowered.starts_with("http://") || lowered.starts_with("https://")) {
            return Ok(Source::File(PathBuf::from(source)));
        }

        let mut url = Url::parse(source)?;
        // without the slash, joining would replace the last path segment
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Source::Http(url))
    }

    pub fn resolve(&self, resource: &str) -> Result<Location, url::ParseError> {
        match self {
            Source::Http(base) => Ok(Location::Http(base.join(resource)?)),
            Source::File(root) => Ok(Location::File(root.join(resource))),
        }
    }
}

/// A resource resolved against its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(Url),
    File(PathBuf),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Http(url) => write!(f, "{}", url),
            Location::File(path) => write!(f, "{}", path.display()),
        }
    }
}
