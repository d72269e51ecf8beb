use reqwest::Response;
use spdlog::prelude::*;
use url::Url;

use crate::source::error::ClientError;
use crate::source::types::{Location, Source};

#[derive(Debug)]
pub struct DataClient {
    source: Source,
    client: reqwest::Client,
}

impl DataClient {
    pub fn new(source: &str) -> Result<Self, ClientError> {
        Ok(DataClient {
            source: Source::parse(source)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn location(&self, resource: &str) -> Result<String, ClientError> {
        Ok(self.source.resolve(resource)?.to_string())
    }

    // one read per call, no retries. Bytes are returned undecoded.
    pub async fn get(&self, resource: &str) -> Result<Vec<u8>, ClientError> {
        match self.source.resolve(resource)? {
            Location::Http(url) => self.get_http(url).await,
            Location::File(path) => {
                debug!("Reading {}", path.display());
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| ClientError::Io {
                        location: path.display().to_string(),
                        source,
                    })
            }
        }
    }

    async fn get_http(&self, url: Url) -> Result<Vec<u8>, ClientError> {
        debug!("GET {}", url);
        let res = self.client.get(url.clone()).send().await?;

        self.handle_response(url, res).await
    }

    async fn handle_response(
        &self,
        url: Url,
        response: Response,
    ) -> Result<Vec<u8>, ClientError> {
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            return Err(ClientError::Status {
                status,
                location: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_http_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/processed/dashboard.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = DataClient::new(&server.uri()).unwrap();
        let body = client.get("data/processed/dashboard.json").await.unwrap();

        assert_eq!(body, b"[1,2,3]");
    }

    #[tokio::test]
    async fn test_get_http_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = DataClient::new(&server.uri()).unwrap();
        let result = client.get("data/processed/dashboard.json").await;

        match result {
            Err(ClientError::Status { status, location }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(location.ends_with("/data/processed/dashboard.json"));
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let client = DataClient::new(dir.path().to_str().unwrap()).unwrap();

        let result = client.get("data/processed/dashboard.json").await;

        assert!(matches!(result, Err(ClientError::Io { .. })));
    }

    #[test]
    fn test_location() {
        let client = DataClient::new("http://localhost:8000").unwrap();

        assert_eq!(
            client.location("data/processed/dashboard.json").unwrap(),
            "http://localhost:8000/data/processed/dashboard.json"
        );
    }

    #[tokio::test]
    async fn test_get_keeps_raw_bytes() {
        let body: &[u8] = b"{\"a\":\"\xff\"}";

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dashboard.json"), body).unwrap();

        let http = DataClient::new(&server.uri()).unwrap();
        let file = DataClient::new(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(http.get("dashboard.json").await.unwrap(), body);
        assert_eq!(file.get("dashboard.json").await.unwrap(), body);
    }
}
