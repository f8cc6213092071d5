use std::path::Path;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::error::FetchError;
use crate::fs_util;

pub trait AssetClient {
    /// Downloads `url` into `destination`, returning the number of bytes written.
    ///
    /// The destination must not be touched when the server answers with a
    /// non-success status.
    fn download(&self, url: &str, destination: &Path) -> Result<u64, FetchError>;
}

pub struct HttpAssetClient {
    client: Client,
}

impl HttpAssetClient {
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("tesseract-assets/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::Client(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| FetchError::Client(err.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn handle_status(url: &str, response: Response) -> Result<Response, FetchError> {
        if response.status().is_success() {
            return Ok(response);
        }
        Err(FetchError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        })
    }
}

impl AssetClient for HttpAssetClient {
    fn download(&self, url: &str, destination: &Path) -> Result<u64, FetchError> {
        debug!(%url, "sending request");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FetchError::Http(err.to_string()))?;
        debug!(%url, status = response.status().as_u16(), "response received");
        let mut response = Self::handle_status(url, response)?;
        fs_util::stream_to_file(&mut response, destination)
    }
}
