use std::time::Duration;

use crate::prelude::*;

/// Blocking HTTP client shared by the metadata fetch and the image downloads.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct PhotoClient {
    inner: reqwest::blocking::Client,
}

impl PhotoClient {
    /// Build a client, applying the configured request timeout if there is one.
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let inner = builder
            .build()
            .map_err(|e| PipelineError::Client(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Download and return the raw bytes behind `url`.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to GET.
    ///
    /// # Returns
    ///
    /// The response body, or the `reqwest::Error` describing a transport
    /// failure, a non-success status, or a failed body read.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let resp = self.inner.get(url).send()?.error_for_status()?;
        let bytes = resp.bytes()?;
        log::debug!("GET {} -> {} bytes", url, bytes.len());
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> PhotoClient {
        PhotoClient::new(&PipelineConfig::default()).unwrap()
    }

    #[test]
    fn returns_body_on_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/blob");
            then.status(200).body("hello");
        });

        let bytes = client().get_bytes(&server.url("/blob")).unwrap();
        assert_eq!(bytes, b"hello");
        mock.assert();
    }

    #[test]
    fn non_success_status_is_an_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let err = client().get_bytes(&server.url("/missing")).unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        mock.assert();
    }
}
