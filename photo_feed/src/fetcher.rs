use crate::prelude::*;

/// Fetches and decodes the photo metadata list.
pub struct MetadataFetcher<'a> {
    client: &'a PhotoClient,
}

impl<'a> MetadataFetcher<'a> {
    pub fn new(client: &'a PhotoClient) -> Self {
        Self { client }
    }

    /// GET `endpoint` and decode the body as a JSON array of records.
    ///
    /// A transport failure or non-success status is
    /// `FetchError::TransportOrValidation`; a body that is not a list of
    /// records is `FetchError::DecodeFailed`.
    pub fn fetch(&self, endpoint: &str) -> Result<Vec<PhotoRecord>, FetchError> {
        log::info!("Fetching photo list from {}", endpoint);
        let body = self
            .client
            .get_bytes(endpoint)
            .map_err(|e| FetchError::TransportOrValidation(e.to_string()))?;

        let records: Vec<PhotoRecord> = serde_json::from_slice(&body)?;
        log::info!("Decoded {} photo records", records.len());
        Ok(records)
    }
}
