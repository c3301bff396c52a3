use url::Url;

use crate::prelude::*;

/// Downloads and decodes the images for a prefix of the photo list, one at a time.
pub struct ImageMaterializer<'a> {
    client: &'a PhotoClient,
}

impl<'a> ImageMaterializer<'a> {
    pub fn new(client: &'a PhotoClient) -> Self {
        Self { client }
    }

    /// Materialize the first `limit` records into a fresh list.
    ///
    /// The first failing record aborts the whole call and nothing is returned
    /// for the records that already succeeded.
    pub fn materialize(
        &self,
        records: &[PhotoRecord],
        limit: usize,
    ) -> Result<Vec<RenderableImage>, MaterializeError> {
        let mut images = Vec::with_capacity(limit.min(records.len()));
        self.materialize_into(records, limit, &mut images)?;
        Ok(images)
    }

    /// Like [`materialize`](Self::materialize), but appends to `out`.
    ///
    /// Returns how many images this call appended. `out` is never cleared, so
    /// reusing one container across calls accumulates. On error, `out` keeps
    /// whatever was appended before the failing record.
    pub fn materialize_into(
        &self,
        records: &[PhotoRecord],
        limit: usize,
        out: &mut Vec<RenderableImage>,
    ) -> Result<usize, MaterializeError> {
        let mut count = 0;
        for record in records.iter().take(limit) {
            let image = self.materialize_one(record)?;
            out.push(image);
            count += 1;
            log::info!("Finished downloading photo {}", count);
        }
        log::info!(
            "Finished downloading {} photos ({} held)",
            count,
            out.len()
        );
        Ok(count)
    }

    fn materialize_one(&self, record: &PhotoRecord) -> Result<RenderableImage, MaterializeError> {
        let url = Url::parse(&record.url).map_err(|source| MaterializeError::InvalidUrl {
            id: record.id,
            url: record.url.clone(),
            source,
        })?;

        let bytes = self
            .client
            .get_bytes(url.as_str())
            .map_err(|e| MaterializeError::TransferFailed(e.to_string()))?;

        let image =
            image::load_from_memory(&bytes).map_err(|source| MaterializeError::DecodeFailed {
                url: url.to_string(),
                source,
            })?;

        Ok(RenderableImage::new(record, image))
    }
}
