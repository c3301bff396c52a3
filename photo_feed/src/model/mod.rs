use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

/// One entry of the photo metadata list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// The album this photo belongs to.
    pub album_id: i64,
    /// Identifier of the photo.
    pub id: i64,
    /// Human readable title.
    pub title: String,
    /// Full resolution image URL.
    pub url: String,
    /// Small preview image URL.
    pub thumbnail_url: String,
}

/// A decoded image, ready to be handed to a presentation layer.
#[derive(Debug, Clone)]
pub struct RenderableImage {
    /// Id of the record the image was downloaded for.
    pub photo_id: i64,
    /// Title of the record the image was downloaded for.
    pub title: String,
    image: DynamicImage,
}

impl RenderableImage {
    pub fn new(record: &PhotoRecord, image: DynamicImage) -> Self {
        Self {
            photo_id: record.id,
            title: record.title.clone(),
            image,
        }
    }

    /// Returns the pixel dimensions of the decoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Scale to fit within a `size`x`size` cell, keeping the aspect ratio.
    pub fn thumbnail(&self, size: u32) -> DynamicImage {
        self.image.thumbnail(size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields_and_ignores_extras() {
        let body = r#"[{
            "albumId": 3,
            "id": 101,
            "title": "accusamus beatae",
            "url": "https://via.placeholder.com/600/92c952",
            "thumbnailUrl": "https://via.placeholder.com/150/92c952",
            "extra": true
        }]"#;

        let records: Vec<PhotoRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(
            records,
            vec![PhotoRecord {
                album_id: 3,
                id: 101,
                title: "accusamus beatae".to_string(),
                url: "https://via.placeholder.com/600/92c952".to_string(),
                thumbnail_url: "https://via.placeholder.com/150/92c952".to_string(),
            }]
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = r#"[{"albumId": 1, "id": 1, "title": "t", "url": "https://x/a.jpg"}]"#;
        assert!(serde_json::from_str::<Vec<PhotoRecord>>(body).is_err());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let body = r#"[{"albumId": "one", "id": 1, "title": "t",
            "url": "https://x/a.jpg", "thumbnailUrl": "https://x/a_t.jpg"}]"#;
        assert!(serde_json::from_str::<Vec<PhotoRecord>>(body).is_err());
    }

    #[test]
    fn thumbnail_fits_cell() {
        let record = PhotoRecord {
            album_id: 1,
            id: 7,
            title: "wide".to_string(),
            url: "https://x/wide.png".to_string(),
            thumbnail_url: "https://x/wide_t.png".to_string(),
        };
        let image = RenderableImage::new(&record, DynamicImage::new_rgb8(400, 200));

        assert_eq!(image.photo_id, 7);
        assert_eq!(image.dimensions(), (400, 200));
        assert_eq!(image.thumbnail(100).dimensions(), (100, 50));
    }
}
