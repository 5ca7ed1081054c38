use serde::Deserialize;

/// Media-service ids of the listing's images in the desired order. Must
/// name exactly the current image set.
#[derive(Debug, Deserialize)]
pub struct ReorderImagesRequest {
    pub image_ids: Vec<String>,
}
