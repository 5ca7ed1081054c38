use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyImage {
    pub url: String,
    /// Id of the asset at the hosted media service.
    pub public_id: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub order: u32,
}

/// Restores the image-set invariants after any mutation: at most one image
/// carries `is_main`, the first image is promoted when none does, and
/// `order` indexes follow list position.
pub fn normalize_images(images: &mut [PropertyImage]) {
    let mut main_seen = false;
    for image in images.iter_mut() {
        if image.is_main {
            if main_seen {
                image.is_main = false;
            }
            main_seen = true;
        }
    }
    if !main_seen {
        if let Some(first) = images.first_mut() {
            first.is_main = true;
        }
    }
    for (index, image) in images.iter_mut().enumerate() {
        image.order = index as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(public_id: &str, is_main: bool) -> PropertyImage {
        PropertyImage {
            url: format!("https://media.test/{public_id}.jpg"),
            public_id: public_id.to_string(),
            alt: String::new(),
            is_main,
            order: 0,
        }
    }

    #[test]
    fn first_image_promoted_when_no_main_flag() {
        let mut images = vec![image("a", false), image("b", false)];
        normalize_images(&mut images);
        assert!(images[0].is_main);
        assert!(!images[1].is_main);
    }

    #[test]
    fn extra_main_flags_are_cleared() {
        let mut images = vec![image("a", true), image("b", true), image("c", true)];
        normalize_images(&mut images);
        assert_eq!(images.iter().filter(|i| i.is_main).count(), 1);
        assert!(images[0].is_main);
    }

    #[test]
    fn existing_main_flag_is_kept() {
        let mut images = vec![image("a", false), image("b", true)];
        normalize_images(&mut images);
        assert!(!images[0].is_main);
        assert!(images[1].is_main);
    }

    #[test]
    fn order_follows_list_position() {
        let mut images = vec![image("a", true), image("b", false), image("c", false)];
        normalize_images(&mut images);
        let orders: Vec<u32> = images.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn empty_set_is_a_noop() {
        let mut images: Vec<PropertyImage> = Vec::new();
        normalize_images(&mut images);
        assert!(images.is_empty());
    }
}
