use anyhow::{anyhow, Error};
use async_trait::async_trait;

#[async_trait]
pub trait FetchImage {
    async fn fetch_image(&self, img_url: &str) -> Result<Vec<u8>, Error>;
}

pub struct ImageService;

impl ImageService {
    pub fn new() -> ImageService {
        ImageService
    }
}

#[async_trait]
impl FetchImage for ImageService {
    async fn fetch_image(&self, img_url: &str) -> Result<Vec<u8>, Error> {
        let resp = reqwest::get(img_url).await?;

        if !resp.status().is_success() {
            return Err(anyhow!(
                "Failed to download image from {}, status {}",
                img_url,
                resp.status()
            ));
        }

        let bytes = resp.bytes().await?;

        Ok(bytes.to_vec())
    }
}
