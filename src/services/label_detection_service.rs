use anyhow::Error;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::json;

use crate::models::label_detection_response::{Label, LabelDetectionResponse};

#[async_trait]
pub trait DetectLabels {
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<Label>, Error>;
}

pub struct LabelDetectionService {
    base_url: String,
    api_key: String,
}

impl LabelDetectionService {
    pub fn new(base_url: String, api_key: String) -> LabelDetectionService {
        LabelDetectionService { base_url, api_key }
    }
}

#[async_trait]
impl DetectLabels for LabelDetectionService {
    async fn detect_labels(&self, image: &[u8]) -> Result<Vec<Label>, Error> {
        let url = format!("{}/detect-labels", self.base_url);
        let body = json!({
            "image": {
                "bytes": STANDARD.encode(image)
            }
        });

        let client = reqwest::Client::new();
        let resp = client
            .post(url)
            .header("Authorization", format!("Bearer: {}", self.api_key))
            .json(&body)
            .send()
            .await?
            .json::<LabelDetectionResponse>()
            .await?;

        Ok(resp.labels)
    }
}
