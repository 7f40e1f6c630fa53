use anyhow::Error;
use async_trait::async_trait;
use serde_json::json;

use crate::models::translation_response::TranslationResponse;

const SOURCE_LANGUAGE_CODE: &str = "en";
const TARGET_LANGUAGE_CODE: &str = "pt";

#[async_trait]
pub trait Translate {
    async fn translate(&self, text: &str) -> Result<String, Error>;
}

pub struct TranslationService {
    base_url: String,
    api_key: String,
}

impl TranslationService {
    pub fn new(base_url: String, api_key: String) -> TranslationService {
        TranslationService { base_url, api_key }
    }
}

#[async_trait]
impl Translate for TranslationService {
    async fn translate(&self, text: &str) -> Result<String, Error> {
        let url = format!("{}/translate", self.base_url);
        let body = json!({
            "sourceLanguageCode": SOURCE_LANGUAGE_CODE,
            "targetLanguageCode": TARGET_LANGUAGE_CODE,
            "text": text
        });

        let client = reqwest::Client::new();
        let resp = client
            .post(url)
            .header("Authorization", format!("Bearer: {}", self.api_key))
            .json(&body)
            .send()
            .await?
            .json::<TranslationResponse>()
            .await?;

        Ok(resp.translated_text)
    }
}
