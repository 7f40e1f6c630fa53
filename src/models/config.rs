use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub label_detection_url: String,
    pub label_detection_api_key: String,
    pub translation_url: String,
    pub translation_api_key: String,
    pub log_level: String,
}
