pub mod config;
pub mod event;
pub mod label_detection_response;
pub mod translation_response;
