pub mod image_service;
pub mod label_detection_service;
pub mod translation_service;
