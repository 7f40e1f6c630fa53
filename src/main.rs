use std::env;
use std::io::{self, Read};

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use handler::request_handler::RequestHandler;
use models::config::Config;
use models::event::Event;
use services::image_service::ImageService;
use services::label_detection_service::LabelDetectionService;
use services::translation_service::TranslationService;

mod handler;
mod models;
mod services;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config: Config = Figment::new()
        .merge(Json::file("config.json"))
        .merge(Env::prefixed("IMAGE_REPORT_"))
        .extract()?;

    let log_level = config.log_level.parse().unwrap_or(LevelFilter::Info);
    SimpleLogger::new().with_level(log_level).init()?;

    info!("Reading invocation event");
    let event = read_event()?;

    let handler = RequestHandler::new(
        ImageService::new(),
        LabelDetectionService::new(config.label_detection_url, config.label_detection_api_key),
        TranslationService::new(config.translation_url, config.translation_api_key),
    );

    let response = handler.handle(event).await;

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}

// The event arrives either as the first command line argument or on stdin,
// both as the FaaS invocation JSON.
fn read_event() -> Result<Event, anyhow::Error> {
    let event = match env::args().nth(1) {
        Some(raw) => serde_json::from_str(&raw)?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            serde_json::from_str(&raw)?
        }
    };

    Ok(event)
}
