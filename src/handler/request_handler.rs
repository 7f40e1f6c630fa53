use anyhow::{anyhow, Error};
use log::{error, info};

use crate::models::event::{Event, EventResponse};
use crate::models::label_detection_response::Label;
use crate::services::image_service::FetchImage;
use crate::services::label_detection_service::DetectLabels;
use crate::services::translation_service::Translate;

const IMG_URL_PARAMETER: &str = "imgUrl";
const CONFIDENCE_THRESHOLD: f64 = 80.0;
const NAME_SEPARATOR: &str = " and ";
const TRANSLATED_NAME_SEPARATOR: &str = " e ";
const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

pub struct RequestHandler<F, D, T> {
    image_service: F,
    label_detection_service: D,
    translation_service: T,
}

impl<F, D, T> RequestHandler<F, D, T>
where
    F: FetchImage,
    D: DetectLabels,
    T: Translate,
{
    pub fn new(
        image_service: F,
        label_detection_service: D,
        translation_service: T,
    ) -> RequestHandler<F, D, T> {
        RequestHandler {
            image_service,
            label_detection_service,
            translation_service,
        }
    }

    pub async fn handle(&self, event: Event) -> EventResponse {
        match self.build_report(event).await {
            Ok(report) => EventResponse {
                status_code: 200,
                message: format!("A imagem tem \n{}", report),
            },
            Err(err) => {
                error!("Error => {:?}", err);

                EventResponse {
                    status_code: 500,
                    message: INTERNAL_SERVER_ERROR.to_string(),
                }
            }
        }
    }

    async fn build_report(&self, event: Event) -> Result<String, Error> {
        let img_url = event
            .query_string_parameters
            .get(IMG_URL_PARAMETER)
            .ok_or_else(|| anyhow!("Missing required query parameter {}", IMG_URL_PARAMETER))?;

        info!("Downloading image...");
        let image = self.image_service.fetch_image(img_url).await?;

        info!("Detecting labels...");
        let labels = self.label_detection_service.detect_labels(&image).await?;
        let working_labels = filter_labels(labels);
        let names = join_names(&working_labels);

        info!("Translating to Portuguese...");
        let translated = self.translation_service.translate(&names).await?;
        let translated_names = split_translated_names(&translated);

        info!("Handling final object...");
        Ok(format_report(&translated_names, &working_labels))
    }
}

fn filter_labels(labels: Vec<Label>) -> Vec<Label> {
    labels
        .into_iter()
        .filter(|label| label.confidence > CONFIDENCE_THRESHOLD)
        .collect()
}

fn join_names(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<&str>>()
        .join(NAME_SEPARATOR)
}

// Recovers one translated term per label, relying on the translation
// service keeping the " e " conjunction between the joined names.
fn split_translated_names(translated: &str) -> Vec<String> {
    translated
        .split(TRANSLATED_NAME_SEPARATOR)
        .map(|name| name.to_string())
        .collect()
}

fn format_report(translated_names: &[String], labels: &[Label]) -> String {
    translated_names
        .iter()
        .zip(labels)
        .map(|(name, label)| format!("{:.2}% de ser do tipo {}", label.confidence, name))
        .collect::<Vec<String>>()
        .join("\n")
}
