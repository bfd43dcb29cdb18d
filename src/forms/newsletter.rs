use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::newsletter::NewSubscriber;
use crate::forms::optional_i32;
use crate::routes::new_subscriber_token;

#[derive(Deserialize, Validate)]
pub struct SaveCampaignForm {
    #[serde(default, deserialize_with = "optional_i32")]
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}

#[derive(MultipartForm)]
pub struct UploadSubscribersForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

impl UploadSubscribersForm {
    /// Parses the uploaded CSV (`email` and optional `name` columns) into
    /// subscriber payloads; rows without a valid email are skipped.
    pub fn parse(&mut self) -> Result<Vec<NewSubscriber>, Box<dyn std::error::Error>> {
        let file = self.csv.file.reopen()?;
        let mut rdr = csv::Reader::from_reader(file);

        let headers = rdr.headers()?.clone();
        let mut subscribers = Vec::new();

        for result in rdr.records() {
            let record = result?;

            let mut email = String::new();
            let mut name = None;

            for (i, field) in record.iter().enumerate() {
                match headers.get(i) {
                    Some("email") => email = field.to_string(),
                    Some("name") => {
                        if !field.trim().is_empty() {
                            name = Some(field.to_string());
                        }
                    }
                    _ => continue,
                }
            }

            match NewSubscriber::new(email, name, new_subscriber_token()) {
                Ok(subscriber) => subscribers.push(subscriber),
                Err(e) => log::warn!("Skipping CSV row with invalid email: {e}"),
            }
        }

        Ok(subscribers)
    }
}
