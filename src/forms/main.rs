use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Deserialize, Validate)]
pub struct SubscribeForm {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}
