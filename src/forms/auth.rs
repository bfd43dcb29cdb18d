use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Deserialize, Validate)]
pub struct PasswordForm {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub new_password: String,
}
