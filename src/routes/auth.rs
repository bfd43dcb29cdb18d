//! Sign-up, sign-in and profile management.

use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::forms::auth::{PasswordForm, ProfileForm, SignInForm, SignUpForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, resolve_theme};
use crate::services::ServiceError;
use crate::services::auth as auth_service;

#[get("/auth/signin")]
pub async fn signin_page(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/admin");
    }

    let context = base_context(&flash_messages, None, "auth", &resolve_theme(&req));
    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate signin form: {e}");
        FlashMessage::error("Please enter email and password.").send();
        return redirect("/auth/signin");
    }

    let claims = match auth_service::login(repo.get_ref(), &form) {
        Ok(claims) => claims,
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Wrong email or password.").send();
            return redirect("/auth/signin");
        }
        Err(e) => {
            log::error!("Failed to sign in: {e}");
            FlashMessage::error("Sign-in failed. Please try again.").send();
            return redirect("/auth/signin");
        }
    };

    let token = match claims.to_jwt(&server_config.secret) {
        Ok(token) => token,
        Err(e) => {
            log::error!("Failed to issue session token: {e}");
            FlashMessage::error("Sign-in failed. Please try again.").send();
            return redirect("/auth/signin");
        }
    };

    if let Err(e) = Identity::login(&req.extensions(), token) {
        log::error!("Failed to attach identity: {e}");
        FlashMessage::error("Sign-in failed. Please try again.").send();
        return redirect("/auth/signin");
    }

    redirect("/admin")
}

#[get("/auth/signup")]
pub async fn signup_page(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/admin");
    }

    let context = base_context(&flash_messages, None, "auth", &resolve_theme(&req));
    render_template(&tera, "auth/signup.html", &context)
}

#[post("/auth/signup")]
pub async fn signup(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SignUpForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate signup form: {e}");
        FlashMessage::error("Please check the form: name, valid email, password of 8+ characters.")
            .send();
        return redirect("/auth/signup");
    }

    match auth_service::register_user(repo.get_ref(), &form) {
        Ok(registration) if registration.bootstrapped => {
            FlashMessage::success("Account created with administrator access. Please sign in.")
                .send();
        }
        Ok(_) => {
            FlashMessage::success(
                "Account created. An administrator has to assign you a role before you can use the back-office.",
            )
            .send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            return redirect("/auth/signup");
        }
        Err(e) => {
            log::error!("Failed to register user: {e}");
            FlashMessage::error("Registration failed. Please try again.").send();
            return redirect("/auth/signup");
        }
    }

    redirect("/auth/signin")
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}

#[get("/profile")]
pub async fn profile(
    req: HttpRequest,
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, Some(&user), "profile", &resolve_theme(&req));
    render_template(&tera, "profile/index.html", &context)
}

#[post("/profile")]
pub async fn update_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ProfileForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate profile form: {e}");
        FlashMessage::error("Name is required.").send();
        return redirect("/profile");
    }

    let Some(user_id) = user.user_id() else {
        return redirect("/auth/signin");
    };

    match auth_service::update_profile(repo.get_ref(), user_id, &form.name) {
        Ok(_) => {
            // claims still carry the old name until the next sign-in
            FlashMessage::success("Profile updated. Changes show up after your next sign-in.")
                .send();
        }
        Err(e) => {
            log::error!("Failed to update profile: {e}");
            FlashMessage::error("Profile update failed.").send();
        }
    }

    redirect("/profile")
}

#[post("/profile/password")]
pub async fn change_password(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<PasswordForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::error!("Failed to validate password form: {e}");
        FlashMessage::error("New password must be at least 8 characters.").send();
        return redirect("/profile");
    }

    let Some(user_id) = user.user_id() else {
        return redirect("/auth/signin");
    };

    match auth_service::change_password(repo.get_ref(), user_id, &form) {
        Ok(()) => FlashMessage::success("Password changed.").send(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(e) => {
            log::error!("Failed to change password: {e}");
            FlashMessage::error("Password change failed.").send();
        }
    }

    redirect("/profile")
}
