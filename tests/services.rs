use brandwerk_site::domain::project::NewProject;
use brandwerk_site::forms::auth::{PasswordForm, SignInForm, SignUpForm};
use brandwerk_site::forms::main::ContactForm;
use brandwerk_site::repository::{DieselRepository, ProjectWriter, UserReader};
use brandwerk_site::services::ServiceError;
use brandwerk_site::services::auth as auth_service;
use brandwerk_site::services::main as main_service;

mod common;

fn signup(name: &str, email: &str) -> SignUpForm {
    SignUpForm {
        name: name.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
    }
}

#[test]
fn test_first_signup_bootstraps_admin() {
    let test_db = common::TestDb::new("test_first_signup_bootstraps_admin.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = auth_service::register_user(&repo, &signup("Jane", "jane@example.com")).unwrap();
    assert!(first.bootstrapped);
    assert_eq!(
        repo.list_user_roles(first.user.id).unwrap(),
        vec!["admin".to_string()]
    );

    let second = auth_service::register_user(&repo, &signup("Tom", "tom@example.com")).unwrap();
    assert!(!second.bootstrapped);
    assert!(repo.list_user_roles(second.user.id).unwrap().is_empty());

    // duplicate email is rejected
    let err =
        auth_service::register_user(&repo, &signup("Jane again", "JANE@example.com")).unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
}

#[test]
fn test_login_and_change_password() {
    let test_db = common::TestDb::new("test_login_and_change_password.db");
    let repo = DieselRepository::new(test_db.pool());

    let registration =
        auth_service::register_user(&repo, &signup("Jane", "jane@example.com")).unwrap();

    let claims = auth_service::login(
        &repo,
        &SignInForm {
            email: "Jane@Example.com".to_string(),
            password: "password123".to_string(),
        },
    )
    .unwrap();
    assert_eq!(claims.user_id(), Some(registration.user.id));
    assert!(claims.roles.contains(&"admin".to_string()));

    let wrong = auth_service::login(
        &repo,
        &SignInForm {
            email: "jane@example.com".to_string(),
            password: "nope".to_string(),
        },
    );
    assert!(matches!(wrong, Err(ServiceError::Unauthorized)));

    auth_service::change_password(
        &repo,
        registration.user.id,
        &PasswordForm {
            current_password: "password123".to_string(),
            new_password: "even-more-secret".to_string(),
        },
    )
    .unwrap();

    let relogin = auth_service::login(
        &repo,
        &SignInForm {
            email: "jane@example.com".to_string(),
            password: "even-more-secret".to_string(),
        },
    );
    assert!(relogin.is_ok());
}

#[test]
fn test_contact_message_is_sanitized() {
    let test_db = common::TestDb::new("test_contact_message_is_sanitized.db");
    let repo = DieselRepository::new(test_db.pool());

    let form = ContactForm {
        name: "Alice".to_string(),
        email: "ALICE@example.com".to_string(),
        phone: Some("".to_string()),
        subject: None,
        message: "Hello <script>alert(1)</script>world".to_string(),
    };

    let message = main_service::submit_contact(&repo, &form).unwrap();
    assert_eq!(message.email, "alice@example.com");
    assert!(!message.message.contains("script"));
    assert!(message.message.contains("world"));
}

#[test]
fn test_home_page_falls_back_then_uses_live_data() {
    let test_db = common::TestDb::new("test_home_page_fallbacks.db");
    let repo = DieselRepository::new(test_db.pool());

    // empty database: placeholder records keep sections populated
    let data = main_service::load_home_page(&repo);
    assert!(!data.projects.is_empty());
    assert!(data.projects.iter().all(|p| p.id == 0));

    let project = repo
        .create_project(&NewProject::new(
            "Real project".to_string(),
            "summary".to_string(),
            "description".to_string(),
            None,
            true,
            0,
        ))
        .unwrap();

    let data = main_service::load_home_page(&repo);
    assert_eq!(data.projects.len(), 1);
    assert_eq!(data.projects[0].id, project.id);

    // inactive projects are not served publicly
    assert!(
        main_service::load_project(&repo, project.id)
            .unwrap()
            .is_some()
    );
}
