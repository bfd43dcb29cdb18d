//! Account management: password hashing, sign-up with first-admin
//! bootstrap, sign-in, and profile updates.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::system_log::NewSystemLog;
use crate::domain::types::normalize_email;
use crate::domain::user::{NewUser, User};
use crate::forms::auth::{PasswordForm, SignInForm, SignUpForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{SystemLogWriter, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Hash a password using Argon2id.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against an Argon2id hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[derive(Debug)]
pub struct Registration {
    pub user: User,
    /// True when this account was the first one and got the admin role.
    pub bootstrapped: bool,
}

/// Creates an account. The first registered account is elevated to the
/// admin role in the same operation and the elevation is recorded in the
/// system log.
pub fn register_user<R>(repo: &R, form: &SignUpForm) -> ServiceResult<Registration>
where
    R: UserReader + UserWriter + SystemLogWriter + ?Sized,
{
    let email = normalize_email(form.email.as_str())?;

    if repo.get_user_by_email(&email)?.is_some() {
        return Err(ServiceError::Form(
            "an account with this email already exists".to_string(),
        ));
    }

    let bootstrapped = repo.count_users()? == 0;

    let password_hash = hash_password(&form.password)
        .map_err(|e| ServiceError::Internal(format!("password hashing failed: {e}")))?;

    let user = repo.create_user(&NewUser::new(form.name.clone(), email, password_hash))?;

    if bootstrapped {
        repo.assign_role(user.id, SERVICE_ADMIN_ROLE)?;
        repo.create_system_log(&NewSystemLog::info(
            "first account elevated to admin",
            Some(json!({ "user_id": user.id, "email": user.email })),
        ))?;
    }

    Ok(Registration { user, bootstrapped })
}

/// Verifies credentials and returns the session claims.
pub fn login<R>(repo: &R, form: &SignInForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    let email = normalize_email(form.email.as_str())?;

    let user = repo
        .get_user_by_email(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&form.password, &user.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    let roles = repo.list_user_roles(user.id)?;

    Ok(AuthenticatedUser::new(&user, roles))
}

/// Updates the display name of the signed-in user.
pub fn update_profile<R>(repo: &R, user_id: i32, name: &str) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::Form("name is required".to_string()));
    }

    repo.update_user_name(user_id, name).map_err(Into::into)
}

/// Changes the password after verifying the current one.
pub fn change_password<R>(repo: &R, user_id: i32, form: &PasswordForm) -> ServiceResult<()>
where
    R: UserReader + UserWriter + ?Sized,
{
    let user = repo
        .get_user_by_id(user_id)?
        .ok_or(ServiceError::NotFound)?;

    if !verify_password(&form.current_password, &user.password_hash) {
        return Err(ServiceError::Form("current password is wrong".to_string()));
    }

    let password_hash = hash_password(&form.new_password)
        .map_err(|e| ServiceError::Internal(format!("password hashing failed: {e}")))?;

    repo.update_user_password(user_id, &password_hash)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::mock::MockRepository;

    fn stored_user(id: i32, email: &str) -> User {
        let now = Utc::now().naive_utc();
        User {
            id,
            name: "Jane".to_string(),
            email: email.to_string(),
            password_hash: hash_password("password123").unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    fn signup_form(email: &str) -> SignUpForm {
        SignUpForm {
            name: "Jane".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn first_account_is_elevated_to_admin() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email().returning(|_| Ok(None));
        repo.expect_count_users().returning(|| Ok(0));
        repo.expect_create_user()
            .returning(|new_user| Ok(stored_user(1, &new_user.email)));
        repo.expect_assign_role()
            .times(1)
            .withf(|user_id, role| *user_id == 1 && role == SERVICE_ADMIN_ROLE)
            .returning(|_, _| Ok(()));
        repo.expect_create_system_log().times(1).returning(|log| {
            Ok(crate::domain::system_log::SystemLog {
                id: 1,
                level: log.level.clone(),
                message: log.message.clone(),
                context: log.context.clone(),
                created_at: Utc::now().naive_utc(),
            })
        });

        let registration = register_user(&repo, &signup_form("jane@example.com")).unwrap();
        assert!(registration.bootstrapped);
    }

    #[test]
    fn later_accounts_get_no_roles() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email().returning(|_| Ok(None));
        repo.expect_count_users().returning(|| Ok(1));
        repo.expect_create_user()
            .returning(|new_user| Ok(stored_user(2, &new_user.email)));
        repo.expect_assign_role().times(0);
        repo.expect_create_system_log().times(0);

        let registration = register_user(&repo, &signup_form("second@example.com")).unwrap();
        assert!(!registration.bootstrapped);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email()
            .returning(|email| Ok(Some(stored_user(1, email))));

        let err = register_user(&repo, &signup_form("jane@example.com")).unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email()
            .returning(|email| Ok(Some(stored_user(1, email))));

        let form = SignInForm {
            email: "jane@example.com".to_string(),
            password: "wrong".to_string(),
        };
        assert!(matches!(
            login(&repo, &form),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn login_returns_claims_with_roles() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email()
            .returning(|email| Ok(Some(stored_user(1, email))));
        repo.expect_list_user_roles()
            .returning(|_| Ok(vec!["admin".to_string()]));

        let form = SignInForm {
            email: "jane@example.com".to_string(),
            password: "password123".to_string(),
        };
        let claims = login(&repo, &form).unwrap();
        assert_eq!(claims.roles, vec!["admin"]);
        assert_eq!(claims.user_id(), Some(1));
    }
}
