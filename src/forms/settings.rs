use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct SettingsForm {
    #[validate(length(min = 1, message = "site name is required"))]
    pub site_name: String,
    #[serde(default)]
    pub tagline: String,
    #[validate(email)]
    pub contact_email: String,
    #[serde(default)]
    pub default_theme: String,
}

#[derive(Deserialize, Validate)]
pub struct PageContentForm {
    #[validate(length(min = 1, message = "page is required"))]
    pub page: String,
    #[validate(length(min = 1, message = "section is required"))]
    pub section: String,
    pub body: String,
}

/// Role membership form; checkbox groups submit one `roles` entry per box,
/// which `serde_html_form` collects into a `Vec`.
#[derive(Debug, Deserialize)]
pub struct AssignRolesForm {
    pub user_id: i32,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_collect_repeated_fields() {
        let form: AssignRolesForm =
            serde_html_form::from_str("user_id=3&roles=admin&roles=staff").unwrap();
        assert_eq!(form.user_id, 3);
        assert_eq!(form.roles, vec!["admin", "staff"]);
    }

    #[test]
    fn roles_default_to_empty() {
        let form: AssignRolesForm = serde_html_form::from_str("user_id=3").unwrap();
        assert!(form.roles.is_empty());
    }
}
