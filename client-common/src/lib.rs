use strum_macros::Display;
use tracing::debug;

pub mod hibp;

pub const MIN_PASSWORD_LENGTH: usize = 10;
pub const MAX_PASSWORD_LENGTH: usize = 20;

pub fn check_email(email: &str) -> bool {
    validator::validate_email(email)
}

/// zxcvbn score from 0 (weak) to 4 (strong). Parts of the email count as
/// guessable user input.
pub fn check_password_strength(password: &str, email: &str) -> u8 {
    let user_inputs: Vec<_> = email.split(|c| c == '@' || c == '.').filter(|s| !s.is_empty()).collect();
    match zxcvbn::zxcvbn(password, &user_inputs) {
        Ok(e) => e.score(),
        Err(_) => 0,
    }
}

#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RegistrationIssue {
    #[strum(to_string = "Invalid email address")]
    InvalidEmail,
    #[strum(to_string = "Name is required")]
    MissingName,
    #[strum(to_string = "Length should be between 10 and 20 characters/numbers/symbols")]
    PasswordLength,
    #[strum(to_string = "Passwords must match")]
    PasswordMismatch,
}

/// Everything wrong with the form, empty when it can be submitted.
pub fn check_registration(form: &RegistrationForm) -> Vec<RegistrationIssue> {
    let mut issues = Vec::new();
    if !check_email(&form.email) {
        issues.push(RegistrationIssue::InvalidEmail);
    }
    if form.name.trim().is_empty() {
        issues.push(RegistrationIssue::MissingName);
    }
    let length = form.password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        issues.push(RegistrationIssue::PasswordLength);
    }
    if form.password != form.password2 {
        issues.push(RegistrationIssue::PasswordMismatch);
    }
    debug!(?issues, "checked registration form");
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::generator::{generate, GeneratorOptions};

    fn form(password: &str, password2: &str) -> RegistrationForm {
        RegistrationForm {
            email: "alice@example.org".into(),
            name: "Alice".into(),
            password: password.into(),
            password2: password2.into(),
        }
    }

    #[test]
    fn email_check() {
        assert!(check_email("alice@example.org"));
        assert!(!check_email("alice"));
        assert!(!check_email(""));
    }

    #[test]
    fn strength_ranks_generated_above_trivial() {
        let generated = generate(&GeneratorOptions::registration());
        assert!(check_password_strength(&generated, "alice@example.org") >= 3);
        assert!(check_password_strength("password", "alice@example.org") <= 1);
        assert_eq!(check_password_strength("", "alice@example.org"), 0);
    }

    #[test]
    fn valid_form_has_no_issues() {
        assert!(check_registration(&form("Ab3$efgh1jk", "Ab3$efgh1jk")).is_empty());
    }

    #[test]
    fn generated_registration_password_passes_length_check() {
        let password = generate(&GeneratorOptions::registration());
        assert!(check_registration(&form(&password, &password)).is_empty());
    }

    #[test]
    fn collects_every_issue() {
        let form = RegistrationForm {
            email: "nope".into(),
            name: " ".into(),
            password: "short".into(),
            password2: "other".into(),
        };
        assert_eq!(
            check_registration(&form),
            vec![
                RegistrationIssue::InvalidEmail,
                RegistrationIssue::MissingName,
                RegistrationIssue::PasswordLength,
                RegistrationIssue::PasswordMismatch,
            ]
        );
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_registration(&form(&"a".repeat(10), &"a".repeat(10))).is_empty());
        assert!(check_registration(&form(&"a".repeat(20), &"a".repeat(20))).is_empty());
        assert_eq!(check_registration(&form(&"a".repeat(21), &"a".repeat(21))), vec![RegistrationIssue::PasswordLength]);
    }

    #[test]
    fn issue_messages() {
        assert_eq!(RegistrationIssue::PasswordMismatch.to_string(), "Passwords must match");
    }
}
