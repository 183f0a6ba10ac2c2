//! Page models: the state behind each page that shows password fields, and
//! the handlers its buttons trigger.

use derivative::Derivative;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

use crate::clipboard::{copy_to_clipboard, Clipboard, CopyOutcome};
use crate::consts::{MSG_COPIED, MSG_ENTRY_COPIED, MSG_GENERATED, MSG_GENERATE_FIRST, MSG_PASSWORD_COPIED};
use crate::field::{MaskStyle, PasswordField, Rendering};
use crate::generator::{self, GeneratorOptions};
use crate::view::Notifier;

/// A stored account as the backend embeds it in the page.
#[derive(Derivative, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derivative(Debug)]
pub struct Entry {
    pub url: String,
    pub username: String,
    #[derivative(Debug = "ignore")]
    #[serde(default)]
    pub password: String,
}

impl Entry {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        serde_json::from_str(json).wrap_err("failed to parse embedded entry")
    }
}

/// What a copy button points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum CopyTarget {
    #[strum(to_string = "url", serialize = "urlInput")]
    Url,
    #[strum(to_string = "username", serialize = "usernameInput")]
    Username,
    #[strum(to_string = "password", serialize = "passwordInput")]
    Password,
}

/// Read-only view of one entry with a placeholder-masked password.
#[derive(Debug, Clone)]
pub struct EntryPage {
    url: String,
    username: String,
    field: PasswordField,
}

impl EntryPage {
    pub fn new(entry: Entry) -> Self {
        Self {
            url: entry.url,
            username: entry.username,
            field: PasswordField::new(entry.password, MaskStyle::Placeholder),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.field = self.field.with_placeholder(placeholder);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn field(&self) -> &PasswordField {
        &self.field
    }

    pub fn toggle(&mut self) -> Rendering {
        self.field.toggle()
    }

    /// The value a copy button writes. The password target always yields the
    /// real secret, never the placeholder.
    pub fn copy_value(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::Url => &self.url,
            CopyTarget::Username => &self.username,
            CopyTarget::Password => self.field.secret(),
        }
    }

    pub async fn copy<C, N>(&self, target: CopyTarget, clipboard: &C, notifier: &mut N) -> CopyOutcome
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        debug!(%target, "copy requested");
        copy_to_clipboard(clipboard, notifier, self.copy_value(target), MSG_ENTRY_COPIED).await
    }
}

/// Edit form: a generator and one editable password field.
#[derive(Debug, Clone)]
pub struct EditPage {
    pub options: GeneratorOptions,
    field: PasswordField,
}

impl EditPage {
    pub fn new(secret: impl Into<String>, options: GeneratorOptions) -> Self {
        Self {
            options,
            field: PasswordField::new(secret, MaskStyle::Native),
        }
    }

    pub fn field(&self) -> &PasswordField {
        &self.field
    }

    /// User typed into the field.
    pub fn input(&mut self, value: impl Into<String>) {
        self.field.set_secret(value);
    }

    pub fn toggle(&mut self) -> Rendering {
        self.field.toggle()
    }

    pub fn generate<N: Notifier + ?Sized>(&mut self, notifier: &mut N) -> Rendering {
        self.field.set_secret(generator::generate(&self.options));
        info!(length = self.options.length, "generated password for edit form");
        notifier.notify(MSG_GENERATED);
        self.field.rendering()
    }

    pub async fn copy<C, N>(&self, clipboard: &C, notifier: &mut N) -> CopyOutcome
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        copy_to_clipboard(clipboard, notifier, self.field.secret(), MSG_COPIED).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

/// Registration form: a password and its confirmation, both filled by the generator.
#[derive(Debug, Clone)]
pub struct RegisterPage {
    first: PasswordField,
    second: PasswordField,
}

impl Default for RegisterPage {
    fn default() -> Self {
        Self {
            first: PasswordField::new("", MaskStyle::Native),
            second: PasswordField::new("", MaskStyle::Native),
        }
    }
}

impl RegisterPage {
    pub fn field(&self, slot: Slot) -> &PasswordField {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    fn field_mut(&mut self, slot: Slot) -> &mut PasswordField {
        match slot {
            Slot::First => &mut self.first,
            Slot::Second => &mut self.second,
        }
    }

    pub fn input(&mut self, slot: Slot, value: impl Into<String>) {
        self.field_mut(slot).set_secret(value);
    }

    pub fn toggle(&mut self, slot: Slot) -> Rendering {
        self.field_mut(slot).toggle()
    }

    /// Fills both fields with the same freshly generated password.
    pub fn generate(&mut self) -> &str {
        let password = generator::generate(&GeneratorOptions::registration());
        self.second.set_secret(password.clone());
        self.first.set_secret(password);
        self.first.secret()
    }

    /// Copies the first field. An empty field is not copied; the user is told
    /// to generate first.
    pub async fn copy<C, N>(&self, clipboard: &C, notifier: &mut N) -> CopyOutcome
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.first.is_empty() {
            notifier.notify(MSG_GENERATE_FIRST);
            return CopyOutcome::Skipped;
        }
        copy_to_clipboard(clipboard, notifier, self.first.secret(), MSG_PASSWORD_COPIED).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MASK_PLACEHOLDER, REGISTRATION_LENGTH};

    fn entry() -> Entry {
        Entry {
            url: "https://example.org".into(),
            username: "alice".into(),
            password: "correct horse".into(),
        }
    }

    #[test]
    fn entry_from_embedded_json() {
        let parsed = Entry::from_json(r#"{"url":"https://example.org","username":"alice","password":"correct horse"}"#).unwrap();
        assert_eq!(parsed, entry());
        let no_secret = Entry::from_json(r#"{"url":"u","username":"n"}"#).unwrap();
        assert_eq!(no_secret.password, "");
        assert!(Entry::from_json("{").is_err());
    }

    #[test]
    fn entry_debug_hides_password() {
        assert!(!format!("{:?}", entry()).contains("correct horse"));
    }

    #[test]
    fn copy_targets_from_button_ids() {
        assert_eq!("passwordInput".parse::<CopyTarget>().unwrap(), CopyTarget::Password);
        assert_eq!("username".parse::<CopyTarget>().unwrap(), CopyTarget::Username);
        assert_eq!("urlInput".parse::<CopyTarget>().unwrap(), CopyTarget::Url);
        assert!("notes".parse::<CopyTarget>().is_err());
    }

    #[test]
    fn masked_entry_copies_real_secret() {
        let page = EntryPage::new(entry());
        assert_eq!(page.field().display_value(), MASK_PLACEHOLDER);
        assert_eq!(page.copy_value(CopyTarget::Password), "correct horse");
        assert_eq!(page.copy_value(CopyTarget::Username), "alice");
    }

    #[test]
    fn custom_placeholder() {
        let page = EntryPage::new(entry()).with_placeholder("********");
        assert_eq!(page.field().display_value(), "********");
    }

    #[test]
    fn register_generate_fills_both() {
        let mut page = RegisterPage::default();
        let password = page.generate().to_owned();
        assert_eq!(password.chars().count(), REGISTRATION_LENGTH);
        assert_eq!(page.field(Slot::First).secret(), password);
        assert_eq!(page.field(Slot::Second).secret(), password);
    }

    #[test]
    fn register_never_uses_extended_symbols() {
        let mut page = RegisterPage::default();
        for _ in 0..200 {
            let password = page.generate().to_owned();
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric() || crate::charset::BASIC_SPECIAL.contains(c)), "{}", password);
        }
    }

    #[test]
    fn register_toggles_are_independent() {
        let mut page = RegisterPage::default();
        page.toggle(Slot::Second);
        assert_eq!(page.field(Slot::First).visibility(), crate::field::Visibility::Masked);
        assert_eq!(page.field(Slot::Second).visibility(), crate::field::Visibility::Revealed);
    }

    #[test]
    fn edit_generate_notifies() {
        let mut page = EditPage::new("", GeneratorOptions::new(8).with(crate::charset::CharClass::Digit));
        let mut messages: Vec<String> = Vec::new();
        let rendering = page.generate(&mut messages);
        assert_eq!(rendering.value.len(), 8);
        assert!(rendering.value.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(messages, vec![MSG_GENERATED.to_owned()]);
    }
}
