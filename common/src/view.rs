//! Seams between the field logic and whatever renders it (DOM, terminal, tests).

use crate::field::{Icon, InputKind};

pub trait FieldView {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn set_input_kind(&mut self, kind: InputKind);
    fn set_icon(&mut self, icon: Icon);
}

/// Shows short messages to the user (acknowledgments and notices).
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// A view that only records what it was told. Hosts without a real widget
/// tree render from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub value: String,
    pub input_kind: InputKind,
    pub icon: Icon,
    pub messages: Vec<String>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            value: String::new(),
            input_kind: InputKind::Password,
            icon: Icon::Hide,
            messages: Vec::new(),
        }
    }
}

impl FieldView for MemoryView {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }

    fn set_input_kind(&mut self, kind: InputKind) {
        self.input_kind = kind;
    }

    fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }
}

impl Notifier for MemoryView {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MASK_PLACEHOLDER;
    use crate::field::{MaskStyle, PasswordField};

    #[test]
    fn bind_pushes_rendering() {
        let mut view = MemoryView::default();
        let mut field = PasswordField::new("abc", MaskStyle::Placeholder);

        field.bind(&mut view);
        assert_eq!(view.value, MASK_PLACEHOLDER);
        assert_eq!(view.input_kind, InputKind::Password);

        field.toggle();
        field.bind(&mut view);
        assert_eq!(view.value, "abc");
        assert_eq!(view.input_kind, InputKind::Text);
        assert_eq!(view.icon, Icon::Show);
    }

    #[test]
    fn pull_reads_edits_into_native_fields_only() {
        let mut view = MemoryView::default();
        view.set_value("edited");

        let mut native = PasswordField::new("old", MaskStyle::Native);
        native.pull(&view);
        assert_eq!(native.secret(), "edited");

        let mut placeholder = PasswordField::new("old", MaskStyle::Placeholder);
        placeholder.pull(&view);
        assert_eq!(placeholder.secret(), "old");
    }
}
