use derivative::Derivative;
use tracing::trace;

use crate::consts::{ICON_HIDE, ICON_SHOW, MASK_PLACEHOLDER};
use crate::view::FieldView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Revealed,
}

impl Visibility {
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Masked
    }
}

/// How a masked field hides its secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStyle {
    /// The value is swapped for a fixed-length placeholder. Read-only fields.
    Placeholder,
    /// The value stays in place and only the input type obscures it. Editable fields.
    Native,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Password,
    Text,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Password => "password",
            InputKind::Text => "text",
        }
    }
}

/// Icon next to the field: the hide icon while masked, the show icon while revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Hide,
    Show,
}

impl Icon {
    pub fn src(self) -> &'static str {
        match self {
            Icon::Hide => ICON_HIDE,
            Icon::Show => ICON_SHOW,
        }
    }
}

#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Rendering {
    #[derivative(Debug = "ignore")]
    pub value: String,
    pub input_kind: InputKind,
    pub icon: Icon,
}

/// State of one password field: the logical secret and whether it is shown.
#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct PasswordField {
    #[derivative(Debug = "ignore")]
    raw_secret: String,
    visibility: Visibility,
    style: MaskStyle,
    #[derivative(Debug = "ignore")]
    placeholder: String,
}

impl PasswordField {
    pub fn new(raw_secret: impl Into<String>, style: MaskStyle) -> Self {
        Self {
            raw_secret: raw_secret.into(),
            visibility: Visibility::Masked,
            style,
            placeholder: MASK_PLACEHOLDER.to_owned(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The logical secret, whatever is currently displayed.
    pub fn secret(&self) -> &str {
        &self.raw_secret
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn style(&self) -> MaskStyle {
        self.style
    }

    pub fn is_empty(&self) -> bool {
        self.raw_secret.is_empty()
    }

    /// Overwrites the secret (generation or user input). Visibility is kept.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.raw_secret = secret.into();
    }

    pub fn display_value(&self) -> &str {
        match (self.visibility, self.style) {
            (Visibility::Masked, MaskStyle::Placeholder) => &self.placeholder,
            _ => &self.raw_secret,
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self.visibility {
            Visibility::Masked => InputKind::Password,
            Visibility::Revealed => InputKind::Text,
        }
    }

    pub fn icon(&self) -> Icon {
        match self.visibility {
            Visibility::Masked => Icon::Hide,
            Visibility::Revealed => Icon::Show,
        }
    }

    pub fn rendering(&self) -> Rendering {
        Rendering {
            value: self.display_value().to_owned(),
            input_kind: self.input_kind(),
            icon: self.icon(),
        }
    }

    pub fn toggle(&mut self) -> Rendering {
        self.visibility = self.visibility.flipped();
        trace!(visibility = ?self.visibility, "toggled password field");
        self.rendering()
    }

    /// Pushes the current rendering to a view.
    pub fn bind<V: FieldView + ?Sized>(&self, view: &mut V) {
        let rendering = self.rendering();
        view.set_value(&rendering.value);
        view.set_input_kind(rendering.input_kind);
        view.set_icon(rendering.icon);
    }

    /// Reads a user edit back from the view. Placeholder fields are read-only,
    /// so only native fields take the value.
    pub fn pull<V: FieldView + ?Sized>(&mut self, view: &V) {
        if self.style == MaskStyle::Native {
            self.raw_secret = view.value();
        }
    }
}
