use std::io::Write;

use common::field::{Icon, InputKind};
use common::view::{FieldView, Notifier};
use tracing::error;

/// Renders one password field and user messages as lines of text.
pub struct Terminal<W: Write> {
    out: W,
    value: String,
    input_kind: InputKind,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            value: String::new(),
            input_kind: InputKind::Password,
        }
    }

    pub fn println(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            error!("failed to write to terminal: {}", e);
        }
    }

    /// Prints the field as last bound.
    pub fn render(&mut self) {
        let state = match self.input_kind {
            InputKind::Password => "masked",
            InputKind::Text => "revealed",
        };
        let line = format!("password [{}]: {}", state, self.value);
        self.println(&line);
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FieldView for Terminal<W> {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }

    fn set_input_kind(&mut self, kind: InputKind) {
        self.input_kind = kind;
    }

    // no icons in a terminal
    fn set_icon(&mut self, _icon: Icon) {}
}

impl<W: Write> Notifier for Terminal<W> {
    fn notify(&mut self, message: &str) {
        self.println(message);
    }
}
