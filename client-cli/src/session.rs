use std::io::Write;

use common::charset::CharClass;
use common::clipboard::{copy_to_clipboard, Clipboard};
use common::config::Config;
use common::consts::{MSG_COPIED, MSG_GENERATED};
use common::field::{MaskStyle, PasswordField};
use common::generator::{self, GeneratorOptions};
use tracing::{info, trace};

use crate::command::{Command, HELP};
use crate::terminal::Terminal;

/// One password field driven from the prompt.
#[derive(Debug)]
pub struct Session {
    defaults: GeneratorOptions,
    field: PasswordField,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            defaults: config.generator.clone(),
            field: PasswordField::new("", MaskStyle::Placeholder).with_placeholder(config.mask_placeholder.as_str()),
        }
    }

    pub fn field(&self) -> &PasswordField {
        &self.field
    }

    /// Defaults from the config, overridden by whatever was typed.
    fn options(&self, length: Option<usize>, classes: &[CharClass]) -> GeneratorOptions {
        let mut options = self.defaults.clone();
        if let Some(length) = length {
            options.length = length;
        }
        if !classes.is_empty() {
            options.classes = classes.iter().copied().collect();
        }
        options
    }

    pub async fn handle<C, W>(&mut self, command: Command, clipboard: &C, term: &mut Terminal<W>) -> eyre::Result<()>
    where
        C: Clipboard + ?Sized,
        W: Write,
    {
        trace!(?command, "handling command");
        match command {
            Command::Set(secret) => {
                self.field.set_secret(secret);
                self.field.bind(term);
                term.render();
            }
            Command::Generate { length, classes } => {
                let options = self.options(length, &classes);
                self.field.set_secret(generator::generate(&options));
                info!(length = options.length, "generated password");
                self.field.bind(term);
                term.render();
                term.println(MSG_GENERATED);
            }
            Command::Toggle => {
                self.field.toggle();
                self.field.bind(term);
                term.render();
            }
            Command::Show => {
                self.field.bind(term);
                term.render();
            }
            Command::Copy => {
                let outcome = copy_to_clipboard(clipboard, term, self.field.secret(), MSG_COPIED).await;
                trace!(?outcome, "copy finished");
            }
            Command::Strength(email) => {
                let score = client_common::check_password_strength(self.field.secret(), email.as_deref().unwrap_or(""));
                term.println(&format!("strength: {}/4", score));
            }
            Command::Pwned => {
                let count = client_common::hibp::check_password(self.field.secret()).await?;
                if count > 0 {
                    term.println(&format!("The password has been pwned {} times!", count));
                } else {
                    term.println("The password has not been pwned.");
                }
            }
            Command::Help => term.println(HELP),
        }
        Ok(())
    }
}
