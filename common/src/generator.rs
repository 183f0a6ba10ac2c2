use std::collections::BTreeSet;

use rand::{distributions::Uniform, Rng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{trace, warn};

use crate::charset::{CharClass, SpecialSet};
use crate::consts::{DEFAULT_LENGTH, MAX_LENGTH, REGISTRATION_LENGTH};

/// What to generate: a length and the character classes to draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub length: usize,
    pub classes: BTreeSet<CharClass>,
    pub special: SpecialSet,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClass::iter().collect(),
            special: SpecialSet::default(),
        }
    }
}

impl GeneratorOptions {
    /// No class enabled; add some with [`GeneratorOptions::with`].
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: BTreeSet::new(),
            special: SpecialSet::default(),
        }
    }

    pub fn with(mut self, class: CharClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Preset used by the registration page: letters, digits and `!@#$%^&*()`.
    pub fn registration() -> Self {
        Self {
            length: REGISTRATION_LENGTH,
            special: SpecialSet::Basic,
            ..Self::default()
        }
    }

    /// Caps the length at [`MAX_LENGTH`].
    pub fn clamped(mut self) -> Self {
        self.length = clamp_length(self.length);
        self
    }

    /// Builds options from raw form values. An empty or unparsable length
    /// falls back to the default length.
    pub fn from_form(length: &str, uppercase: bool, lowercase: bool, digits: bool, special: bool) -> Self {
        let mut options = Self::new(parse_length(length));
        options.set(CharClass::Uppercase, uppercase);
        options.set(CharClass::Lowercase, lowercase);
        options.set(CharClass::Digit, digits);
        options.set(CharClass::Special, special);
        options
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let enabled = self.is_enabled(class);
        self.set(class, !enabled);
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        self.classes.contains(&class)
    }

    /// The classes actually drawn from: the enabled ones, or the fallback
    /// class when none is enabled.
    pub fn effective_classes(&self) -> Vec<CharClass> {
        if self.classes.is_empty() {
            vec![CharClass::FALLBACK]
        } else {
            self.classes.iter().copied().collect()
        }
    }

    /// Union of the effective classes. Never empty.
    pub fn charset(&self) -> Vec<char> {
        let special = self.special;
        self.effective_classes()
            .into_iter()
            .flat_map(|class| match class {
                CharClass::Special => special.chars(),
                _ => class.chars(),
            }.chars())
            .collect()
    }
}

pub fn parse_length(text: &str) -> usize {
    let text = text.trim();
    if text.is_empty() {
        return DEFAULT_LENGTH;
    }
    match text.parse::<usize>() {
        Ok(length) => clamp_length(length),
        Err(e) => {
            warn!("invalid password length {:?} ({}), using {}", text, e, DEFAULT_LENGTH);
            DEFAULT_LENGTH
        }
    }
}

pub fn clamp_length(length: usize) -> usize {
    if length > MAX_LENGTH {
        warn!("password length {} is too long, using {}", length, MAX_LENGTH);
        MAX_LENGTH
    } else {
        length
    }
}

/// Generates a password using the thread-local CSPRNG.
pub fn generate(options: &GeneratorOptions) -> String {
    generate_with(&mut rand::thread_rng(), options)
}

/// Every character is drawn independently and uniformly from
/// [`GeneratorOptions::charset`].
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, options: &GeneratorOptions) -> String {
    let charset = options.charset();
    trace!(length = options.length, classes = ?options.effective_classes(), "generating password");

    let index = Uniform::from(0..charset.len());
    (0..options.length.min(MAX_LENGTH)).map(|_| charset[rng.sample(index)]).collect()
}
