pub const CONFIG_PATH: &str = "config.toml";
pub const HISTORY_PATH: &str = "history.txt";

pub const DEFAULT_LENGTH: usize = 16;
pub const REGISTRATION_LENGTH: usize = 12;
/// Longer requests are clamped to this.
pub const MAX_LENGTH: usize = 4096;

pub const MASK_PLACEHOLDER: &str = "●●●●●●●●●●●●";

pub const ICON_SHOW: &str = "/static/images/show.png";
pub const ICON_HIDE: &str = "/static/images/hide.png";

pub const MSG_GENERATED: &str = "Random password generated and filled in the input field!";
pub const MSG_COPIED: &str = "Copied";
pub const MSG_ENTRY_COPIED: &str = "Copied to clipboard";
pub const MSG_PASSWORD_COPIED: &str = "Password copied to clipboard!";
pub const MSG_GENERATE_FIRST: &str = "Generate a password first!";
