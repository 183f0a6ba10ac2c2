use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /* clipboard failures: local, non-fatal, logged and never retried */

    #[error("ClipboardUnavailable")]
    ClipboardUnavailable,
    #[error("ClipboardRejected({0})")]
    ClipboardRejected(String),

    #[error("Config({0:#?})")]
    Config(eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;
