//! Password-field logic shared by the front ends: generation, masking and
//! clipboard copy, independent of any rendering environment.

pub mod charset;
pub mod clipboard;
pub mod config;
pub mod consts;
pub mod error;
pub mod field;
pub mod generator;
pub mod page;
pub mod view;

pub use error::{Error, Result};
