// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! The toast store itself never fails: unknown ids are no-ops. Errors only
//! come from reading and writing `settings.toml`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
