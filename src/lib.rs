pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod publisher;
pub mod ui;
pub mod updater;
pub mod version;

pub use error::{ReleaseError, Result};
