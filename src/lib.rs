pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, PlayCommand};

pub use adapters::http::HttpDispatcher;
pub use config::{toml_config::TomlConfig, RemoteSettings, DEFAULT_HOST};
pub use crate::core::{player::Player, url::build_url};
pub use domain::model::{Action, DispatchOutcome, PlayRequest};
pub use utils::error::{RemoteError, Result};
