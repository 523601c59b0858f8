pub mod backends;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use backends::{EpsgIo, Twcc};
pub use config::ClientConfig;
pub use domain::model::{Coord, SearchResult};
pub use domain::ports::ReprojectionBackend;
pub use utils::error::{ProjError, Result};

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};
