pub mod chunk;

pub use crate::domain::model::{Coord, SearchResult};
pub use crate::domain::ports::ReprojectionBackend;
pub use crate::utils::error::Result;
