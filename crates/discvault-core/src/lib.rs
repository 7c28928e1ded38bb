//! Crate `discvault_core`: modelo de álbum y persistencia en el archivo `albums`

pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod store;

pub use config::{Encoding, StoreConfig, StoreConfigBuilder};
pub use display::{print_collection, render_collection};
pub use error::{ConfigError, StoreError};
pub use model::Album;
pub use store::RecordStore;

pub use discvault_paths::ArchivePaths;

/// Colección en memoria: `None` significa que no hay datos cargados.
pub type RecordCollection = Option<Vec<Album>>;
