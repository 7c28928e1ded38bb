//! Crate `discvault_paths`: carpetas por usuario y ubicación fija del archivo de álbumes

mod errors;
mod fs_utils;
mod paths;

pub use errors::Error;
pub use paths::{ALBUMS_FILE_NAME, ArchivePaths};
