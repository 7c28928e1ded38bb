use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::{errors::Error, fs_utils};

/// Nombre fijo del archivo donde se guardan los álbumes
pub const ALBUMS_FILE_NAME: &str = "albums";

/// Rutas de Discvault dentro del perfil del usuario
#[derive(Debug, Clone)]
pub struct ArchivePaths {
    // config_dir
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,

    // data_dir
    pub data_dir: PathBuf,
    pub albums_file: PathBuf,
}

impl ArchivePaths {
    /// Resuelve las carpetas por usuario y aplicación, las crea y comprueba que son escribibles.
    pub fn new() -> Result<Self, Error> {
        let proj = ProjectDirs::from("com", "Discvault", "Discvault").ok_or(Error::NoHome)?;
        Self::with_dirs(proj.config_dir().to_path_buf(), proj.data_dir().to_path_buf())
    }

    /// Mismo esquema que `new()` pero colgando de `base` (`base/config`, `base/data`).
    pub fn from_base(base: impl AsRef<Path>) -> Result<Self, Error> {
        let base = base.as_ref();
        Self::with_dirs(base.join("config"), base.join("data"))
    }

    fn with_dirs(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, Error> {
        let paths = ArchivePaths {
            settings_file: config_dir.join("settings.toml"),
            config_dir,
            albums_file: data_dir.join(ALBUMS_FILE_NAME),
            data_dir,
        };

        debug!(data_dir = %paths.data_dir.display(), "Rutas resueltas");

        paths.ensure_structure()?;
        paths.validate_structure()?;

        Ok(paths)
    }
}

impl ArchivePaths {
    /// Crea las carpetas base. El archivo de álbumes no se toca: solo aparece tras el primer guardado.
    pub fn ensure_structure(&self) -> Result<(), Error> {
        fs_utils::ensure_dir(&self.config_dir)?;
        fs_utils::ensure_dir(&self.data_dir)?;
        Ok(())
    }

    /// Valida que cada carpeta existe y es escribible. Si falta, la vuelve a crear.
    pub fn validate_structure(&self) -> Result<(), Error> {
        for dir in [&self.config_dir, &self.data_dir] {
            if !dir.exists() {
                fs_utils::ensure_dir(dir)?;
            }
            fs_utils::check_writable(dir)?;
        }
        Ok(())
    }
}
