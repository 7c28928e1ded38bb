use std::path::Path;

use config::{Config, File, FileFormat};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Cómo se escribe el JSON en disco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Indentado, legible por humanos
    Pretty,
    /// Una sola línea
    Compact,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Pretty
    }
}

/// Opciones del `RecordStore`. La ubicación del archivo no es configurable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct StoreConfig {
    pub encoding: Encoding,
}

impl StoreConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()
            .map_err(ConfigError::Parse)?;
        let sc = cfg.try_deserialize::<StoreConfig>().map_err(ConfigError::Parse)?;
        Ok(sc)
    }

    /// Igual que `from_file`, pero si el archivo no existe devuelve la configuración por defecto.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("{} no existe, usando configuración por defecto", path.display());
            Ok(Self::default())
        }
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
