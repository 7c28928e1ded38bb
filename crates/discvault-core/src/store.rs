use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use discvault_paths::ArchivePaths;
use tempfile::NamedTempFile;
use tracing::{Level, debug, error, info, instrument, warn};

use crate::{
    config::{Encoding, StoreConfig},
    error::StoreError,
    model::Album,
};

/// Guarda y recupera la colección de álbumes en un único archivo JSON.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    config: StoreConfig,
}

impl RecordStore {
    /// Store ligado a `<data_dir>/albums`.
    pub fn new(paths: &ArchivePaths, config: StoreConfig) -> Self {
        Self::at(paths.albums_file.clone(), config)
    }

    pub fn at(path: impl Into<PathBuf>, config: StoreConfig) -> Self {
        RecordStore {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl RecordStore {
    /// Codifica `records` y reemplaza por completo el contenido del archivo.
    ///
    /// `None` se escribe como `null`, que al cargar vuelve a ser `None` y no una lista vacía.
    /// El contenido va primero a un temporal en la misma carpeta y luego se renombra.
    /// Si el archivo ya existía conserva sus permisos; uno nuevo queda solo para el dueño (0600).
    #[instrument(level = Level::DEBUG, skip_all, fields(path = %self.path.display()), err(level = Level::DEBUG))]
    pub fn save(&self, records: Option<&[Album]>) -> Result<(), StoreError> {
        let bytes = self.encode(records)?;

        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_err)?;
        }
        tmp.write_all(&bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        info!(
            albums = records.map(<[Album]>::len),
            bytes = bytes.len(),
            "Álbumes guardados"
        );
        Ok(())
    }

    /// Lee y decodifica el archivo. `Ok(None)` significa que se guardó `null`.
    #[instrument(level = Level::DEBUG, skip_all, fields(path = %self.path.display()), err(level = Level::DEBUG))]
    pub fn load(&self) -> Result<Option<Vec<Album>>, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let albums: Option<Vec<Album>> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        info!(albums = albums.as_ref().map(Vec::len), "Álbumes cargados");
        Ok(albums)
    }

    /// Borra el archivo si existe.
    #[instrument(level = Level::DEBUG, skip_all, fields(path = %self.path.display()), err(level = Level::DEBUG))]
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Nada que borrar");
                Ok(())
            }
            Err(source) => Err(StoreError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn encode(&self, records: Option<&[Album]>) -> Result<Vec<u8>, StoreError> {
        // serde_json escribe NaN e infinito como `null`, que después no se puede leer como f64
        if let Some(album) = records
            .into_iter()
            .flatten()
            .find(|album| !album.rating.is_finite())
        {
            return Err(StoreError::Encode(serde::ser::Error::custom(format!(
                "rating of {:?} is not a finite number: {}",
                album.title, album.rating
            ))));
        }

        let bytes = match self.config.encoding {
            Encoding::Pretty => serde_json::to_vec_pretty(&records),
            Encoding::Compact => serde_json::to_vec(&records),
        };
        bytes.map_err(StoreError::Encode)
    }
}

impl RecordStore {
    /// `save` que solo registra el error y sigue. Devuelve si se pudo guardar.
    pub fn save_or_log(&self, records: Option<&[Album]>) -> bool {
        match self.save(records) {
            Ok(()) => true,
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    /// `load` que trata igual un archivo ausente y uno corrupto: los dos dan `None`.
    pub fn load_or_none(&self) -> Option<Vec<Album>> {
        match self.load() {
            Ok(albums) => albums,
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }
}
