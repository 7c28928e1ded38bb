use std::{fs, io, path::Path};

use tracing::{Level, instrument};

use crate::errors::Error;

/// Asegura que la carpeta `path` existe (creándola recursivamente si hace falta).
#[instrument(level = Level::TRACE, err)]
pub fn ensure_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Verifica que `path` es escribible.
#[instrument(level = Level::TRACE, err)]
pub fn check_writable(path: &Path) -> Result<(), Error> {
    let meta = fs::metadata(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o200 == 0 {
            return Err(denied(path));
        }
    }

    #[cfg(not(unix))]
    {
        if meta.permissions().readonly() {
            return Err(denied(path));
        }
    }

    Ok(())
}

fn denied(path: &Path) -> Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("No write permission for {}", path.display()),
    )
    .into()
}
