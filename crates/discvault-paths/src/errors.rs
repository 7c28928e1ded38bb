use std::io;

/// Errores genéricos del crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No se pudo determinar el directorio base del usuario
    #[error(
        "Could not determine the per-user data directory, ProjectDirs returned nothing; \
         the system probably does not provide a valid $HOME path."
    )]
    NoHome,

    /// Error de IO al crear o comprobar carpetas
    #[error(transparent)]
    Io(#[from] io::Error),
}
