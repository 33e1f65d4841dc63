#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path not found")]
    NotFound,

    #[error("permission denied")]
    PermissionDenied,

    #[error("already exists")]
    AlreadyExists,

    #[error("destination has no file name")]
    NoFileName,

    #[error(transparent)]
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn from_io(err: std::io::Error) -> Error {
    match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound,
        std::io::ErrorKind::PermissionDenied => Error::PermissionDenied,
        std::io::ErrorKind::AlreadyExists => Error::AlreadyExists,
        _ => Error::Io(err),
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self { from_io(err) }
}
