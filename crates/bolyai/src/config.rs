use std::path::{Path, PathBuf};

use bolyai_catalog::Catalog;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::App;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config file {} does not exist", .0.display())]
    MissingFile(PathBuf),
    #[error(transparent)]
    FigmentError(#[from] Box<figment::Error>),
    #[error(transparent)]
    Catalog(#[from] bolyai_catalog::Error),
}

/// Everything a run needs, resolved once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub download_dir: PathBuf,
    /// Era names to restrict the run to; empty means all of them.
    pub eras: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("./downloads"),
            eras: Vec::new(),
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    download_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eras: Option<Vec<String>>,
}

impl Settings {
    /// Defaults, then the optional TOML file, then command line flags.
    pub fn load(app: &App) -> Result<Self, Error> {
        let mut fig = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = &app.config {
            fig = fig.merge(Self::file(path)?);
        }

        let overrides = Overrides {
            download_dir: app.output_dir.clone(),
            eras: (!app.eras.is_empty()).then(|| app.eras.clone()),
        };
        fig = fig.merge(Serialized::defaults(overrides));

        fig.extract().map_err(|e| Error::FigmentError(Box::new(e)))
    }

    fn file(path: &Path) -> Result<figment::providers::Data<Toml>, Error> {
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        Ok(Toml::file(path))
    }

    pub fn catalog(&self) -> Result<Catalog, Error> { Ok(Catalog::only(self.eras.as_slice())?) }
}
