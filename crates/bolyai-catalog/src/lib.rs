//! Catalog of the Bolyai mathematics competition archive.
//!
//! The archive changed its naming convention several times. Each convention
//! is an [`Era`] in the static [`ERAS`] table; a [`Catalog`] expands the
//! selected eras into an ordered list of [`Task`]s. Expansion is pure: the
//! same catalog and download directory always produce the same list.

mod era;
mod error;
mod task;
mod template;

use std::path::Path;

pub use era::{Document, DocumentKind, ERAS, Era, Host, Round};
pub use error::{Error, Result};
pub use task::{Period, Task};
pub use template::render;

#[derive(Debug, Clone)]
pub struct Catalog {
    eras: Vec<&'static Era>,
}

impl Default for Catalog {
    fn default() -> Self { Self::all() }
}

impl Catalog {
    pub fn all() -> Self {
        Self {
            eras: ERAS.iter().collect(),
        }
    }

    /// Restrict the catalog to the named eras.
    ///
    /// Table order is kept regardless of the order of `names`. An empty
    /// selection means every era.
    pub fn only<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Ok(Self::all());
        }

        for name in names {
            if era::find(name.as_ref()).is_none() {
                return Err(Error::UnknownEra(name.as_ref().to_owned()));
            }
        }

        let eras = ERAS
            .iter()
            .filter(|era| names.iter().any(|n| n.as_ref() == era.name))
            .collect();
        Ok(Self { eras })
    }

    pub fn eras(&self) -> &[&'static Era] { &self.eras }

    pub fn tasks(&self, download_dir: &Path) -> Vec<Task> {
        let mut tasks = Vec::new();
        for era in self.eras.iter().copied() {
            expand_era(era, download_dir, &mut tasks);
        }
        tasks
    }
}

fn expand_era(era: &'static Era, download_dir: &Path, out: &mut Vec<Task>) {
    for year in era.years.clone() {
        let period = Period::new(year);

        for grade in era.grades.clone() {
            for doc in era.per_grade {
                out.push(make_task(era, doc, download_dir, period, Some(grade)));
            }
        }

        for doc in era.per_year {
            out.push(make_task(era, doc, download_dir, period, None));
        }
    }
}

fn make_task(
    era: &'static Era,
    doc: &Document,
    download_dir: &Path,
    period: Period,
    grade: Option<u8>,
) -> Task {
    Task {
        remote_url: format!("{}{}", era.host.base_url(), render(doc.remote, period, grade)),
        local_path: download_dir.join(render(doc.local, period, grade)),
        era: era.name,
        period,
        grade,
        kind: doc.kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn first_task_of_the_archive() {
        let tasks = Catalog::all().tasks(Path::new("downloads"));
        let first = &tasks[0];
        assert_eq!(
            first.remote_url,
            "https://matek.bolyaiverseny.hu/feladatok/2005-06/200506_matek_03.pdf"
        );
        assert_eq!(first.local_path, PathBuf::from("downloads/2005-06_3.pdf"));
        assert_eq!(first.grade, Some(3));
        assert_eq!(first.kind, DocumentKind::Problems(Round::County));
    }

    #[test]
    fn per_year_documents_follow_the_grades() {
        let tasks = Catalog::only(&["matek"]).unwrap().tasks(Path::new("d"));
        // 6 grades x 2 documents, then 2 solution keys.
        assert_eq!(
            tasks[12].remote_url,
            "https://matek.bolyaiverseny.hu/feladatok/2005-06/200506_matek_megoldokulcs.pdf"
        );
        assert_eq!(tasks[12].local_path, PathBuf::from("d/2005-06_megoldas.pdf"));
        assert_eq!(tasks[12].grade, None);
        assert_eq!(tasks[13].local_path, PathBuf::from("d/2005-06_donto_megoldas.pdf"));
        assert_eq!(tasks[14].local_path, PathBuf::from("d/2006-07_3.pdf"));
    }

    #[test]
    fn task_counts_per_era() {
        let count = |name: &str| Catalog::only(&[name]).unwrap().tasks(Path::new(".")).len();
        assert_eq!(count("matek"), 20 * (6 * 2 + 2));
        assert_eq!(count("megyei"), 5 * (4 * 2 + 2));
        assert_eq!(count("short"), 4 * 2 + 2);
        assert_eq!(count("matek912"), 4 * (4 * 2 + 2));
        assert_eq!(Catalog::all().tasks(Path::new(".")).len(), 280 + 50 + 10 + 40);
    }

    #[test]
    fn only_keeps_table_order() {
        let catalog = Catalog::only(&["matek912", "matek"]).unwrap();
        let names: Vec<_> = catalog.eras().iter().map(|e| e.name).collect();
        assert_eq!(names, ["matek", "matek912"]);
    }

    #[test]
    fn only_rejects_unknown_era() {
        let err = Catalog::only(&["matek", "bogus"]).unwrap_err();
        assert!(matches!(err, Error::UnknownEra(ref name) if name == "bogus"));
    }

    #[test]
    fn empty_selection_is_everything() {
        let none: [&str; 0] = [];
        assert_eq!(Catalog::only(&none).unwrap().eras().len(), ERAS.len());
    }
}
