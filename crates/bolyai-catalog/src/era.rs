use std::fmt;
use std::ops::RangeInclusive;

/// The two generations of the competition archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// `matek.bolyaiverseny.hu`, grades 3 to 8.
    Matek,
    /// `matek912.bolyaiverseny.hu`, grades 9 to 12.
    Matek912,
}

impl Host {
    pub fn base_url(self) -> &'static str {
        match self {
            Host::Matek => "https://matek.bolyaiverseny.hu/",
            Host::Matek912 => "https://matek912.bolyaiverseny.hu/",
        }
    }

    pub fn domain(self) -> &'static str {
        match self {
            Host::Matek => "matek.bolyaiverseny.hu",
            Host::Matek912 => "matek912.bolyaiverseny.hu",
        }
    }
}

/// Competition round a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    /// County round (`megyei`).
    County,
    /// National final (`donto`).
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Problems(Round),
    SolutionKey(Round),
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Problems(Round::County) => write!(f, "county problems"),
            DocumentKind::Problems(Round::Final) => write!(f, "final problems"),
            DocumentKind::SolutionKey(Round::County) => write!(f, "county solution key"),
            DocumentKind::SolutionKey(Round::Final) => write!(f, "final solution key"),
        }
    }
}

/// A remote/local file name template pair.
///
/// `remote` is relative to the host's base url. Placeholders are expanded by
/// [`crate::template::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    pub remote: &'static str,
    pub local: &'static str,
}

/// One naming convention of the archive, valid for a range of school years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Era {
    pub name: &'static str,
    pub host: Host,
    pub years: RangeInclusive<u8>,
    pub grades: RangeInclusive<u8>,
    /// Emitted once per (year, grade), in order.
    pub per_grade: &'static [Document],
    /// Emitted once per year, after all grades.
    pub per_year: &'static [Document],
}

const fn doc(kind: DocumentKind, remote: &'static str, local: &'static str) -> Document {
    Document {
        kind,
        remote,
        local,
    }
}

use DocumentKind::{Problems, SolutionKey};
use Round::{County, Final};

const COUNTY_912_KEYS: &[Document] = &[
    doc(
        SolutionKey(County),
        "feladatok/20{yy}-{nn}/megyei_megold.pdf",
        "20{yy}-{nn}_megyei_megoldas.pdf",
    ),
    doc(
        SolutionKey(Final),
        "feladatok/20{yy}-{nn}/donto_megold.pdf",
        "20{yy}-{nn}_donto_megoldas.pdf",
    ),
];

/// Every era of the archive, in download order.
pub static ERAS: &[Era] = &[
    Era {
        name: "matek",
        host: Host::Matek,
        years: 5..=24,
        grades: 3..=8,
        per_grade: &[
            doc(
                Problems(County),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_{gg}.pdf",
                "20{yy}-{nn}_{g}.pdf",
            ),
            doc(
                Problems(Final),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_{gg}_donto.pdf",
                "20{yy}-{nn}_donto_{g}.pdf",
            ),
        ],
        per_year: &[
            doc(
                SolutionKey(County),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_megoldokulcs.pdf",
                "20{yy}-{nn}_megoldas.pdf",
            ),
            doc(
                SolutionKey(Final),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_donto_megoldokulcs.pdf",
                "20{yy}-{nn}_donto_megoldas.pdf",
            ),
        ],
    },
    Era {
        name: "megyei",
        host: Host::Matek912,
        years: 14..=18,
        grades: 9..=12,
        per_grade: &[
            doc(
                Problems(County),
                "feladatok/20{yy}-{nn}/megyei{gg}.pdf",
                "20{yy}-{nn}_megyei_{g}.pdf",
            ),
            doc(
                Problems(Final),
                "feladatok/20{yy}-{nn}/donto{gg}.pdf",
                "20{yy}-{nn}_donto_{g}.pdf",
            ),
        ],
        per_year: COUNTY_912_KEYS,
    },
    // No 2019-20 entry; 2020-21 drops the century from file names.
    Era {
        name: "short",
        host: Host::Matek912,
        years: 20..=20,
        grades: 9..=12,
        per_grade: &[
            doc(
                Problems(County),
                "feladatok/20{yy}-{nn}/{yy}{nn}_matek_{gg}.pdf",
                "20{yy}-{nn}_megyei_{g}.pdf",
            ),
            doc(
                Problems(Final),
                "feladatok/20{yy}-{nn}/{yy}{nn}_matek_{gg}_donto.pdf",
                "20{yy}-{nn}_donto_{g}.pdf",
            ),
        ],
        per_year: COUNTY_912_KEYS,
    },
    Era {
        name: "matek912",
        host: Host::Matek912,
        years: 21..=24,
        grades: 9..=12,
        per_grade: &[
            doc(
                Problems(County),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_{gg}.pdf",
                "20{yy}-{nn}_megyei_{g}.pdf",
            ),
            doc(
                Problems(Final),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_{gg}_donto.pdf",
                "20{yy}-{nn}_donto_{g}.pdf",
            ),
        ],
        per_year: &[
            doc(
                SolutionKey(County),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_912_megoldokulcs.pdf",
                "20{yy}-{nn}_megyei_megoldas.pdf",
            ),
            doc(
                SolutionKey(Final),
                "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_912_donto_megoldokulcs.pdf",
                "20{yy}-{nn}_donto_megoldas.pdf",
            ),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Era> {
    ERAS.iter().find(|era| era.name == name)
}
