use std::fmt::Display;
use std::fmt::Formatter;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Literal title substituted when the catalog record carries neither a
/// movie title nor a series name.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Simple enum for the two media kinds the client understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Movie media kind
    Movie,
    /// Series media kind
    Tv,
}

impl MediaKind {
    /// Path segment used by the detail and genre list endpoints
    pub const fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Tv => write!(f, "TV"),
        }
    }
}

/// Genre id/name pair as listed by the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Normalized movie-or-series record returned by any catalog query.
///
/// Every item that reaches this type has survived the filter+derive pass:
/// it carries both a poster path and a backdrop path, and `display_title`
/// is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog-service identifier
    pub id: u64,
    /// Movie title or series name, falling back to [`UNKNOWN_TITLE`]
    pub display_title: String,
    /// Poster path fragment, always non-empty
    pub poster_path: String,
    /// Backdrop path fragment, always non-empty
    pub backdrop_path: String,
    /// Synopsis, possibly empty
    pub overview: String,
    /// Release date (movies)
    pub release_date: Option<NaiveDate>,
    /// First air date (series)
    pub first_air_date: Option<NaiveDate>,
    /// Average vote on the 0-10 scale
    pub vote_average: f32,
    /// Movie or series, inferred when the source omits it
    pub media_kind: MediaKind,
    /// Genre ids in source order
    pub genre_ids: Vec<u64>,
}

impl CatalogItem {
    /// The date relevant for this item's kind: release date for movies,
    /// first air date for series.
    pub fn relevant_date(&self) -> Option<NaiveDate> {
        match self.media_kind {
            MediaKind::Movie => self.release_date,
            MediaKind::Tv => self.first_air_date,
        }
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, #{})", self.display_title, self.media_kind, self.id)
    }
}
