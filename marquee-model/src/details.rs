use serde::{Deserialize, Serialize};

use crate::media::{CatalogItem, Genre, MediaKind};

/// Extended record returned by a detail-by-id lookup.
///
/// Unlike list results, details are never dropped for missing image paths;
/// the image fields may be empty here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDetail {
    /// The base fields shared with list results
    pub item: CatalogItem,
    /// Resolved genres in source order
    pub genres: Vec<Genre>,
    /// Runtime in minutes (movies)
    pub runtime_minutes: Option<u32>,
    /// Per-episode runtimes in minutes (series)
    pub episode_runtimes: Vec<u32>,
    /// Number of seasons (series)
    pub season_count: Option<u32>,
    /// Marketing tagline, when the service has one
    pub tagline: Option<String>,
}

impl CatalogDetail {
    /// A single runtime figure usable for display: the movie runtime, or
    /// the first listed episode runtime for series.
    pub fn headline_runtime(&self) -> Option<u32> {
        match self.item.media_kind {
            MediaKind::Movie => self.runtime_minutes,
            MediaKind::Tv => self.episode_runtimes.first().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_item(kind: MediaKind) -> CatalogItem {
        CatalogItem {
            id: 42,
            display_title: "Sample".to_string(),
            poster_path: "/p.jpg".to_string(),
            backdrop_path: "/b.jpg".to_string(),
            overview: String::new(),
            release_date: None,
            first_air_date: None,
            vote_average: 6.1,
            media_kind: kind,
            genre_ids: Vec::new(),
        }
    }

    #[test]
    fn headline_runtime_prefers_kind_specific_field() {
        let movie = CatalogDetail {
            item: base_item(MediaKind::Movie),
            genres: Vec::new(),
            runtime_minutes: Some(131),
            episode_runtimes: Vec::new(),
            season_count: None,
            tagline: None,
        };
        assert_eq!(movie.headline_runtime(), Some(131));

        let series = CatalogDetail {
            item: base_item(MediaKind::Tv),
            genres: Vec::new(),
            runtime_minutes: None,
            episode_runtimes: vec![45, 52],
            season_count: Some(3),
            tagline: None,
        };
        assert_eq!(series.headline_runtime(), Some(45));
    }
}
