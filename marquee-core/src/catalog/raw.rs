//! Wire-format records as the catalog service returns them, plus the
//! filter+derive pass that turns them into model types.
//!
//! The pass applies one rule uniformly to list results: derive the display
//! title (title-or-name, literal fallback), derive the media kind when the
//! service omits it, and drop anything that lacks either image path. An
//! absent path and an empty-string path count the same.

use chrono::NaiveDate;
use marquee_model::{CatalogDetail, CatalogItem, Genre, MediaKind, UNKNOWN_TITLE};
use serde::Deserialize;

/// `{ "results": [...] }` wrapper used by every list endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    #[serde(default)]
    pub results: Vec<RawItem>,
}

/// `{ "genres": [...] }` wrapper used by the genre list endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct GenreEnvelope {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// One pre-normalization list entry
#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    pub media_type: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

impl RawItem {
    /// Filter+derive pass. `None` means the item is dropped: either an
    /// image path is missing, or the service explicitly tagged it as a
    /// kind this client does not render (e.g. a person from multi-search).
    pub(crate) fn normalize(self) -> Option<CatalogItem> {
        let media_kind = match self.media_type.as_deref() {
            Some("movie") => MediaKind::Movie,
            Some("tv") => MediaKind::Tv,
            Some(_) => return None,
            None if self.title.is_some() => MediaKind::Movie,
            None => MediaKind::Tv,
        };
        let poster_path = non_empty(self.poster_path)?;
        let backdrop_path = non_empty(self.backdrop_path)?;

        Some(CatalogItem {
            id: self.id,
            display_title: derive_title(self.title, self.name),
            poster_path,
            backdrop_path,
            overview: self.overview,
            release_date: parse_date(self.release_date.as_deref()),
            first_air_date: parse_date(self.first_air_date.as_deref()),
            vote_average: self.vote_average,
            media_kind,
            genre_ids: self.genre_ids,
        })
    }
}

/// Flat object returned by the detail endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct RawDetail {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    pub tagline: Option<String>,
}

impl RawDetail {
    /// Details keep the same title derivation but are never dropped for
    /// missing images; the caller already committed to a specific id and
    /// kind, so empty image paths pass through.
    pub(crate) fn into_detail(self, kind: MediaKind) -> CatalogDetail {
        let genre_ids = self.genres.iter().map(|g| g.id).collect();
        CatalogDetail {
            item: CatalogItem {
                id: self.id,
                display_title: derive_title(self.title, self.name),
                poster_path: self.poster_path.unwrap_or_default(),
                backdrop_path: self.backdrop_path.unwrap_or_default(),
                overview: self.overview,
                release_date: parse_date(self.release_date.as_deref()),
                first_air_date: parse_date(self.first_air_date.as_deref()),
                vote_average: self.vote_average,
                media_kind: kind,
                genre_ids,
            },
            genres: self.genres,
            runtime_minutes: self.runtime,
            episode_runtimes: self.episode_run_time,
            season_count: self.number_of_seasons,
            tagline: self.tagline.filter(|t| !t.is_empty()),
        }
    }
}

fn derive_title(title: Option<String>, name: Option<String>) -> String {
    title
        .filter(|t| !t.is_empty())
        .or_else(|| name.filter(|n| !n.is_empty()))
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

fn non_empty(path: Option<String>) -> Option<String> {
    path.filter(|p| !p.is_empty())
}

// The service sometimes sends "" instead of omitting a date; both map to None.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn raw(value: Value) -> RawItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn drops_items_missing_either_image_path() {
        let entries = vec![
            json!({"id": 1, "title": "A", "poster_path": "/a.jpg", "backdrop_path": "/ab.jpg"}),
            json!({"id": 2, "title": "B", "poster_path": "/b.jpg"}),
            json!({"id": 3, "title": "C", "poster_path": "/c.jpg", "backdrop_path": "/cb.jpg"}),
            json!({"id": 4, "title": "D", "backdrop_path": "/db.jpg"}),
            json!({"id": 5, "title": "E", "poster_path": "/e.jpg", "backdrop_path": "/eb.jpg"}),
        ];
        let kept: Vec<_> = entries
            .into_iter()
            .filter_map(|v| raw(v).normalize())
            .collect();
        assert_eq!(kept.len(), 3);
        assert_eq!(
            kept.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3, 5]
        );
    }

    #[test]
    fn empty_string_path_counts_as_missing() {
        let item = raw(json!({
            "id": 9, "title": "X", "poster_path": "", "backdrop_path": "/b.jpg"
        }));
        assert!(item.normalize().is_none());
    }

    #[test]
    fn title_falls_back_to_name_then_literal() {
        let series = raw(json!({
            "id": 1, "name": "Show", "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        assert_eq!(series.normalize().unwrap().display_title, "Show");

        let nameless = raw(json!({
            "id": 2, "media_type": "movie", "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        assert_eq!(nameless.normalize().unwrap().display_title, UNKNOWN_TITLE);
    }

    #[test]
    fn kind_comes_from_explicit_field_else_title_presence() {
        let tagged = raw(json!({
            "id": 1, "title": "T", "media_type": "tv",
            "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        assert_eq!(tagged.normalize().unwrap().media_kind, MediaKind::Tv);

        let movie = raw(json!({
            "id": 2, "title": "T", "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        assert_eq!(movie.normalize().unwrap().media_kind, MediaKind::Movie);

        let series = raw(json!({
            "id": 3, "name": "S", "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        assert_eq!(series.normalize().unwrap().media_kind, MediaKind::Tv);
    }

    #[test]
    fn foreign_kinds_are_discarded() {
        let person = raw(json!({
            "id": 4, "name": "Someone", "media_type": "person",
            "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        assert!(person.normalize().is_none());
    }

    #[test]
    fn dates_parse_leniently() {
        let item = raw(json!({
            "id": 5, "title": "T", "release_date": "2019-07-02", "first_air_date": "",
            "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"
        }));
        let item = item.normalize().unwrap();
        assert_eq!(item.release_date, NaiveDate::from_ymd_opt(2019, 7, 2));
        assert_eq!(item.first_air_date, None);
    }

    #[test]
    fn detail_survives_missing_images() {
        let detail: RawDetail = serde_json::from_value(json!({
            "id": 603,
            "title": "The Matrix",
            "overview": "A hacker learns the truth.",
            "vote_average": 8.2,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "runtime": 136,
            "tagline": ""
        }))
        .unwrap();
        let detail = detail.into_detail(MediaKind::Movie);
        assert_eq!(detail.item.display_title, "The Matrix");
        assert_eq!(detail.item.poster_path, "");
        assert_eq!(detail.item.genre_ids, vec![28, 878]);
        assert_eq!(detail.runtime_minutes, Some(136));
        assert_eq!(detail.tagline, None);
    }
}
