use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Image size variants offered by the catalog's image host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    /// 342px wide, card grids
    W342,
    /// 500px wide, detail posters
    W500,
    /// Full resolution, hero backdrops
    Original,
}

impl ImageSize {
    /// URL size token understood by the image host
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build a full image URL from the image host base, a size token, and a
/// stored path fragment.
///
/// An absent or empty path yields a URL with an empty fragment; substituting
/// a placeholder for such URLs is the view's job, not this layer's.
pub fn image_url(base: &str, size: ImageSize, path: Option<&str>) -> String {
    format!(
        "{}/{}{}",
        base.trim_end_matches('/'),
        size.as_str(),
        path.unwrap_or_default()
    )
}
