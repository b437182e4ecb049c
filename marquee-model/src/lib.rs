//! Core data model definitions shared across marquee crates.

pub mod details;
pub mod image;
pub mod media;
pub mod session;

// Intentionally curated re-exports for downstream consumers.
pub use details::CatalogDetail;
pub use image::{ImageSize, image_url};
pub use media::{CatalogItem, Genre, MediaKind, UNKNOWN_TITLE};
pub use session::{AuthAction, AuthPhase, AuthState, Session};
