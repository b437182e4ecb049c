//! Read-only catalog gateway.
//!
//! Each operation issues one request (two for the genre listing), runs the
//! results through the normalization pass, and degrades to an empty result
//! on any failure. The fail-soft conversion happens in exactly one place,
//! [`soften`], so the contract cannot regress as operations are added: a
//! caller can always render what comes back, it just may be empty.

pub mod transport;

mod raw;

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use marquee_model::{CatalogDetail, CatalogItem, Genre, MediaKind};
use tracing::warn;

use crate::config::CatalogConfig;
use raw::{GenreEnvelope, ListEnvelope, RawDetail, RawItem};
use transport::{CatalogTransport, HttpTransport, TransportError};

/// Failures the gateway absorbs. Callers never see these; they exist for
/// the log line at the fail-soft boundary and for the inner fetch helpers.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Stateless adapter from query intents to normalized catalog records.
///
/// Owns no state beyond the transport handle; every call is independent
/// and idempotent from the caller's perspective.
#[derive(Clone)]
pub struct CatalogGateway {
    transport: Arc<dyn CatalogTransport>,
}

impl std::fmt::Debug for CatalogGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogGateway").finish_non_exhaustive()
    }
}

impl CatalogGateway {
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self { transport }
    }

    /// Gateway over the real HTTP transport
    pub fn over_http(config: CatalogConfig) -> Self {
        Self::new(Arc::new(HttpTransport::new(config)))
    }

    /// This week's trending movies and series, in source order
    pub async fn fetch_trending(&self) -> Vec<CatalogItem> {
        soften("trending", self.list("/trending/all/week", &[])).await
    }

    /// Popular titles for one media kind
    pub async fn fetch_popular(&self, kind: MediaKind) -> Vec<CatalogItem> {
        let path = format!("/{}/popular", kind.path_segment());
        soften("popular", self.list(&path, &[])).await
    }

    /// Top rated movies
    pub async fn fetch_top_rated(&self) -> Vec<CatalogItem> {
        soften("top_rated", self.list("/movie/top_rated", &[])).await
    }

    /// Multi-search across movies and series. An empty term short-circuits
    /// to an empty result without touching the transport; kinds other than
    /// movie/tv are discarded by normalization.
    pub async fn search(&self, term: &str) -> Vec<CatalogItem> {
        if term.is_empty() {
            return Vec::new();
        }
        let query = [("query".to_string(), term.to_string())];
        soften("search", self.list("/search/multi", &query)).await
    }

    /// Full details for one title, `None` when missing or on any failure
    pub async fn fetch_detail(&self, id: u64, kind: MediaKind) -> Option<CatalogDetail> {
        soften("detail", self.detail(id, kind)).await
    }

    /// Merged `id -> name` genre map across both kinds. The two lists are
    /// fetched concurrently; a failure on either collapses the whole call
    /// to an empty map.
    pub async fn fetch_genres(&self) -> BTreeMap<u64, String> {
        soften("genres", self.genres()).await
    }

    async fn list(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<CatalogItem>, GatewayError> {
        let value = self.transport.get(path, query).await?;
        let envelope: ListEnvelope = serde_json::from_value(value)?;
        Ok(envelope
            .results
            .into_iter()
            .filter_map(RawItem::normalize)
            .collect())
    }

    async fn detail(&self, id: u64, kind: MediaKind) -> Result<Option<CatalogDetail>, GatewayError> {
        let path = format!("/{}/{}", kind.path_segment(), id);
        let value = self.transport.get(&path, &[]).await?;
        let detail: RawDetail = serde_json::from_value(value)?;
        Ok(Some(detail.into_detail(kind)))
    }

    async fn genres(&self) -> Result<BTreeMap<u64, String>, GatewayError> {
        let (movie, tv) = futures::future::try_join(
            self.genre_list(MediaKind::Movie),
            self.genre_list(MediaKind::Tv),
        )
        .await?;
        Ok(movie
            .into_iter()
            .chain(tv)
            .map(|genre| (genre.id, genre.name))
            .collect())
    }

    async fn genre_list(&self, kind: MediaKind) -> Result<Vec<Genre>, GatewayError> {
        let path = format!("/genre/{}/list", kind.path_segment());
        let value = self.transport.get(&path, &[]).await?;
        let envelope: GenreEnvelope = serde_json::from_value(value)?;
        Ok(envelope.genres)
    }
}

/// The fail-soft boundary: run one fallible catalog operation and convert
/// any failure into the operation's empty result, logging it on the way.
async fn soften<T, F>(op: &'static str, inner: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, GatewayError>>,
{
    match inner.await {
        Ok(value) => value,
        Err(error) => {
            warn!(op, %error, "catalog request failed; serving empty result");
            T::default()
        }
    }
}
