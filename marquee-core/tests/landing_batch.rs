//! The landing view issues its four catalog queries together; one failing
//! rail must not take the others down.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use marquee_core::{CatalogGateway, CatalogTransport, TransportError};
use marquee_model::MediaKind;
use serde_json::{Value, json};

/// Canned transport: every list endpoint answers with one renderable item,
/// except the paths it is told to fail.
struct CannedTransport {
    failing_path: &'static str,
    calls: AtomicUsize,
}

impl CannedTransport {
    fn new(failing_path: &'static str) -> Self {
        Self {
            failing_path,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogTransport for CannedTransport {
    async fn get(&self, path: &str, _query: &[(String, String)]) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if path == self.failing_path {
            return Err(TransportError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(json!({
            "results": [{
                "id": 101,
                "title": "Canned Feature",
                "poster_path": "/poster.jpg",
                "backdrop_path": "/backdrop.jpg",
                "vote_average": 7.0
            }]
        }))
    }
}

#[tokio::test]
async fn one_failing_rail_does_not_sink_the_batch() {
    let transport = Arc::new(CannedTransport::new("/movie/top_rated"));
    let gateway = CatalogGateway::new(transport.clone());

    let (trending, popular_movies, popular_tv, top_rated) = tokio::join!(
        gateway.fetch_trending(),
        gateway.fetch_popular(MediaKind::Movie),
        gateway.fetch_popular(MediaKind::Tv),
        gateway.fetch_top_rated(),
    );

    assert_eq!(trending.len(), 1);
    assert_eq!(popular_movies.len(), 1);
    assert_eq!(popular_tv.len(), 1);
    assert!(top_rated.is_empty());
    assert_eq!(transport.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn a_fully_failing_service_still_resolves_everything() {
    struct DownTransport;

    #[async_trait]
    impl CatalogTransport for DownTransport {
        async fn get(
            &self,
            _path: &str,
            _query: &[(String, String)],
        ) -> Result<Value, TransportError> {
            Err(TransportError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }
    }

    let gateway = CatalogGateway::new(Arc::new(DownTransport));
    let (trending, popular, top_rated, detail, genres) = tokio::join!(
        gateway.fetch_trending(),
        gateway.fetch_popular(MediaKind::Movie),
        gateway.fetch_top_rated(),
        gateway.fetch_detail(42, MediaKind::Movie),
        gateway.fetch_genres(),
    );

    assert!(trending.is_empty());
    assert!(popular.is_empty());
    assert!(top_rated.is_empty());
    assert!(detail.is_none());
    assert!(genres.is_empty());
}
