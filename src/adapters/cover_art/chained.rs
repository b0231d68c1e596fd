//! Tries cover providers in order until one has an answer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{CoverArtProvider, CoverQuery};

/// # Example
///
/// ```ignore
/// let provider = ChainedCoverArtProvider::new()
///     .then(Arc::new(CatalogCoverArtProvider))
///     .then(Arc::new(ItunesCoverArtProvider::new(config)?));
/// ```
#[derive(Default)]
pub struct ChainedCoverArtProvider {
    providers: Vec<Arc<dyn CoverArtProvider>>,
}

impl ChainedCoverArtProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, provider: Arc<dyn CoverArtProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl CoverArtProvider for ChainedCoverArtProvider {
    /// Provider errors are logged and the next provider is tried.
    async fn find_cover(&self, query: &CoverQuery) -> Result<Option<String>, DomainError> {
        for provider in &self.providers {
            match provider.find_cover(query).await {
                Ok(Some(cover)) => return Ok(Some(cover)),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        artist = %query.artist,
                        title = %query.title,
                        error = %err,
                        "Cover provider failed, trying next"
                    );
                }
            }
        }
        tracing::debug!(artist = %query.artist, title = %query.title, "No cover found");
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "chained"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProvider {
        answer: Result<Option<String>, DomainError>,
        calls: AtomicUsize,
    }

    impl FixedProvider {
        fn new(answer: Result<Option<String>, DomainError>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CoverArtProvider for FixedProvider {
        async fn find_cover(&self, _: &CoverQuery) -> Result<Option<String>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn query() -> CoverQuery {
        CoverQuery::new("Band", "Song")
    }

    #[tokio::test]
    async fn first_answer_wins() {
        let first = FixedProvider::new(Ok(Some("first".to_string())));
        let second = FixedProvider::new(Ok(Some("second".to_string())));
        let chain = ChainedCoverArtProvider::new().then(first).then(second.clone());

        assert_eq!(chain.find_cover(&query()).await.unwrap().as_deref(), Some("first"));
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn errors_and_misses_fall_through() {
        let failing = FixedProvider::new(Err(DomainError::new(ErrorCode::CoverArtUnavailable, "down")));
        let empty = FixedProvider::new(Ok(None));
        let last = FixedProvider::new(Ok(Some("last".to_string())));
        let chain = ChainedCoverArtProvider::new().then(failing).then(empty).then(last);

        assert_eq!(chain.find_cover(&query()).await.unwrap().as_deref(), Some("last"));
    }

    #[tokio::test]
    async fn empty_chain_finds_nothing() {
        let chain = ChainedCoverArtProvider::new();
        assert!(chain.is_empty());
        assert_eq!(chain.find_cover(&query()).await.unwrap(), None);
    }
}
