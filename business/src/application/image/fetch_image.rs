use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::cache::ImageCache;
use crate::domain::image::errors::ImageError;
use crate::domain::image::fetcher::RemoteImageFetcher;
use crate::domain::image::locator::StorageNamespace;
use crate::domain::image::use_cases::fetch_image::{FetchImageParams, FetchImageUseCase};
use crate::domain::logger::Logger;

/// Serves an image locator as an inline payload: cache first, then one
/// remote fetch whose result is cached for the rest of the process
/// lifetime. Concurrent misses for the same locator are not coalesced;
/// both fetch and both insert the same value.
pub struct FetchImageUseCaseImpl {
    pub cache: Arc<dyn ImageCache>,
    pub fetcher: Arc<dyn RemoteImageFetcher>,
    pub namespace: StorageNamespace,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchImageUseCase for FetchImageUseCaseImpl {
    async fn execute(&self, params: FetchImageParams) -> Result<String, ImageError> {
        let locator = params.locator.trim();
        if locator.is_empty() {
            return Err(ImageError::LocatorMissing);
        }

        if let Some(payload) = self.cache.get(locator) {
            self.logger.debug(&format!("Image cache hit: {}", locator));
            return Ok(payload);
        }

        if !self.namespace.contains(locator) {
            self.logger
                .warn(&format!("Rejected locator outside store: {}", locator));
            return Err(ImageError::ForeignLocator);
        }

        self.logger.info(&format!("Image cache miss: {}", locator));
        let payload = self.fetcher.fetch(locator).await?;
        self.cache.put(locator, payload.clone());
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use mockall::mock;

    mock! {
        pub Fetcher {}

        #[async_trait]
        impl RemoteImageFetcher for Fetcher {
            async fn fetch(&self, locator: &str) -> Result<String, ImageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    /// Same shape as the production cache: a mutex-guarded map.
    #[derive(Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, String>>,
    }

    impl ImageCache for MapCache {
        fn get(&self, locator: &str) -> Option<String> {
            self.entries.lock().unwrap().get(locator).cloned()
        }

        fn put(&self, locator: &str, payload: String) {
            self.entries
                .lock()
                .unwrap()
                .insert(locator.to_string(), payload);
        }
    }

    const LOCATOR: &str = "https://cdn.example.com/assets/products/a.png";

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(fetcher: MockFetcher, cache: Arc<MapCache>) -> FetchImageUseCaseImpl {
        FetchImageUseCaseImpl {
            cache,
            fetcher: Arc::new(fetcher),
            namespace: StorageNamespace::new("https://cdn.example.com/assets").unwrap(),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_fetch_once_and_serve_second_request_from_cache() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok("data:image/png;base64,AAAA".to_string()));

        let use_case = use_case(fetcher, Arc::new(MapCache::default()));

        let first = use_case
            .execute(FetchImageParams {
                locator: LOCATOR.to_string(),
            })
            .await
            .unwrap();
        let second = use_case
            .execute(FetchImageParams {
                locator: LOCATOR.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_reject_foreign_locator_without_fetching() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().times(0);

        let use_case = use_case(fetcher, Arc::new(MapCache::default()));

        let result = use_case
            .execute(FetchImageParams {
                locator: "https://elsewhere.example.com/a.png".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ImageError::ForeignLocator)));
    }

    #[tokio::test]
    async fn should_reject_empty_locator() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().times(0);

        let use_case = use_case(fetcher, Arc::new(MapCache::default()));

        let result = use_case
            .execute(FetchImageParams {
                locator: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ImageError::LocatorMissing)));
    }

    #[tokio::test]
    async fn should_not_cache_failed_fetches() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|_| Err(ImageError::FetchFailed));

        let cache = Arc::new(MapCache::default());
        let use_case = use_case(fetcher, cache.clone());

        for _ in 0..2 {
            let result = use_case
                .execute(FetchImageParams {
                    locator: LOCATOR.to_string(),
                })
                .await;
            assert!(matches!(result, Err(ImageError::FetchFailed)));
        }
        assert!(cache.get(LOCATOR).is_none());
    }

    #[tokio::test]
    async fn should_serve_pre_warmed_cache_entries() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().times(0);

        let cache = Arc::new(MapCache::default());
        cache.put(LOCATOR, "data:image/png;base64,BBBB".to_string());
        let use_case = use_case(fetcher, cache);

        let payload = use_case
            .execute(FetchImageParams {
                locator: LOCATOR.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(payload, "data:image/png;base64,BBBB");
    }
}
