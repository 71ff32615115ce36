//! Batch flow integration tests
//!
//! Runs batches against the simulated library API and checks what a
//! presentation layer would observe through the status registry.

#[cfg(test)]
mod tests {
    use crate::common::{BookFactory, FakeLibraryApi, RecordingSink, StatusAssertions};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use thalia_ops::core::batch::{BatchConfig, BatchOrchestrator};
    use thalia_ops::core::status::{SlotStatus, StatusRegistry};

    const SETTLE: Duration = Duration::from_millis(3000);

    fn orchestrator(sink: Arc<RecordingSink>) -> BatchOrchestrator {
        BatchOrchestrator::with_tokio(
            Arc::new(StatusRegistry::new()),
            sink,
            BatchConfig::new().with_settle_delay(SETTLE),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_all_books() {
        let sink = Arc::new(RecordingSink::default());
        let orchestrator = orchestrator(sink.clone());
        let registry = orchestrator.registry().clone();
        let keys = BookFactory::keys(6);
        let api = FakeLibraryApi::new()
            .failing(&keys[1], "No releases found")
            .failing(&keys[4], "Indexer timed out")
            .slow(&keys[0], Duration::from_millis(400));

        let outcome = orchestrator
            .run(keys.clone(), "search", |key| {
                let api = api.clone();
                async move { api.search_book(key).await }
            })
            .await;

        assert_eq!(outcome.summary.total, 6);
        assert_eq!(outcome.summary.failed, 2);
        assert_eq!(api.calls().len(), 6);

        registry.assert_slot(&keys[0], "search", SlotStatus::Succeeded);
        registry.assert_slot(&keys[1], "search", SlotStatus::Failed);
        registry.assert_slot(&keys[4], "search", SlotStatus::Failed);

        tokio::time::sleep(Duration::from_millis(1)).await;
        let mut details: Vec<String> = sink.received().into_iter().map(|n| n.message).collect();
        details.sort();
        assert_eq!(details, vec!["Indexer timed out", "No releases found"]);

        tokio::time::sleep(SETTLE).await;
        registry.assert_all(&keys, "search", SlotStatus::Idle);
        assert_eq!(registry.tag(&keys[1], "search").as_deref(), Some("search"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_keys_reset_before_slow_keys_settle() {
        let sink = Arc::new(RecordingSink::default());
        let orchestrator = orchestrator(sink);
        let registry = orchestrator.registry().clone();
        let keys = BookFactory::keys(2);
        let api = FakeLibraryApi::new().slow(&keys[1], SETTLE * 2);

        let batch = orchestrator.run(keys.clone(), "download", |key| {
            let api = api.clone();
            async move { api.search_book(key).await }
        });
        let observer = async {
            tokio::time::sleep(SETTLE + Duration::from_millis(100)).await;
            // The fast key has already gone back to idle while the slow key is in flight.
            registry.assert_slot(&keys[0], "download", SlotStatus::Idle);
            registry.assert_slot(&keys[1], "download", SlotStatus::Pending);
        };
        let (outcome, ()) = tokio::join!(batch, observer);

        assert!(outcome.all_succeeded());
        registry.assert_slot(&keys[1], "download", SlotStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_sees_ordered_sequences() {
        let sink = Arc::new(RecordingSink::default());
        let orchestrator = orchestrator(sink);
        let mut feed = orchestrator.registry().subscribe();
        let keys = BookFactory::keys(5);
        let api = FakeLibraryApi::new()
            .failing(&keys[2], "Bad request")
            .slow(&keys[3], Duration::from_millis(250));

        orchestrator
            .run(keys.clone(), "search", |key| {
                let api = api.clone();
                async move { api.search_book(key).await }
            })
            .await;
        tokio::time::sleep(SETTLE + Duration::from_millis(500)).await;

        let mut tags: HashMap<String, Vec<String>> = HashMap::new();
        while let Ok(change) = feed.try_recv() {
            tags.entry(change.key.clone())
                .or_default()
                .push(change.tag().to_string());
        }

        for (index, key) in keys.iter().enumerate() {
            let terminal = if index == 2 { "error" } else { "check" };
            assert_eq!(tags[key], vec!["loading", terminal, "search"]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_orchestrator_shared_across_tasks() {
        let sink = Arc::new(RecordingSink::default());
        let orchestrator = Arc::new(orchestrator(sink));
        let keys = BookFactory::keys(3);
        let api = FakeLibraryApi::new();

        let handles: Vec<_> = ["search", "download", "rename"]
            .into_iter()
            .map(|field| {
                let orchestrator = orchestrator.clone();
                let keys = keys.clone();
                let api = api.clone();
                tokio::spawn(async move {
                    orchestrator
                        .run(keys, field, |key| {
                            let api = api.clone();
                            async move { api.search_book(key).await }
                        })
                        .await
                        .summary
                })
            })
            .collect();

        for handle in handles {
            let summary = handle.await.unwrap();
            assert_eq!(summary.succeeded, 3);
        }

        let registry = orchestrator.registry();
        for field in ["search", "download", "rename"] {
            registry.assert_all(&keys, field, SlotStatus::Succeeded);
        }
        assert_eq!(registry.snapshot(&keys[0]).unwrap().len(), 3);
    }
}
