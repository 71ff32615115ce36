//! Webhook notification integration tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use thalia_ops::config::NotificationConfig;
    use thalia_ops::core::batch::{BatchConfig, BatchOrchestrator};
    use thalia_ops::core::notifications::{
        Notification, NotificationSink, WebhookNotifier, build_notifier,
    };
    use thalia_ops::core::status::{SlotStatus, StatusRegistry};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn webhook_config(server: &MockServer) -> NotificationConfig {
        let mut config = NotificationConfig {
            webhook_url: Some(format!("{}/hooks/thalia", server.uri())),
            timeout_seconds: 2,
            ..Default::default()
        };
        config
            .headers
            .insert("X-Thalia-Token".to_string(), "secret".to_string());
        config
    }

    #[tokio::test]
    async fn test_webhook_delivers_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/thalia"))
            .and(header("X-Thalia-Token", "secret"))
            .and(body_partial_json(serde_json::json!({
                "severity": "error",
                "message": "No releases found",
                "key": "OL1001W",
                "field": "search",
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let config = webhook_config(&server);
        let notifier = WebhookNotifier::new(config.webhook_url.clone().unwrap(), &config).unwrap();
        notifier
            .send(&Notification::operation_failed(
                "OL1001W",
                "search",
                "No releases found",
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_webhook_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = webhook_config(&server);
        let notifier = build_notifier(&config).unwrap();
        let err = notifier
            .send(&Notification::operation_failed("OL1001W", "search", "boom"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_batch_survives_broken_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let config = webhook_config(&server);
        let orchestrator = BatchOrchestrator::with_tokio(
            Arc::new(StatusRegistry::new()),
            build_notifier(&config).unwrap(),
            BatchConfig::new().with_settle_delay(Duration::from_secs(30)),
        );

        let outcome = orchestrator
            .run(["OL1001W", "OL1002W"], "download", |key| async move {
                Err::<(), _>(format!("Download client rejected {}", key))
            })
            .await;

        assert_eq!(outcome.summary.failed, 2);
        assert_eq!(
            orchestrator.registry().get("OL1002W", "download"),
            Some(SlotStatus::Failed)
        );

        // Give the detached deliveries time to reach the mock server.
        for _ in 0..50 {
            if server.received_requests().await.unwrap_or_default().len() == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        server.verify().await;
    }
}
