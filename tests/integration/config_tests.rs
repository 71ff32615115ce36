//! Configuration integration tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use thalia_ops::config::{Config, ResetPolicy};
    use thalia_ops::core::batch::BatchOrchestrator;
    use thalia_ops::core::batch::OperationError;
    use thalia_ops::core::status::SlotStatus;

    #[tokio::test(start_paused = true)]
    async fn test_orchestrator_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
batch:
  settle_delay_ms: 500
  reset_policy: skip_if_superseded
  event_capacity: 16
notifications:
  enabled: false
logging:
  level: warn
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.batch.reset_policy, ResetPolicy::SkipIfSuperseded);

        let orchestrator = BatchOrchestrator::from_config(&config).unwrap();
        assert_eq!(orchestrator.config().settle_delay(), Duration::from_millis(500));

        orchestrator
            .run(["OL1001W"], "rename", |_| async { Ok::<_, OperationError>(()) })
            .await;
        let registry = orchestrator.registry();
        assert_eq!(registry.get("OL1001W", "rename"), Some(SlotStatus::Succeeded));

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(registry.get("OL1001W", "rename"), Some(SlotStatus::Idle));
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let example = include_str!("../../config/thalia.yaml.example");
        let config = Config::from_yaml_str(example).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_webhook_rejected() {
        let err = Config::from_yaml_str(
            r#"
notifications:
  webhook_url: "gopher://hooks.example.com"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("gopher"));
    }
}
