#[cfg(test)]
mod tests {
    use callsight::libs::config::{AnalyticsConfig, CONFIG_FILE_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext { temp_dir: tempfile::tempdir().unwrap() }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    #[test]
    fn test_default_values() {
        let config = AnalyticsConfig::default();

        assert_eq!(config.ranking_limit, 10);
        assert_eq!(config.zero_inflation_threshold, 0.9);
        assert_eq!(config.trend_threshold, 5.0);
        assert_eq!(
            config.excluded_name_markers,
            vec!["desl", "excluido", "desligado", "inativo"]
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file_uses_defaults(ctx: &mut ConfigTestContext) {
        let config = AnalyticsConfig::read(&ctx.config_path()).unwrap();
        assert_eq!(config, AnalyticsConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(ctx: &mut ConfigTestContext) {
        let config = AnalyticsConfig {
            ranking_limit: 3,
            trend_threshold: 10.0,
            ..Default::default()
        };
        config.save(&ctx.config_path()).unwrap();

        let loaded = AnalyticsConfig::read(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_missing_fields_from_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path(), r#"{ "ranking_limit": 5 }"#).unwrap();

        let config = AnalyticsConfig::read(&ctx.config_path()).unwrap();
        assert_eq!(config.ranking_limit, 5);
        assert_eq!(config.zero_inflation_threshold, 0.9);
        assert_eq!(config.excluded_name_markers.len(), 4);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path(), "not json").unwrap();
        assert!(AnalyticsConfig::read(&ctx.config_path()).is_err());
    }
}
