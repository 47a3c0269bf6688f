use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) const DATASET: &str = r#"[
        {"Name": "Odette", "Address": "1 St Andrew's Rd", "Cuisine": "French"},
        {"Name": "Burnt Ends", "Address": "7 Dempsey Rd", "Cuisine": "Barbecue"}
    ]"#;

    /// Serves a fixed body and counts fetches.
    pub(super) struct StaticSource {
        pub(super) body: String,
        pub(super) fetches: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DatasetSource for StaticSource {
        fn location(&self) -> String {
            "static".to_string()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    pub(super) fn static_loader(body: &str) -> (DatasetLoader, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let loader = DatasetLoader::new(StaticSource {
            body: body.to_string(),
            fetches: fetches.clone(),
        });
        (loader, fetches)
    }
}

mod parse_records {
    use super::common::DATASET;
    use super::*;

    #[test]
    fn test_parses_array_of_objects() {
        let records = parse_records(DATASET).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text("Name").unwrap(), "Burnt Ends");
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_records("[{\"Name\": ").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = parse_records("{\"Name\": \"Odette\"}").unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray));
    }

    #[test]
    fn test_rejects_non_object_entry() {
        let err = parse_records("[{\"Name\": \"Odette\"}, 3]").unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { index: 1 }));
    }
}

mod load {
    use super::common::{DATASET, static_loader};
    use super::*;

    #[tokio::test]
    async fn test_load_from_source() {
        let (loader, fetches) = static_loader(DATASET);

        let records = loader.load().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_from_relative_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("data.json"), DATASET).unwrap();

        let loader = DatasetLoader::for_endpoint("data.json", temp.path());
        let records = loader.load().await.unwrap();

        assert_eq!(records[0].text("Cuisine").unwrap(), "French");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();

        let loader = DatasetLoader::for_endpoint("missing.json", temp.path());
        let err = loader.load().await.unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_parse_failure_propagates() {
        let (loader, _) = static_loader("not json");

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_for_endpoint_picks_http_for_urls() {
        let loader = DatasetLoader::for_endpoint("https://example.com/data.json", Path::new("/srv"));
        assert_eq!(loader.location(), "https://example.com/data.json");

        let loader = DatasetLoader::for_endpoint("data.json", Path::new("/srv"));
        assert_eq!(loader.location(), "/srv/data.json");
    }
}
