use super::*;
use crate::ControllerError;
use mym_core::LoadError;
use mym_core::loader::FileSource;
use mym_core::types::FieldType;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

mod common {
    use super::*;

    fn restaurant(name: &str, address: &str, cuisine: &str) -> Value {
        json!({
            "Name": name,
            "Address": address,
            "Location": "Singapore",
            "Price": "$$$",
            "Cuisine": cuisine,
            "Longitude": "103.8",
            "Latitude": "1.3",
            "PhoneNumber": "",
            "Url": "https://guide.michelin.com/x",
            "WebsiteUrl": "",
            "Award": "1 Star",
            "FacilitiesAndServices": "",
        })
    }

    pub(super) fn write_dataset(dir: &Path, records: &[Value]) -> DatasetLoader {
        let path = dir.join("data.json");
        std::fs::write(&path, serde_json::to_string(records).unwrap()).unwrap();
        DatasetLoader::new(FileSource::new(path))
    }

    pub(super) fn dataset() -> Vec<Value> {
        let mut records = vec![
            restaurant("Odette", "1 St Andrew's Road", "French"),
            restaurant("Burnt Ends", "7 Dempsey Road", "Barbecue"),
            restaurant("Sushi Kimura", "390 Orchard Road", "Japanese"),
        ];
        records.extend(
            (0..60).map(|i| restaurant(&format!("Noodle Bar {i}"), "Chinatown", "Noodles")),
        );
        records
    }

    pub(super) async fn ready_controller(temp: &TempDir) -> SearchController {
        let loader = write_dataset(temp.path(), &dataset());
        let mut controller = SearchController::new(&AppConfig::default());
        controller.initialize(&loader).await.unwrap();
        controller
    }
}

mod initialize {
    use super::common::{ready_controller, write_dataset};
    use super::*;

    #[tokio::test]
    async fn test_initialize_renders_empty_table() {
        let temp = TempDir::new().unwrap();
        let controller = ready_controller(&temp).await;

        assert!(controller.is_ready());
        assert!(controller.table().is_empty());
        assert_eq!(controller.table().id(), "search-results");
    }

    #[tokio::test]
    async fn test_load_failure_stays_uninitialized() {
        let temp = TempDir::new().unwrap();
        let loader = DatasetLoader::new(FileSource::new(temp.path().join("missing.json")));
        let mut controller = SearchController::new(&AppConfig::default());

        let err = controller.initialize(&loader).await.unwrap_err();

        assert!(matches!(err, ControllerError::Load(LoadError::Io { .. })));
        assert!(!controller.is_ready());
    }

    #[tokio::test]
    async fn test_schema_violation_stays_uninitialized() {
        let temp = TempDir::new().unwrap();
        let loader = write_dataset(temp.path(), &[json!({ "Name": "A", "Latitude": 1.3 })]);
        let mut controller = SearchController::new(&AppConfig::default());

        let err = controller.initialize(&loader).await.unwrap_err();

        assert!(matches!(err, ControllerError::Search(_)));
        assert!(matches!(controller.state(), ControllerState::Uninitialized));
    }

    #[tokio::test]
    async fn test_numeric_schema_accepts_numbers() {
        let temp = TempDir::new().unwrap();
        let loader = write_dataset(temp.path(), &[json!({ "Name": "A", "Latitude": 1.3 })]);
        let schema = Schema::restaurants()
            .with_field("Latitude", FieldType::Number)
            .unwrap();
        let mut controller = SearchController::new(&AppConfig::default()).with_schema(schema);

        controller.initialize(&loader).await.unwrap();

        assert!(controller.is_ready());
    }

    #[tokio::test]
    async fn test_initialize_twice_is_rejected() {
        let temp = TempDir::new().unwrap();
        let loader = write_dataset(temp.path(), &[]);
        let mut controller = SearchController::new(&AppConfig::default());
        controller.initialize(&loader).await.unwrap();

        let err = controller.initialize(&loader).await.unwrap_err();

        assert!(matches!(err, ControllerError::AlreadyInitialized));
    }
}

mod on_input {
    use super::common::ready_controller;
    use super::*;

    #[test]
    fn test_input_before_initialize_is_noop() {
        let mut controller = SearchController::new(&AppConfig::default());

        controller.on_input(&InputEvent::new("sushi"));

        assert!(!controller.is_ready());
        assert!(controller.table().is_empty());
    }

    #[tokio::test]
    async fn test_empty_term_clears_table() {
        let temp = TempDir::new().unwrap();
        let mut controller = ready_controller(&temp).await;

        controller.on_input(&InputEvent::new("sushi"));
        assert!(!controller.table().is_empty());

        controller.on_input(&InputEvent::new(""));
        assert!(controller.table().is_empty());

        controller.on_input(&InputEvent::new("   "));
        assert!(controller.table().is_empty());
    }

    #[tokio::test]
    async fn test_search_renders_filtered_header() {
        let temp = TempDir::new().unwrap();
        let mut controller = ready_controller(&temp).await;

        controller.on_input(&InputEvent::new("sushi"));

        let table = controller.table();
        assert_eq!(
            table.head().unwrap(),
            ["Name", "Address", "Location", "Price", "Cuisine", "PhoneNumber", "Award"]
        );
        assert_eq!(table.rows().len(), 1);
        assert_eq!(
            table.rows()[0][0],
            crate::Cell::Text("Sushi Kimura".to_string())
        );
    }

    #[tokio::test]
    async fn test_results_limited_to_fifty() {
        let temp = TempDir::new().unwrap();
        let mut controller = ready_controller(&temp).await;

        controller.on_input(&InputEvent::new("noodle"));

        assert_eq!(controller.table().rows().len(), 50);
    }

    #[tokio::test]
    async fn test_typo_tolerated() {
        let temp = TempDir::new().unwrap();
        let mut controller = ready_controller(&temp).await;

        controller.on_input(&InputEvent::new("kimrua"));

        assert_eq!(controller.table().rows().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_property_clears_table() {
        let temp = TempDir::new().unwrap();
        let loader = common::write_dataset(temp.path(), &common::dataset());
        let mut config = AppConfig::default();
        config.search.properties = vec!["Stars".to_string()];
        let mut controller = SearchController::new(&config);
        controller.initialize(&loader).await.unwrap();

        controller.on_input(&InputEvent::new("sushi"));

        assert!(controller.table().is_empty());
    }
}
