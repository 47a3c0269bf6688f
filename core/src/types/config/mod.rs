mod app;

pub use app::{
    AppConfig, AppConfigError, CaseMatching, DatasetConfig, MAX_TOLERANCE, RenderConfig,
    SearchSettings,
};
