use mym_core::LoadError;
use mym_search::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("dataset load failed: {0}")]
    Load(#[from] LoadError),

    #[error("index build failed: {0}")]
    Search(#[from] SearchError),

    #[error("controller is already initialized")]
    AlreadyInitialized,
}
