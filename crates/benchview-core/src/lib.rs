pub mod config;
pub mod error;
pub mod model;

pub use config::{
    ApiConfig, BenchviewConfig, ModalConfig, ModalTargets, DEFAULT_ERROR_MESSAGE, ENV_API_BASE,
    ENV_TIMEOUT_MS,
};
pub use error::{BenchviewError, Result};
pub use model::{RunRecord, SuiteDetail, SuiteSummary};
