pub mod assistant;
pub mod keywords;
pub mod rule_classifier;
pub mod scorer;
pub mod templates;

pub use crate::domain::model::{Category, Classification, Email, Priority, SampleEmail, Tone};
pub use crate::domain::ports::{ConfigProvider, ModelBackend};
pub use crate::utils::error::Result;
