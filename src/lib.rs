//! Wine Prep - подготовка датасета wine quality к бинарной классификации

pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod preprocessing;
pub mod types;

pub use error::{PrepError, Result};
pub use types::{Frame, PrepConfig, Value};

// Re-export для удобства
pub use preprocessing::{FeatureBlock, FeatureSet, Labeler, ScaleParams, Standardizer, StratifiedSplitter};
