/// Модуль предобработки данных

pub mod features;
pub mod labeling;
pub mod splitting;
pub mod standardization;

pub use features::{FeatureBlock, FeatureSet};
pub use labeling::Labeler;
pub use splitting::StratifiedSplitter;
pub use standardization::{ScaleParams, Standardizer};
