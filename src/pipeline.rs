//! Оркестрация полного прогона предобработки

use crate::dataset;
use crate::error::Result;
use crate::preprocessing::{FeatureSet, Labeler, Standardizer, StratifiedSplitter};
use crate::types::{Frame, PrepConfig, Value};

/// Итог прогона
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub n_train: usize,
    pub n_test: usize,
    pub n_features: usize,
}

/// Полный пакетный прогон: загрузка, разметка, разбиение, стандартизация,
/// сохранение обработанных данных и параметров масштабирования
pub fn run(config: &PrepConfig) -> Result<RunSummary> {
    // Шаг A: загрузка и разметка
    let combined = dataset::load_combined(&config.data_dir)?;
    tracing::info!("combined dataset: {} rows, {} columns", combined.height(), combined.width());

    let labeled = Labeler::new(config.quality_threshold).apply(&combined)?;
    for (value, count) in labeled.value_counts("good")? {
        tracing::info!("class good={}: {} rows", value, count);
    }

    // Шаг B: признаковые колонки (всё кроме quality / color / good)
    let features = FeatureSet::derive(&labeled)?;

    // Шаг C: стратифицированное разбиение
    let splitter = StratifiedSplitter::new(config.test_fraction, config.seed);
    let (train_idx, test_idx) = splitter.split(&labeled, "good")?;
    let df_train = labeled.take(&train_idx)?;
    let df_test = labeled.take(&test_idx)?;

    // Шаг D: отделение признаков от меток
    let x_train = features.project(&df_train)?;
    let x_test = features.project(&df_test)?;
    let y_train: Vec<Value> = df_train.column("good")?.into_iter().cloned().collect();
    let y_test: Vec<Value> = df_test.column("good")?.into_iter().cloned().collect();

    // Шаг E: стандартизация по статистикам train
    let (x_train, x_test, params) = Standardizer::standardize(&x_train, &x_test)?;

    // Шаги F-G: сохранение
    dataset::ensure_out_dir(&config.out_dir)?;

    let train_out = attach_label(&x_train.to_frame()?, y_train)?;
    let test_out = attach_label(&x_test.to_frame()?, y_test)?;
    dataset::save_frame_csv(&train_out, &config.out_dir.join("train_processed.csv"))?;
    dataset::save_frame_csv(&test_out, &config.out_dir.join("test_processed.csv"))?;
    dataset::save_params_csv(&params.names, &params.mean, &config.out_dir.join("feature_means.csv"))?;
    dataset::save_params_csv(&params.names, &params.std, &config.out_dir.join("feature_stds.csv"))?;

    let summary = RunSummary {
        n_train: train_out.height(),
        n_test: test_out.height(),
        n_features: features.len(),
    };
    tracing::info!(
        "preprocessing complete: {} train, {} test, {} features -> {}",
        summary.n_train,
        summary.n_test,
        summary.n_features,
        config.out_dir.display()
    );
    Ok(summary)
}

fn attach_label(features: &Frame, labels: Vec<Value>) -> Result<Frame> {
    features.with_column("good", labels)
}
