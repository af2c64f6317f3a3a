//! Стандартизация признаков (z-score)

#![allow(non_snake_case)]

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};
use crate::preprocessing::features::FeatureBlock;

/// Параметры масштабирования, посчитанные только по train.
///
/// Сохраняются вместе с обработанными данными, чтобы при инференсе
/// применить ровно то же преобразование без повторного обучения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleParams {
    pub names: Vec<String>,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl ScaleParams {
    /// Среднее и выборочное стандартное отклонение по каждому признаку.
    /// Нулевое отклонение (константный признак) заменяется на 1,
    /// колонка после преобразования остаётся центрированной.
    pub fn fit(train: &FeatureBlock) -> Result<Self> {
        if train.names.is_empty() {
            return Err(PrepError::EmptyFeatureSet);
        }
        let mean = train
            .data
            .mean_axis(Axis(0))
            .ok_or_else(|| PrepError::Data("cannot fit scaler on empty training block".to_string()))?;
        let mut std = train.data.std_axis(Axis(0), 1.0);
        for v in std.iter_mut() {
            if *v == 0.0 {
                *v = 1.0;
            }
        }
        Ok(Self {
            names: train.names.clone(),
            mean: mean.to_vec(),
            std: std.to_vec(),
        })
    }

    /// Применяет (x - mean) / std поэлементно
    pub fn transform(&self, block: &FeatureBlock) -> Result<FeatureBlock> {
        if block.names != self.names {
            return Err(PrepError::ColumnMismatch {
                expected: self.names.clone(),
                found: block.names.clone(),
            });
        }
        let mut X: Array2<f64> = block.data.clone();
        for mut row in X.rows_mut() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[j]) / self.std[j];
            }
        }
        Ok(FeatureBlock {
            names: block.names.clone(),
            data: X,
        })
    }
}

/// Обучает параметры на train и применяет их к обоим блокам
pub struct Standardizer;

impl Standardizer {
    /// Возвращает (train, test, params). Статистики считаются только
    /// по train, test в них не участвует.
    pub fn standardize(
        train: &FeatureBlock,
        test: &FeatureBlock,
    ) -> Result<(FeatureBlock, FeatureBlock, ScaleParams)> {
        if train.names != test.names {
            return Err(PrepError::ColumnMismatch {
                expected: train.names.clone(),
                found: test.names.clone(),
            });
        }
        let params = ScaleParams::fit(train)?;
        let train_scaled = params.transform(train)?;
        let test_scaled = params.transform(test)?;
        Ok((train_scaled, test_scaled, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn block(names: &[&str], data: Array2<f64>) -> FeatureBlock {
        FeatureBlock {
            names: names.iter().map(|s| s.to_string()).collect(),
            data,
        }
    }

    #[test]
    fn test_train_block_centered_and_scaled() {
        let train = block(&["a"], array![[1.0], [2.0], [3.0], [4.0], [5.0]]);
        let test = block(&["a"], array![[6.0]]);

        let (train_scaled, _, params) = Standardizer::standardize(&train, &test).unwrap();

        let col = train_scaled.data.column(0);
        let mean: f64 = col.sum() / col.len() as f64;
        assert!(mean.abs() < 1e-10);

        let var: f64 =
            col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (col.len() - 1) as f64;
        assert!((var.sqrt() - 1.0).abs() < 1e-10);

        assert!((params.mean[0] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_feature_substitutes_unit_std() {
        // константный признак 7.0 на 5 строках: mean = 7, std подменяется на 1,
        // стандартизованные значения - нули
        let train = block(&["c"], array![[7.0], [7.0], [7.0], [7.0], [7.0]]);
        let test = block(&["c"], array![[8.0]]);

        let (train_scaled, test_scaled, params) = Standardizer::standardize(&train, &test).unwrap();

        assert_eq!(params.mean, vec![7.0]);
        assert_eq!(params.std, vec![1.0]);
        assert!(train_scaled.data.iter().all(|&v| v == 0.0));
        assert!((test_scaled.data[[0, 0]] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_test_block_uses_train_statistics() {
        let train = block(&["a"], array![[0.0], [10.0]]);
        let test_a = block(&["a"], array![[5.0]]);
        let test_b = block(&["a"], array![[500.0]]);

        let (_, _, params_a) = Standardizer::standardize(&train, &test_a).unwrap();
        let (_, _, params_b) = Standardizer::standardize(&train, &test_b).unwrap();

        // возмущение test не меняет статистики
        assert_eq!(params_a, params_b);
    }

    #[test]
    fn test_column_mismatch() {
        let train = block(&["a"], array![[1.0], [2.0]]);
        let test = block(&["b"], array![[1.0]]);
        assert!(matches!(
            Standardizer::standardize(&train, &test),
            Err(PrepError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_feature_set() {
        let train = FeatureBlock {
            names: Vec::new(),
            data: Array2::zeros((3, 0)),
        };
        assert!(matches!(
            ScaleParams::fit(&train),
            Err(PrepError::EmptyFeatureSet)
        ));
    }

    #[test]
    fn test_transform_is_pure() {
        let train = block(&["a"], array![[1.0], [3.0]]);
        let params = ScaleParams::fit(&train).unwrap();
        let before = train.clone();
        let _ = params.transform(&train).unwrap();
        assert_eq!(train, before);
    }
}
