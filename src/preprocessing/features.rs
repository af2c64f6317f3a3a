//! Выбор признаковых колонок

use ndarray::Array2;

use crate::error::{PrepError, Result};
use crate::types::{Frame, Value};

/// Колонки, не являющиеся признаками модели
pub const EXCLUDED_COLUMNS: [&str; 3] = ["quality", "color", "good"];

/// Явный проверяемый список признаковых колонок.
///
/// Выводится один раз из схемы объединённой таблицы, дальше используется
/// как фиксированная конфигурация: каждая проекция заново сверяется со
/// схемой таблицы и падает на отсутствующей колонке.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    names: Vec<String>,
}

impl FeatureSet {
    /// Все колонки таблицы за вычетом quality / color / good
    pub fn derive(df: &Frame) -> Result<Self> {
        let names: Vec<String> = df
            .column_names()
            .iter()
            .filter(|c| !EXCLUDED_COLUMNS.contains(&c.as_str()))
            .cloned()
            .collect();
        if names.is_empty() {
            return Err(PrepError::EmptyFeatureSet);
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Проекция таблицы на признаковые колонки
    pub fn project(&self, df: &Frame) -> Result<FeatureBlock> {
        let data = df.numeric_block(&self.names)?;
        Ok(FeatureBlock {
            names: self.names.clone(),
            data,
        })
    }
}

/// Числовой блок признаков: матрица строки x признаки с именами колонок
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBlock {
    pub names: Vec<String>,
    pub data: Array2<f64>,
}

impl FeatureBlock {
    /// Обратно в таблицу (для сохранения)
    pub fn to_frame(&self) -> Result<Frame> {
        let mut df = Frame::new(self.names.clone());
        for row in self.data.rows() {
            df.push_row(row.iter().map(|&v| Value::Float(v)).collect())?;
        }
        Ok(df)
    }
}
