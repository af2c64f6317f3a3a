/// Типы данных для пайплайна предобработки

use std::fmt;
use std::path::PathBuf;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// Значение ячейки таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Float(f64),
    Int(i64),
    Str(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Str(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Таблица с именованными колонками (построчное хранение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(PrepError::Data(format!(
                "row has {} values, expected {}",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Все значения колонки в порядке строк
    pub fn column(&self, name: &str) -> Result<Vec<&Value>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| PrepError::MissingColumn(name.to_string()))?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Колонка как числовой вектор
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)?
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    PrepError::Data(format!("non-numeric value in column '{}' at row {}", name, i))
                })
            })
            .collect()
    }

    /// Проекция на числовые колонки в виде матрицы (строки x признаки)
    pub fn numeric_block(&self, names: &[String]) -> Result<Array2<f64>> {
        let idxs: Vec<usize> = names
            .iter()
            .map(|n| {
                self.column_index(n)
                    .ok_or_else(|| PrepError::MissingColumn(n.clone()))
            })
            .collect::<Result<_>>()?;

        let mut data = Array2::zeros((self.height(), names.len()));
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &c) in idxs.iter().enumerate() {
                data[[i, j]] = row[c].as_f64().ok_or_else(|| {
                    PrepError::Data(format!(
                        "non-numeric value in column '{}' at row {}",
                        names[j], i
                    ))
                })?;
            }
        }
        Ok(data)
    }

    /// Новая таблица с добавленной колонкой, исходная не изменяется
    pub fn with_column(&self, name: &str, values: Vec<Value>) -> Result<Frame> {
        if self.column_index(name).is_some() {
            return Err(PrepError::Data(format!("column '{}' already exists", name)));
        }
        if values.len() != self.height() {
            return Err(PrepError::Data(format!(
                "column '{}' has {} values, expected {}",
                name,
                values.len(),
                self.height()
            )));
        }
        let mut out = self.clone();
        out.columns.push(name.to_string());
        for (row, v) in out.rows.iter_mut().zip(values) {
            row.push(v);
        }
        Ok(out)
    }

    /// Подмножество строк по списку индексов
    pub fn take(&self, indices: &[usize]) -> Result<Frame> {
        let mut rows = Vec::with_capacity(indices.len());
        for &i in indices {
            let row = self
                .rows
                .get(i)
                .ok_or_else(|| PrepError::Data(format!("row index {} out of range", i)))?;
            rows.push(row.clone());
        }
        Ok(Frame {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Построчное объединение таблиц с одинаковой схемой
    pub fn concat(&self, other: &Frame) -> Result<Frame> {
        if self.columns != other.columns {
            return Err(PrepError::ColumnMismatch {
                expected: self.columns.clone(),
                found: other.columns.clone(),
            });
        }
        let mut out = self.clone();
        out.rows.extend(other.rows.iter().cloned());
        Ok(out)
    }

    /// Количество строк на каждое уникальное значение колонки
    pub fn value_counts(&self, name: &str) -> Result<Vec<(Value, usize)>> {
        let mut counts: Vec<(Value, usize)> = Vec::new();
        for v in self.column(name)? {
            match counts.iter_mut().find(|(u, _)| u == v) {
                Some((_, c)) => *c += 1,
                None => counts.push((v.clone(), 1)),
            }
        }
        Ok(counts)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// Конфигурация запуска
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    pub test_fraction: f64,
    pub seed: u64,
    pub quality_threshold: f64,
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            quality_threshold: 6.0,
            data_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("data/processed"),
        }
    }
}
