//! Бинарная разметка качества

use crate::error::Result;
use crate::types::{Frame, Value};

/// Порог качества по умолчанию: quality >= 6 считается "хорошим"
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 6.0;

/// Выводит бинарную колонку `good` из непрерывной колонки `quality`
pub struct Labeler {
    threshold: f64,
}

impl Labeler {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Новая таблица с колонкой `good`: 1 если quality >= порога, иначе 0.
    /// Исходная таблица не изменяется.
    pub fn apply(&self, df: &Frame) -> Result<Frame> {
        let quality = df.numeric_column("quality")?;
        let good: Vec<Value> = quality
            .iter()
            .map(|&q| Value::Int(if q >= self.threshold { 1 } else { 0 }))
            .collect();
        df.with_column("good", good)
    }
}

impl Default for Labeler {
    fn default() -> Self {
        Self::new(DEFAULT_QUALITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;

    fn frame_with_quality(qualities: &[f64]) -> Frame {
        let mut df = Frame::new(vec!["quality".to_string()]);
        for &q in qualities {
            df.push_row(vec![Value::Float(q)]).unwrap();
        }
        df
    }

    #[test]
    fn test_threshold_boundaries() {
        let df = frame_with_quality(&[5.0, 6.0, 10.0]);
        let labeled = Labeler::default().apply(&df).unwrap();
        let good: Vec<&Value> = labeled.column("good").unwrap();
        assert_eq!(good, vec![&Value::Int(0), &Value::Int(1), &Value::Int(1)]);
    }

    #[test]
    fn test_row_count_and_other_columns_unchanged() {
        let mut df = Frame::new(vec!["quality".to_string(), "alcohol".to_string()]);
        df.push_row(vec![Value::Float(7.0), Value::Float(11.2)]).unwrap();
        df.push_row(vec![Value::Float(4.0), Value::Float(9.8)]).unwrap();

        let labeled = Labeler::default().apply(&df).unwrap();
        assert_eq!(labeled.height(), df.height());
        assert_eq!(
            labeled.numeric_column("alcohol").unwrap(),
            df.numeric_column("alcohol").unwrap()
        );
        // исходная таблица без колонки good
        assert!(df.column_index("good").is_none());
    }

    #[test]
    fn test_missing_quality_column() {
        let df = Frame::new(vec!["alcohol".to_string()]);
        assert!(matches!(
            Labeler::default().apply(&df),
            Err(PrepError::MissingColumn(_))
        ));
    }
}
