//! Стратифицированное разбиение train/test

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{PrepError, Result};
use crate::types::{Frame, Value};

/// Разбивает таблицу на train/test с сохранением пропорций классов.
///
/// Перестановка строк детерминирована: сид явно задаёт Fisher-Yates
/// перемешивание через `StdRng::seed_from_u64`, без глобального
/// состояния генератора. Одинаковый сид - одинаковое разбиение.
pub struct StratifiedSplitter {
    test_fraction: f64,
    seed: u64,
}

impl StratifiedSplitter {
    pub fn new(test_fraction: f64, seed: u64) -> Self {
        Self {
            test_fraction,
            seed,
        }
    }

    /// Возвращает (train, test) - непересекающиеся списки индексов строк,
    /// вместе покрывающие всю таблицу. Внутри каждого класса в test уходит
    /// floor(test_fraction * n) строк.
    pub fn split(&self, df: &Frame, label_col: &str) -> Result<(Vec<usize>, Vec<usize>)> {
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(PrepError::InvalidFraction(self.test_fraction));
        }
        let labels = df.column(label_col)?;

        let mut order: Vec<usize> = (0..df.height()).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);

        // группировка по значению метки, порядок внутри группы - перемешанный
        let mut groups: Vec<(Value, Vec<usize>)> = Vec::new();
        for &idx in &order {
            let label = labels[idx];
            match groups.iter_mut().find(|(v, _)| v == label) {
                Some((_, idxs)) => idxs.push(idx),
                None => groups.push((label.clone(), vec![idx])),
            }
        }

        let mut train = Vec::new();
        let mut test = Vec::new();
        for (label, idxs) in &groups {
            let n_test = (self.test_fraction * idxs.len() as f64).floor() as usize;
            test.extend_from_slice(&idxs[..n_test]);
            train.extend_from_slice(&idxs[n_test..]);
            tracing::debug!(
                "class {}: {} rows, {} to test",
                label,
                idxs.len(),
                n_test
            );
        }

        Ok((train, test))
    }
}
