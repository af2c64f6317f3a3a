//! Загрузка и сохранение CSV-файлов датасета

use std::fs;
use std::path::Path;

use crate::error::{PrepError, Result};
use crate::types::{Frame, Value};

/// Разделитель в исходных файлах winequality
const RAW_DELIMITER: u8 = b';';

fn parse_value(s: &str) -> Value {
    let t = s.trim();
    if let Ok(i) = t.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = t.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Str(t.to_string())
}

/// Читает один исходный CSV (разделитель `;`, с заголовком) и помечает
/// все строки колонкой `color`
pub fn load_wine_csv(path: &Path, color: &str) -> Result<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(RAW_DELIMITER)
        .has_headers(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut df = Frame::new(headers);
    for record in reader.records() {
        let record = record?;
        df.push_row(record.iter().map(parse_value).collect())?;
    }

    let color_col = vec![Value::Str(color.to_string()); df.height()];
    let df = df.with_column("color", color_col)?;

    tracing::debug!("loaded {}: {} rows", path.display(), df.height());
    Ok(df)
}

/// Красное + белое вино одной таблицей
pub fn load_combined(data_dir: &Path) -> Result<Frame> {
    let red = load_wine_csv(&data_dir.join("winequality-red.csv"), "red")?;
    let white = load_wine_csv(&data_dir.join("winequality-white.csv"), "white")?;
    red.concat(&white)
}

/// Сохраняет таблицу в CSV с запятой-разделителем, без индекса
pub fn save_frame_csv(df: &Frame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(df.column_names())?;
    for row in df.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Сохраняет вектор параметров (по одной строке на признак)
pub fn save_params_csv(names: &[String], values: &[f64], path: &Path) -> Result<()> {
    if names.len() != values.len() {
        return Err(PrepError::Data(format!(
            "{} feature names but {} values",
            names.len(),
            values.len()
        )));
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["feature", "value"])?;
    for (name, value) in names.iter().zip(values) {
        writer.write_record([name.as_str(), &value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Создаёт каталог для обработанных данных, если его ещё нет
pub fn ensure_out_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
