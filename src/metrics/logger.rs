//! Tab-delimited metrics logging.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::TrainError;

/// A scalar cell in a metrics row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Writes one tab-separated metrics row per call, header first.
///
/// Every row is flushed as soon as it is written, so the file stays readable
/// while training runs. Dropping the logger flushes whatever the OS has not
/// seen yet; call [`MetricsLogger::close`] instead to surface that last
/// error.
#[derive(Debug)]
pub struct MetricsLogger {
    writer: BufWriter<File>,
    header: Vec<String>,
}

impl MetricsLogger {
    /// Opens `path` for writing, truncating existing content, and writes the
    /// header row.
    pub fn create(path: impl AsRef<Path>, header: &[&str]) -> Result<Self, TrainError> {
        let file = File::create(path)?;
        let mut logger = Self {
            writer: BufWriter::new(file),
            header: header.iter().map(|column| column.to_string()).collect(),
        };
        let row = logger.header.join("\t");
        writeln!(logger.writer, "{}", row)?;
        logger.writer.flush()?;
        Ok(logger)
    }

    /// Header columns, in write order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Writes one row, pulling each header column out of `values`.
    ///
    /// Columns in `values` that are not in the header are ignored. A missing
    /// header column fails before anything reaches the file.
    pub fn log(&mut self, values: &HashMap<String, Value>) -> Result<(), TrainError> {
        let mut cells = Vec::with_capacity(self.header.len());
        for column in &self.header {
            let value = values
                .get(column)
                .ok_or_else(|| TrainError::MissingColumn {
                    column: column.clone(),
                })?;
            cells.push(value.to_string());
        }
        writeln!(self.writer, "{}", cells.join("\t"))?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and closes the underlying file.
    pub fn close(mut self) -> Result<(), TrainError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn log_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vidtrain_{}_{}.log", name, std::process::id()))
    }

    fn row(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(column, value)| (column.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_logger_writes_header_then_tab_separated_rows() {
        let path = log_path("rows");
        let mut logger = MetricsLogger::create(&path, &["epoch", "loss"]).unwrap();
        assert_eq!(logger.header(), ["epoch", "loss"]);
        logger
            .log(&row(&[("epoch", Value::Int(1)), ("loss", Value::Float(0.5))]))
            .unwrap();
        logger.close().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "epoch\tloss\n1\t0.5\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_rows_follow_header_order_not_map_order() {
        let path = log_path("order");
        let mut logger = MetricsLogger::create(&path, &["epoch", "loss", "lr"]).unwrap();
        logger
            .log(&row(&[
                ("lr", Value::Float(0.1)),
                ("epoch", Value::Int(3)),
                ("loss", Value::Float(1.25)),
            ]))
            .unwrap();
        logger.close().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "epoch\tloss\tlr\n3\t1.25\t0.1\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_column_fails_and_writes_nothing() {
        let path = log_path("missing");
        let mut logger = MetricsLogger::create(&path, &["epoch", "loss"]).unwrap();
        let result = logger.log(&row(&[("epoch", Value::Int(1))]));
        assert!(matches!(
            result,
            Err(TrainError::MissingColumn { column }) if column == "loss"
        ));
        logger.close().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "epoch\tloss\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let path = log_path("extra");
        let mut logger = MetricsLogger::create(&path, &["epoch"]).unwrap();
        logger
            .log(&row(&[
                ("epoch", Value::Int(2)),
                ("unlisted", Value::Text("ignored".to_string())),
            ]))
            .unwrap();
        logger.close().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "epoch\n2\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_value_display_formats_each_variant() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Text("val".to_string()).to_string(), "val");
    }

    #[test]
    fn test_value_conversions_pick_matching_variant() {
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(0.25f32), Value::Float(0.25));
        assert_eq!(Value::from("text"), Value::Text("text".to_string()));
    }
}
