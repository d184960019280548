//! CSV Data Loader Module
//! Loads the headerless noise sample file and labels its columns using Polars.

use crate::config::COLUMN_NAMES;
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

/// Handles CSV file loading with Polars.
///
/// The noise file carries no header row; the two columns are labeled
/// `Vol` and `chars` on load, matching the recording side.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a headerless CSV file and label its columns.
    pub fn load_csv(&mut self, file_path: &str) -> Result<&DataFrame, LoaderError> {
        self.file_path = Some(PathBuf::from(file_path));

        // Lazy scan, then collect
        let mut df = LazyCsvReader::new(file_path)
            .with_has_header(false)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        df.set_column_names(COLUMN_NAMES)?;

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Extract a column as f64 values, dropping nulls.
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;

        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        let values = column
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .flatten()
            .collect();

        Ok(values)
    }

    /// Get (rows, columns) of the loaded table.
    pub fn shape(&self) -> (usize, usize) {
        self.df.as_ref().map(|df| df.shape()).unwrap_or((0, 0))
    }

    /// Get list of column names from the loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(content.as_bytes()).expect("write temp csv");
        file.flush().expect("flush temp csv");
        file
    }

    #[test]
    fn loads_two_column_csv() {
        let file = write_csv("1,0.1\n2,0.2\n");
        let mut loader = DataLoader::new();
        loader.load_csv(file.path().to_str().unwrap()).unwrap();

        assert_eq!(loader.shape(), (2, 2));
        assert_eq!(loader.get_columns(), vec!["Vol", "chars"]);

        let chars = loader.column_values("chars").unwrap();
        assert_eq!(chars, vec![0.1, 0.2]);
    }

    #[test]
    fn integer_column_is_cast_to_f64() {
        let file = write_csv("1,0.1\n2,0.2\n3,0.3\n");
        let mut loader = DataLoader::new();
        loader.load_csv(file.path().to_str().unwrap()).unwrap();

        let vol = loader.column_values("Vol").unwrap();
        assert_eq!(vol, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut loader = DataLoader::new();
        assert!(loader.load_csv("no_such_noise_file.csv").is_err());
    }

    #[test]
    fn unknown_column_is_reported() {
        let file = write_csv("1,0.1\n");
        let mut loader = DataLoader::new();
        loader.load_csv(file.path().to_str().unwrap()).unwrap();

        assert!(matches!(
            loader.column_values("volume"),
            Err(LoaderError::MissingColumn(_))
        ));
    }
}
