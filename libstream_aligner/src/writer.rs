use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::error::WriterError;
use super::series::TimeSeries;

/// Writes aligned series to CSV files in a single output directory.
///
/// Each file carries a `time` column plus the series' value columns, one row
/// per sample in alignment order.
#[derive(Debug)]
pub struct AlignedWriter {
    output_dir: PathBuf,
}

impl AlignedWriter {
    /// Create the writer, checking that the output directory exists
    pub fn new(output_dir: &Path) -> Result<Self, WriterError> {
        if !output_dir.exists() {
            return Err(WriterError::BadOutputPath(output_dir.to_path_buf()));
        }
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Write one aligned series to `<name>_aligned.csv`, returning the path
    pub fn write_series(&self, series: &TimeSeries) -> Result<PathBuf, WriterError> {
        let path = self
            .output_dir
            .join(format!("{}_aligned.csv", series.name));
        let mut writer = csv::Writer::from_writer(BufWriter::new(File::create(&path)?));

        let mut header: Vec<&str> = vec!["time"];
        header.extend(series.columns.iter().map(String::as_str));
        writer.write_record(&header)?;

        let mut record: Vec<String> = Vec::with_capacity(header.len());
        for (row, stamp) in series.times.iter().enumerate() {
            record.clear();
            record.push(stamp.to_string());
            for value in series.values.row(row).iter() {
                record.push(value.to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_write_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let series = TimeSeries {
            name: String::from("fabric_data"),
            times: vec![0.0, 0.5, 1.0],
            values: arr2(&[[10.0], [11.5], [13.0]]),
            columns: vec![String::from("voltage")],
        };

        let writer = AlignedWriter::new(dir.path()).unwrap();
        let path = writer.write_series(&series).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "fabric_data_aligned.csv"
        );

        let reloaded = TimeSeries::load("fabric_data", &path).unwrap();
        assert_eq!(reloaded, series);
    }

    #[test]
    fn test_missing_output_dir() {
        let result = AlignedWriter::new(Path::new("/does/not/exist"));
        assert!(matches!(result, Err(WriterError::BadOutputPath(_))));
    }
}
