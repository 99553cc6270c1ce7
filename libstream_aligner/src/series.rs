use std::path::Path;

use ndarray::{s, Array2};

use super::error::SeriesError;

/// The `[t_min, t_max]` span of a reference series.
///
/// Target series are clipped to this window before alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceWindow {
    pub start: f64,
    pub end: f64,
}

impl ReferenceWindow {
    /// True if this window lies entirely inside the span of the given timestamps
    pub fn is_covered_by(&self, times: &[f64]) -> bool {
        match (times.first(), times.last()) {
            (Some(first), Some(last)) => *first <= self.start && self.end <= *last,
            _ => false,
        }
    }
}

/// An immutable time series loaded from a tabular (CSV) source.
///
/// Timestamps are seconds and must be non-decreasing; values are a matrix of
/// one row per sample, one column per recorded channel (a fabric voltage
/// stream has a single column, a wrench stream has six). Every transform
/// produces a new series; nothing is modified in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub name: String,
    pub times: Vec<f64>,
    pub values: Array2<f64>,
    pub columns: Vec<String>,
}

impl TimeSeries {
    /// Load a series from a CSV file with a header of `time` plus value columns.
    ///
    /// Fails fast on a missing file, an empty file, fewer than two columns,
    /// an unparsable number, or a decreasing timestamp.
    pub fn load(name: &str, path: &Path) -> Result<Self, SeriesError> {
        if !path.exists() {
            return Err(SeriesError::BadFilePath(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        let headers = reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(SeriesError::BadFileFormat(path.to_path_buf()));
        }
        let columns: Vec<String> = headers.iter().skip(1).map(String::from).collect();

        let mut times: Vec<f64> = Vec::new();
        let mut flat: Vec<f64> = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let stamp: f64 = record[0].parse()?;
            if let Some(previous) = times.last() {
                if stamp < *previous {
                    return Err(SeriesError::NonMonotonic(name.to_string(), row));
                }
            }
            times.push(stamp);
            for field in record.iter().skip(1) {
                flat.push(field.parse()?);
            }
        }

        if times.is_empty() {
            return Err(SeriesError::EmptySeries(name.to_string()));
        }

        let values = Array2::from_shape_vec((times.len(), columns.len()), flat)
            .map_err(|_| SeriesError::BadFileFormat(path.to_path_buf()))?;

        Ok(Self {
            name: name.to_string(),
            times,
            values,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of value columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// The temporal span of this series. None if the series is empty.
    pub fn span(&self) -> Option<ReferenceWindow> {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => Some(ReferenceWindow {
                start: *first,
                end: *last,
            }),
            _ => None,
        }
    }

    /// A new series restricted to the sample range `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            name: self.name.clone(),
            times: self.times[start..end].to_vec(),
            values: self.values.slice(s![start..end, ..]).to_owned(),
            columns: self.columns.clone(),
        }
    }

    /// A new series with the timeline shifted so it starts at zero
    pub fn rebase(&self) -> Self {
        let origin = self.times.first().copied().unwrap_or(0.0);
        Self {
            name: self.name.clone(),
            times: self.times.iter().map(|t| t - origin).collect(),
            values: self.values.clone(),
            columns: self.columns.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, file_name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(file_name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "fabric.csv",
            "time,voltage\n0.0,10.0\n0.5,11.0\n1.0,12.0\n",
        );
        let series = TimeSeries::load("fabric_data", &path).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.width(), 1);
        assert_eq!(series.times, vec![0.0, 0.5, 1.0]);
        assert_eq!(series.values[[2, 0]], 12.0);
        assert_eq!(series.columns, vec!["voltage".to_string()]);
    }

    #[test]
    fn test_load_vector_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "wrench.csv",
            "time,Fx,Fy,Fz\n0.0,1.0,2.0,3.0\n1.0,4.0,5.0,6.0\n",
        );
        let series = TimeSeries::load("ur5e_wrench", &path).unwrap();
        assert_eq!(series.width(), 3);
        assert_eq!(series.values.row(1).to_vec(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_missing_file() {
        let result = TimeSeries::load("nope", Path::new("/does/not/exist.csv"));
        assert!(matches!(result, Err(SeriesError::BadFilePath(_))));
    }

    #[test]
    fn test_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "empty.csv", "time,voltage\n");
        let result = TimeSeries::load("empty", &path);
        assert!(matches!(result, Err(SeriesError::EmptySeries(_))));
    }

    #[test]
    fn test_non_monotonic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "bad.csv", "time,voltage\n0.0,1.0\n2.0,2.0\n1.0,3.0\n");
        let result = TimeSeries::load("bad", &path);
        assert!(matches!(result, Err(SeriesError::NonMonotonic(_, 2))));
    }

    #[test]
    fn test_too_few_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "thin.csv", "time\n0.0\n");
        let result = TimeSeries::load("thin", &path);
        assert!(matches!(result, Err(SeriesError::BadFileFormat(_))));
    }

    #[test]
    fn test_rebase() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "offset.csv", "time,voltage\n100.5,1.0\n101.0,2.0\n");
        let series = TimeSeries::load("offset", &path).unwrap();
        let rebased = series.rebase();
        assert_eq!(rebased.times[0], 0.0);
        assert!((rebased.times[1] - 0.5).abs() < 1e-12);
        // original untouched
        assert_eq!(series.times[0], 100.5);
    }

    #[test]
    fn test_span_and_slice() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "series.csv",
            "time,voltage\n0.0,1.0\n1.0,2.0\n2.0,3.0\n3.0,4.0\n",
        );
        let series = TimeSeries::load("series", &path).unwrap();
        let window = series.span().unwrap();
        assert_eq!(window.start, 0.0);
        assert_eq!(window.end, 3.0);

        let clipped = series.slice(1, 3);
        assert_eq!(clipped.times, vec![1.0, 2.0]);
        assert_eq!(clipped.values.column(0).to_vec(), vec![2.0, 3.0]);
        assert!(window.is_covered_by(&series.times));
        assert!(!window.is_covered_by(&clipped.times));
    }
}
