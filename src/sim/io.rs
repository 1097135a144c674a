use csv::Reader;
use serde::{Deserialize, Serialize};
use std::{error::Error, path::Path};

#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Default)]
pub struct InputDataPoint {
    pub samples: usize,
    pub run: usize,
}
impl InputDataPoint {
    pub fn from_error_data_point(d: &ErrorDataPoint) -> Self {
        Self {
            samples: d.samples,
            run: d.run,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDataPoint {
    pub samples: usize,
    pub run: usize,
    pub seed: u64,
    pub mean_abs_error: f64,
    pub median_abs_error: f64,
    pub max_abs_error: f64,
    pub mean_abs_percentage_error: f64,
    pub duration: f64,
}

pub fn read_error_data_csv_from_file(path: &Path) -> Result<Vec<ErrorDataPoint>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut result = vec![];
    for line in reader.deserialize() {
        result.push(line?);
    }
    Ok(result)
}
