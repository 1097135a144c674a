use crate::sim::{ErrorDataPoint, InputDataPoint};
use crate::{PageRankError, Result};

#[derive(Debug)]
pub enum Task {
    ReuseErrorData(ErrorDataPoint),
    Analyze(InputDataPoint),
}
impl Task {
    pub fn label(&self) -> (usize, usize) {
        match self {
            Task::Analyze(input) => (input.samples, input.run),
            Task::ReuseErrorData(output) => (output.samples, output.run),
        }
    }
}

/// Walk lengths 10^1 up to 10^max_exponent, each repeated `runs` times.
/// Fails if 10^max_exponent does not fit into a `usize`.
pub fn generate_inputs(max_exponent: u32, runs: usize) -> Result<Vec<InputDataPoint>> {
    let mut inputs = vec![];
    for exponent in 1..=max_exponent {
        let samples = 10usize.checked_pow(exponent).ok_or_else(|| {
            PageRankError::invalid_parameter(
                "max exponent",
                max_exponent,
                "a walk length 10^exponent that fits into usize",
            )
        })?;
        for run in 0..runs {
            inputs.push(InputDataPoint { samples, run });
        }
    }
    Ok(inputs)
}
