use pagerank_estimator::sim::*;
use pagerank_estimator::*;

use env_logger::Env;
use log::info;
use par_map::ParMap;
use std::{collections::BTreeMap, error::Error, io, path::PathBuf, sync::Arc, time::Instant};
use structopt::StructOpt;

/// Measure how far random walks of growing length are from the iterated ranks of a corpus.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "agreement_eval",
    about = "Measure how far random walks of growing length are from the iterated ranks of a corpus"
)]
struct Cli {
    /// Directory containing the corpus' .html files.
    corpus: PathBuf,

    /// Output CSV file (will output to STDOUT if omitted).
    #[structopt(short = "o", long = "out")]
    output_path: Option<PathBuf>,

    /// Longest walk to measure, as a power of ten.
    #[structopt(short = "m", long = "max-exponent", default_value = "5")]
    max_exponent: u32,

    /// Update output file with missing results (doesn't repeat analyses for existing lines).
    #[structopt(short = "u", long = "update")]
    update: bool,

    /// Number of walks per walk length.
    #[structopt(short = "r", long = "runs", default_value = "10")]
    runs: usize,

    /// Number of threads to use. Defaults to 1.
    #[structopt(short = "j", long = "jobs", default_value = "1")]
    jobs: usize,

    /// Probability of following a link instead of jumping to a random page.
    #[structopt(short = "d", long = "damping", default_value = "0.85")]
    damping: f64,

    /// Iteration tolerance of the reference ranks.
    #[structopt(short = "t", long = "tolerance", default_value = "0.001")]
    tolerance: f64,

    /// Run `r` walks with seed `seed + r`.
    #[structopt(long = "seed", default_value = "0")]
    seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::from_args();
    let env = Env::default()
        .filter_or("LOG_LEVEL", "info")
        .write_style_or("LOG_STYLE", "always");
    env_logger::init_from_env(env);

    let graph = crawl(&args.corpus)?;
    info!("Computing reference ranks for {} pages.", graph.len());
    let iterated = iterate_pagerank(&graph, args.damping, args.tolerance)?;
    // Reject bad walk parameters before spawning any workers.
    sample_pagerank_seeded(&graph, args.damping, 1, args.seed)?;

    let inputs = generate_inputs(args.max_exponent, args.runs)?;
    let existing_outputs = if args.update {
        load_existing_outputs(&args.output_path)?
    } else {
        BTreeMap::new()
    };
    let tasks = make_sorted_tasklist(inputs, existing_outputs);

    println!(
        "Starting agreement measurements for {} pages with walks of up to 10^{} pages.\n Performing {} runs per walk length.",
        graph.len(),
        args.max_exponent,
        args.runs
    );
    let reference = Arc::new((graph, iterated));
    let output_iterator = bulk_do(tasks, args.jobs, reference, args.damping, args.seed);

    write_csv(output_iterator, &args.output_path, args.update)?;
    Ok(())
}

fn load_existing_outputs(
    path: &Option<PathBuf>,
) -> Result<BTreeMap<InputDataPoint, ErrorDataPoint>, Box<dyn Error>> {
    if let Some(path) = path {
        let data_points = read_error_data_csv_from_file(path)?;
        let data_points_map = data_points
            .into_iter()
            .map(|d| (InputDataPoint::from_error_data_point(&d), d))
            .collect();
        Ok(data_points_map)
    } else {
        Ok(BTreeMap::new())
    }
}

fn make_sorted_tasklist(
    inputs: Vec<InputDataPoint>,
    existing_outputs: BTreeMap<InputDataPoint, ErrorDataPoint>,
) -> Vec<Task> {
    let mut tasks: Vec<Task> = inputs
        .into_iter()
        .filter_map(|input| {
            if !existing_outputs.contains_key(&input) {
                Some(Task::Analyze(input))
            } else {
                None
            }
        })
        .chain(existing_outputs.values().cloned().map(Task::ReuseErrorData))
        .collect();
    tasks.sort_by_cached_key(|t| t.label());
    tasks
}

fn bulk_do(
    tasks: Vec<Task>,
    jobs: usize,
    reference: Arc<(LinkGraph, RankVector)>,
    damping: f64,
    base_seed: u64,
) -> impl Iterator<Item = ErrorDataPoint> {
    tasks
        .into_iter()
        .with_nb_threads(jobs)
        .par_map(move |task| analyze_or_reuse(task, &reference, damping, base_seed))
}

fn analyze_or_reuse(
    task: Task,
    reference: &(LinkGraph, RankVector),
    damping: f64,
    base_seed: u64,
) -> ErrorDataPoint {
    match task {
        Task::ReuseErrorData(output) => {
            eprintln!(
                "Reusing existing analysis results for n={}, run={}.",
                output.samples, output.run
            );
            output
        }
        Task::Analyze(input) => measure(input, reference, damping, base_seed),
    }
}

fn measure(
    input: InputDataPoint,
    reference: &(LinkGraph, RankVector),
    damping: f64,
    base_seed: u64,
) -> ErrorDataPoint {
    let (graph, iterated) = reference;
    let seed = base_seed.wrapping_add(input.run as u64);
    info!("Starting run {} with a walk of {} pages.", input.run, input.samples);
    let start = Instant::now();
    let sampled = sample_pagerank_seeded(graph, damping, input.samples, seed)
        .expect("walk parameters validated before scheduling");
    let duration = start.elapsed().as_secs_f64();
    let (mean_abs_error, median_abs_error, max_abs_error, mean_abs_percentage_error) =
        mean_med_max_pctg_errors(sampled.scores(), iterated.scores());
    info!("Completed run {} with a walk of {} pages.", input.run, input.samples);

    ErrorDataPoint {
        samples: input.samples,
        run: input.run,
        seed,
        mean_abs_error,
        median_abs_error,
        max_abs_error,
        mean_abs_percentage_error,
        duration,
    }
}

fn write_csv(
    data_points: impl IntoIterator<Item = impl serde::Serialize>,
    output_path: &Option<PathBuf>,
    overwrite_allowed: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(path) = output_path {
        if !overwrite_allowed && path.exists() {
            Err(Box::new(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "Output file exists, refusing to overwrite.",
            )))
        } else {
            write_csv_to_file(data_points, path)
        }
    } else {
        write_csv_to_stdout(data_points)
    }
}
