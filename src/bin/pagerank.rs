use pagerank_estimator::*;

use env_logger::Env;
use log::info;
use std::{
    error::Error,
    path::{Path, PathBuf},
};
use structopt::StructOpt;
use strum::VariantNames;

/// Rank the pages of a corpus of HTML documents by random walk and by iteration
#[derive(Debug, StructOpt)]
#[structopt(
    name = "pagerank",
    about = "Rank the pages of a corpus of HTML documents by random walk and by iteration"
)]
struct Cli {
    #[structopt(subcommand)]
    subcommand: SubCommand,
}

#[derive(Debug, StructOpt)]
enum SubCommand {
    Rank(RankCmds),
    Compare(CompareCmds),
}

/// Print the ranks of every page
#[derive(Debug, StructOpt)]
struct RankCmds {
    /// Directory containing the corpus' .html files.
    corpus: PathBuf,

    /// Ranking algorithm to use.
    #[structopt(
        short = "a",
        long = "algorithm",
        possible_values = RankingAlgConfig::VARIANTS,
        default_value = "both"
    )]
    alg: RankingAlgConfig,

    #[structopt(flatten)]
    params: EstimatorParams,

    /// Sort pages by rank, highest first, instead of by name.
    #[structopt(long = "by-score")]
    by_score: bool,

    /// Write CSV to STDOUT instead of text.
    #[structopt(long = "csv")]
    csv: bool,
}

/// Run both estimators and report how far the random walk is from the iterated ranks
#[derive(Debug, StructOpt)]
struct CompareCmds {
    /// Directory containing the corpus' .html files.
    corpus: PathBuf,

    #[structopt(flatten)]
    params: EstimatorParams,

    /// Write the per-page comparison as CSV to STDOUT instead of text.
    #[structopt(long = "csv")]
    csv: bool,
}

#[derive(Debug, StructOpt)]
struct EstimatorParams {
    /// Probability of following a link instead of jumping to a random page.
    #[structopt(short = "d", long = "damping", default_value = "0.85")]
    damping: f64,

    /// Number of pages visited by the random walk.
    #[structopt(short = "n", long = "samples", default_value = "10000")]
    samples: usize,

    /// Iteration stops once no page changes by this much or more in one pass.
    #[structopt(short = "t", long = "tolerance", default_value = "0.001")]
    tolerance: f64,

    /// Seed for the random walk. A random seed is used if omitted.
    #[structopt(short = "s", long = "seed")]
    seed: Option<u64>,
}

#[derive(Debug, strum::EnumString, strum::EnumVariantNames)]
enum RankingAlgConfig {
    #[strum(serialize = "sampling")]
    Sampling,
    #[strum(serialize = "iteration")]
    Iteration,
    #[strum(serialize = "both")]
    Both,
}

impl EstimatorParams {
    fn sampling(&self) -> RankingAlg {
        RankingAlg::Sampling {
            samples: self.samples,
            seed: self.seed,
        }
    }

    fn iteration(&self) -> RankingAlg {
        RankingAlg::Iteration {
            tolerance: self.tolerance,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default()
        .filter_or("LOG_LEVEL", "warn")
        .write_style_or("LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    match Cli::from_args().subcommand {
        SubCommand::Rank(cmd) => rank(cmd),
        SubCommand::Compare(cmd) => compare(cmd),
    }
}

fn load_corpus(corpus: &Path) -> Result<LinkGraph, Box<dyn Error>> {
    info!("Reading corpus from {}...", corpus.display());
    let graph = crawl(corpus)?;
    info!("Loaded corpus with {} pages.", graph.len());
    Ok(graph)
}

fn rank(cmd: RankCmds) -> Result<(), Box<dyn Error>> {
    let graph = load_corpus(&cmd.corpus)?;
    let params = &cmd.params;
    let mut results: Vec<(&str, String, RankVector)> = Vec::new();

    if matches!(cmd.alg, RankingAlgConfig::Sampling | RankingAlgConfig::Both) {
        let ranks = rank_pages(&graph, params.damping, params.sampling())?;
        let title = format!("PageRank Results from Sampling (n = {})", params.samples);
        results.push(("sampling", title, ranks));
    }
    if matches!(cmd.alg, RankingAlgConfig::Iteration | RankingAlgConfig::Both) {
        let ranks = rank_pages(&graph, params.damping, params.iteration())?;
        let title = String::from("PageRank Results from Iteration");
        results.push(("iteration", title, ranks));
    }

    if cmd.csv {
        let rows: Vec<RankRow> = results
            .iter()
            .flat_map(|(estimator, _, ranks)| {
                create_rank_rows(estimator, &page_rankings(ranks, cmd.by_score))
            })
            .collect();
        return write_csv_to_stdout(rows);
    }

    for (_, title, ranks) in results.iter() {
        print!("{}", format_rankings(title, &page_rankings(ranks, cmd.by_score)));
    }
    Ok(())
}

fn page_rankings(ranks: &RankVector, by_score: bool) -> Vec<PageRanking> {
    if by_score {
        create_top_ranking_report(ranks)
    } else {
        create_page_ranking_report(ranks)
    }
}

fn compare(cmd: CompareCmds) -> Result<(), Box<dyn Error>> {
    let graph = load_corpus(&cmd.corpus)?;
    let params = &cmd.params;
    let sampled = rank_pages(&graph, params.damping, params.sampling())?;
    let iterated = rank_pages(&graph, params.damping, params.iteration())?;
    let comparison = create_comparison_report(&sampled, &iterated);

    if cmd.csv {
        return write_csv_to_stdout(comparison);
    }

    println!("List of Comparisons as (Page, Sampled, Iterated, Difference):");
    for row in comparison.iter() {
        println!(
            "  {}: {:.4} {:.4} {:.4}",
            row.page, row.sampled, row.iterated, row.abs_difference
        );
    }
    let (mean, median, max, pctg) =
        mean_med_max_pctg_errors(sampled.scores(), iterated.scores());
    println!(
        "Mean absolute error: {:.4}\nMedian absolute error: {:.4}\nMax absolute error: {:.4}\nMean absolute percentage error: {:.3}",
        mean, median, max, pctg
    );
    Ok(())
}
