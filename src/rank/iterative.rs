use crate::*;
use log::{debug, warn};

/// Largest change of any single page that still counts as converged
pub const DEFAULT_TOLERANCE: f64 = 0.001;
/// Sweeps after which [`iterate_pagerank`] gives up with [`PageRankError::NonConvergence`]
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Computes PageRank by repeatedly applying
///
/// `PR(p) = (1 - d) / N + d * Σ PR(q) / NumLinks(q)`
///
/// where `q` ranges over the pages linking to `p`. Pages without out-links count as linking to
/// every page, so their rank is spread over the whole corpus. Sweeps repeat until no page
/// changes by `tolerance` or more.
pub fn iterate_pagerank(
    graph: &LinkGraph,
    damping_factor: f64,
    tolerance: f64,
) -> Result<RankVector> {
    iterate_pagerank_with_limit(graph, damping_factor, tolerance, DEFAULT_MAX_ITERATIONS)
}

/// Same as [`iterate_pagerank`] but fails after `max_iterations` sweeps
pub fn iterate_pagerank_with_limit(
    graph: &LinkGraph,
    damping_factor: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RankVector> {
    check_estimator_damping(damping_factor)?;
    if tolerance.is_nan() || tolerance <= 0.0 {
        return Err(PageRankError::invalid_parameter(
            "tolerance",
            tolerance,
            "a positive value",
        ));
    }
    if max_iterations == 0 {
        return Err(PageRankError::invalid_parameter(
            "iteration limit",
            max_iterations,
            "at least 1",
        ));
    }
    check_not_empty(graph)?;

    let num_pages = graph.len() as f64;
    let random_jump = (1.0 - damping_factor) / num_pages;
    let dangling_pages = graph.dangling_pages();

    let mut ranks: Vec<Score> = vec![1.0 / num_pages; graph.len()];
    let mut new_ranks: Vec<Score> = vec![0.0; graph.len()];
    let mut iterations = 0;

    loop {
        iterations += 1;
        sweep(
            graph,
            &dangling_pages,
            damping_factor,
            random_jump,
            &ranks,
            &mut new_ranks,
        );
        let delta = largest_change(&ranks, &new_ranks);
        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < tolerance {
            debug!(
                "PageRank iteration converged after {} sweeps (largest change {}).",
                iterations, delta
            );
            return Ok(RankVector::from_graph(graph, ranks));
        }
        if iterations >= max_iterations {
            warn!(
                "PageRank iteration stopped after {} sweeps without converging.",
                iterations
            );
            return Err(PageRankError::NonConvergence { iterations, delta });
        }
    }
}

/// Writes the ranks after one sweep into `new_ranks`, reading only `ranks`
fn sweep(
    graph: &LinkGraph,
    dangling_pages: &[PageId],
    damping_factor: f64,
    random_jump: f64,
    ranks: &[Score],
    new_ranks: &mut [Score],
) {
    let num_pages = graph.len() as f64;
    let dangling_mass: Score = dangling_pages.iter().map(|&q| ranks[q]).sum();
    new_ranks.fill(random_jump + damping_factor * dangling_mass / num_pages);

    for q in graph.page_ids().filter(|&q| !graph.is_dangling(q)) {
        let contribution = damping_factor * ranks[q] / graph.out_degree(q) as f64;
        for &p in graph.out_links(q) {
            new_ranks[p] += contribution;
        }
    }
}

fn largest_change(ranks: &[Score], new_ranks: &[Score]) -> f64 {
    ranks
        .iter()
        .zip(new_ranks.iter())
        .map(|(old, new)| (old - new).abs())
        .fold(0.0, f64::max)
}
