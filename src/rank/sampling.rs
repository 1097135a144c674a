use crate::*;
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Estimates PageRank by following a random surfer for `n` pages, starting at a page chosen
/// uniformly at random. Every following page is drawn from [`transition_model`] of the current
/// one. The rank of a page is the share of the walk spent on it, so the result always sums to 1.
///
/// The random source is injected so callers can reproduce a walk by seeding it.
pub fn sample_pagerank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping_factor: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankVector> {
    check_estimator_damping(damping_factor)?;
    if n < 1 {
        return Err(PageRankError::invalid_parameter("sample count", n, "at least 1"));
    }
    check_not_empty(graph)?;

    // The distribution out of a page does not change during the walk, so each page gets one
    // sampler for the whole call.
    let samplers = transition_samplers(graph, damping_factor)?;

    let mut visits: Vec<usize> = vec![0; graph.len()];
    let mut current_page: PageId = rng.gen_range(0..graph.len());
    visits[current_page] += 1;

    for _ in 1..n {
        current_page = samplers[current_page].sample(rng);
        visits[current_page] += 1;
    }
    debug!("Random walk of {} steps over {} pages finished.", n, graph.len());

    let scores = visits
        .into_iter()
        .map(|count| count as Score / n as Score)
        .collect();
    Ok(RankVector::from_graph(graph, scores))
}

/// Runs [`sample_pagerank`] with a `StdRng` seeded from `seed`
pub fn sample_pagerank_seeded(
    graph: &LinkGraph,
    damping_factor: f64,
    n: usize,
    seed: u64,
) -> Result<RankVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample_pagerank(graph, damping_factor, n, &mut rng)
}

fn transition_samplers(
    graph: &LinkGraph,
    damping_factor: f64,
) -> Result<Vec<WeightedIndex<f64>>> {
    graph
        .page_ids()
        .map(|id| {
            let weights = transition_probabilities(graph, id, damping_factor);
            // Random jump mass keeps every weight positive for damping < 1.
            WeightedIndex::new(&weights).map_err(|_| {
                PageRankError::invalid_parameter(
                    "damping factor",
                    damping_factor,
                    "a value in [0, 1)",
                )
            })
        })
        .collect()
}
