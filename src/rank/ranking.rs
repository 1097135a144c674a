use crate::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rank every page of `graph` with the estimator selected by `ranking_algo`
pub fn rank_pages(
    graph: &LinkGraph,
    damping_factor: f64,
    ranking_algo: RankingAlg,
) -> Result<RankVector> {
    match ranking_algo {
        RankingAlg::Sampling { samples, seed } => {
            if let Some(seed) = seed {
                sample_pagerank_seeded(graph, damping_factor, samples, seed)
            } else {
                let mut rng = StdRng::from_entropy();
                sample_pagerank(graph, damping_factor, samples, &mut rng)
            }
        }
        RankingAlg::Iteration { tolerance } => iterate_pagerank(graph, damping_factor, tolerance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    fn triangle_with_tail() -> LinkGraph {
        LinkGraph::from_raw_links(vec![
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["a", "d"]),
            ("d", vec![]),
        ])
    }

    #[test]
    fn rank_pages_with_iteration() {
        let graph = triangle_with_tail();
        let actual = rank_pages(
            &graph,
            DEFAULT_DAMPING,
            RankingAlg::Iteration {
                tolerance: DEFAULT_TOLERANCE,
            },
        )
        .unwrap();
        assert_eq!(actual.len(), 4);
        assert_abs_diff_eq!(actual.sum(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rank_pages_with_unseeded_sampling() {
        let graph = triangle_with_tail();
        let actual = rank_pages(
            &graph,
            DEFAULT_DAMPING,
            RankingAlg::Sampling {
                samples: 1000,
                seed: None,
            },
        )
        .unwrap();
        assert_abs_diff_eq!(actual.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sampling_agrees_with_iteration() {
        let graph = triangle_with_tail();
        let iterated = rank_pages(
            &graph,
            DEFAULT_DAMPING,
            RankingAlg::Iteration {
                tolerance: DEFAULT_TOLERANCE,
            },
        )
        .unwrap();
        for seed in [1, 2, 3, 4, 5] {
            let sampled = rank_pages(
                &graph,
                DEFAULT_DAMPING,
                RankingAlg::Sampling {
                    samples: 100_000,
                    seed: Some(seed),
                },
            )
            .unwrap();
            for (page, rank) in iterated.iter() {
                assert_abs_diff_eq!(sampled.get(page).unwrap(), rank, epsilon = 0.02);
            }
        }
    }

    #[test]
    fn both_estimators_reject_full_damping() {
        let graph = triangle_with_tail();
        let algs = [
            RankingAlg::Sampling {
                samples: 10,
                seed: Some(0),
            },
            RankingAlg::Iteration {
                tolerance: DEFAULT_TOLERANCE,
            },
        ];
        for alg in algs {
            for d in [1.0, -0.1] {
                assert!(matches!(
                    rank_pages(&graph, d, alg),
                    Err(PageRankError::InvalidParameter { .. })
                ));
            }
        }
    }
}
