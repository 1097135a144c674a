use crate::*;

/// Returns the probability distribution over which page a random surfer visits after `page`.
///
/// With probability `damping_factor` the surfer follows one of the out-links of `page`, chosen
/// uniformly. Otherwise it jumps to any page of the graph, chosen uniformly. A page without
/// out-links is treated as linking to every page, itself included.
pub fn transition_model(
    graph: &LinkGraph,
    page: &str,
    damping_factor: f64,
) -> Result<ProbabilityDistribution> {
    let id = graph
        .page_id(page)
        .ok_or_else(|| PageRankError::InvalidPage {
            page: page.to_string(),
        })?;
    transition_model_for(graph, id, damping_factor)
}

/// Same as [`transition_model`] for a page given by its index in `graph`
pub fn transition_model_for(
    graph: &LinkGraph,
    id: PageId,
    damping_factor: f64,
) -> Result<ProbabilityDistribution> {
    if id >= graph.len() {
        return Err(PageRankError::InvalidPageId {
            id,
            len: graph.len(),
        });
    }
    check_transition_damping(damping_factor)?;
    let probabilities = transition_probabilities(graph, id, damping_factor);
    Ok(ProbabilityDistribution::from_graph(graph, probabilities))
}

/// Unchecked core of the transition model. Expects a valid `id` and damping factor.
pub(crate) fn transition_probabilities(
    graph: &LinkGraph,
    id: PageId,
    damping_factor: f64,
) -> Vec<Probability> {
    let num_pages = graph.len();
    let random_jump = (1.0 - damping_factor) / num_pages as f64;
    let mut probabilities = vec![random_jump; num_pages];

    if graph.is_dangling(id) {
        let link_share = damping_factor / num_pages as f64;
        for p in probabilities.iter_mut() {
            *p += link_share;
        }
    } else {
        let links = graph.out_links(id);
        let link_share = damping_factor / links.len() as f64;
        for &target in links {
            probabilities[target] += link_share;
        }
    }
    probabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    fn corpus0() -> LinkGraph {
        LinkGraph::from_raw_links(vec![
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn link_mass_goes_to_out_links() {
        let graph = corpus0();
        let actual = transition_model(&graph, "2.html", 0.85).unwrap();
        assert_relative_eq!(actual.get("1.html").unwrap(), 0.0375 + 0.425);
        assert_relative_eq!(actual.get("2.html").unwrap(), 0.0375);
        assert_relative_eq!(actual.get("3.html").unwrap(), 0.0375 + 0.425);
        assert_relative_eq!(actual.get("4.html").unwrap(), 0.0375);
    }

    #[test]
    fn distribution_sums_to_one_and_covers_every_page() {
        let graph = corpus0();
        for page in graph.pages() {
            let dist = transition_model(&graph, page, 0.85).unwrap();
            assert_eq!(dist.len(), graph.len());
            assert_abs_diff_eq!(dist.sum(), 1.0, epsilon = 1e-12);
            assert!(dist.probabilities().iter().all(|&p| p > 0.0));
        }
    }

    #[test]
    fn dangling_page_jumps_uniformly_including_itself() {
        let graph = LinkGraph::from_raw_links(vec![("a", vec![]), ("b", vec!["a"])]);
        let dist = transition_model(&graph, "a", 0.85).unwrap();
        assert_relative_eq!(dist.get("a").unwrap(), 0.5);
        assert_relative_eq!(dist.get("b").unwrap(), 0.5);
    }

    #[test]
    fn zero_damping_is_uniform() {
        let graph = corpus0();
        let dist = transition_model(&graph, "1.html", 0.0).unwrap();
        for (_, p) in dist.iter() {
            assert_relative_eq!(p, 0.25);
        }
    }

    #[test]
    fn full_damping_only_follows_links() {
        let graph = corpus0();
        let dist = transition_model(&graph, "1.html", 1.0).unwrap();
        assert_relative_eq!(dist.get("2.html").unwrap(), 1.0);
        assert_eq!(dist.get("1.html").unwrap(), 0.0);
    }

    #[test]
    fn unknown_page_is_rejected() {
        let graph = corpus0();
        let actual = transition_model(&graph, "5.html", 0.85);
        assert_eq!(
            actual,
            Err(PageRankError::InvalidPage {
                page: String::from("5.html")
            })
        );
        assert!(matches!(
            transition_model_for(&graph, 4, 0.85),
            Err(PageRankError::InvalidPageId { id: 4, len: 4 })
        ));
    }

    #[test]
    fn out_of_range_damping_is_rejected() {
        let graph = corpus0();
        for d in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                transition_model(&graph, "1.html", d),
                Err(PageRankError::InvalidParameter { .. })
            ));
        }
    }
}
