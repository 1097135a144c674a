use crate::*;

/// Damping factor accepted by the transition model: [0, 1]
pub(crate) fn check_transition_damping(damping_factor: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping_factor) {
        Ok(())
    } else {
        Err(PageRankError::invalid_parameter(
            "damping factor",
            damping_factor,
            "a value in [0, 1]",
        ))
    }
}

/// Damping factor accepted by both estimators: [0, 1).
/// At 1 the random jump disappears and neither the walk nor the iteration is guaranteed to
/// settle on a unique distribution.
pub(crate) fn check_estimator_damping(damping_factor: f64) -> Result<()> {
    if (0.0..1.0).contains(&damping_factor) {
        Ok(())
    } else {
        Err(PageRankError::invalid_parameter(
            "damping factor",
            damping_factor,
            "a value in [0, 1)",
        ))
    }
}

pub(crate) fn check_not_empty(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        Err(PageRankError::EmptyGraph)
    } else {
        Ok(())
    }
}

pub(crate) fn round_to_three_places(n: f64) -> f64 {
    f64::trunc(n * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_damping_bounds_are_inclusive() {
        assert!(check_transition_damping(0.0).is_ok());
        assert!(check_transition_damping(1.0).is_ok());
        assert!(check_transition_damping(-0.1).is_err());
        assert!(check_transition_damping(1.1).is_err());
        assert!(check_transition_damping(f64::NAN).is_err());
    }

    #[test]
    fn estimator_damping_excludes_one() {
        assert!(check_estimator_damping(0.0).is_ok());
        assert!(check_estimator_damping(0.85).is_ok());
        assert!(matches!(
            check_estimator_damping(1.0),
            Err(PageRankError::InvalidParameter { .. })
        ));
        assert!(check_estimator_damping(f64::NAN).is_err());
    }

    #[test]
    fn empty_graph_is_rejected() {
        assert_eq!(
            check_not_empty(&LinkGraph::default()),
            Err(PageRankError::EmptyGraph)
        );
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_three_places(0.26666), 0.266);
        assert_eq!(round_to_three_places(1.0), 1.0);
    }
}
