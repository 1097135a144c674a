use crate::{LinkGraph, Page, Probability, Score};

/// Importance estimate for every page of a graph, in ascending page name order
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    pages: Vec<Page>,
    scores: Vec<Score>,
}

impl RankVector {
    /// `scores` must be indexed like the pages of `graph`
    pub(crate) fn from_graph(graph: &LinkGraph, scores: Vec<Score>) -> Self {
        debug_assert_eq!(graph.len(), scores.len());
        Self {
            pages: graph.pages().to_vec(),
            scores,
        }
    }

    pub fn get(&self, page: &str) -> Option<Score> {
        self.position(page).map(|i| self.scores[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> + '_ {
        self.pages
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn sum(&self) -> Score {
        self.scores.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn position(&self, page: &str) -> Option<usize> {
        self.pages
            .binary_search_by(|p| p.as_str().cmp(page))
            .ok()
    }
}

/// Probability of moving to each page of a graph next, in ascending page name order
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityDistribution {
    pages: Vec<Page>,
    probabilities: Vec<Probability>,
}

impl ProbabilityDistribution {
    pub(crate) fn from_graph(graph: &LinkGraph, probabilities: Vec<Probability>) -> Self {
        debug_assert_eq!(graph.len(), probabilities.len());
        Self {
            pages: graph.pages().to_vec(),
            probabilities,
        }
    }

    pub fn get(&self, page: &str) -> Option<Probability> {
        self.pages
            .binary_search_by(|p| p.as_str().cmp(page))
            .ok()
            .map(|i| self.probabilities[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Probability)> + '_ {
        self.pages
            .iter()
            .map(String::as_str)
            .zip(self.probabilities.iter().copied())
    }

    pub fn probabilities(&self) -> &[Probability] {
        &self.probabilities
    }

    pub fn sum(&self) -> Probability {
        self.probabilities.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}
