use crate::{Page, PageId};
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Directed hyperlink graph over the pages of one corpus.
///
/// Pages are indexed in ascending name order. Out-links only ever point at pages of the graph
/// and never at the page itself; both are enforced when the graph is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    pages: Vec<Page>,
    index: HashMap<Page, PageId>,
    links: Vec<BTreeSet<PageId>>,
}

impl LinkGraph {
    /// Builds a graph from (page, out-links) pairs. Repeated pages have their links merged.
    /// Self-links and links to pages that do not appear as a key are dropped.
    pub fn from_raw_links<I, P, L>(raw_links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator,
        L::Item: Into<Page>,
    {
        let mut raw: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
        for (page, links) in raw_links {
            raw.entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        let pages: Vec<Page> = raw.keys().cloned().collect();
        let index: HashMap<Page, PageId> = pages
            .iter()
            .enumerate()
            .map(|(id, page)| (page.clone(), id))
            .collect();

        let mut dropped = 0;
        let links: Vec<BTreeSet<PageId>> = raw
            .iter()
            .map(|(page, targets)| {
                let kept: BTreeSet<PageId> = targets
                    .iter()
                    .filter(|&target| target != page)
                    .filter_map(|target| index.get(target).copied())
                    .collect();
                dropped += targets.len() - kept.len();
                kept
            })
            .collect();
        debug!(
            "Built link graph with {} pages, dropped {} self or out-of-corpus links.",
            pages.len(),
            dropped
        );

        Self {
            pages,
            index,
            links,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page names in index order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_ids(&self) -> std::ops::Range<PageId> {
        0..self.pages.len()
    }

    pub fn page_id(&self, page: &str) -> Option<PageId> {
        self.index.get(page).copied()
    }

    pub fn page_name(&self, id: PageId) -> Option<&str> {
        self.pages.get(id).map(String::as_str)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Out-links of `id`. Panics if `id` is not a page of this graph.
    pub fn out_links(&self, id: PageId) -> &BTreeSet<PageId> {
        &self.links[id]
    }

    pub fn out_degree(&self, id: PageId) -> usize {
        self.links[id].len()
    }

    pub fn is_dangling(&self, id: PageId) -> bool {
        self.links[id].is_empty()
    }

    pub fn dangling_pages(&self) -> Vec<PageId> {
        self.page_ids().filter(|&id| self.is_dangling(id)).collect()
    }

    /// Names of the pages `page` links to, or `None` for an unknown page
    pub fn links_of(&self, page: &str) -> Option<Vec<&str>> {
        self.page_id(page).map(|id| {
            self.links[id]
                .iter()
                .map(|&target| self.pages[target].as_str())
                .collect()
        })
    }

    pub fn number_of_links(&self) -> usize {
        self.links.iter().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LinkGraph {
        LinkGraph::from_raw_links(vec![
            ("a.html", vec!["b.html"]),
            ("b.html", vec!["c.html"]),
            ("c.html", vec![]),
        ])
    }

    #[test]
    fn pages_are_indexed_by_name() {
        let graph = LinkGraph::from_raw_links(vec![("z", vec!["a"]), ("a", vec!["z"])]);
        assert_eq!(graph.pages(), &["a".to_string(), "z".to_string()]);
        assert_eq!(graph.page_id("a"), Some(0));
        assert_eq!(graph.page_id("z"), Some(1));
        assert_eq!(graph.page_name(1), Some("z"));
    }

    #[test]
    fn self_links_are_dropped() {
        let graph = LinkGraph::from_raw_links(vec![("a", vec!["a", "b"]), ("b", vec!["b"])]);
        assert_eq!(graph.links_of("a"), Some(vec!["b"]));
        assert_eq!(graph.links_of("b"), Some(vec![]));
        assert!(graph.is_dangling(graph.page_id("b").unwrap()));
    }

    #[test]
    fn out_of_corpus_links_are_dropped() {
        let graph = LinkGraph::from_raw_links(vec![
            ("a", vec!["b", "https://example.com", "missing.html"]),
            ("b", vec!["a"]),
        ]);
        assert_eq!(graph.links_of("a"), Some(vec!["b"]));
        assert_eq!(graph.number_of_links(), 2);
    }

    #[test]
    fn repeated_pages_merge_links() {
        let graph = LinkGraph::from_raw_links(vec![
            ("a", vec!["b"]),
            ("a", vec!["c"]),
            ("b", vec![]),
            ("c", vec![]),
        ]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.links_of("a"), Some(vec!["b", "c"]));
    }

    #[test]
    fn dangling_pages_are_found() {
        let graph = chain();
        assert_eq!(graph.dangling_pages(), vec![2]);
        assert_eq!(graph.out_degree(0), 1);
    }

    #[test]
    fn unknown_page_has_no_links() {
        let graph = chain();
        assert_eq!(graph.links_of("d.html"), None);
        assert!(!graph.contains("d.html"));
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let graph = LinkGraph::from_raw_links(Vec::<(&str, Vec<&str>)>::new());
        assert!(graph.is_empty());
        assert_eq!(graph, LinkGraph::default());
    }
}
