use crate::*;

use log::{debug, info};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap());

/// Parses every `.html` file directly inside `dir` and returns the graph of links between them.
/// Pages are named by their file name; links to anything that is not one of those file names are
/// dropped, as are links from a page to itself.
pub fn crawl(dir: &Path) -> Result<LinkGraph, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| CorpusError::Io { path, source }
    };

    let mut raw_links: Vec<(Page, BTreeSet<String>)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(".html") || !path.is_file() {
            continue;
        }
        let contents = fs::read_to_string(&path).map_err(io_error(&path))?;
        let links = extract_links(&contents);
        debug!("{} has {} distinct links.", file_name, links.len());
        raw_links.push((file_name, links));
    }

    let graph = LinkGraph::from_raw_links(raw_links);
    info!(
        "Loaded corpus {} with {} pages and {} links.",
        dir.display(),
        graph.len(),
        graph.number_of_links()
    );
    Ok(graph)
}

/// Targets of all `<a ... href="...">` tags in `html`
pub fn extract_links(html: &str) -> BTreeSet<String> {
    LINK_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
