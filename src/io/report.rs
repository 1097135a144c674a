use crate::*;

use csv::{Writer, WriterBuilder};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{error::Error, io, path::Path};

/// One page of a sampled vs. iterated comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageComparison {
    pub page: Page,
    pub sampled: Score,
    pub iterated: Score,
    pub abs_difference: Score,
}

/// One page of a rank vector, labelled with the estimator that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRow {
    pub estimator: String,
    pub page: Page,
    pub score: Score,
}

/// Returns a list of PageRankings sorted by page name
pub fn create_page_ranking_report(ranks: &RankVector) -> Vec<PageRanking> {
    ranks
        .iter()
        .map(|(page, score)| (page.to_string(), score))
        .sorted_by(|x, y| x.0.cmp(&y.0))
        .collect()
}

/// Returns a list of PageRankings sorted by score, highest first. Ties keep name order.
pub fn create_top_ranking_report(ranks: &RankVector) -> Vec<PageRanking> {
    create_page_ranking_report(ranks)
        .into_iter()
        .sorted_by(|x, y| y.1.total_cmp(&x.1))
        .collect()
}

/// Pairs up the ranks both estimators gave each page, sorted by page name.
/// Pages missing from `iterated` are skipped.
pub fn create_comparison_report(
    sampled: &RankVector,
    iterated: &RankVector,
) -> Vec<PageComparison> {
    sampled
        .iter()
        .filter_map(|(page, s)| {
            iterated.get(page).map(|i| PageComparison {
                page: page.to_string(),
                sampled: s,
                iterated: i,
                abs_difference: (s - i).abs(),
            })
        })
        .sorted_by(|x, y| x.page.cmp(&y.page))
        .collect()
}

/// Labels each ranking with `estimator`, keeping the order of `rankings`
pub fn create_rank_rows(estimator: &str, rankings: &[PageRanking]) -> Vec<RankRow> {
    rankings
        .iter()
        .map(|(page, score)| RankRow {
            estimator: estimator.to_string(),
            page: page.clone(),
            score: *score,
        })
        .collect()
}

/// Formats rankings as a title line followed by one `  page: rank` line per page
pub fn format_rankings(title: &str, rankings: &[PageRanking]) -> String {
    let lines = rankings
        .iter()
        .map(|(page, score)| format!("  {}: {:.4}\n", page, score))
        .join("");
    format!("{}\n{}", title, lines)
}

pub fn write_csv_to_file(
    data_points: impl IntoIterator<Item = impl serde::Serialize>,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let writer = WriterBuilder::new().from_path(path)?;
    write_csv_via_writer(data_points, writer)
}

pub fn write_csv_to_stdout(
    data_points: impl IntoIterator<Item = impl serde::Serialize>,
) -> Result<(), Box<dyn Error>> {
    let writer = WriterBuilder::new().from_writer(io::stdout());
    write_csv_via_writer(data_points, writer)
}

pub fn write_csv_via_writer(
    data_points: impl IntoIterator<Item = impl serde::Serialize>,
    mut writer: Writer<impl io::Write>,
) -> Result<(), Box<dyn Error>> {
    for data_point in data_points.into_iter() {
        writer.serialize(data_point)?;
        writer.flush()?;
    }
    Ok(())
}
