//! Line-protocol demo driver.
//!
//! Reads a stop-word line, a document count `N`, `N` document lines of the
//! form `<id> <rating...> <text>`, and a query line, then prints the top
//! results for that query. See `SPEC_FULL.md` §6.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{BufRead, Read};
use tfidf_search::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tfidf-search", about = "In-memory TF-IDF search driver")]
struct Cli {
    /// Read the line protocol from this file instead of stdin.
    #[arg(long)]
    input: Option<std::path::PathBuf>,
}

fn run(mut reader: impl BufRead) -> Result<()> {
    let mut stop_words_line = String::new();
    reader
        .read_line(&mut stop_words_line)
        .context("reading stop-word line")?;
    let index_stop_words = stop_words_line.trim_end_matches('\n');

    let mut count_line = String::new();
    reader.read_line(&mut count_line).context("reading document count")?;
    let document_count: usize = count_line
        .trim()
        .parse()
        .context("document count must be an integer")?;

    let mut index = InvertedIndex::with_stop_words_str(index_stop_words)?;
    for id in 0..document_count {
        let mut line = String::new();
        reader.read_line(&mut line).context("reading document line")?;
        let line = line.trim_end_matches('\n');
        let mut parts = line.splitn(2, ' ');
        let rating_field = parts.next().unwrap_or_default();
        let text = parts.next().unwrap_or_default();
        let ratings: Vec<i32> = rating_field
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<i32>().context("rating must be an integer"))
            .collect::<Result<_>>()?;
        index.add_document(id as i64, text, DocumentStatus::Actual, &ratings)?;
    }

    let mut query_line = String::new();
    reader.read_line(&mut query_line).context("reading query line")?;
    let query = query_line.trim_end_matches('\n');
    if query.is_empty() {
        bail!("query line must not be empty");
    }

    let results = find_top_actual(&index, query, ExecutionPolicy::Sequential)?;
    for doc in results {
        println!(
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            doc.id, doc.relevance, doc.rating
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.input {
        Some(path) => {
            let mut contents = String::new();
            std::fs::File::open(&path)
                .with_context(|| format!("opening {}", path.display()))?
                .read_to_string(&mut contents)?;
            run(std::io::Cursor::new(contents))
        }
        None => run(std::io::stdin().lock()),
    }
}
