//! Load one catalog into every backend and compare the answers.
//!
//! Usage: `compare_backends [catalog.tsv] [min_year] [max_year] [genre...]`
//! Set `MOVIE_INDEX_DEBUG=1` to see skipped lines.

use movie_index::{BackendKind, CriteriaInput, IndexSelector, Result, SwitchOutcome};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let debug = std::env::var_os("MOVIE_INDEX_DEBUG").is_some();
    let log_level = if debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(|s| s.as_str()).unwrap_or("movies.tsv");

    let criteria = CriteriaInput {
        min_year: args.get(2).cloned().unwrap_or_default(),
        max_year: args.get(3).cloned().unwrap_or_default(),
        genres: args.iter().skip(4).cloned().collect(),
        ..Default::default()
    }
    .into_criteria()?;

    info!("Catalog: {}", path);
    let mut selector = IndexSelector::with_backend(BackendKind::Sequential, path);

    for kind in BackendKind::ALL {
        if let SwitchOutcome::Switched { report, .. } = selector.switch_to(kind) {
            if report.collapsed() > 0 {
                println!(
                    "{}: {} records collapsed by duplicate keys",
                    kind,
                    report.collapsed()
                );
            }
        }

        let result = selector.search(&criteria);
        println!(
            "{:<8} {:>8} of {:>8} records matched in {:.3}ms",
            result.backend.display_name(),
            result.movies.len(),
            selector.index().len(),
            result.query_time_ms
        );

        for movie in result.movies.iter().take(3) {
            println!("{}\n", movie);
        }
    }

    Ok(())
}
