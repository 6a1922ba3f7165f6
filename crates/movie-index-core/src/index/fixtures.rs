//! Catalog fixtures for backend tests.

use tempfile::TempDir;

pub(crate) const HEADER: &str = "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres";

/// Write a catalog of `(title, year, runtime, genre)` rows under a fresh temp dir.
pub(crate) fn create_test_catalog(
    rows: &[(&str, &str, &str, &str)],
) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("movies.tsv");
    let mut contents = format!("{HEADER}\n");
    for (i, (title, year, runtime, genre)) in rows.iter().enumerate() {
        contents.push_str(&format!(
            "tt{i:07}\tmovie\t{title}\t{title}\t0\t{year}\t\\N\t{runtime}\t{genre}\n"
        ));
    }
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
