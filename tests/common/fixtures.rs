use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// The corpus shipped at the repository root.
pub fn bundled_corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("restaurant-data.txt")
}

pub const SMALL_CORPUS: &str = "\
Applebee's. Awful food and bad service.
Applebee's. Bad food and unpleasant service.
Applebee's. Average food and forgettable service.
Applebee's. Good food and enjoyable service.
Applebee's. Amazing food and incredible service.

Subway. Good food and average service.
not a record
Burger King. Whopper was good, service average.
Burger King Express. Awful food and bad service.
";

/// Writes `contents` to a temporary corpus file that lives as long as the handle.
pub fn write_corpus(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    file.write_all(contents.as_bytes()).expect("write temp corpus");
    file.flush().expect("flush temp corpus");
    file
}
