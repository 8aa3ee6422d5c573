// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mte::SPACE_MARKER;

pub const SAMPLE_DOCUMENT: &str = "\
# Shopping list
- milk // semi-skimmed
+ bread
[x] eggs
**urgent**
> remember the coupon: http://shop.example/coupon

Done for today. Really? Yes!!";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "sample.txt", SAMPLE_DOCUMENT)?;
    create_test_file(temp_dir.path(), "empty.txt", "")?;
    create_test_file(temp_dir.path(), "notes/code.txt", "let x = 1; // one\n\tlet y = 2;")?;
    Ok(temp_dir)
}

pub fn count_markers(html: &str) -> usize {
    html.matches(SPACE_MARKER).count()
}
