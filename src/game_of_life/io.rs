//! File I/O operations for RLE pattern files

use crate::rle::export_file_name;
use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Read the raw text of a pattern file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))
}

/// Check that a pattern name can be used as a file name inside the output directory
///
/// Names holding a path separator, a root or a `.`/`..` component are rejected.
pub fn is_safe_pattern_name(name: &str) -> bool {
    if name.contains(['/', '\\']) || name.contains('\0') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (None, None) | (Some(Component::Normal(_)), None)
    )
}

/// Write exported RLE text to `<output_dir>/<name or pattern>.rle`
pub fn save_pattern_to_file<P: AsRef<Path>>(content: &str, output_dir: P, name: &str) -> Result<PathBuf> {
    if !is_safe_pattern_name(name) {
        anyhow::bail!("Pattern name {:?} cannot be used as a file name", name);
    }

    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(export_file_name(name));
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.display()))?;

    Ok(path)
}

/// Create example pattern files for testing
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.rle", "#N glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n"),
        ("blinker.rle", "#N blinker\nx = 3, y = 1, rule = B3/S23\n3o!\n"),
        ("block.rle", "#N block\nx = 2, y = 2, rule = B3/S23\n2o$2o!\n"),
        ("beacon.rle", "#N beacon\nx = 4, y = 4, rule = B3/S23\n2o$2o$2b2o$2b2o!\n"),
    ];

    for (file_name, content) in examples {
        std::fs::write(dir.join(file_name), content)
            .with_context(|| format!("Failed to write {}", file_name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Grid;
    use crate::rle::{decode_pattern, detect_pattern_size, encode_pattern};
    use tempfile::tempdir;

    fn load_grid(path: &Path) -> Grid {
        let content = load_pattern_from_file(path).unwrap();
        let size = detect_pattern_size(&content).unwrap();
        let mut grid = Grid::new(size.width, size.height).unwrap();
        decode_pattern(&mut grid, &content, 0, 0).unwrap();
        grid
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let original = Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        let content = encode_pattern(&original, (0, 0), (2, 1), "checker").unwrap();
        let path = save_pattern_to_file(&content, temp_dir.path(), "checker").unwrap();
        assert_eq!(path, temp_dir.path().join("checker.rle"));

        assert_eq!(load_grid(&path), original);
    }

    #[test]
    fn test_save_uses_default_name() {
        let temp_dir = tempdir().unwrap();
        let path = save_pattern_to_file("x = 1, y = 1\no!\n", temp_dir.path().join("out"), "").unwrap();

        assert_eq!(path, temp_dir.path().join("out").join("pattern.rle"));
        assert!(path.exists());
    }

    #[test]
    fn test_names_cannot_leave_output_dir() {
        let temp_dir = tempdir().unwrap();
        let out_dir = temp_dir.path().join("out");
        let elsewhere = tempdir().unwrap();
        let absolute = elsewhere.path().join("evil").display().to_string();

        for name in [absolute.as_str(), "../evil", "..", ".", "a/b", "a\\b"] {
            assert!(!is_safe_pattern_name(name), "{name}");
            assert!(save_pattern_to_file("x = 1, y = 1\no!\n", &out_dir, name).is_err());
        }
        assert!(!elsewhere.path().join("evil.rle").exists());
        assert!(!temp_dir.path().join("evil.rle").exists());

        assert!(is_safe_pattern_name("Gosper glider gun"));
        assert!(is_safe_pattern_name("v1.2"));
        assert!(is_safe_pattern_name(""));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_pattern_from_file(temp_dir.path().join("nope.rle")).is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.rle", "blinker.rle", "block.rle", "beacon.rle"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_grid(&temp_dir.path().join("glider.rle"));
        assert_eq!((glider.width(), glider.height()), (3, 3));
        assert_eq!(glider.living_count(), 5);

        let beacon = load_grid(&temp_dir.path().join("beacon.rle"));
        assert_eq!(beacon.living_count(), 8);
    }
}
