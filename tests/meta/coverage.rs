//! Keeps `tests/unit` in step with `src`: one test file per source file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't require separate test files
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_stripped| io::Error::other("path outside base directory"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn source_and_unit_files() -> (BTreeSet<String>, BTreeSet<String>) {
        let mut sources = BTreeSet::new();
        let mut units = BTreeSet::new();
        let src = Path::new("src");
        let unit = Path::new("tests/unit");
        if let Err(error) = rust_files(src, src, &mut sources) {
            unreachable!("Failed to read src directory: {error}");
        }
        if let Err(error) = rust_files(unit, unit, &mut units) {
            unreachable!("Failed to read tests/unit directory: {error}");
        }
        sources.retain(|relative| !is_organizational(relative));
        units.retain(|relative| !is_organizational(relative));
        (sources, units)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (sources, units) = source_and_unit_files();

        let missing: Vec<&String> = sources.difference(&units).collect();

        assert!(
            missing.is_empty(),
            "Source files without a tests/unit counterpart: {missing:?}"
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let (sources, units) = source_and_unit_files();

        let orphaned: Vec<&String> = units.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a src counterpart: {orphaned:?}"
        );
    }

    #[test]
    fn test_unit_files_contain_tests() {
        let (_, units) = source_and_unit_files();

        let empty: Vec<&String> = units
            .iter()
            .filter(|relative| {
                fs::read_to_string(Path::new("tests/unit").join(relative))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .collect();

        assert!(empty.is_empty(), "Unit test files without tests: {empty:?}");
    }
}
