//! Keeps `tests/unit` mirroring `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Module organization and entry point files carry no logic of their own
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
                    .map_err(|_| io::Error::other("Failed to strip prefix"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let base = Path::new(dir);
        let mut found = BTreeSet::new();
        if let Err(error) = rust_files(base, base, &mut found) {
            assert!(!base.exists(), "Failed to scan {dir}: {error}");
        }
        found
    }

    // Verified by adding a src file without a unit test counterpart
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = collect("tests/unit");
        let missing: Vec<String> = collect("src")
            .into_iter()
            .filter(|path| !is_organizational(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Verified by adding a unit test file with no src counterpart
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = collect("src");
        let orphaned: Vec<String> = collect("tests/unit")
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    // Verified by adding a test file containing no test functions
    #[test]
    fn test_all_test_files_contain_tests() {
        let empty: Vec<String> = collect("tests")
            .into_iter()
            .filter(|path| path != "main.rs" && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
