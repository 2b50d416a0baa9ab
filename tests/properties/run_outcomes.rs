//! Property tests for the sweep run against a real temp directory.

use proptest::prelude::*;
use tempfile::tempdir;

use sweep::domain::ports::NoopEventSink;
use sweep::{LocalFs, Manifest, ManifestEntry, SweepUseCase};

#[derive(Debug, Clone)]
enum Present {
    Missing,
    File,
    EmptyDir,
    FullDir,
}

fn present() -> impl Strategy<Value = Present> {
    prop_oneof![
        Just(Present::Missing),
        Just(Present::File),
        Just(Present::EmptyDir),
        Just(Present::FullDir),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One outcome per entry, counts add up, nothing listed remains,
    /// and a second run only reports missing entries.
    #[test]
    fn property_outcomes_match_entries(layout in proptest::collection::vec(present(), 0..=12)) {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let mut entries = Vec::new();
        let mut expected_deleted = 0;
        for (i, state) in layout.iter().enumerate() {
            let name = format!("entry-{i}");
            let path = root.join(&name);
            match state {
                Present::Missing => entries.push(ManifestEntry::file(name)),
                Present::File => {
                    std::fs::write(&path, "x").unwrap();
                    entries.push(ManifestEntry::file(name));
                    expected_deleted += 1;
                }
                Present::EmptyDir => {
                    std::fs::create_dir(&path).unwrap();
                    entries.push(ManifestEntry::directory(name));
                    expected_deleted += 1;
                }
                Present::FullDir => {
                    std::fs::create_dir_all(path.join("nested")).unwrap();
                    std::fs::write(path.join("nested/file.txt"), "x").unwrap();
                    entries.push(ManifestEntry::directory(name));
                    expected_deleted += 1;
                }
            }
        }

        let manifest = Manifest::new(entries).unwrap();
        let use_case = SweepUseCase::new(LocalFs::new());

        let summary = use_case.run(root, &manifest, &NoopEventSink);
        prop_assert_eq!(summary.total_count(), manifest.len());
        prop_assert_eq!(
            summary.deleted_count() + summary.skipped_count() + summary.failed_count(),
            manifest.len()
        );
        prop_assert_eq!(summary.deleted_count(), expected_deleted);
        prop_assert_eq!(summary.failed_count(), 0);
        for entry in &manifest {
            prop_assert!(entry.resolve(root).symlink_metadata().is_err());
        }

        let again = use_case.run(root, &manifest, &NoopEventSink);
        prop_assert_eq!(again.skipped_count(), manifest.len());
    }
}
