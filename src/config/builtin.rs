//! Built-in manifest
//!
//! The compiled-in cleanup list for the web project checkout: dead pages,
//! unused data and UI components, a leftover component folder, and
//! temporary build/test artifacts.

use crate::domain::entities::{Manifest, ManifestEntry};

const DEAD_PAGES: &[&str] = &[
    "src/pages/InstrumentDetailLive.tsx",
    "src/pages/InstrumentDetail.backup.tsx",
];

const UNUSED_DATA: &[&str] = &["src/data/news.ts"];

const UNUSED_UI: &[&str] = &[
    "src/components/ui/menubar.tsx",
    "src/components/ui/context-menu.tsx",
    "src/components/ui/input-otp.tsx",
    "src/components/ui/chart.tsx",
    "src/components/ui/resizable.tsx",
    "src/components/ui/sidebar.tsx",
    "src/components/ui/pagination.tsx",
    "src/components/ui/breadcrumb.tsx",
    "src/components/ui/navigation-menu.tsx",
    "src/components/ui/hover-card.tsx",
    "src/components/ui/aspect-ratio.tsx",
    "src/components/ui/carousel.tsx",
];

const UNUSED_FOLDERS: &[&str] = &["src/components/chat"];

const TEMP_FILES: &[&str] = &[
    "build-log.txt",
    "test-log.txt",
    "test-commands.txt",
    "curl-root.txt",
    "dev-server.pid",
    "patch.diff",
    "changes_storage.md",
];

/// The manifest used when no configuration provides one
pub fn builtin_manifest() -> Manifest {
    let files = |group: &str, paths: &[&str]| -> Vec<ManifestEntry> {
        paths
            .iter()
            .map(|p| ManifestEntry::file(*p).with_group(group))
            .collect()
    };

    let mut entries = Vec::new();
    entries.extend(files("Dead code pages", DEAD_PAGES));
    entries.extend(files("Unused data files", UNUSED_DATA));
    entries.extend(files("Unused UI components", UNUSED_UI));
    entries.extend(
        UNUSED_FOLDERS
            .iter()
            .map(|p| ManifestEntry::directory(*p).with_group("Unused folders")),
    );
    entries.extend(files("Temporary and log files", TEMP_FILES));

    // Every path above is a plain relative path
    Manifest::new(entries).unwrap_or_default()
}
