//! Show command UI views

use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::sweep::{manifest_label, render_group_heading};
use sweep::{FailurePolicy, Manifest};

/// Render the resolved settings followed by every manifest entry, grouped
pub fn render_manifest(
    root: &Path,
    manifest_source: Option<&Path>,
    manifest: &Manifest,
    policy: FailurePolicy,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Sweep, "Sweep Manifest");
    header.add("Root", root.display().to_string());
    header.add("Manifest", manifest_label(manifest_source));
    header.add(
        "Entries",
        format!(
            "{} ({} files, {} directories)",
            manifest.len(),
            manifest.files().count(),
            manifest.directories().count()
        ),
    );
    header.add("On failure", policy.as_str());

    let mut out = header.render(supports_color, supports_unicode);

    let mut current_group: Option<&str> = None;
    for entry in manifest {
        let group = entry.group.as_deref();
        if group.is_some() && group != current_group {
            out.push_str(&render_group_heading(
                group.unwrap_or_default(),
                supports_color,
                supports_unicode,
            ));
        }
        current_group = group;
        out.push_str(&format!("  {}\n", entry.display_path()));
    }

    out
}
