//! Run command UI views

use std::path::Path;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use sweep::application::RunSummary;
use sweep::{FailurePolicy, ManifestEntry, Outcome, Removal};

/// Render the run command header
pub fn render_sweep_header(
    root: &Path,
    manifest_source: Option<&Path>,
    entry_count: usize,
    policy: FailurePolicy,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Sweep, "Sweep");

    header.add("Root", root.display().to_string());
    header.add("Manifest", manifest_label(manifest_source));
    header.add("Entries", entry_count.to_string());
    header.add("On failure", policy.as_str());

    header.render(supports_color, supports_unicode)
}

pub(crate) fn manifest_label(source: Option<&Path>) -> String {
    match source {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    }
}

pub fn render_group_heading(label: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\n{} {}\n",
        Icon::Group.colored(supports_color, supports_unicode),
        ColoredText::info(label).bold().render(supports_color)
    )
}

/// One status line per processed entry
pub fn render_entry_line(
    entry: &ManifestEntry,
    outcome: &Outcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let path = entry.display_path();
    match outcome {
        Outcome::Deleted(removal) => {
            let label = match removal {
                Removal::Recursive => "Deleted (with contents):",
                Removal::Link => "Unlinked:",
                Removal::File | Removal::EmptyDirectory => "Deleted:",
            };
            format!(
                "  {} {} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                label,
                path
            )
        }
        Outcome::SkippedMissing => format!(
            "  {} {}\n",
            Icon::Skipped.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("Not found: {}", path)).render(supports_color)
        ),
        Outcome::Failed(reason) => format!(
            "  {} {} {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Failed:").render(supports_color),
            path,
            ColoredText::dim(format!("({})", reason)).render(supports_color)
        ),
    }
}

/// Render the boxed end-of-run summary
pub fn render_sweep_summary(
    summary: &RunSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = if summary.is_success() {
        ResultSummary::success("Sweep Complete")
    } else {
        ResultSummary::partial("Sweep Finished With Failures")
    };

    block.add_stat("deleted", summary.deleted_count());
    block.add_stat("not found", summary.skipped_count());
    block.add_stat("failed", summary.failed_count());

    for (entry, reason) in summary.failures() {
        block.add_warning(format!("{}: {}", entry.display_path(), reason));
    }

    if !summary.is_success() {
        block.with_next_step(format!(
            "Fix the failures above and run sweep again in {}",
            summary.root().display()
        ));
    }

    block.render(supports_color, supports_unicode)
}
