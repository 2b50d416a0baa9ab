use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use sweep::SweepError;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {} {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Error:").bold().render(supports_color),
        err
    );

    if let Some(fix) = err.downcast_ref::<SweepError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim("Fix:").render(supports_color),
            fix
        ));
    }

    out
}

fn fix_hint(err: &SweepError) -> Option<String> {
    match err {
        SweepError::ConfigParse { file, .. } => {
            Some(format!("Correct the TOML in {}", file.display()))
        }
        SweepError::InvalidManifestEntry { .. } | SweepError::PathEscape { .. } => {
            Some("Manifest paths must be relative and stay inside the root".to_string())
        }
        SweepError::AlreadyExists { .. } => Some("Pass --force to overwrite it".to_string()),
        SweepError::Io(_) => None,
    }
}
