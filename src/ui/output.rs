use crate::ui::primitives::icon::Icon;
use sweep::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    for w in warnings {
        eprintln!("{}", format_config_warning(w, supports_unicode));
    }
}

fn format_config_warning(w: &ConfigWarning, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        Icon::Warning.render(supports_unicode),
        w.key,
        w.file.display()
    );
    if let Some(line) = w.line {
        out.push_str(&format!(":{}", line));
    }
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}
