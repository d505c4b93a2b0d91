use std::path::Path;

use logscrub::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], ui: &UiContext) {
    for line in render_config_warnings(path, warnings, ui) {
        eprintln!("{}", line);
    }
}

pub fn render_config_warnings(path: &Path, warnings: &[ConfigWarning], ui: &UiContext) -> Vec<String> {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                path.display(),
                line
            )),
            None => lines.push(format!(
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}
