use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// First non-empty of `LC_ALL`, `LC_CTYPE`, `LANG` decides; unset means UTF-8
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    let locale = KEYS
        .iter()
        .filter_map(|k| get_env(k))
        .find(|v| !v.is_empty());

    match locale {
        Some(val) => {
            let v = val.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        }
        None => true,
    }
}
