use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use logscrub::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = if json {
            false
        } else {
            match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color && !caps.is_ci,
                },
            }
        };

        Self {
            verbose,
            color,
            unicode,
        }
    }
}
