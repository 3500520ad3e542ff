use std::time::Duration;

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::monitoring::console_renderer::{ConsoleRenderer, RenderMode};

const DEFAULT_COLUMNS: usize = 80;

/// Command-line options shared by both simulation binaries.
///
/// Usage: `[CONFIG.json] [--json] [--seconds N] [--columns N]`
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: SimConfig,
    pub mode: RenderMode,
    /// Stop after this much wall-clock time; run until interrupted otherwise.
    pub duration: Option<Duration>,
    pub columns: usize,
}

impl RunOptions {
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = None;
        let mut mode = RenderMode::Strip;
        let mut duration = None;
        let mut columns = DEFAULT_COLUMNS;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => mode = RenderMode::Json,
                "--seconds" => {
                    let secs: f64 = parse_value(&arg, args.next())?;
                    if !(secs.is_finite() && secs > 0.0) {
                        return Err(SimError::InvalidArgument(format!("--seconds {}", secs)));
                    }
                    duration = Some(Duration::from_secs_f64(secs));
                }
                "--columns" => columns = parse_value(&arg, args.next())?,
                flag if flag.starts_with("--") => {
                    return Err(SimError::InvalidArgument(flag.to_string()));
                }
                path => config = Some(SimConfig::from_json_file(path)?),
            }
        }

        Ok(Self {
            config: config.unwrap_or_default(),
            mode,
            duration,
            columns,
        })
    }

    /// A renderer covering the visible width of the track.
    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.mode, self.columns, 0.0, self.config.track.width)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| SimError::InvalidArgument(format!("{} needs a value", flag)))?;
    value
        .parse()
        .map_err(|_| SimError::InvalidArgument(format!("{} {}", flag, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let options = RunOptions::from_args(Vec::new()).unwrap();
        assert_eq!(options.mode, RenderMode::Strip);
        assert_eq!(options.duration, None);
        assert_eq!(options.columns, DEFAULT_COLUMNS);
        assert_eq!(options.config, SimConfig::default());
    }

    #[test]
    fn parses_flags() {
        let options = RunOptions::from_args(args(&["--json", "--seconds", "2.5", "--columns", "40"]))
            .unwrap();
        assert_eq!(options.mode, RenderMode::Json);
        assert_eq!(options.duration, Some(Duration::from_millis(2500)));
        assert_eq!(options.columns, 40);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(RunOptions::from_args(args(&["--seconds"])).is_err());
        assert!(RunOptions::from_args(args(&["--seconds", "-1"])).is_err());
        assert!(RunOptions::from_args(args(&["--columns", "many"])).is_err());
        assert!(RunOptions::from_args(args(&["--fast"])).is_err());
        assert!(matches!(
            RunOptions::from_args(args(&["/nonexistent/config.json"])),
            Err(SimError::ConfigIo(_))
        ));
    }
}
