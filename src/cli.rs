//! Command-line arguments

use crate::catalog::builtin::CatalogTab;
use crate::error::{GalleryError, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: tui-gallery [--config PATH] [--tab controls|state|utilities|resources]

Options:
  -c, --config PATH   Read configuration from PATH
  -t, --tab TAB       Start on TAB instead of the configured tab
  -h, --help          Print this message";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub tab: Option<CatalogTab>,
    pub help: bool,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-c" | "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| GalleryError::Usage(format!("{} requires a path", arg)))?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-t" | "--tab" => {
                let name = args
                    .next()
                    .ok_or_else(|| GalleryError::Usage(format!("{} requires a tab name", arg)))?;
                parsed.tab = Some(name.parse().map_err(GalleryError::Usage)?);
            }
            other => {
                return Err(GalleryError::Usage(format!("unexpected argument '{}'", other)));
            }
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_config_and_tab() {
        let parsed = parse_args(args(&["--config", "gallery.toml", "-t", "State"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("gallery.toml")));
        assert_eq!(parsed.tab, Some(CatalogTab::State));
    }

    #[test]
    fn test_missing_value_is_usage_error() {
        let err = parse_args(args(&["--config"])).unwrap_err();
        assert!(matches!(err, GalleryError::Usage(_)));
    }

    #[test]
    fn test_unknown_tab_and_argument() {
        assert!(matches!(
            parse_args(args(&["--tab", "widgets"])),
            Err(GalleryError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["extra"])),
            Err(GalleryError::Usage(_))
        ));
    }
}
