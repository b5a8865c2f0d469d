//! Engine options.
//!
//! The renderer decides how many lines fit and how wide a tab is. Both arrive
//! here, either built directly or parsed from `name=value` assignments in the
//! style of a `:set` line.
//!
//! | Full name      | Abbrev | Default |
//! |----------------|--------|---------|
//! | `visiblelines` | `vl`   | 20      |
//! | `tabstop`      | `ts`   | 4       |

use thiserror::Error;

use crate::display::DEFAULT_TAB_WIDTH;
use crate::viewport::DEFAULT_VISIBLE_LINES;

/// A rejected option assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Viewport capacity in lines. At least 1.
    pub visible_lines: usize,

    /// Tab stop width used for display columns. At least 1.
    pub tab_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            visible_lines: DEFAULT_VISIBLE_LINES,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Options {
    /// Parse whitespace-separated `name=value` assignments on top of the
    /// defaults, e.g. `"visiblelines=30 ts=8"`.
    ///
    /// # Errors
    ///
    /// The first unknown name or invalid value aborts the parse.
    pub fn parse(args: &str) -> Result<Self, OptionError> {
        let mut opts = Self::default();
        for arg in args.split_whitespace() {
            opts.apply(arg)?;
        }
        Ok(opts)
    }

    /// Apply a single `name=value` assignment.
    ///
    /// # Errors
    ///
    /// [`OptionError::Unknown`] for an unrecognized name or a bare name with
    /// no value, [`OptionError::InvalidValue`] for a value that is not a
    /// positive integer.
    pub fn apply(&mut self, arg: &str) -> Result<(), OptionError> {
        let Some((name, value)) = arg.split_once('=') else {
            return Err(OptionError::Unknown(arg.to_string()));
        };

        let slot = match name {
            "visiblelines" | "vl" => &mut self.visible_lines,
            "tabstop" | "ts" => &mut self.tab_width,
            _ => return Err(OptionError::Unknown(name.to_string())),
        };

        *slot = parse_positive(value).ok_or_else(|| OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;

        tracing::debug!(option = name, value = *slot, "option set");
        Ok(())
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.visible_lines, 20);
        assert_eq!(opts.tab_width, 4);
    }

    #[test]
    fn empty_string_gives_defaults() {
        assert_eq!(Options::parse("  "), Ok(Options::default()));
    }

    #[test]
    fn full_names_and_abbreviations() {
        let opts = Options::parse("visiblelines=30 tabstop=8").unwrap();
        assert_eq!(
            opts,
            Options {
                visible_lines: 30,
                tab_width: 8
            }
        );

        let opts = Options::parse("vl=5 ts=2").unwrap();
        assert_eq!(opts.visible_lines, 5);
        assert_eq!(opts.tab_width, 2);
    }

    #[test]
    fn later_assignment_wins() {
        let opts = Options::parse("ts=2 ts=3").unwrap();
        assert_eq!(opts.tab_width, 3);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            Options::parse("wrap=1"),
            Err(OptionError::Unknown("wrap".into()))
        );
        assert_eq!(
            Options::parse("tabstop"),
            Err(OptionError::Unknown("tabstop".into()))
        );
    }

    #[test]
    fn invalid_values() {
        for bad in ["ts=0", "vl=-1", "vl=abc", "ts="] {
            let err = Options::parse(bad).unwrap_err();
            assert!(matches!(err, OptionError::InvalidValue { .. }), "{bad}");
        }
    }

    #[test]
    fn error_messages() {
        let err = Options::parse("ts=x").unwrap_err();
        assert_eq!(err.to_string(), "invalid value for ts: \"x\"");
        let err = Options::parse("nope=1").unwrap_err();
        assert_eq!(err.to_string(), "unknown option: nope");
    }
}
