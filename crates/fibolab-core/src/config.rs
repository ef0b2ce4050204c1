//! Configuration constants and profiling parameter resolution.
//!
//! Profiling parameters come from three places, in order of precedence:
//! an explicit argument, an interactive prompt, and the documented default
//! in [`defaults`]. A prompt answer that does not parse falls back to the
//! default instead of failing.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::info;

use crate::FibError;

/// Documented defaults for every profiling parameter.
pub mod defaults {
    /// Index used by fixed-index profiling.
    ///
    /// Large enough that naive recursion is visibly slow, small enough that
    /// it still finishes in well under a second per repetition.
    pub const INDEX: u64 = 27;

    /// Repetitions for fixed-index profiling.
    pub const REPS: u64 = 10;

    /// First index (inclusive) of range profiling.
    pub const RANGE_START: u64 = 3;

    /// End index (exclusive) of range profiling.
    pub const RANGE_END: u64 = 27;

    /// Repetitions for range profiling.
    pub const RANGE_REPS: u64 = 10;
}

/// Exactness bounds of the `u64` value domain.
pub mod limits {
    /// Largest index every integer strategy can compute without overflow.
    ///
    /// $F(93)$ still fits in a `u64`, but the loop strategies also build the
    /// look-ahead term $F(n+1)$, and $F(94) > 2^{64}$.
    pub const MAX_EXACT_INDEX: u64 = 92;

    /// Largest index where Binet's formula in `f64` still rounds to the
    /// exact integer. From 71 on the result is off by at least one.
    pub const BINET_MAX_EXACT_INDEX: u64 = 70;

    /// Largest index at which naive recursion still finishes in seconds.
    ///
    /// Each step up multiplies the call count by about 1.6.
    pub const NAIVE_RECURSION_PRACTICAL_INDEX: u64 = 35;
}

// ============================================================================
// Parameters
// ============================================================================

/// A single profiling parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Index,
    Reps,
    RangeStart,
    RangeEnd,
    RangeReps,
}

impl Param {
    /// Parameters used by fixed-index profiling.
    pub const PROFILE: [Param; 2] = [Param::Index, Param::Reps];

    /// Parameters used by range profiling.
    pub const RANGE: [Param; 3] = [Param::RangeStart, Param::RangeEnd, Param::RangeReps];

    /// Every parameter, in prompt order.
    pub const ALL: [Param; 5] = [
        Param::Index,
        Param::Reps,
        Param::RangeStart,
        Param::RangeEnd,
        Param::RangeReps,
    ];

    /// Label shown in prompts and messages.
    pub const fn label(self) -> &'static str {
        match self {
            Param::Index => "index",
            Param::Reps => "reps",
            Param::RangeStart => "range start",
            Param::RangeEnd => "range end",
            Param::RangeReps => "range reps",
        }
    }

    pub const fn default_value(self) -> u64 {
        match self {
            Param::Index => defaults::INDEX,
            Param::Reps => defaults::REPS,
            Param::RangeStart => defaults::RANGE_START,
            Param::RangeEnd => defaults::RANGE_END,
            Param::RangeReps => defaults::RANGE_REPS,
        }
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses interactive input for `param` as a non-negative integer.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// `FibError::InvalidNumericInput` if the trimmed input is not a `u64`.
pub fn parse_numeric(param: Param, input: &str) -> Result<u64, FibError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| FibError::InvalidNumericInput {
            label: param.label().to_string(),
            input: trimmed.to_string(),
        })
}

/// Parses a command-line value for `param`.
///
/// A value that does not parse counts as absent, so resolution falls
/// through to the prompt or the default instead of failing.
pub fn parse_flag(param: Param, raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    match parse_numeric(param, raw) {
        Ok(value) => Some(value),
        Err(err) => {
            info!(%err, "ignoring unparsable flag value");
            None
        }
    }
}

// ============================================================================
// Prompting
// ============================================================================

/// Asks the user for numeric parameters on a line-oriented stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts for `param` and returns the answer, or the default when the
    /// answer is empty or not a number.
    ///
    /// # Errors
    /// Only I/O errors on the underlying streams.
    pub fn ask(&mut self, param: Param) -> io::Result<u64> {
        write!(self.output, "{}? ", param.label())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        match parse_numeric(param, &line) {
            Ok(value) => Ok(value),
            Err(err) => {
                let default = param.default_value();
                info!(%err, default, "substituting default");
                writeln!(
                    self.output,
                    "Not a number, default {} will be used.",
                    default
                )?;
                Ok(default)
            }
        }
    }

    /// Returns the output stream, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Explicitly supplied parameters; `None` means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileArgs {
    pub index: Option<u64>,
    pub reps: Option<u64>,
    pub range_start: Option<u64>,
    pub range_end: Option<u64>,
    pub range_reps: Option<u64>,
}

impl ProfileArgs {
    pub fn get(&self, param: Param) -> Option<u64> {
        match param {
            Param::Index => self.index,
            Param::Reps => self.reps,
            Param::RangeStart => self.range_start,
            Param::RangeEnd => self.range_end,
            Param::RangeReps => self.range_reps,
        }
    }

    /// Resolves every parameter: explicit value first, then a prompt for
    /// the missing ones listed in `needed`, then the default.
    ///
    /// # Errors
    /// I/O errors from the prompter.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        needed: &[Param],
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<ProfileConfig> {
        let mut config = ProfileConfig::default();
        for param in Param::ALL {
            let value = match self.get(param) {
                Some(value) => value,
                None if needed.contains(&param) => prompter.ask(param)?,
                None => param.default_value(),
            };
            config.set(param, value);
        }
        Ok(config)
    }

    /// Resolves every parameter without prompting: explicit value, else
    /// default.
    pub fn resolve_defaults(&self) -> ProfileConfig {
        let mut config = ProfileConfig::default();
        for param in Param::ALL {
            config.set(param, self.get(param).unwrap_or(param.default_value()));
        }
        config
    }
}

/// Fully resolved profiling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    pub index: u64,
    pub reps: u64,
    pub range_start: u64,
    pub range_end: u64,
    pub range_reps: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            index: defaults::INDEX,
            reps: defaults::REPS,
            range_start: defaults::RANGE_START,
            range_end: defaults::RANGE_END,
            range_reps: defaults::RANGE_REPS,
        }
    }
}

impl ProfileConfig {
    pub fn get(&self, param: Param) -> u64 {
        match param {
            Param::Index => self.index,
            Param::Reps => self.reps,
            Param::RangeStart => self.range_start,
            Param::RangeEnd => self.range_end,
            Param::RangeReps => self.range_reps,
        }
    }

    pub fn set(&mut self, param: Param, value: u64) {
        match param {
            Param::Index => self.index = value,
            Param::Reps => self.reps = value,
            Param::RangeStart => self.range_start = value,
            Param::RangeEnd => self.range_end = value,
            Param::RangeReps => self.range_reps = value,
        }
    }

    /// Checks that the profiled indices among `params` stay in the exact
    /// `u64` domain. Parameters not listed are not checked.
    ///
    /// The range end is exclusive, so it may be one past the bound. An
    /// empty range (`range_start >= range_end`) is valid.
    ///
    /// # Errors
    /// `FibError::ParamOutOfRange` naming the first offending parameter.
    pub fn validate(&self, params: &[Param]) -> Result<(), FibError> {
        for &param in params {
            let max = match param {
                Param::Index => limits::MAX_EXACT_INDEX,
                Param::RangeEnd => limits::MAX_EXACT_INDEX + 1,
                Param::Reps | Param::RangeStart | Param::RangeReps => continue,
            };
            let value = self.get(param);
            if value > max {
                return Err(FibError::ParamOutOfRange {
                    label: param.label().to_string(),
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn defaults_are_consistent() {
        assert!(defaults::RANGE_START < defaults::RANGE_END);
        assert!(defaults::INDEX <= limits::MAX_EXACT_INDEX);
        assert!(defaults::RANGE_END <= limits::MAX_EXACT_INDEX + 1);
        assert!(limits::BINET_MAX_EXACT_INDEX < limits::MAX_EXACT_INDEX);
    }

    #[test]
    fn parse_numeric_accepts_padded_digits() {
        assert_eq!(parse_numeric(Param::Index, " 42\n"), Ok(42));
    }

    #[test]
    fn parse_numeric_rejects_garbage_and_negatives() {
        for input in ["abc", "-3", "", "1.5"] {
            assert_eq!(
                parse_numeric(Param::Reps, input),
                Err(FibError::InvalidNumericInput {
                    label: "reps".to_string(),
                    input: input.to_string(),
                })
            );
        }
    }

    #[test]
    fn prompter_returns_parsed_answer() {
        let mut p = prompter("12\n");
        assert_eq!(p.ask(Param::Index).unwrap(), 12);
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "index? ");
    }

    #[test]
    fn prompter_substitutes_default_on_bad_input() {
        let mut p = prompter("twelve\n");
        assert_eq!(p.ask(Param::Reps).unwrap(), defaults::REPS);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Not a number, default 10 will be used."));
    }

    #[test]
    fn prompter_substitutes_default_on_eof() {
        let mut p = prompter("");
        assert_eq!(p.ask(Param::Index).unwrap(), defaults::INDEX);
    }

    #[test]
    fn resolve_prefers_explicit_then_prompt() {
        let args = ProfileArgs {
            index: Some(5),
            ..Default::default()
        };
        let mut p = prompter("3\n");
        let config = args.resolve(&Param::PROFILE, &mut p).unwrap();

        assert_eq!(config.index, 5);
        assert_eq!(config.reps, 3);
        // Only `reps` was asked for.
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "reps? ");
    }

    #[test]
    fn resolve_leaves_unneeded_params_at_default() {
        let args = ProfileArgs::default();
        let mut p = prompter("1\n2\n");
        let config = args.resolve(&Param::PROFILE, &mut p).unwrap();

        assert_eq!(config.range_start, defaults::RANGE_START);
        assert_eq!(config.range_end, defaults::RANGE_END);
        assert_eq!(config.range_reps, defaults::RANGE_REPS);
    }

    #[test]
    fn resolve_explicit_zero_is_kept() {
        let args = ProfileArgs {
            index: Some(0),
            reps: Some(0),
            ..Default::default()
        };
        let mut p = prompter("");
        let config = args.resolve(&Param::PROFILE, &mut p).unwrap();
        assert_eq!((config.index, config.reps), (0, 0));
    }

    #[test]
    fn resolve_defaults_never_prompts() {
        let args = ProfileArgs {
            range_end: Some(40),
            ..Default::default()
        };
        let config = args.resolve_defaults();
        assert_eq!(config.range_end, 40);
        assert_eq!(config.index, defaults::INDEX);
    }

    #[test]
    fn validate_bounds() {
        let mut config = ProfileConfig::default();
        assert_eq!(config.validate(&Param::ALL), Ok(()));

        config.range_end = limits::MAX_EXACT_INDEX + 1;
        assert_eq!(config.validate(&Param::ALL), Ok(()));

        config.index = limits::MAX_EXACT_INDEX + 1;
        assert!(matches!(
            config.validate(&Param::ALL),
            Err(FibError::ParamOutOfRange { max: 92, .. })
        ));

        config.index = 0;
        config.range_end = 200;
        assert!(matches!(
            config.validate(&Param::ALL),
            Err(FibError::ParamOutOfRange { value: 200, .. })
        ));
    }

    #[test]
    fn validate_skips_unlisted_params() {
        let config = ProfileConfig {
            index: 500,
            range_end: 500,
            ..Default::default()
        };
        assert_eq!(config.validate(&[]), Ok(()));
        assert!(config.validate(&Param::RANGE).is_err());
        assert_eq!(
            config.validate(&[Param::Reps, Param::RangeStart]),
            Ok(())
        );
    }

    #[test]
    fn empty_range_is_valid() {
        let config = ProfileConfig {
            range_start: 20,
            range_end: 10,
            ..Default::default()
        };
        assert_eq!(config.validate(&Param::RANGE), Ok(()));
    }

    #[test]
    fn parse_flag_treats_garbage_as_absent() {
        assert_eq!(parse_flag(Param::Index, Some("42")), Some(42));
        assert_eq!(parse_flag(Param::Index, Some("abc")), None);
        assert_eq!(parse_flag(Param::Reps, Some("-3")), None);
        assert_eq!(parse_flag(Param::Reps, None), None);
    }

    #[test]
    fn unparsable_flag_is_prompted_for() {
        let args = ProfileArgs {
            index: parse_flag(Param::Index, Some("abc")),
            reps: parse_flag(Param::Reps, Some("2")),
            ..Default::default()
        };
        let mut p = prompter("5\n");
        let config = args.resolve(&Param::PROFILE, &mut p).unwrap();

        assert_eq!((config.index, config.reps), (5, 2));
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "index? ");
    }
}
