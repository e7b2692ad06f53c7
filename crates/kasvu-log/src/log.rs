use std::{
    io::Write,
    sync::{
        Mutex, OnceLock, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::{
    fmt::{LogFmt, LogFmtBuilder, SegmentSpec},
    Result,
};

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Parsed form of a `RUST_LOG` style filter string.
#[derive(Clone, Debug)]
pub struct Filters {
    base_level: Level,
    target_levels: FxHashMap<CompactString, Level>,
}

impl Filters {

    /// Unparsable directives are skipped. When a target is named more than once the
    /// most restrictive level wins.
    pub fn parse(filters: &str) -> Self {
        let mut base_level = Level::Error;
        let mut target_levels = FxHashMap::default();
        for arg in filters.split(',') {
            let (target, level) = match arg.split_once('=') {
                Some((target, level)) => (Some(target.trim()), level.trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match target {
                Some(target) => {
                    let entry = target_levels
                        .entry(CompactString::new(target))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                None => base_level = level,
            }
        }
        Self {
            base_level,
            target_levels,
        }
    }

    /// Level of the nearest `::` separated ancestor of `target` with an override,
    /// or the base level.
    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.target_level(target)
    }
}

struct Logger {
    stderr: StandardStream,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    filters: Filters,
}

impl Logger {

    fn new(filters: Filters) -> Self {
        Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            error_fmt: LogFmt::for_level(Level::Error),
            warn_fmt: LogFmt::for_level(Level::Warn),
            info_fmt: LogFmt::for_level(Level::Info),
            debug_fmt: LogFmt::for_level(Level::Debug),
            trace_fmt: LogFmt::for_level(Level::Trace),
            filters,
        }
    }

    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filters.enabled(target, level) {
            return Ok(false)
        }
        let fmt = match level {
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        write_record(&mut self.stderr, fmt, target, msg)?;
        Ok(true)
    }
}

/// Writes one record and its newline. Colors set for a segment are reset even when
/// writing the segment fails.
fn write_record<W: WriteColor>(
    out: &mut W,
    fmt: &LogFmt,
    target: &str,
    msg: core::fmt::Arguments,
) -> Result<()>
{
    for segment in fmt {
        let (spec, text) = match segment {
            SegmentSpec::Message(spec) => (spec, None),
            SegmentSpec::Target(spec) => (spec, Some(target)),
            SegmentSpec::Text(text, spec) => (spec, Some(text.as_str())),
        };
        if let Some(color_spec) = &spec.color_spec {
            out.set_color(color_spec)?;
        }
        let written = match text {
            Some(text) => out.write_all(text.as_bytes()),
            None => write!(out, "{}", msg),
        };
        if spec.color_spec.is_some() {
            out.reset()?;
        }
        written?;
    }
    out.write_all(b"\n")?;
    Ok(())
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

static EMITTED: [AtomicUsize; 5] = [const { AtomicUsize::new(0) }; 5];

/// Number of records of `level` written since start-up.
#[inline(always)]
pub fn emitted(level: Level) -> usize {
    EMITTED[level as usize].load(Ordering::Relaxed)
}

/// Initializes the logger from the `RUST_LOG` environment variable.
///
/// Later calls have no effect.
pub fn init() {
    let filters = std::env::var("RUST_LOG").unwrap_or_default();
    init_with_filters(&filters);
}

/// Initializes the logger from an explicit filter string.
///
/// Later calls have no effect.
pub fn init_with_filters(filters: &str) {
    if LOGGER.get().is_some() { return }
    let _ = LOGGER.set(Mutex::new(Logger::new(Filters::parse(filters))));
}

#[inline(always)]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Replaces the output format of `level`.
///
/// Returns false if the logger is not initialized.
pub fn set_fmt(level: Level, f: impl FnOnce(&mut LogFmtBuilder)) -> bool {
    let Some(logger) = LOGGER.get() else {
        return false
    };
    let mut logger = logger.lock().unwrap_or_else(PoisonError::into_inner);
    let mut builder = LogFmtBuilder::new(logger.fmt_mut(level));
    f(&mut builder);
    true
}

/// Writes a record, returning whether it passed the filters.
#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    let Some(logger) = LOGGER.get() else {
        return Ok(false)
    };
    let written = logger
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .log(target, level, args)?;
    if written {
        EMITTED[level as usize].fetch_add(1, Ordering::Relaxed);
    }
    Ok(written)
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($($arg)+))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($($arg)+))
            .unwrap_or(false)
    };
}
