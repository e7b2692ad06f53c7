//! Output formats for log records.

use compact_str::CompactString;

use termcolor::{ColorSpec, Color};

use crate::Level;

/// An ordered list of segments written for each record of one level.
#[derive(Default, Clone)]
pub struct LogFmt {
    segments: Vec<SegmentSpec>,
}

impl LogFmt {

    /// `[LEVEL] target: message`, with the level tag colored.
    pub fn for_level(level: Level) -> Self {
        let (tag, color) = match level {
            Level::Error => ("[ERROR] ", Color::Red),
            Level::Warn => ("[WARN] ", Color::Yellow),
            Level::Info => ("[INFO] ", Color::Green),
            Level::Debug => ("[DEBUG] ", Color::Blue),
            Level::Trace => ("[TRACE] ", Color::Cyan),
        };
        let mut fmt = Self::default();
        LogFmtBuilder::new(&mut fmt)
            .text(tag, |spec| spec.with_color_spec(|c| { c.set_fg(Some(color)).set_bold(true); }))
            .target(|spec| spec.with_color_spec(|c| { c.set_dimmed(true); }))
            .text(": ", |spec| spec)
            .message(|spec| spec);
        fmt
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = core::slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default, Clone)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

#[derive(Clone)]
pub enum SegmentSpec {
    /// The formatted record.
    Message(LogSpec),
    /// The record's target, usually a module path.
    Target(LogSpec),
    Text(CompactString, LogSpec),
}

/// Rebuilds a [`LogFmt`] from scratch.
pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn target(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Target(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn builder_replaces_previous_segments() {
        let mut fmt = LogFmt::for_level(Level::Info);
        assert_eq!(fmt.len(), 4);
        LogFmtBuilder::new(&mut fmt)
            .message(|spec| spec);
        assert_eq!(fmt.len(), 1);
        assert!(matches!(fmt.into_iter().next(), Some(SegmentSpec::Message(_))));
    }

    #[test]
    fn level_formats_start_with_colored_tag() {
        let fmt = LogFmt::for_level(Level::Error);
        match fmt.into_iter().next() {
            Some(SegmentSpec::Text(text, spec)) => {
                assert_eq!(text.as_str(), "[ERROR] ");
                let color = spec.color_spec.as_ref().and_then(|c| c.fg().copied());
                assert_eq!(color, Some(Color::Red));
            },
            _ => panic!("expected a text segment"),
        }
    }
}
