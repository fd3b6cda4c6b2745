//! Parsing of raw tool output into typed responses.
//!
//! netsh prints one logical record per block, with blocks separated by blank
//! lines and fields written as `Key : Value`:
//!
//! ```text
//! Rule Name:                            Remote Desktop
//! ----------------------------------------------------------------------
//! Enabled:                              Yes
//! Direction:                            In
//!
//! Rule Name:                            File Sharing
//! ----------------------------------------------------------------------
//! Enabled:                              No
//! Direction:                            Out
//! ```
//!
//! [`split_records`] yields one [`Record`] per block. Rule lines made of `-`
//! or `=` are dropped.

use thiserror::Error;

/// Longest output excerpt kept in a [`ParseError`].
const MAX_FRAGMENT_CHARS: usize = 120;

/// Raw output could not be converted into the declared response type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ParseError {
    reason: String,
    fragment: String,
}

impl ParseError {
    pub fn new(reason: impl Into<String>, fragment: &str) -> Self {
        Self {
            reason: reason.into(),
            fragment: fragment.chars().take(MAX_FRAGMENT_CHARS).collect(),
        }
    }

    /// A required field is not present in `record`.
    #[must_use]
    pub fn missing_field(key: &str, record: &Record) -> Self {
        Self::new(format!("missing field '{key}'"), &record.text())
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The part of the output that failed to parse.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// One block of tool output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    lines: Vec<String>,
    fields: Vec<(String, String)>,
}

impl Record {
    /// Build a record from a block of text. Blank and rule lines are dropped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut record = Self::default();
        for line in text.lines() {
            record.push_line(line);
        }
        record
    }

    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_rule(trimmed) {
            return;
        }

        if let Some((key, value)) = trimmed.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                self.fields.push((key.to_string(), value.trim().to_string()));
            }
        }
        self.lines.push(trimmed.to_string());
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `Key : Value` pairs in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value whose key matches, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str, ParseError> {
        self.get(key)
            .ok_or_else(|| ParseError::missing_field(key, self))
    }

    /// Lines of the record joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn is_rule(line: &str) -> bool {
    line.chars()
        .all(|c| c == '-' || c == '=' || c.is_whitespace())
}

/// Split raw output into records at blank lines.
///
/// Blocks that contain nothing but rule lines produce no record.
#[must_use]
pub fn split_records(raw: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = Record::default();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push_line(line);
    }
    if !current.is_empty() {
        records.push(current);
    }

    records
}

/// A type built from one record of tool output.
pub trait Response: Sized {
    /// Set for wrappers that build an inner response type from the same
    /// record, such as [`Annotated<T>`].
    const GENERIC: bool = false;

    fn from_record(record: &Record) -> Result<Self, ParseError>;
}

impl Response for Record {
    fn from_record(record: &Record) -> Result<Self, ParseError> {
        Ok(record.clone())
    }
}

impl Response for String {
    fn from_record(record: &Record) -> Result<Self, ParseError> {
        Ok(record.text())
    }
}

/// A response of type `T` together with every field of its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<T> {
    pub value: T,
    pub fields: Vec<(String, String)>,
}

impl<T: Response> Response for Annotated<T> {
    const GENERIC: bool = true;

    fn from_record(record: &Record) -> Result<Self, ParseError> {
        Ok(Self {
            value: T::from_record(record)?,
            fields: record.fields.clone(),
        })
    }
}

/// How a declared return type consumes raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnShape {
    /// No result. Output is discarded.
    Unit,
    /// Exactly one instance built from the whole output.
    Single { generic: bool },
    /// Zero or more instances, one per record.
    Sequence { generic: bool },
}

/// Return types an action method may declare.
///
/// Implemented for `()`, for every [`Response`], and for `Vec<T>` of a
/// [`Response`]. Only `Vec<T>` is treated as a sequence.
pub trait ActionReturn: Sized + 'static {
    const SHAPE: ReturnShape;

    /// Default processing for [`Self::SHAPE`].
    fn from_default(raw: &str) -> Result<Self, ParseError>;

    /// The value of a method without a result.
    fn unit() -> Option<Self> {
        None
    }
}

impl ActionReturn for () {
    const SHAPE: ReturnShape = ReturnShape::Unit;

    fn from_default(_raw: &str) -> Result<Self, ParseError> {
        Ok(())
    }

    fn unit() -> Option<Self> {
        Some(())
    }
}

impl<T: Response + 'static> ActionReturn for T {
    const SHAPE: ReturnShape = ReturnShape::Single { generic: T::GENERIC };

    fn from_default(raw: &str) -> Result<Self, ParseError> {
        T::from_record(&Record::parse(raw))
    }
}

impl<T: Response + 'static> ActionReturn for Vec<T> {
    const SHAPE: ReturnShape = ReturnShape::Sequence { generic: T::GENERIC };

    fn from_default(raw: &str) -> Result<Self, ParseError> {
        split_records(raw).iter().map(T::from_record).collect()
    }
}
