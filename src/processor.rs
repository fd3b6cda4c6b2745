//! Selection of the response processor for a method.
//!
//! [`resolve`] is a pure function of the declared return shape and the
//! method's custom processor. The proxy evaluates it once per method and
//! caches the outcome, failures included.

use std::fmt;

use strum::{AsRefStr, Display};

use crate::error::ActionError;
use crate::response::{ActionReturn, ParseError, ReturnShape};

/// A conversion from raw output to `R`.
pub type Conversion<R> = fn(&str) -> Result<R, ParseError>;

/// A user-supplied conversion of raw output, declared per method.
///
/// Declare exactly one conversion. `single` serves methods returning one
/// value; `multi` serves methods returning `Vec<T>`, so `R` is then the
/// vector type.
///
/// ```rust
/// use rnetsh::{CustomProcessor, ParseError};
///
/// fn first_line(raw: &str) -> Result<String, ParseError> {
///     raw.lines()
///         .next()
///         .map(str::to_string)
///         .ok_or_else(|| ParseError::new("empty output", raw))
/// }
///
/// const FIRST_LINE: CustomProcessor<String> = CustomProcessor::new("first_line").single(first_line);
/// ```
pub struct CustomProcessor<R> {
    pub name: &'static str,
    pub single: Option<Conversion<R>>,
    pub multi: Option<Conversion<R>>,
}

impl<R> CustomProcessor<R> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            single: None,
            multi: None,
        }
    }

    #[must_use]
    pub const fn single(self, conversion: Conversion<R>) -> Self {
        Self {
            single: Some(conversion),
            ..self
        }
    }

    #[must_use]
    pub const fn multi(self, conversion: Conversion<R>) -> Self {
        Self {
            multi: Some(conversion),
            ..self
        }
    }

    /// What this processor declares, without the conversions themselves.
    #[must_use]
    pub const fn declaration(&self) -> ProcessorDeclaration {
        ProcessorDeclaration {
            name: self.name,
            single: self.single.is_some(),
            multi: self.multi.is_some(),
        }
    }
}

impl<R> Clone for CustomProcessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for CustomProcessor<R> {}

impl<R> fmt::Debug for CustomProcessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomProcessor")
            .field("name", &self.name)
            .field("single", &self.single.is_some())
            .field("multi", &self.multi.is_some())
            .finish()
    }
}

/// Which conversions a custom processor provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessorDeclaration {
    pub name: &'static str,
    pub single: bool,
    pub multi: bool,
}

/// The strategy that turns raw output into a method's return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum ProcessorBinding {
    /// Output is discarded.
    None,
    SingleCustom,
    MultiCustom,
    SingleGeneric,
    MultiGeneric,
    SingleDefault,
    MultiDefault,
}

impl ProcessorBinding {
    /// Convert `raw` according to this binding.
    pub fn apply<R: ActionReturn>(
        self,
        processor: Option<&CustomProcessor<R>>,
        raw: &str,
    ) -> Result<R, ParseError> {
        let custom = |conversion: Option<Conversion<R>>| match conversion {
            Some(convert) => convert(raw),
            None => Err(ParseError::new(
                format!("{self} binding without a matching conversion"),
                raw,
            )),
        };

        match self {
            Self::None => {
                R::unit().ok_or_else(|| ParseError::new("method declares a result", raw))
            }
            Self::SingleCustom => custom(processor.and_then(|p| p.single)),
            Self::MultiCustom => custom(processor.and_then(|p| p.multi)),
            Self::SingleGeneric | Self::SingleDefault | Self::MultiGeneric | Self::MultiDefault => {
                R::from_default(raw)
            }
        }
    }
}

/// A method whose processor cannot be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The custom processor declares both conversions.
    Ambiguous { processor: &'static str },
    /// No processor fits the return shape.
    Unsatisfiable { reason: String },
}

impl ResolutionError {
    #[must_use]
    pub fn into_action_error(self, method: &str) -> ActionError {
        match self {
            Self::Ambiguous { processor } => ActionError::AmbiguousProcessor {
                method: method.to_string(),
                processor: processor.to_string(),
            },
            Self::Unsatisfiable { reason } => ActionError::UnsatisfiableProcessor {
                method: method.to_string(),
                reason,
            },
        }
    }
}

/// Select the processor for a method returning `shape`.
///
/// A custom processor wins over default processing for its own shape. A
/// custom processor whose only conversion has the other shape is an error,
/// never a silent fallback.
pub fn resolve(
    shape: ReturnShape,
    custom: Option<ProcessorDeclaration>,
) -> Result<ProcessorBinding, ResolutionError> {
    if let Some(decl) = custom {
        if decl.single && decl.multi {
            return Err(ResolutionError::Ambiguous {
                processor: decl.name,
            });
        }

        return match shape {
            ReturnShape::Unit => Ok(ProcessorBinding::None),
            ReturnShape::Single { .. } if decl.single => Ok(ProcessorBinding::SingleCustom),
            ReturnShape::Sequence { .. } if decl.multi => Ok(ProcessorBinding::MultiCustom),
            ReturnShape::Single { .. } if decl.multi => Err(ResolutionError::Unsatisfiable {
                reason: format!(
                    "'{}' only declares a multi conversion but the method returns a single value",
                    decl.name
                ),
            }),
            ReturnShape::Sequence { .. } if decl.single => Err(ResolutionError::Unsatisfiable {
                reason: format!(
                    "'{}' only declares a single conversion but the method returns a sequence",
                    decl.name
                ),
            }),
            ReturnShape::Single { .. } | ReturnShape::Sequence { .. } => {
                Err(ResolutionError::Unsatisfiable {
                    reason: format!(
                        "'{}' declares neither a single nor a multi conversion",
                        decl.name
                    ),
                })
            }
        };
    }

    Ok(match shape {
        ReturnShape::Sequence { generic: false } => ProcessorBinding::MultiDefault,
        ReturnShape::Sequence { generic: true } => ProcessorBinding::MultiGeneric,
        ReturnShape::Single { generic: false } => ProcessorBinding::SingleDefault,
        ReturnShape::Single { generic: true } => ProcessorBinding::SingleGeneric,
        ReturnShape::Unit => ProcessorBinding::None,
    })
}
