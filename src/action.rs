//! Static description of an action and its sub-commands.
//!
//! An interface is a table of [`MethodSpec`] constants, each listing its
//! [`ParamSpec`]s in declaration order. The tables are plain `const` data so
//! they can be written by hand or generated by
//! [`action_interface!`](crate::action_interface).

use std::fmt;

use strum::{AsRefStr, Display, EnumString};

use crate::processor::CustomProcessor;

/// The action a proxy is bound to, e.g. `advfirewall` under `netsh`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    action_name: String,
    tool_prefix: String,
}

impl ActionDescriptor {
    pub fn new(action_name: impl Into<String>, tool_prefix: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            tool_prefix: tool_prefix.into(),
        }
    }

    #[must_use]
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Leading tokens of every command, e.g. `netsh` or `netsh -r host`.
    #[must_use]
    pub fn tool_prefix(&self) -> &str {
        &self.tool_prefix
    }
}

/// How a `bool` parameter is spelled on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum BooleanStyle {
    /// `yes` / `no`
    YesNo,
    /// `enabled` / `disabled`
    EnabledDisabled,
    /// `true` / `false`
    #[default]
    TrueFalse,
}

impl BooleanStyle {
    #[must_use]
    pub const fn render(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::YesNo, true) => "yes",
            (Self::YesNo, false) => "no",
            (Self::EnabledDisabled, true) => "enabled",
            (Self::EnabledDisabled, false) => "disabled",
            (Self::TrueFalse, true) => "true",
            (Self::TrueFalse, false) => "false",
        }
    }
}

/// One declared parameter of a sub-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub rename: Option<&'static str>,
    pub style: BooleanStyle,
}

impl ParamSpec {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            style: BooleanStyle::TrueFalse,
        }
    }

    /// Emit `token` instead of the parameter identifier.
    #[must_use]
    pub const fn rename(self, token: &'static str) -> Self {
        Self {
            rename: Some(token),
            ..self
        }
    }

    #[must_use]
    pub const fn style(self, style: BooleanStyle) -> Self {
        Self { style, ..self }
    }

    /// The name written before `=`.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self.rename {
            Some(token) => token,
            None => self.name,
        }
    }
}

/// One sub-command returning `R`.
///
/// ```rust
/// use rnetsh::{BooleanStyle, MethodSpec, ParamSpec};
///
/// const SET_STATE: MethodSpec<()> = MethodSpec::new(
///     "set_state",
///     &[
///         ParamSpec::new("profile"),
///         ParamSpec::new("state").style(BooleanStyle::EnabledDisabled),
///     ],
/// )
/// .rename("set allprofiles state");
///
/// assert_eq!(SET_STATE.token(), "set allprofiles state");
/// ```
pub struct MethodSpec<R> {
    pub name: &'static str,
    pub rename: Option<&'static str>,
    pub params: &'static [ParamSpec],
    pub processor: Option<CustomProcessor<R>>,
}

impl<R> MethodSpec<R> {
    #[must_use]
    pub const fn new(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            rename: None,
            params,
            processor: None,
        }
    }

    /// Emit `token` instead of the method identifier.
    #[must_use]
    pub const fn rename(self, token: &'static str) -> Self {
        Self {
            rename: Some(token),
            ..self
        }
    }

    /// Convert the raw output with `processor` instead of the default parsing.
    #[must_use]
    pub const fn processor(self, processor: CustomProcessor<R>) -> Self {
        Self {
            processor: Some(processor),
            ..self
        }
    }

    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self.rename {
            Some(token) => token,
            None => self.name,
        }
    }
}

// Derives would add `R: Clone` and `R: Debug` bounds.
impl<R> Clone for MethodSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for MethodSpec<R> {}

impl<R> fmt::Debug for MethodSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSpec")
            .field("name", &self.name)
            .field("rename", &self.rename)
            .field("params", &self.params)
            .field("processor", &self.processor.map(|p| p.name))
            .finish()
    }
}
