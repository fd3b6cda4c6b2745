//! Rendering of a method call into one command line.

use crate::action::{ActionDescriptor, MethodSpec, ParamSpec};
use crate::args::Arg;
use crate::error::ActionError;

/// A method call with its arguments matched to the declared parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInvocation {
    method: &'static str,
    token: &'static str,
    arguments: Vec<(&'static ParamSpec, Arg)>,
}

impl MethodInvocation {
    /// Pair `args` with the parameters of `method`, in declaration order.
    pub fn bind<R>(method: &MethodSpec<R>, args: &[Arg]) -> Result<Self, ActionError> {
        if args.len() != method.params.len() {
            return Err(ActionError::ArgumentCount {
                method: method.name.to_string(),
                expected: method.params.len(),
                actual: args.len(),
            });
        }

        let params: &'static [ParamSpec] = method.params;
        Ok(Self {
            method: method.name,
            token: method.token(),
            arguments: params.iter().zip(args.iter().cloned()).collect(),
        })
    }

    /// Identifier of the invoked method.
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// `name=value` tokens of the supplied arguments. Absent values emit nothing.
    pub fn parameter_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.arguments.iter().filter_map(|(param, arg)| {
            render_value(param, arg).map(|value| format!("{}={value}", param.token()))
        })
    }
}

/// Build the command line for `invocation`.
///
/// Tokens are the tool prefix, the action name, the method token, and one
/// `name=value` per supplied argument, joined by single spaces.
#[must_use]
pub fn render(descriptor: &ActionDescriptor, invocation: &MethodInvocation) -> String {
    let mut tokens: Vec<String> = [descriptor.tool_prefix(), descriptor.action_name()]
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    tokens.push(invocation.token.to_string());
    tokens.extend(invocation.parameter_tokens());
    tokens.join(" ")
}

fn render_value(param: &ParamSpec, arg: &Arg) -> Option<String> {
    match arg {
        Arg::Absent => None,
        Arg::Bool(value) => Some(param.style.render(*value).to_string()),
        Arg::Enum(value) | Arg::Text(value) => Some(quote_value(value)),
    }
}

/// Wrap values that would not survive word splitting in double quotes.
///
/// The rendered value then differs from the raw `Display` output: empty
/// values and values containing whitespace, quotes or backslashes are quoted,
/// with `"` and `\` escaped. `CommandSpec::parse` undoes exactly this, so the
/// process receives the raw value as one argument.
fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
