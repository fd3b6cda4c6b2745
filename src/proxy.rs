//! The action proxy: render, execute, process.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Instant;

use rnetsh_config::Config;
use rnetsh_runner::{ExecutionHarness, ProcessHarness};
use rnetsh_utils::logging::{
    invocation_span, log_binding_resolved, log_command_rendered, log_invocation_complete,
    log_invocation_error,
};

use crate::action::{ActionDescriptor, MethodSpec};
use crate::args::Arg;
use crate::error::ActionError;
use crate::processor::{
    CustomProcessor, ProcessorBinding, ProcessorDeclaration, ResolutionError, resolve,
};
use crate::render::{MethodInvocation, render};
use crate::response::{ActionReturn, ParseError};

/// Identity of a method for the binding cache. Resolution depends only on
/// the return type and the declared conversions, so both are part of it.
type MethodKey = (&'static str, Option<ProcessorDeclaration>, TypeId);

/// Dispatches method calls of one action to an [`ExecutionHarness`].
///
/// Every call renders a command line, executes it once, and converts the raw
/// output through the method's processor binding. Bindings are resolved on
/// the first call of each method and cached, so a misdeclared processor
/// fails every call of that method with the same error while other methods
/// keep working.
///
/// ```rust
/// use rnetsh::{ActionProxy, Arg, ExecutionHarness, HarnessError, MethodSpec, ParamSpec};
///
/// struct Echo;
///
/// impl ExecutionHarness for Echo {
///     fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
///         Ok(command_line.to_string())
///     }
/// }
///
/// const SHOW: MethodSpec<String> = MethodSpec::new("show", &[ParamSpec::new("name")]);
///
/// let proxy = ActionProxy::create("advfirewall firewall", "netsh", Echo);
/// let output = proxy.invoke(&SHOW, &[Arg::Text("Remote Desktop".into())]).unwrap();
/// assert_eq!(output, "netsh advfirewall firewall show name=\"Remote Desktop\"");
/// ```
#[derive(Debug)]
pub struct ActionProxy<H> {
    descriptor: ActionDescriptor,
    harness: H,
    bindings: RwLock<HashMap<MethodKey, Result<ProcessorBinding, ResolutionError>>>,
}

impl<H: ExecutionHarness> ActionProxy<H> {
    pub fn create(action_name: impl Into<String>, tool_prefix: impl Into<String>, harness: H) -> Self {
        Self {
            descriptor: ActionDescriptor::new(action_name, tool_prefix),
            harness,
            bindings: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn harness(&self) -> &H {
        &self.harness
    }

    /// Call `method` with `args`, one value per declared parameter.
    ///
    /// # Errors
    ///
    /// Processor configuration errors are reported before anything is
    /// executed. Harness failures are returned unchanged as
    /// [`ActionError::Execution`].
    pub fn invoke<R: ActionReturn>(
        &self,
        method: &MethodSpec<R>,
        args: &[Arg],
    ) -> Result<R, ActionError> {
        let span = invocation_span(self.descriptor.action_name(), method.name);
        let _guard = span.enter();

        let result = self.dispatch(method, args);
        if let Err(e) = &result {
            log_invocation_error(method.name, e);
        }
        result
    }

    fn dispatch<R: ActionReturn>(
        &self,
        method: &MethodSpec<R>,
        args: &[Arg],
    ) -> Result<R, ActionError> {
        let invocation = MethodInvocation::bind(method, args)?;
        let command = render(&self.descriptor, &invocation);
        log_command_rendered(&command);

        let binding = self.binding(method)?;

        let started = Instant::now();
        let raw = self.harness.execute(&command)?;
        log_invocation_complete(method.name, started.elapsed().as_millis(), raw.len());

        binding
            .apply(method.processor.as_ref(), &raw)
            .map_err(|e| parse_error(method.name, &e))
    }

    /// The command line `invoke` would execute, without executing it.
    pub fn preview<R>(&self, method: &MethodSpec<R>, args: &[Arg]) -> Result<String, ActionError> {
        let invocation = MethodInvocation::bind(method, args)?;
        Ok(render(&self.descriptor, &invocation))
    }

    /// The processor binding of `method`, resolving and caching it if needed.
    pub fn binding<R: ActionReturn>(
        &self,
        method: &MethodSpec<R>,
    ) -> Result<ProcessorBinding, ActionError> {
        let declaration = method.processor.as_ref().map(CustomProcessor::declaration);
        let key: MethodKey = (method.name, declaration, TypeId::of::<R>());

        let cached = self
            .bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();

        let (resolved, was_cached) = match cached {
            Some(resolved) => (resolved, true),
            None => {
                let resolved = resolve(R::SHAPE, declaration);
                self.bindings
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(key, resolved.clone());
                (resolved, false)
            }
        };

        let binding = resolved.map_err(|e| e.into_action_error(method.name))?;
        log_binding_resolved(method.name, binding.as_ref(), was_cached);
        Ok(binding)
    }
}

impl ActionProxy<ProcessHarness> {
    /// Proxy over a process harness configured from `config`.
    #[must_use]
    pub fn from_config(action_name: impl Into<String>, config: &Config) -> Self {
        let harness = ProcessHarness::new()
            .timeout(config.timeout())
            .require_success(config.harness.require_success);
        Self::create(action_name, config.harness.tool_prefix.clone(), harness)
    }
}

fn parse_error(method: &str, error: &ParseError) -> ActionError {
    ActionError::Parse {
        method: method.to_string(),
        reason: error.reason().to_string(),
        fragment: error.fragment().to_string(),
    }
}
