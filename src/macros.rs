/// Declare a typed interface over an [`ActionProxy`](crate::ActionProxy).
///
/// Each `fn` becomes a method that renders its arguments, executes the
/// command, and converts the output into the declared return type (`()` when
/// omitted). Method identifiers and parameter identifiers are used verbatim as
/// command tokens unless overridden.
///
/// Method attributes: `#[command("token")]` replaces the method token,
/// `#[processor(CONST)]` names a [`CustomProcessor`](crate::CustomProcessor)
/// constant. Parameter attributes: `#[param("token")]` replaces the parameter
/// name, `#[style(YesNo)]` selects a [`BooleanStyle`](crate::BooleanStyle).
///
/// ```rust
/// use rnetsh::{ExecutionHarness, HarnessError, action_interface};
///
/// struct Echo;
///
/// impl ExecutionHarness for Echo {
///     fn execute(&self, command_line: &str) -> Result<String, HarnessError> {
///         Ok(command_line.to_string())
///     }
/// }
///
/// action_interface! {
///     /// `netsh advfirewall`
///     pub struct AdvFirewall {
///         /// Reset the policy to its defaults.
///         fn reset();
///
///         #[command("show allprofiles state")]
///         fn show_state() -> String;
///
///         #[command("set allprofiles state")]
///         fn set_state(#[style(EnabledDisabled)] state: bool);
///     }
/// }
///
/// let firewall = AdvFirewall::create("advfirewall", "netsh", Echo);
/// firewall.set_state(false)?;
/// assert_eq!(firewall.show_state()?, "netsh advfirewall show allprofiles state");
/// # Ok::<(), rnetsh::ActionError>(())
/// ```
#[macro_export]
macro_rules! action_interface {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[command($command:literal)])?
                $(#[processor($processor:path)])?
                fn $method:ident(
                    $(
                        $(#[param($param:literal)])?
                        $(#[style($style:ident)])?
                        $arg:ident : $ty:ty
                    ),* $(,)?
                ) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<H> {
            proxy: $crate::ActionProxy<H>,
        }

        impl<H: $crate::ExecutionHarness> $name<H> {
            /// Bind the interface to `action_name` under `tool_prefix`.
            pub fn create(
                action_name: impl ::std::convert::Into<::std::string::String>,
                tool_prefix: impl ::std::convert::Into<::std::string::String>,
                harness: H,
            ) -> Self {
                Self::from_proxy($crate::ActionProxy::create(action_name, tool_prefix, harness))
            }

            pub fn from_proxy(proxy: $crate::ActionProxy<H>) -> Self {
                Self { proxy }
            }

            pub fn proxy(&self) -> &$crate::ActionProxy<H> {
                &self.proxy
            }

            $(
                $(#[doc = $doc])*
                #[allow(non_snake_case)]
                pub fn $method(
                    &self,
                    $($arg: $ty),*
                ) -> ::std::result::Result<$crate::__action_return!($($ret)?), $crate::ActionError> {
                    const PARAMS: &[$crate::ParamSpec] = &[
                        $(
                            $crate::ParamSpec::new(::std::stringify!($arg))
                                $(.rename($param))?
                                $(.style($crate::BooleanStyle::$style))?
                        ),*
                    ];
                    const METHOD: $crate::MethodSpec<$crate::__action_return!($($ret)?)> =
                        $crate::MethodSpec::new(::std::stringify!($method), PARAMS)
                            $(.rename($command))?
                            $(.processor($processor))?;

                    self.proxy.invoke(&METHOD, &[$($crate::ToArg::to_arg(&$arg)),*])
                }
            )*
        }

        impl $name<$crate::runner::ProcessHarness> {
            /// Bind the interface to a process harness configured from `config`.
            pub fn from_config(
                action_name: impl ::std::convert::Into<::std::string::String>,
                config: &$crate::Config,
            ) -> Self {
                Self::from_proxy($crate::ActionProxy::from_config(action_name, config))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __action_return {
    () => {
        ()
    };
    ($ret:ty) => {
        $ret
    };
}
