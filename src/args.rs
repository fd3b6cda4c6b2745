//! Conversion of Rust argument values into command-line values.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// A single argument value, before the parameter's naming and style apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// No value supplied. The parameter emits no token.
    Absent,
    /// Rendered through the parameter's [`BooleanStyle`](crate::BooleanStyle).
    Bool(bool),
    /// An enum variant token, case preserved.
    Enum(String),
    /// Any other value, already converted with `Display`.
    Text(String),
}

impl Arg {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Types that can be passed as action parameters.
///
/// `Option<T>` maps `None` to [`Arg::Absent`]. Enums opt in through
/// [`CommandEnum`].
pub trait ToArg {
    fn to_arg(&self) -> Arg;
}

/// Marker for enums rendered by their `AsRef<str>` token.
///
/// Derive `strum::AsRefStr` and use `#[strum(serialize = "...")]` to override
/// the token of a variant:
///
/// ```rust
/// use rnetsh::{Arg, CommandEnum, ToArg};
///
/// #[derive(strum::AsRefStr)]
/// enum Profile {
///     #[strum(serialize = "domain")]
///     Domain,
///     Private,
/// }
///
/// impl CommandEnum for Profile {}
///
/// assert_eq!(Profile::Domain.to_arg(), Arg::Enum("domain".into()));
/// assert_eq!(Profile::Private.to_arg(), Arg::Enum("Private".into()));
/// ```
pub trait CommandEnum: AsRef<str> {}

impl<E: CommandEnum> ToArg for E {
    fn to_arg(&self) -> Arg {
        Arg::Enum(self.as_ref().to_string())
    }
}

impl<T: ToArg> ToArg for Option<T> {
    fn to_arg(&self) -> Arg {
        self.as_ref().map_or(Arg::Absent, ToArg::to_arg)
    }
}

impl ToArg for bool {
    fn to_arg(&self) -> Arg {
        Arg::Bool(*self)
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Arg {
        Arg::Text(self.clone())
    }
}

impl ToArg for &str {
    fn to_arg(&self) -> Arg {
        Arg::Text((*self).to_string())
    }
}

macro_rules! display_to_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToArg for $ty {
                fn to_arg(&self) -> Arg {
                    Arg::Text(self.to_string())
                }
            }
        )*
    };
}

display_to_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, IpAddr,
    Ipv4Addr, Ipv6Addr, SocketAddr,
);
