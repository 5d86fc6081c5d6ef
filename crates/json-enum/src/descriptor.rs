//! Enumerated type descriptors.

/// A closed, ordered set of named constants.
///
/// Implementations are usually generated by [`json_enum!`](crate::json_enum),
/// which keeps `constants`, `identifier` and `ordinal` consistent with the
/// enum declaration.
pub trait JsonEnum: Clone + 'static {
    /// Every constant in declaration order.
    fn constants() -> &'static [Self];

    /// Declaration name of the constant.
    fn identifier(&self) -> &'static str;

    /// Serialized name configured for the constant, if it differs from the
    /// identifier.
    fn name_override(&self) -> Option<&'static str> {
        None
    }

    /// Position of the constant in [`JsonEnum::constants`].
    fn ordinal(&self) -> usize;

    /// The name written to and matched against JSON.
    fn serialized_name(&self) -> &'static str {
        self.name_override().unwrap_or_else(|| self.identifier())
    }
}

/// Declares a fieldless enum together with its [`JsonEnum`](crate::JsonEnum)
/// table.
///
/// A variant may carry `#[json(name = "...")]` to serialize under a name
/// other than its identifier. Every other variant attribute, doc comments
/// included, is kept on the variant. The generated enum derives `Debug`,
/// `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// ```
/// use json_enum::{json_enum, JsonEnum};
///
/// json_enum! {
///     /// Hand shapes.
///     pub enum Roshambo {
///         /// Beats scissors.
///         Rock,
///         Paper,
///         /// Beats paper.
///         #[json(name = "scr")]
///         Scissors,
///     }
/// }
///
/// assert_eq!(Roshambo::constants().len(), 3);
/// assert_eq!(Roshambo::Paper.serialized_name(), "Paper");
/// assert_eq!(Roshambo::Scissors.serialized_name(), "scr");
/// assert_eq!(Roshambo::Scissors.ordinal(), 2);
/// ```
#[macro_export]
macro_rules! json_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::__json_enum! {
            meta [$(#[$meta])*]
            vis [$vis]
            name [$name]
            done []
            attrs []
            json [None]
            rest [$($body)*]
        }
    };
}

/// Splits `#[json(name = ...)]` from the other variant attributes, one token
/// tree at a time, then emits the enum and its table.
#[doc(hidden)]
#[macro_export]
macro_rules! __json_enum {
    (
        meta [$($meta:tt)*] vis [$vis:vis] name [$name:ident]
        done [$($done:tt)*]
        attrs [$($attrs:tt)*]
        json [$($json:tt)*]
        rest [#[json(name = $json_name:literal)] $($rest:tt)*]
    ) => {
        $crate::__json_enum! {
            meta [$($meta)*] vis [$vis] name [$name]
            done [$($done)*]
            attrs [$($attrs)*]
            json [Some($json_name)]
            rest [$($rest)*]
        }
    };
    (
        meta [$($meta:tt)*] vis [$vis:vis] name [$name:ident]
        done [$($done:tt)*]
        attrs [$($attrs:tt)*]
        json [$($json:tt)*]
        rest [#[$($attr:tt)*] $($rest:tt)*]
    ) => {
        $crate::__json_enum! {
            meta [$($meta)*] vis [$vis] name [$name]
            done [$($done)*]
            attrs [$($attrs)* #[$($attr)*]]
            json [$($json)*]
            rest [$($rest)*]
        }
    };
    (
        meta [$($meta:tt)*] vis [$vis:vis] name [$name:ident]
        done [$($done:tt)*]
        attrs [$($attrs:tt)*]
        json [$($json:tt)*]
        rest [$variant:ident $(, $($rest:tt)*)?]
    ) => {
        $crate::__json_enum! {
            meta [$($meta)*] vis [$vis] name [$name]
            done [$($done)* { [$($attrs)*] $variant [$($json)*] }]
            attrs []
            json [None]
            rest [$($($rest)*)?]
        }
    };
    (
        meta [$($meta:tt)*] vis [$vis:vis] name [$name:ident]
        done [$({ [$($attrs:tt)*] $variant:ident [$($json:tt)*] })*]
        attrs []
        json [None]
        rest []
    ) => {
        $($meta)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($($attrs)* $variant,)*
        }

        impl $crate::JsonEnum for $name {
            fn constants() -> &'static [Self] {
                &[$($name::$variant),*]
            }

            fn identifier(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                }
            }

            fn name_override(&self) -> Option<&'static str> {
                match self {
                    $($name::$variant => $($json)*,)*
                }
            }

            fn ordinal(&self) -> usize {
                *self as usize
            }
        }
    };
}
