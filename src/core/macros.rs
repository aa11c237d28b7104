//! Macros for closed enums that map one-to-one onto single-character symbols.

/// Generate a `Copy` enum whose variants each own one character symbol.
///
/// The generated type gets:
/// - `ALL`, the variants in declaration order
/// - `symbol()` / `from_symbol()` for the character mapping
/// - `Display` and `FromStr` (exactly one symbol character)
/// - `From<T> for char` and `TryFrom<char>`
/// - serde support, serialized as the symbol
///
/// # Example
///
/// ```ignore
/// symbol_enum! {
///     pub enum Light {
///         Red = 'R',
///         Green = 'G',
///     }
/// }
///
/// assert_eq!(Light::from_symbol('G'), Some(Light::Green));
/// ```
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $symbol:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(into = "char", try_from = "char")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &[Self] = &[$(Self::$variant),+];

            /// The single-character symbol for this variant.
            pub const fn symbol(self) -> char {
                match self {
                    $(Self::$variant => $symbol),+
                }
            }

            /// Look up the variant for `symbol`. Matching is case-sensitive.
            pub fn from_symbol(symbol: char) -> Option<Self> {
                match symbol {
                    $($symbol => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }

        impl From<$name> for char {
            fn from(value: $name) -> char {
                value.symbol()
            }
        }

        impl TryFrom<char> for $name {
            type Error = $crate::core::ParseSymbolError;

            fn try_from(symbol: char) -> Result<Self, Self::Error> {
                Self::from_symbol(symbol).ok_or_else(|| $crate::core::ParseSymbolError {
                    kind: stringify!($name),
                    input: symbol.to_string(),
                })
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::ParseSymbolError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Self::from_symbol(symbol),
                    _ => None,
                }
                .ok_or_else(|| $crate::core::ParseSymbolError {
                    kind: stringify!($name),
                    input: s.to_string(),
                })
            }
        }
    };
}
