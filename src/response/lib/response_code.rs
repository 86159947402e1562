/// Defines an open set of string codes sent by the platform (money types,
/// expiration policies, ...). Codes this SDK doesn't know about land in
/// `Other` instead of failing the decode.
#[macro_export]
macro_rules! response_code {
    (
        $(#[$code_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal,
            )*
        }
    ) => {
        $(#[$code_meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A code not (yet) known to this SDK, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The code as it appears on the wire.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )*
                    $name::Other(code) => code.as_str(),
                }
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(code: &str) -> Self {
                match code {
                    $( $wire => $name::$variant, )*
                    _ => $name::Other(code.to_string()),
                }
            }
        }

        impl std::convert::From<String> for $name {
            fn from(code: String) -> Self {
                Self::from(code.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

