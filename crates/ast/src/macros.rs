macro_rules! spanned {
    ($($node:ty),* $(,)?) => {
        $(
            impl global_common::Spanned for $node {
                #[inline]
                fn span(&self) -> global_common::Span {
                    self.span
                }
            }
        )*
    };
}

macro_rules! spanned_enum {
    ($node:ident { $($variant:ident),* $(,)? }) => {
        impl global_common::Spanned for $node {
            fn span(&self) -> global_common::Span {
                match self {
                    $(
                        $node::$variant(n) => global_common::Spanned::span(n),
                    )*
                }
            }
        }
    };
}

/// An enum whose variants serialize as their source text.
macro_rules! string_enum {
    (
        $(#[$attr:meta])*
        pub enum $name:ident {
            $($(#[$vattr:meta])* $variant:ident => $s:expr,)*
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vattr])* $variant,)*
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $s,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}
