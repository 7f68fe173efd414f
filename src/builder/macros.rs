//! Macros for declaring state and event enumerations.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use gated_fsm::state_enum;
/// use gated_fsm::core::State;
///
/// state_enum! {
///     pub enum ReviewState {
///         Incomplete,
///         Pending,
///         Complete,
///         Archived,
///     }
///     final: [Archived]
/// }
///
/// assert_eq!(ReviewState::Pending.name(), "Pending");
/// assert!(ReviewState::Archived.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use gated_fsm::event_enum;
/// use gated_fsm::core::Event;
///
/// event_enum! {
///     pub enum ReviewEvent {
///         Submit,
///         Approve,
///         Reject,
///         Archive,
///     }
/// }
///
/// assert_eq!(ReviewEvent::Reject.name(), "Reject");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
