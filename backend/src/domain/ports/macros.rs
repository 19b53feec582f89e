//! `port_error!` builds the error enums returned by the user store, the claim
//! ledger and the credential hasher.
//!
//! Every variant carries named fields. The macro emits the `thiserror` enum,
//! one snake-case constructor per variant taking `impl Into<_>` arguments,
//! and `kind()`, the snake-case variant label used as a structured log field.

macro_rules! port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Build `" $name "::" $variant "`."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                )+

                /// Snake-case label of the variant, for log fields.
                pub const fn kind(&self) -> &'static str {
                    match self {
                        $(Self::$variant { .. } => stringify!([<$variant:snake>]),)+
                    }
                }
            }
        }
    };
}

pub(crate) use port_error;

#[cfg(test)]
mod tests {
    use crate::domain::ports::{ClaimLedgerError, CredentialHasherError, UserPersistenceError};
    use rstest::rstest;

    #[rstest]
    fn constructors_accept_borrowed_text() {
        let err = UserPersistenceError::duplicate_email("ada@example.com");
        assert_eq!(
            err,
            UserPersistenceError::DuplicateEmail {
                email: "ada@example.com".to_owned()
            }
        );
        assert_eq!(err.to_string(), "email already registered: ada@example.com");
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused").kind(), "connection")]
    #[case(UserPersistenceError::duplicate_display_name("Ada").kind(), "duplicate_display_name")]
    #[case(ClaimLedgerError::unknown_user("42").kind(), "unknown_user")]
    #[case(CredentialHasherError::malformed_hash("bad").kind(), "malformed_hash")]
    fn kind_labels_are_snake_case(#[case] kind: &str, #[case] expected: &str) {
        assert_eq!(kind, expected);
    }

    #[rstest]
    fn messages_interpolate_fields() {
        let err = ClaimLedgerError::query("deadlock detected");
        assert_eq!(err.to_string(), "claim ledger query failed: deadlock detected");
    }
}
