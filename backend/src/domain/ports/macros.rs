//! Helper macro for declaring port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor that
//! accepts `impl Into<T>` for its fields, so adapters can write
//! `ItemRepositoryError::query(err.to_string())`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor and message coverage for generated port errors.
    define_port_error! {
        pub enum StorePortError {
            Unreachable => "store unreachable",
            Rejected { message: String } => "rejected: {message}",
            Conflict { id: String, attempts: u32 } => "conflict on {id} after {attempts} attempts",
        }
    }

    #[test]
    fn unit_variant_constructor_takes_no_arguments() {
        assert_eq!(StorePortError::unreachable(), StorePortError::Unreachable);
        assert_eq!(StorePortError::unreachable().to_string(), "store unreachable");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StorePortError::rejected("bad filter");
        assert_eq!(err.to_string(), "rejected: bad filter");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StorePortError::conflict("a1", 2_u32);
        assert_eq!(err.to_string(), "conflict on a1 after 2 attempts");
    }
}
