/// Declared zero value of a field: the explicit sentinel when one is given,
/// otherwise the type's `Default`.
macro_rules! unset_value {
    ($ty:ty) => {
        <$ty as ::std::default::Default>::default()
    };
    ($ty:ty, $unset:expr) => {
        $unset
    };
}

macro_rules! finish_native {
    (fallible, $record:ident, $builder:expr) => {
        $builder
            .build()
            .map_err(|source| $crate::native::sdk::ConversionError::Build {
                record: stringify!($record),
                source,
            })
    };
    (infallible, $record:ident, $builder:expr) => {
        Ok($builder.build())
    };
}

/// Declares a record type from its field list.
///
/// Each field reads `name: Type [= sentinel] => "WireName" / sdk_setter`. The
/// expansion provides the struct, its fully-unset `Default`, the descriptor
/// table, the dynamic [`Record`](crate::model::Record) view and, with the
/// `aws-sdk` feature, the [`ToNative`](crate::native::sdk::ToNative)
/// conversion onto the SDK builder named after `native:`. The build mode is
/// `fallible` when the SDK type has required members.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty $(= $unset:expr)? => $wire:literal / $setter:ident
            ),* $(,)?
        }
        native: $native:path, $builder:path, $build:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: unset_value!($ty $(, $unset)?),)*
                }
            }
        }

        impl $crate::model::RecordType for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::model::FieldDescriptor] = &[
                $(
                    $crate::model::FieldDescriptor {
                        name: stringify!($field),
                        wire_name: $wire,
                        kind: <$ty as $crate::model::Field>::KIND,
                    },
                )*
            ];
        }

        impl $crate::model::Record for $name {
            fn type_name(&self) -> &'static str {
                <Self as $crate::model::RecordType>::TYPE_NAME
            }

            fn fields(&self) -> &'static [$crate::model::FieldDescriptor] {
                <Self as $crate::model::RecordType>::FIELDS
            }

            fn values(&self) -> Vec<$crate::model::FieldValue<'_>> {
                vec![
                    $(
                        $crate::model::Field::value(
                            &self.$field,
                            &unset_value!($ty $(, $unset)?),
                        ),
                    )*
                ]
            }

            fn field_mut(&mut self, name: &str) -> Option<$crate::model::FieldMut<'_>> {
                match name {
                    $(
                        field if field == stringify!($field) => Some(
                            $crate::model::Field::value_mut(
                                &mut self.$field,
                                &unset_value!($ty $(, $unset)?),
                            ),
                        ),
                    )*
                    _ => None,
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        #[cfg(feature = "aws-sdk")]
        impl $crate::native::sdk::ToNative for $name {
            type Builder = $builder;
            type Native = $native;

            fn to_native(
                &self,
            ) -> ::std::result::Result<Self::Builder, $crate::native::sdk::ConversionError> {
                let mut builder = <$builder as ::std::default::Default>::default();
                $(
                    match $crate::native::sdk::SdkField::to_sdk(
                        &self.$field,
                        &unset_value!($ty $(, $unset)?),
                    )? {
                        Some(value) => {
                            ::tracing::trace!("{}.{} set", stringify!($name), stringify!($field));
                            builder = builder.$setter(Some(value));
                        }
                        None => {
                            ::tracing::trace!("{}.{} unset, skipped", stringify!($name), stringify!($field));
                        }
                    }
                )*
                Ok(builder)
            }

            fn finish(
                builder: Self::Builder,
            ) -> ::std::result::Result<Self::Native, $crate::native::sdk::ConversionError> {
                finish_native!($build, $name, builder)
            }
        }
    };
}

/// Declares a DynamoDB wire enumeration with a leading `NotSet` variant that
/// acts as the unset value.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $native:path {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            /// No value provided; omitted on conversion.
            #[default]
            #[serde(rename = "")]
            NotSet,
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire strings of every set variant, in declaration order.
            pub const WIRE_VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> Option<&'static str> {
                match self {
                    Self::NotSet => None,
                    $(Self::$variant => Some($wire),)+
                }
            }

            pub fn is_set(&self) -> bool {
                !matches!(self, Self::NotSet)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownVariant;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    "" => Ok(Self::NotSet),
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::UnknownVariant {
                        type_name: stringify!($name),
                        value: value.to_owned(),
                        expected: Self::WIRE_VALUES,
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str().unwrap_or(""))
            }
        }

        impl $crate::model::EnumField for $name {
            fn wire_value(&self) -> Option<&'static str> {
                self.as_str()
            }

            fn variants(&self) -> &'static [&'static str] {
                Self::WIRE_VALUES
            }

            fn set_wire_value(
                &mut self,
                wire: &str,
            ) -> ::std::result::Result<(), $crate::error::UnknownVariant> {
                *self = wire.parse()?;
                Ok(())
            }

            fn unset(&mut self) {
                *self = Self::NotSet;
            }
        }

        impl $crate::model::Field for $name {
            const KIND: $crate::model::FieldKind =
                $crate::model::FieldKind::Enumeration(Self::WIRE_VALUES);

            fn value<'a>(&'a self, _unset: &Self) -> $crate::model::FieldValue<'a> {
                $crate::model::FieldValue::Enumeration(self.as_str())
            }

            fn value_mut<'a>(&'a mut self, _unset: &Self) -> $crate::model::FieldMut<'a> {
                $crate::model::FieldMut::Enumeration(self)
            }
        }

        #[cfg(feature = "aws-sdk")]
        impl $crate::native::sdk::SdkField for $name {
            type Sdk = $native;

            fn to_sdk(
                &self,
                _unset: &Self,
            ) -> ::std::result::Result<Option<Self::Sdk>, $crate::native::sdk::ConversionError> {
                Ok(self.as_str().map(<$native>::from))
            }
        }
    };
}
