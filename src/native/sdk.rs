//! Conversion into `aws-sdk-dynamodb` builders.
//!
//! [`ToNative::to_native`] returns the SDK builder for the record's native
//! type, with a setter called for exactly the non-empty fields. The builder's
//! `get_*` accessors are the "has field" queries. Nested records and list
//! elements have to be built into finished SDK values first, and the SDK
//! refuses to build a value whose required members are missing. That
//! rejection is reported as [`ConversionError::Build`] naming the record type;
//! nothing is retried or patched up here.

use aws_sdk_dynamodb::error::BuildError;
use thiserror::Error;

use crate::model::RecordType;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("the SDK rejected {record}: {source}")]
    Build {
        record: &'static str,
        #[source]
        source: BuildError,
    },
}

/// A record with an `aws-sdk-dynamodb` counterpart.
pub trait ToNative: RecordType {
    /// The SDK builder; its `Default` is the fully-absent native object.
    type Builder: Default + std::fmt::Debug;
    /// The finished SDK value.
    type Native;

    fn to_native(&self) -> Result<Self::Builder, ConversionError>;

    /// Builds a builder produced by [`ToNative::to_native`].
    fn finish(builder: Self::Builder) -> Result<Self::Native, ConversionError>;

    fn build_native(&self) -> Result<Self::Native, ConversionError> {
        Self::finish(self.to_native()?)
    }
}

/// Field-level conversion. `None` means the field is unset and its setter
/// must not be called.
pub trait SdkField {
    type Sdk;

    fn to_sdk(&self, unset: &Self) -> Result<Option<Self::Sdk>, ConversionError>;
}

impl SdkField for String {
    type Sdk = String;

    fn to_sdk(&self, _unset: &Self) -> Result<Option<String>, ConversionError> {
        Ok((!self.is_empty()).then(|| self.clone()))
    }
}

impl SdkField for i64 {
    type Sdk = i64;

    fn to_sdk(&self, unset: &Self) -> Result<Option<i64>, ConversionError> {
        Ok((self != unset).then_some(*self))
    }
}

impl SdkField for bool {
    type Sdk = bool;

    fn to_sdk(&self, _unset: &Self) -> Result<Option<bool>, ConversionError> {
        Ok((*self).then_some(true))
    }
}

impl<R: ToNative> SdkField for R {
    type Sdk = R::Native;

    fn to_sdk(&self, _unset: &Self) -> Result<Option<R::Native>, ConversionError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.build_native().map(Some)
    }
}

impl<T: SdkElement> SdkField for Vec<T> {
    type Sdk = Vec<T::Sdk>;

    fn to_sdk(&self, _unset: &Self) -> Result<Option<Vec<T::Sdk>>, ConversionError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.iter()
            .map(SdkElement::to_sdk_element)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Conversion of a single list element. Elements are always converted,
/// whether or not they are empty.
pub trait SdkElement {
    type Sdk;

    fn to_sdk_element(&self) -> Result<Self::Sdk, ConversionError>;
}

impl SdkElement for String {
    type Sdk = String;

    fn to_sdk_element(&self) -> Result<String, ConversionError> {
        Ok(self.clone())
    }
}

impl<R: ToNative> SdkElement for R {
    type Sdk = R::Native;

    fn to_sdk_element(&self) -> Result<R::Native, ConversionError> {
        self.build_native()
    }
}
