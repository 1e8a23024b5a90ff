//! # Native conversion
//!
//! Turns a plain record into a native object, setting only the fields that
//! carry a value.
//!
//! [`convert`] is the descriptor-driven conversion. It works against any
//! [`NativeTarget`], the capability that knows how to create an empty native
//! object and assign one field on it:
//!
//! - [`document::DocumentTarget`] builds a [`document::Document`] keyed by
//!   DynamoDB wire member names, always available.
//! - [`sdk`] converts straight into `aws-sdk-dynamodb` builders. It only exists
//!   with the `aws-sdk` feature; callers that need it must be gated on the same
//!   feature.
//!
//! ## Rules
//!
//! - Conversion starts from the target's empty object.
//! - Empty fields produce no `set` call at all.
//! - Nested records are converted first and set only when non-empty.
//! - Lists convert element by element, keeping order. Elements are converted
//!   even when they are empty themselves; an empty list is never set.
//! - The input record is only borrowed, so converting twice gives equal output.

pub mod document;
#[cfg(feature = "aws-sdk")]
pub mod sdk;

use tracing::{debug, trace};

use crate::model::{FieldDescriptor, FieldValue, Record};

/// A value handed to [`NativeTarget::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue<O> {
    Text(String),
    Integer(i64),
    Boolean(bool),
    /// Wire string of an enumeration.
    Enumeration(&'static str),
    Object(O),
    List(Vec<NativeValue<O>>),
}

/// Capability for building native objects.
pub trait NativeTarget {
    type Object;

    /// Creates the default, fully-absent native object for `type_name`.
    fn create(&mut self, type_name: &'static str) -> Self::Object;

    /// Assigns one field. Only called for fields that carry a value.
    fn set(
        &mut self,
        object: &mut Self::Object,
        field: &FieldDescriptor,
        value: NativeValue<Self::Object>,
    );
}

/// Converts `record` into `target`'s native representation.
pub fn convert<T>(record: &dyn Record, target: &mut T) -> T::Object
where
    T: NativeTarget + ?Sized,
{
    debug!("Converting {}", record.type_name());
    let mut object = target.create(record.type_name());

    for (field, value) in record.fields().iter().zip(record.values()) {
        match convert_field(value, target) {
            Some(native) => {
                trace!("{}.{} set", record.type_name(), field.name);
                target.set(&mut object, field, native);
            }
            None => trace!("{}.{} unset, skipped", record.type_name(), field.name),
        }
    }

    object
}

fn convert_field<T>(value: FieldValue<'_>, target: &mut T) -> Option<NativeValue<T::Object>>
where
    T: NativeTarget + ?Sized,
{
    if value.is_empty() {
        return None;
    }
    convert_element(value, target)
}

fn convert_element<T>(value: FieldValue<'_>, target: &mut T) -> Option<NativeValue<T::Object>>
where
    T: NativeTarget + ?Sized,
{
    let native = match value {
        FieldValue::Text(text) => NativeValue::Text(text.to_owned()),
        FieldValue::Integer { value, .. } => NativeValue::Integer(value),
        FieldValue::Boolean(flag) => NativeValue::Boolean(flag),
        FieldValue::Enumeration(wire) => NativeValue::Enumeration(wire?),
        FieldValue::Record(record) => NativeValue::Object(convert(record, target)),
        FieldValue::List(elements) => {
            let mut converted = Vec::with_capacity(elements.len());
            for element in elements {
                converted.extend(convert_element(element, target));
            }
            NativeValue::List(converted)
        }
    };
    Some(native)
}
