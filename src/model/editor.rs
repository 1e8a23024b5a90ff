//! Editing records by field path, the way a host property panel would.
//!
//! Paths are dot-separated field names. A numeric segment indexes into a list.
//! When setting, an index equal to the list length appends an unset element,
//! so `key_schema.0.attribute_name` works on a fresh record. A failed edit
//! leaves the record as it was.

use tracing::debug;

use crate::error::FieldError;
use crate::model::{FieldMut, ListField, Record};

/// Parses `value` according to the kind of the field at `path` and assigns it.
///
/// An empty string is accepted for every scalar kind and unsets the field.
pub fn set_path(record: &mut dyn Record, path: &str, value: &str) -> Result<(), FieldError> {
    let type_name = record.type_name();
    edit(record, path, true, &|field| assign(field, path, value))?;
    debug!("{type_name}.{path} = {value:?}");
    Ok(())
}

/// Resets the field at `path` (scalar, record or list) to its unset value.
///
/// Never appends: an index equal to the list length is out of range.
pub fn clear_path(record: &mut dyn Record, path: &str) -> Result<(), FieldError> {
    let type_name = record.type_name();
    edit(record, path, false, &|field| {
        field.clear();
        Ok(())
    })?;
    debug!("{type_name}.{path} cleared");
    Ok(())
}

type Apply<'f> = &'f dyn for<'a> Fn(FieldMut<'a>) -> Result<(), FieldError>;

fn edit(record: &mut dyn Record, path: &str, append: bool, apply: Apply<'_>) -> Result<(), FieldError> {
    if path.is_empty() {
        return Err(FieldError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('.').collect();
    walk(FieldMut::Record(record), &segments, path, append, apply)
}

fn walk(
    current: FieldMut<'_>,
    segments: &[&str],
    path: &str,
    append: bool,
    apply: Apply<'_>,
) -> Result<(), FieldError> {
    let Some((segment, rest)) = segments.split_first() else {
        return apply(current);
    };

    match current {
        FieldMut::Record(record) => walk(field_of(record, segment)?, rest, path, append, apply),
        FieldMut::List(list) => walk_element(list, segment, rest, path, append, apply),
        _ => Err(FieldError::NotAContainer {
            path: path.to_owned(),
        }),
    }
}

/// Descends into one list element. An element appended on the way is removed
/// again when the rest of the edit fails.
fn walk_element(
    list: &mut dyn ListField,
    segment: &str,
    rest: &[&str],
    path: &str,
    append: bool,
    apply: Apply<'_>,
) -> Result<(), FieldError> {
    let index: usize = segment.parse().map_err(|_| FieldError::InvalidIndex {
        segment: segment.to_owned(),
    })?;
    let len = list.len();

    if !(append && index == len) {
        let element = list
            .element_mut(index)
            .ok_or(FieldError::IndexOutOfRange { index, len })?;
        return walk(element, rest, path, append, apply);
    }

    list.push_default();
    let result = match list.element_mut(index) {
        Some(element) => walk(element, rest, path, append, apply),
        None => Err(FieldError::IndexOutOfRange { index, len }),
    };
    if result.is_err() {
        list.remove_last();
    }
    result
}

fn field_of<'a>(record: &'a mut dyn Record, name: &str) -> Result<FieldMut<'a>, FieldError> {
    let type_name = record.type_name();
    record
        .field_mut(name)
        .ok_or_else(|| FieldError::UnknownField {
            record: type_name,
            field: name.to_owned(),
        })
}

fn assign(field: FieldMut<'_>, path: &str, value: &str) -> Result<(), FieldError> {
    let invalid = |reason: String| FieldError::InvalidValue {
        path: path.to_owned(),
        value: value.to_owned(),
        reason,
    };

    match field {
        FieldMut::Text(text) => *text = value.to_owned(),
        FieldMut::Integer { value: slot, unset } => {
            *slot = if value.is_empty() {
                unset
            } else {
                value.parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?
            };
        }
        FieldMut::Boolean(flag) => {
            *flag = match value {
                "" | "false" => false,
                "true" => true,
                _ => return Err(invalid("expected `true` or `false`".to_string())),
            };
        }
        FieldMut::Enumeration(field) => field.set_wire_value(value)?,
        FieldMut::Record(_) | FieldMut::List(_) => {
            return Err(FieldError::NotAScalar {
                path: path.to_owned(),
            })
        }
    }
    Ok(())
}
