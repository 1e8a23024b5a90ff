//! Lookup of record types by name, for hosts that only know a type as a string.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RegistryError;
use crate::model::*;

/// Type-erased entry points for one record type.
pub struct RecordEntry {
    pub type_name: &'static str,
    pub fields: &'static [FieldDescriptor],
    new: fn() -> Box<dyn Record>,
    from_json: fn(&str) -> Result<Box<dyn Record>, RegistryError>,
    to_json: fn(&dyn Record) -> Result<String, RegistryError>,
    #[cfg(feature = "aws-sdk")]
    render_native: fn(&dyn Record) -> Result<String, RegistryError>,
}

impl RecordEntry {
    /// A fully unset record.
    pub fn new_record(&self) -> Box<dyn Record> {
        (self.new)()
    }

    /// Loads a record from its JSON form; absent fields stay unset.
    pub fn from_json(&self, json: &str) -> Result<Box<dyn Record>, RegistryError> {
        (self.from_json)(json)
    }

    pub fn to_json(&self, record: &dyn Record) -> Result<String, RegistryError> {
        (self.to_json)(record)
    }

    /// Converts to the SDK builder and returns its pretty `Debug` rendering.
    #[cfg(feature = "aws-sdk")]
    pub fn render_native(&self, record: &dyn Record) -> Result<String, RegistryError> {
        (self.render_native)(record)
    }
}

impl std::fmt::Debug for RecordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordEntry")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

macro_rules! registry {
    ($($ty:ident),* $(,)?) => {
        static ENTRIES: &[RecordEntry] = &[
            $(
                RecordEntry {
                    type_name: <$ty as RecordType>::TYPE_NAME,
                    fields: <$ty as RecordType>::FIELDS,
                    new: new_record::<$ty>,
                    from_json: record_from_json::<$ty>,
                    to_json: record_to_json::<$ty>,
                    #[cfg(feature = "aws-sdk")]
                    render_native: render_native::<$ty>,
                },
            )*
        ];
    };
}

registry! {
    AttributeDefinition,
    KeySchemaElement,
    Projection,
    ProvisionedThroughput,
    ProvisionedThroughputOverride,
    OnDemandThroughput,
    LocalSecondaryIndex,
    GlobalSecondaryIndex,
    ReplicaGlobalSecondaryIndex,
    CreateGlobalSecondaryIndexAction,
    UpdateGlobalSecondaryIndexAction,
    DeleteGlobalSecondaryIndexAction,
    GlobalSecondaryIndexUpdate,
    CreateReplicationGroupMemberAction,
    UpdateReplicationGroupMemberAction,
    DeleteReplicationGroupMemberAction,
    ReplicationGroupUpdate,
    StreamSpecification,
    SseSpecification,
    Tag,
    CreateTableRequest,
    UpdateTableRequest,
}

/// Every registered record type.
pub fn entries() -> &'static [RecordEntry] {
    ENTRIES
}

pub fn lookup(type_name: &str) -> Result<&'static RecordEntry, RegistryError> {
    ENTRIES
        .iter()
        .find(|entry| entry.type_name == type_name)
        .ok_or_else(|| RegistryError::UnknownType(type_name.to_owned()))
}

fn downcast<R: RecordType>(record: &dyn Record) -> Result<&R, RegistryError> {
    record
        .as_any()
        .downcast_ref::<R>()
        .ok_or(RegistryError::TypeMismatch {
            expected: R::TYPE_NAME,
            found: record.type_name(),
        })
}

fn new_record<R: RecordType>() -> Box<dyn Record> {
    Box::new(R::default())
}

fn record_from_json<R: RecordType + DeserializeOwned>(
    json: &str,
) -> Result<Box<dyn Record>, RegistryError> {
    Ok(Box::new(serde_json::from_str::<R>(json)?))
}

fn record_to_json<R: RecordType + Serialize>(record: &dyn Record) -> Result<String, RegistryError> {
    Ok(serde_json::to_string_pretty(downcast::<R>(record)?)?)
}

#[cfg(feature = "aws-sdk")]
fn render_native<R: crate::native::sdk::ToNative>(
    record: &dyn Record,
) -> Result<String, RegistryError> {
    let builder = downcast::<R>(record)?.to_native()?;
    Ok(format!("{builder:#?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_matches_its_record() {
        for entry in entries() {
            let record = entry.new_record();
            assert_eq!(record.type_name(), entry.type_name);
            assert_eq!(record.fields(), entry.fields);
        }
    }

    #[test]
    fn test_lookup_unknown_type() {
        assert!(matches!(
            lookup("PutItemRequest"),
            Err(RegistryError::UnknownType(name)) if name == "PutItemRequest"
        ));
    }

    #[test]
    fn test_json_roundtrip_through_entry() {
        let entry = lookup("Tag").unwrap();
        let record = entry.from_json(r#"{ "key": "env", "value": "prod" }"#).unwrap();
        assert!(!record.is_empty());

        let json = entry.to_json(record.as_ref()).unwrap();
        let tag: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(tag, Tag::new("env", "prod"));
    }

    #[test]
    fn test_to_json_rejects_other_types() {
        let entry = lookup("Tag").unwrap();
        let other = Projection::default();
        assert!(matches!(
            entry.to_json(&other),
            Err(RegistryError::TypeMismatch { expected: "Tag", found: "Projection" })
        ));
    }
}
