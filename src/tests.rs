//! Cross-cutting tests of the optional-field convention.
//!
//! These tests cover:
//! - Emptiness of freshly constructed records
//! - Single-field edits making a record non-empty, and reverting them
//! - Conversion omitting every unset field
//! - Conversion carrying exactly the fields that were set
//! - List order and nested-record omission
//!
//! Every registered record type is exercised through the registry, so a newly
//! added record type is covered as soon as it is registered.

use anyhow::Result;
use tracing::info;

use crate::model::registry::{self, RecordEntry};
use crate::model::*;
use crate::native::document::{to_document, DocumentValue};

/// What the converted document should hold after [`populate`].
#[derive(Debug)]
enum Expected {
    Scalar(DocumentValue),
    Nested,
    List,
}

/// Gives a single field a non-default value.
fn populate(field: FieldMut<'_>) -> Expected {
    match field {
        FieldMut::Text(text) => {
            *text = "sample".to_string();
            Expected::Scalar(DocumentValue::Text("sample".to_string()))
        }
        FieldMut::Integer { value, unset } => {
            *value = unset + 7;
            Expected::Scalar(DocumentValue::Integer(unset + 7))
        }
        FieldMut::Boolean(flag) => {
            *flag = true;
            Expected::Scalar(DocumentValue::Boolean(true))
        }
        FieldMut::Enumeration(field) => {
            let wire = field.variants()[0];
            field.set_wire_value(wire).expect("listed variant");
            Expected::Scalar(DocumentValue::Text(wire.to_string()))
        }
        FieldMut::Record(record) => {
            let first = record.fields()[0].name;
            populate(record.field_mut(first).expect("described field"));
            Expected::Nested
        }
        FieldMut::List(list) => {
            list.push_default();
            Expected::List
        }
    }
}

fn for_each_field(mut check: impl FnMut(&RecordEntry, &FieldDescriptor)) {
    for entry in registry::entries() {
        for field in entry.fields {
            check(entry, field);
        }
    }
}

#[test]
fn test_new_records_are_empty() {
    for entry in registry::entries() {
        let record = entry.new_record();
        assert!(record.is_empty(), "{} should start empty", entry.type_name);
        assert_eq!(record.values().len(), entry.fields.len());
    }
}

#[test]
fn test_single_field_makes_record_non_empty() {
    for_each_field(|entry, field| {
        let mut record = entry.new_record();
        populate(record.field_mut(field.name).expect("described field"));
        assert!(
            !record.is_empty(),
            "{}.{} should make the record non-empty",
            entry.type_name,
            field.name
        );

        record
            .field_mut(field.name)
            .expect("described field")
            .clear();
        assert!(
            record.is_empty(),
            "{}.{} should revert to empty",
            entry.type_name,
            field.name
        );
    });
}

#[test]
fn test_empty_records_convert_to_empty_documents() {
    for entry in registry::entries() {
        let document = to_document(entry.new_record().as_ref());
        assert_eq!(document.type_name(), entry.type_name);
        assert!(document.is_empty(), "{} converted with members", entry.type_name);
    }
}

#[test]
fn test_single_field_converts_alone() {
    for_each_field(|entry, field| {
        let mut record = entry.new_record();
        let expected = populate(record.field_mut(field.name).expect("described field"));
        let document = to_document(record.as_ref());

        assert_eq!(
            document.member_names().collect::<Vec<_>>(),
            vec![field.wire_name],
            "{}.{}",
            entry.type_name,
            field.name
        );

        let value = document.get(field.wire_name).expect("member present");
        match expected {
            Expected::Scalar(expected) => assert_eq!(value, &expected),
            Expected::Nested => {
                let nested = value.as_document().expect("nested document");
                assert_eq!(nested.len(), 1);
            }
            Expected::List => assert_eq!(value.as_list().map(<[_]>::len), Some(1)),
        }
    });
}

#[test]
fn test_list_order_is_preserved() -> Result<()> {
    let request = CreateTableRequest {
        tags: vec![Tag::new("a", "1"), Tag::new("b", "2"), Tag::new("c", "3")],
        ..CreateTableRequest::default()
    };

    let document = to_document(&request);
    let keys: Vec<_> = document
        .get("Tags")
        .and_then(DocumentValue::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(DocumentValue::as_document)
        .filter_map(|tag| tag.get("Key").and_then(DocumentValue::as_text))
        .collect();

    info!("Converted tag keys: {:?}", keys);
    assert_eq!(keys, vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_empty_nested_records_are_omitted() {
    let index = GlobalSecondaryIndex {
        index_name: "by-status".to_string(),
        ..GlobalSecondaryIndex::default()
    };
    assert!(index.projection.is_empty());

    let document = to_document(&index);
    assert!(document.has("IndexName"));
    assert!(!document.has("Projection"));
    assert!(!document.has("ProvisionedThroughput"));
    assert!(!document.has("OnDemandThroughput"));
    assert!(!document.has("KeySchema"));
}

#[test]
fn test_replication_action_region_only() {
    let action = CreateReplicationGroupMemberAction {
        region_name: "us-east-1".to_string(),
        ..CreateReplicationGroupMemberAction::default()
    };
    assert!(!action.is_empty());

    let document = to_document(&action);
    assert_eq!(
        document.get("RegionName").and_then(DocumentValue::as_text),
        Some("us-east-1")
    );
    assert!(!document.has("KMSMasterKeyId"));
    assert!(!document.has("ProvisionedThroughputOverride"));
    assert!(!document.has("GlobalSecondaryIndexes"));
}

#[test]
fn test_empty_json_loads_unset_records() -> Result<()> {
    for entry in registry::entries() {
        let record = entry.from_json("{}")?;
        assert!(record.is_empty(), "{}", entry.type_name);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&entry.to_json(record.as_ref())?)?,
            serde_json::from_str::<serde_json::Value>(&entry.to_json(entry.new_record().as_ref())?)?
        );
    }
    Ok(())
}

#[cfg(feature = "aws-sdk")]
#[test]
fn test_empty_records_render_natively() -> Result<()> {
    for entry in registry::entries() {
        let rendered = entry.render_native(entry.new_record().as_ref())?;
        info!("{}: {}", entry.type_name, rendered);
        assert!(rendered.contains("Builder"), "{}", entry.type_name);
    }
    Ok(())
}

#[cfg(feature = "aws-sdk")]
mod sdk {
    use super::*;
    use crate::native::sdk::ToNative;

    /// Sets every field, recursively, so nested SDK values have all their
    /// required members and build.
    fn fill(field: FieldMut<'_>) {
        match field {
            FieldMut::Record(record) => {
                for descriptor in record.fields() {
                    fill(record.field_mut(descriptor.name).expect("described field"));
                }
            }
            FieldMut::List(list) => {
                let index = list.len();
                list.push_default();
                fill(list.element_mut(index).expect("appended element"));
            }
            scalar => {
                populate(scalar);
            }
        }
    }

    /// Builder `Debug` output, with one entry per builder member.
    fn builder_debug<R: ToNative>(record: &R) -> Result<String> {
        Ok(format!("{:?}", record.to_native()?))
    }

    fn check_empty_builder<R: ToNative>() -> Result<()> {
        assert_eq!(
            builder_debug(&R::default())?,
            format!("{:?}", R::Builder::default()),
            "{}",
            R::TYPE_NAME
        );
        Ok(())
    }

    fn check_single_field_setters<R: ToNative>() -> Result<()> {
        for field in R::FIELDS {
            let mut record = R::default();
            fill(record.field_mut(field.name).expect("described field"));
            let debug = builder_debug(&record)?;

            assert!(
                debug.contains(&format!(" {}: Some(", field.name)),
                "{}.{} not set on the builder: {debug}",
                R::TYPE_NAME,
                field.name
            );
            for other in R::FIELDS.iter().filter(|other| other.name != field.name) {
                assert!(
                    debug.contains(&format!(" {}: None", other.name)),
                    "{}.{} set {} on the builder: {debug}",
                    R::TYPE_NAME,
                    field.name,
                    other.name
                );
            }
        }
        Ok(())
    }

    macro_rules! check_types {
        ($($ty:ident),* $(,)?) => {
            vec![$({
                check_empty_builder::<$ty>()?;
                check_single_field_setters::<$ty>()?;
                <$ty as RecordType>::TYPE_NAME
            }),*]
        };
    }

    #[test]
    fn test_every_record_converts_through_its_builder() -> Result<()> {
        let mut checked = check_types![
            ProvisionedThroughput,
            ProvisionedThroughputOverride,
            OnDemandThroughput,
            KeySchemaElement,
            Projection,
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
            AttributeDefinition,
            StreamSpecification,
            SseSpecification,
            Tag,
            CreateTableRequest,
            UpdateTableRequest,
        ];

        let mut registered: Vec<_> = registry::entries()
            .iter()
            .map(|entry| entry.type_name)
            .collect();
        checked.sort_unstable();
        registered.sort_unstable();
        assert_eq!(checked, registered);
        Ok(())
    }

    #[test]
    fn test_filled_records_build() -> Result<()> {
        let mut request = CreateTableRequest::default();
        fill(FieldMut::Record(&mut request));
        let input = request.build_native()?;
        assert_eq!(input.table_name(), Some("sample"));
        assert_eq!(input.key_schema().len(), 1);
        assert_eq!(input.deletion_protection_enabled(), Some(true));
        Ok(())
    }
}
