use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::{FieldDescriptor, Record};
use crate::native::{convert, NativeTarget, NativeValue};

/// A native object shaped like a DynamoDB JSON request body.
///
/// Members are keyed by wire name (`RegionName`, `KMSMasterKeyId`, ...) and
/// kept in descriptor order. A member is present only if it was set during
/// conversion, which makes [`Document::has`] the "has field" query for this
/// target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    type_name: &'static str,
    members: Vec<(&'static str, DocumentValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Document(Document),
    List(Vec<DocumentValue>),
}

impl Document {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn has(&self, wire_name: &str) -> bool {
        self.get(wire_name).is_some()
    }

    pub fn get(&self, wire_name: &str) -> Option<&DocumentValue> {
        self.members
            .iter()
            .find(|(name, _)| *name == wire_name)
            .map(|(_, value)| value)
    }

    /// Wire names of every member that was set, in descriptor order.
    pub fn member_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl DocumentValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DocumentValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DocumentValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            DocumentValue::Document(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DocumentValue]> {
        match self {
            DocumentValue::List(elements) => Some(elements),
            _ => None,
        }
    }
}

impl From<NativeValue<Document>> for DocumentValue {
    fn from(value: NativeValue<Document>) -> Self {
        match value {
            NativeValue::Text(text) => DocumentValue::Text(text),
            NativeValue::Integer(value) => DocumentValue::Integer(value),
            NativeValue::Boolean(flag) => DocumentValue::Boolean(flag),
            NativeValue::Enumeration(wire) => DocumentValue::Text(wire.to_owned()),
            NativeValue::Object(document) => DocumentValue::Document(document),
            NativeValue::List(elements) => {
                DocumentValue::List(elements.into_iter().map(DocumentValue::from).collect())
            }
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.members.len()))?;
        for (name, value) in &self.members {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for DocumentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocumentValue::Text(text) => serializer.serialize_str(text),
            DocumentValue::Integer(value) => serializer.serialize_i64(*value),
            DocumentValue::Boolean(flag) => serializer.serialize_bool(*flag),
            DocumentValue::Document(document) => document.serialize(serializer),
            DocumentValue::List(elements) => serializer.collect_seq(elements),
        }
    }
}

/// [`NativeTarget`] producing [`Document`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentTarget;

impl NativeTarget for DocumentTarget {
    type Object = Document;

    fn create(&mut self, type_name: &'static str) -> Document {
        Document {
            type_name,
            members: Vec::new(),
        }
    }

    fn set(&mut self, object: &mut Document, field: &FieldDescriptor, value: NativeValue<Document>) {
        object.members.push((field.wire_name, value.into()));
    }
}

/// Converts `record` into a [`Document`].
pub fn to_document(record: &dyn Record) -> Document {
    convert(record, &mut DocumentTarget)
}
