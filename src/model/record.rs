use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::UnknownVariant;

/// Kind of value stored in a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Plain text elements.
    Text,
    /// Nested records of the named type.
    Record(&'static str),
}

/// Kind of a record field, as listed in the record's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text; unset while empty.
    Text,
    /// 64-bit integer; unset while equal to the field's sentinel.
    Integer,
    /// Boolean; unset while `false`.
    Boolean,
    /// Closed set of wire strings; unset while `NotSet`.
    Enumeration(&'static [&'static str]),
    /// Nested record of the named type; unset while structurally empty.
    Record(&'static str),
    /// Ordered list; unset while zero-length.
    List(ElementKind),
}

/// One entry of a record's field-descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust-side field name, also used by the path editor.
    pub name: &'static str,
    /// DynamoDB wire member name, e.g. `KMSMasterKeyId`.
    pub wire_name: &'static str,
    pub kind: FieldKind,
}

/// Borrowed view of a field's current value.
#[derive(Debug)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer { value: i64, unset: i64 },
    Boolean(bool),
    Enumeration(Option<&'static str>),
    Record(&'a dyn Record),
    List(Vec<FieldValue<'a>>),
}

impl FieldValue<'_> {
    /// Emptiness under the field kind's own rule.
    ///
    /// Integers equal to their sentinel and `false` booleans read as unset, so a
    /// provided value that happens to equal the sentinel is indistinguishable
    /// from absence.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Integer { value, unset } => value == unset,
            FieldValue::Boolean(flag) => !flag,
            FieldValue::Enumeration(wire) => wire.is_none(),
            FieldValue::Record(record) => record.is_empty(),
            FieldValue::List(elements) => elements.is_empty(),
        }
    }
}

/// Mutable handle on a single field, handed out to the host for editing.
pub enum FieldMut<'a> {
    Text(&'a mut String),
    Integer { value: &'a mut i64, unset: i64 },
    Boolean(&'a mut bool),
    Enumeration(&'a mut dyn EnumField),
    Record(&'a mut dyn Record),
    List(&'a mut dyn ListField),
}

impl FieldMut<'_> {
    /// Resets the field to its unset value.
    pub fn clear(self) {
        match self {
            FieldMut::Text(text) => text.clear(),
            FieldMut::Integer { value, unset } => *value = unset,
            FieldMut::Boolean(flag) => *flag = false,
            FieldMut::Enumeration(field) => field.unset(),
            FieldMut::Record(record) => record.clear(),
            FieldMut::List(list) => list.clear(),
        }
    }
}

impl fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldMut::Text(text) => f.debug_tuple("Text").field(text).finish(),
            FieldMut::Integer { value, unset } => f
                .debug_struct("Integer")
                .field("value", value)
                .field("unset", unset)
                .finish(),
            FieldMut::Boolean(flag) => f.debug_tuple("Boolean").field(flag).finish(),
            FieldMut::Enumeration(field) => f
                .debug_tuple("Enumeration")
                .field(&field.wire_value())
                .finish(),
            FieldMut::Record(record) => f.debug_tuple("Record").field(record).finish(),
            FieldMut::List(list) => f.debug_struct("List").field("len", &list.len()).finish(),
        }
    }
}

/// Object-safe access to a wire enumeration field.
pub trait EnumField {
    fn wire_value(&self) -> Option<&'static str>;

    /// Every accepted wire value, excluding the empty "not set" value.
    fn variants(&self) -> &'static [&'static str];

    /// Assigns from a wire string; the empty string unsets the field.
    fn set_wire_value(&mut self, wire: &str) -> Result<(), UnknownVariant>;

    fn unset(&mut self);
}

/// Object-safe access to a list field.
pub trait ListField {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an unset element.
    fn push_default(&mut self);

    /// Drops the last element, if any.
    fn remove_last(&mut self);

    fn clear(&mut self);

    fn element_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}

impl ListField for Vec<String> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_default(&mut self) {
        self.push(String::new());
    }

    fn remove_last(&mut self) {
        self.pop();
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn element_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        self.get_mut(index).map(FieldMut::Text)
    }
}

impl<R: RecordType> ListField for Vec<R> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_default(&mut self) {
        self.push(R::default());
    }

    fn remove_last(&mut self) {
        self.pop();
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn element_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        self.get_mut(index)
            .map(|record| FieldMut::Record(record as &mut dyn Record))
    }
}

/// A DynamoDB request sub-structure in its plain, host-editable form.
///
/// Every field may be unset. Emptiness is structural and recomputed on each
/// call, since the host can mutate fields at any time.
pub trait Record: fmt::Debug + Any {
    fn type_name(&self) -> &'static str;

    /// The static field-descriptor table, in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Current field values, index-aligned with [`Record::fields`].
    fn values(&self) -> Vec<FieldValue<'_>>;

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;

    fn as_any(&self) -> &dyn Any;

    /// Current value of the field named `name`, if the record has one.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        let index = self.fields().iter().position(|field| field.name == name)?;
        self.values().into_iter().nth(index)
    }

    /// True iff every field is empty under its own kind's rule.
    fn is_empty(&self) -> bool {
        self.values().iter().all(FieldValue::is_empty)
    }

    /// Resets every field, recursively, to its unset value.
    fn clear(&mut self) {
        for field in self.fields() {
            if let Some(value) = self.field_mut(field.name) {
                value.clear();
            }
        }
    }
}

/// Static side of a record type.
pub trait RecordType:
    Record + Default + Clone + PartialEq + Serialize + DeserializeOwned
{
    const TYPE_NAME: &'static str;
    const FIELDS: &'static [FieldDescriptor];
}

/// Maps a Rust field type onto its field kind.
///
/// `unset` is the field's declared zero value; only integers look at it, the
/// other kinds have a fixed emptiness rule.
pub trait Field {
    const KIND: FieldKind;

    fn value<'a>(&'a self, unset: &Self) -> FieldValue<'a>;

    fn value_mut<'a>(&'a mut self, unset: &Self) -> FieldMut<'a>;
}

impl Field for String {
    const KIND: FieldKind = FieldKind::Text;

    fn value<'a>(&'a self, _unset: &Self) -> FieldValue<'a> {
        FieldValue::Text(self)
    }

    fn value_mut<'a>(&'a mut self, _unset: &Self) -> FieldMut<'a> {
        FieldMut::Text(self)
    }
}

impl Field for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn value<'a>(&'a self, unset: &Self) -> FieldValue<'a> {
        FieldValue::Integer {
            value: *self,
            unset: *unset,
        }
    }

    fn value_mut<'a>(&'a mut self, unset: &Self) -> FieldMut<'a> {
        FieldMut::Integer {
            value: self,
            unset: *unset,
        }
    }
}

impl Field for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn value<'a>(&'a self, _unset: &Self) -> FieldValue<'a> {
        FieldValue::Boolean(*self)
    }

    fn value_mut<'a>(&'a mut self, _unset: &Self) -> FieldMut<'a> {
        FieldMut::Boolean(self)
    }
}

impl<R: RecordType> Field for R {
    const KIND: FieldKind = FieldKind::Record(R::TYPE_NAME);

    fn value<'a>(&'a self, _unset: &Self) -> FieldValue<'a> {
        FieldValue::Record(self)
    }

    fn value_mut<'a>(&'a mut self, _unset: &Self) -> FieldMut<'a> {
        FieldMut::Record(self)
    }
}

impl<T: Element> Field for Vec<T>
where
    Vec<T>: ListField,
{
    const KIND: FieldKind = FieldKind::List(T::ELEMENT);

    fn value<'a>(&'a self, _unset: &Self) -> FieldValue<'a> {
        FieldValue::List(self.iter().map(Element::element_value).collect())
    }

    fn value_mut<'a>(&'a mut self, _unset: &Self) -> FieldMut<'a> {
        FieldMut::List(self)
    }
}

/// Types that can appear inside a list field.
pub trait Element {
    const ELEMENT: ElementKind;

    fn element_value(&self) -> FieldValue<'_>;
}

impl Element for String {
    const ELEMENT: ElementKind = ElementKind::Text;

    fn element_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl<R: RecordType> Element for R {
    const ELEMENT: ElementKind = ElementKind::Record(R::TYPE_NAME);

    fn element_value(&self) -> FieldValue<'_> {
        FieldValue::Record(self)
    }
}
