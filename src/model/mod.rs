//! # Request Model
//!
//! Plain, host-editable mirrors of the DynamoDB request structures used to
//! create and reshape tables.
//!
//! ## Components
//!
//! - `Record`: object-safe view of a record: descriptors, current values,
//!   emptiness and per-field editing.
//! - `RecordType`: the static side of a record (`TYPE_NAME`, `FIELDS`).
//! - Record types: table requests, indexes, throughput settings, replication
//!   actions, stream/encryption settings and tags.
//! - `editor`: dotted-path editing (`key_schema.0.attribute_name`).
//! - `registry`: record types addressed by name.
//!
//! ## Optional fields
//!
//! Every field may be unset, and an unset field is never passed on to the
//! native object. The unset value depends on the field kind:
//!
//! - Text: the empty string.
//! - Integer: the field's sentinel (`0` for every capacity field).
//! - Boolean: `false`.
//! - Enumeration: `NotSet`.
//! - Nested record: every one of its fields unset.
//! - List: zero elements.
//!
//! Scalars therefore cannot carry a provided value equal to their unset
//! value; such a value is omitted on conversion like any other unset field.
//!
//! ## Example
//!
//! ```rust
//! use dynamodb_request_model::model::{
//!     CreateReplicationGroupMemberAction, Record, ReplicationGroupUpdate, UpdateTableRequest,
//! };
//!
//! let mut request = UpdateTableRequest {
//!     table_name: "products".to_string(),
//!     ..UpdateTableRequest::default()
//! };
//! request.replica_updates.push(ReplicationGroupUpdate::create(
//!     CreateReplicationGroupMemberAction {
//!         region_name: "us-east-1".to_string(),
//!         ..Default::default()
//!     },
//! ));
//!
//! assert!(!request.is_empty());
//! assert!(request.sse_specification.is_empty());
//! ```

#[macro_use]
mod macros;

mod enums;
mod index;
mod record;
mod replication;
mod table;
mod throughput;

pub mod editor;
pub mod registry;

pub use enums::{
    BillingMode, KeyType, ProjectionType, ScalarAttributeType, SseType, StreamViewType,
    TableClass,
};
pub use index::{
    CreateGlobalSecondaryIndexAction, DeleteGlobalSecondaryIndexAction, GlobalSecondaryIndex,
    GlobalSecondaryIndexUpdate, KeySchemaElement, LocalSecondaryIndex, Projection,
    ReplicaGlobalSecondaryIndex, UpdateGlobalSecondaryIndexAction,
};
pub use record::{
    Element, ElementKind, EnumField, Field, FieldDescriptor, FieldKind, FieldMut, FieldValue,
    ListField, Record, RecordType,
};
pub use replication::{
    CreateReplicationGroupMemberAction, DeleteReplicationGroupMemberAction,
    ReplicationGroupUpdate, UpdateReplicationGroupMemberAction,
};
pub use table::{
    AttributeDefinition, CreateTableRequest, SseSpecification, StreamSpecification, Tag,
    UpdateTableRequest,
};
pub use throughput::{OnDemandThroughput, ProvisionedThroughput, ProvisionedThroughputOverride};
