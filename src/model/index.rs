//! Key schemas, projections and secondary indexes.

use crate::model::{
    KeyType, OnDemandThroughput, ProjectionType, ProvisionedThroughput,
    ProvisionedThroughputOverride,
};

record! {
    /// One attribute of a table or index primary key.
    ///
    /// A key schema lists the partition (`HASH`) element first, followed by an
    /// optional sort (`RANGE`) element.
    pub struct KeySchemaElement {
        attribute_name: String => "AttributeName" / set_attribute_name,
        key_type: KeyType => "KeyType" / set_key_type,
    }
    native: aws_sdk_dynamodb::types::KeySchemaElement,
        aws_sdk_dynamodb::types::builders::KeySchemaElementBuilder, fallible;
}

record! {
    /// Attributes copied (projected) from the table into an index, in addition
    /// to the key attributes which are always projected.
    pub struct Projection {
        projection_type: ProjectionType => "ProjectionType" / set_projection_type,
        /// Only meaningful with `ProjectionType::Include`.
        non_key_attributes: Vec<String> => "NonKeyAttributes" / set_non_key_attributes,
    }
    native: aws_sdk_dynamodb::types::Projection,
        aws_sdk_dynamodb::types::builders::ProjectionBuilder, infallible;
}

record! {
    /// An index sharing the table's partition key with a different sort key.
    /// Local indexes can only be declared when the table is created.
    pub struct LocalSecondaryIndex {
        index_name: String => "IndexName" / set_index_name,
        key_schema: Vec<KeySchemaElement> => "KeySchema" / set_key_schema,
        projection: Projection => "Projection" / set_projection,
    }
    native: aws_sdk_dynamodb::types::LocalSecondaryIndex,
        aws_sdk_dynamodb::types::builders::LocalSecondaryIndexBuilder, fallible;
}

record! {
    /// An index with its own partition and sort key.
    pub struct GlobalSecondaryIndex {
        /// Unique among all indexes of the table.
        index_name: String => "IndexName" / set_index_name,
        key_schema: Vec<KeySchemaElement> => "KeySchema" / set_key_schema,
        projection: Projection => "Projection" / set_projection,
        provisioned_throughput: ProvisionedThroughput
            => "ProvisionedThroughput" / set_provisioned_throughput,
        on_demand_throughput: OnDemandThroughput => "OnDemandThroughput" / set_on_demand_throughput,
    }
    native: aws_sdk_dynamodb::types::GlobalSecondaryIndex,
        aws_sdk_dynamodb::types::builders::GlobalSecondaryIndexBuilder, fallible;
}

record! {
    /// Replica-specific settings for one global secondary index.
    pub struct ReplicaGlobalSecondaryIndex {
        index_name: String => "IndexName" / set_index_name,
        provisioned_throughput_override: ProvisionedThroughputOverride
            => "ProvisionedThroughputOverride" / set_provisioned_throughput_override,
    }
    native: aws_sdk_dynamodb::types::ReplicaGlobalSecondaryIndex,
        aws_sdk_dynamodb::types::builders::ReplicaGlobalSecondaryIndexBuilder, fallible;
}

record! {
    /// Adds a global secondary index to an existing table.
    pub struct CreateGlobalSecondaryIndexAction {
        index_name: String => "IndexName" / set_index_name,
        key_schema: Vec<KeySchemaElement> => "KeySchema" / set_key_schema,
        projection: Projection => "Projection" / set_projection,
        provisioned_throughput: ProvisionedThroughput
            => "ProvisionedThroughput" / set_provisioned_throughput,
        on_demand_throughput: OnDemandThroughput => "OnDemandThroughput" / set_on_demand_throughput,
    }
    native: aws_sdk_dynamodb::types::CreateGlobalSecondaryIndexAction,
        aws_sdk_dynamodb::types::builders::CreateGlobalSecondaryIndexActionBuilder, fallible;
}

record! {
    /// Changes the capacity of an existing global secondary index.
    pub struct UpdateGlobalSecondaryIndexAction {
        index_name: String => "IndexName" / set_index_name,
        provisioned_throughput: ProvisionedThroughput
            => "ProvisionedThroughput" / set_provisioned_throughput,
        on_demand_throughput: OnDemandThroughput => "OnDemandThroughput" / set_on_demand_throughput,
    }
    native: aws_sdk_dynamodb::types::UpdateGlobalSecondaryIndexAction,
        aws_sdk_dynamodb::types::builders::UpdateGlobalSecondaryIndexActionBuilder, fallible;
}

record! {
    /// Removes a global secondary index.
    pub struct DeleteGlobalSecondaryIndexAction {
        index_name: String => "IndexName" / set_index_name,
    }
    native: aws_sdk_dynamodb::types::DeleteGlobalSecondaryIndexAction,
        aws_sdk_dynamodb::types::builders::DeleteGlobalSecondaryIndexActionBuilder, fallible;
}

record! {
    /// One entry of an `UpdateTable` index change list. DynamoDB expects
    /// exactly one of the three actions per entry.
    pub struct GlobalSecondaryIndexUpdate {
        create: CreateGlobalSecondaryIndexAction => "Create" / set_create,
        update: UpdateGlobalSecondaryIndexAction => "Update" / set_update,
        delete: DeleteGlobalSecondaryIndexAction => "Delete" / set_delete,
    }
    native: aws_sdk_dynamodb::types::GlobalSecondaryIndexUpdate,
        aws_sdk_dynamodb::types::builders::GlobalSecondaryIndexUpdateBuilder, infallible;
}

impl KeySchemaElement {
    /// Partition key element for `attribute_name`.
    pub fn hash(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Hash,
        }
    }

    /// Sort key element for `attribute_name`.
    pub fn range(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Range,
        }
    }
}
