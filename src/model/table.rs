//! Table-level settings and the `CreateTable` / `UpdateTable` requests.

use crate::model::{
    BillingMode, GlobalSecondaryIndex, GlobalSecondaryIndexUpdate, KeySchemaElement,
    LocalSecondaryIndex, OnDemandThroughput, ProvisionedThroughput, ReplicationGroupUpdate,
    ScalarAttributeType, SseType, StreamViewType, TableClass,
};

record! {
    /// Declares the type of an attribute used in a table or index key schema.
    pub struct AttributeDefinition {
        attribute_name: String => "AttributeName" / set_attribute_name,
        attribute_type: ScalarAttributeType => "AttributeType" / set_attribute_type,
    }
    native: aws_sdk_dynamodb::types::AttributeDefinition,
        aws_sdk_dynamodb::types::builders::AttributeDefinitionBuilder, fallible;
}

record! {
    /// DynamoDB Streams settings.
    ///
    /// `stream_enabled` is a boolean whose unset value is `false`, so this
    /// record cannot express "explicitly disable the stream".
    pub struct StreamSpecification {
        stream_enabled: bool => "StreamEnabled" / set_stream_enabled,
        stream_view_type: StreamViewType => "StreamViewType" / set_stream_view_type,
    }
    native: aws_sdk_dynamodb::types::StreamSpecification,
        aws_sdk_dynamodb::types::builders::StreamSpecificationBuilder, fallible;
}

record! {
    /// Server-side encryption settings.
    pub struct SseSpecification {
        /// `false` reads as unset, which DynamoDB treats as AWS-owned key encryption.
        enabled: bool => "Enabled" / set_enabled,
        sse_type: SseType => "SSEType" / set_sse_type,
        kms_master_key_id: String => "KMSMasterKeyId" / set_kms_master_key_id,
    }
    native: aws_sdk_dynamodb::types::SseSpecification,
        aws_sdk_dynamodb::types::builders::SseSpecificationBuilder, infallible;
}

record! {
    /// A key-value label attached to a table.
    pub struct Tag {
        key: String => "Key" / set_key,
        value: String => "Value" / set_value,
    }
    native: aws_sdk_dynamodb::types::Tag, aws_sdk_dynamodb::types::builders::TagBuilder, fallible;
}

record! {
    /// Parameters of a `CreateTable` request.
    pub struct CreateTableRequest {
        table_name: String => "TableName" / set_table_name,
        attribute_definitions: Vec<AttributeDefinition>
            => "AttributeDefinitions" / set_attribute_definitions,
        key_schema: Vec<KeySchemaElement> => "KeySchema" / set_key_schema,
        local_secondary_indexes: Vec<LocalSecondaryIndex>
            => "LocalSecondaryIndexes" / set_local_secondary_indexes,
        global_secondary_indexes: Vec<GlobalSecondaryIndex>
            => "GlobalSecondaryIndexes" / set_global_secondary_indexes,
        billing_mode: BillingMode => "BillingMode" / set_billing_mode,
        provisioned_throughput: ProvisionedThroughput
            => "ProvisionedThroughput" / set_provisioned_throughput,
        on_demand_throughput: OnDemandThroughput => "OnDemandThroughput" / set_on_demand_throughput,
        stream_specification: StreamSpecification
            => "StreamSpecification" / set_stream_specification,
        sse_specification: SseSpecification => "SSESpecification" / set_sse_specification,
        tags: Vec<Tag> => "Tags" / set_tags,
        table_class: TableClass => "TableClass" / set_table_class,
        /// `false` reads as unset; the service default is also `false`.
        deletion_protection_enabled: bool
            => "DeletionProtectionEnabled" / set_deletion_protection_enabled,
    }
    native: aws_sdk_dynamodb::operation::create_table::CreateTableInput,
        aws_sdk_dynamodb::operation::create_table::builders::CreateTableInputBuilder, fallible;
}

record! {
    /// Parameters of an `UpdateTable` request.
    pub struct UpdateTableRequest {
        table_name: String => "TableName" / set_table_name,
        attribute_definitions: Vec<AttributeDefinition>
            => "AttributeDefinitions" / set_attribute_definitions,
        billing_mode: BillingMode => "BillingMode" / set_billing_mode,
        provisioned_throughput: ProvisionedThroughput
            => "ProvisionedThroughput" / set_provisioned_throughput,
        on_demand_throughput: OnDemandThroughput => "OnDemandThroughput" / set_on_demand_throughput,
        global_secondary_index_updates: Vec<GlobalSecondaryIndexUpdate>
            => "GlobalSecondaryIndexUpdates" / set_global_secondary_index_updates,
        stream_specification: StreamSpecification
            => "StreamSpecification" / set_stream_specification,
        sse_specification: SseSpecification => "SSESpecification" / set_sse_specification,
        replica_updates: Vec<ReplicationGroupUpdate> => "ReplicaUpdates" / set_replica_updates,
        table_class: TableClass => "TableClass" / set_table_class,
        /// `false` reads as unset, so protection cannot be switched off
        /// through this record.
        deletion_protection_enabled: bool
            => "DeletionProtectionEnabled" / set_deletion_protection_enabled,
    }
    native: aws_sdk_dynamodb::operation::update_table::UpdateTableInput,
        aws_sdk_dynamodb::operation::update_table::builders::UpdateTableInputBuilder, fallible;
}

impl AttributeDefinition {
    pub fn new(attribute_name: impl Into<String>, attribute_type: ScalarAttributeType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
        }
    }
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CreateTableRequest {
    /// A request for `table_name` keyed by string attributes, billed per request.
    pub fn new(
        table_name: impl Into<String>,
        partition_key: impl Into<String>,
        sort_key: Option<&str>,
    ) -> Self {
        let partition_key = partition_key.into();
        let mut request = Self {
            table_name: table_name.into(),
            attribute_definitions: vec![AttributeDefinition::new(
                partition_key.clone(),
                ScalarAttributeType::S,
            )],
            key_schema: vec![KeySchemaElement::hash(partition_key)],
            billing_mode: BillingMode::PayPerRequest,
            ..Self::default()
        };

        if let Some(sort_key) = sort_key {
            request
                .attribute_definitions
                .push(AttributeDefinition::new(sort_key, ScalarAttributeType::S));
            request.key_schema.push(KeySchemaElement::range(sort_key));
        }

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KeyType, Record};

    #[test]
    fn test_create_table_request_new() {
        let request = CreateTableRequest::new("products", "category", Some("product_name"));

        assert_eq!(request.table_name, "products");
        assert_eq!(request.key_schema.len(), 2);
        assert_eq!(request.key_schema[0].key_type, KeyType::Hash);
        assert_eq!(request.key_schema[1].attribute_name, "product_name");
        assert_eq!(request.attribute_definitions.len(), 2);
        assert_eq!(request.billing_mode, BillingMode::PayPerRequest);
        assert!(request.provisioned_throughput.is_empty());
    }

    #[test]
    fn test_create_table_request_without_sort_key() {
        let request = CreateTableRequest::new("users", "user_id", None);
        assert_eq!(request.key_schema, vec![KeySchemaElement::hash("user_id")]);
    }

    #[test]
    fn test_false_boolean_is_unset() {
        let mut stream = StreamSpecification::default();
        assert!(stream.is_empty());
        stream.stream_enabled = true;
        assert!(!stream.is_empty());
        stream.stream_enabled = false;
        assert!(stream.is_empty());
    }

    #[test]
    fn test_update_request_from_json() {
        let request: UpdateTableRequest = serde_json::from_str(
            r#"{
                "table_name": "products",
                "replica_updates": [
                    { "create": { "region_name": "us-east-1" } },
                    { "delete": { "region_name": "eu-west-1" } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.replica_updates.len(), 2);
        assert!(request.replica_updates[0].delete.is_empty());
        assert_eq!(request.replica_updates[1].delete.region_name, "eu-west-1");
        assert!(request.sse_specification.is_empty());
    }
}
