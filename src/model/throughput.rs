//! Capacity settings shared by tables, indexes and replicas.
//!
//! All capacity fields use `0` as the unset sentinel. DynamoDB rejects zero
//! capacity anyway, but the consequence is that an explicit zero can never
//! reach the native object.

record! {
    /// Provisioned read and write capacity for a table or global secondary index.
    pub struct ProvisionedThroughput {
        /// Strongly consistent reads per second. Unset while `0`.
        read_capacity_units: i64 = 0 => "ReadCapacityUnits" / set_read_capacity_units,
        /// Writes per second. Unset while `0`.
        write_capacity_units: i64 = 0 => "WriteCapacityUnits" / set_write_capacity_units,
    }
    native: aws_sdk_dynamodb::types::ProvisionedThroughput,
        aws_sdk_dynamodb::types::builders::ProvisionedThroughputBuilder, fallible;
}

record! {
    /// Replica-specific read capacity. When unset the replica inherits the
    /// source table's settings.
    pub struct ProvisionedThroughputOverride {
        /// Unset while `0`.
        read_capacity_units: i64 = 0 => "ReadCapacityUnits" / set_read_capacity_units,
    }
    native: aws_sdk_dynamodb::types::ProvisionedThroughputOverride,
        aws_sdk_dynamodb::types::builders::ProvisionedThroughputOverrideBuilder, infallible;
}

record! {
    /// Request-unit ceilings for an on-demand table or index.
    ///
    /// DynamoDB accepts `-1` here to remove a ceiling, so only `0` is treated as
    /// unset.
    pub struct OnDemandThroughput {
        max_read_request_units: i64 = 0 => "MaxReadRequestUnits" / set_max_read_request_units,
        max_write_request_units: i64 = 0 => "MaxWriteRequestUnits" / set_max_write_request_units,
    }
    native: aws_sdk_dynamodb::types::OnDemandThroughput,
        aws_sdk_dynamodb::types::builders::OnDemandThroughputBuilder, infallible;
}
