//! Replica management actions for global tables (version 2019.11.21).

use crate::model::{ProvisionedThroughputOverride, ReplicaGlobalSecondaryIndex};

record! {
    /// Adds a replica of the table in a new Region.
    pub struct CreateReplicationGroupMemberAction {
        /// The Region where the new replica will be created.
        region_name: String => "RegionName" / set_region_name,
        /// KMS key for the replica. Only needed when it differs from the default
        /// DynamoDB key `alias/aws/dynamodb`.
        kms_master_key_id: String => "KMSMasterKeyId" / set_kms_master_key_id,
        /// When unset the replica uses the source table's throughput.
        provisioned_throughput_override: ProvisionedThroughputOverride
            => "ProvisionedThroughputOverride" / set_provisioned_throughput_override,
        global_secondary_indexes: Vec<ReplicaGlobalSecondaryIndex>
            => "GlobalSecondaryIndexes" / set_global_secondary_indexes,
    }
    native: aws_sdk_dynamodb::types::CreateReplicationGroupMemberAction,
        aws_sdk_dynamodb::types::builders::CreateReplicationGroupMemberActionBuilder, fallible;
}

record! {
    /// Changes the settings of an existing replica.
    pub struct UpdateReplicationGroupMemberAction {
        /// The Region where the replica exists.
        region_name: String => "RegionName" / set_region_name,
        kms_master_key_id: String => "KMSMasterKeyId" / set_kms_master_key_id,
        provisioned_throughput_override: ProvisionedThroughputOverride
            => "ProvisionedThroughputOverride" / set_provisioned_throughput_override,
        global_secondary_indexes: Vec<ReplicaGlobalSecondaryIndex>
            => "GlobalSecondaryIndexes" / set_global_secondary_indexes,
    }
    native: aws_sdk_dynamodb::types::UpdateReplicationGroupMemberAction,
        aws_sdk_dynamodb::types::builders::UpdateReplicationGroupMemberActionBuilder, fallible;
}

record! {
    /// Removes the replica in the given Region.
    pub struct DeleteReplicationGroupMemberAction {
        region_name: String => "RegionName" / set_region_name,
    }
    native: aws_sdk_dynamodb::types::DeleteReplicationGroupMemberAction,
        aws_sdk_dynamodb::types::builders::DeleteReplicationGroupMemberActionBuilder, fallible;
}

record! {
    /// One entry of an `UpdateTable` replica change list.
    pub struct ReplicationGroupUpdate {
        create: CreateReplicationGroupMemberAction => "Create" / set_create,
        update: UpdateReplicationGroupMemberAction => "Update" / set_update,
        delete: DeleteReplicationGroupMemberAction => "Delete" / set_delete,
    }
    native: aws_sdk_dynamodb::types::ReplicationGroupUpdate,
        aws_sdk_dynamodb::types::builders::ReplicationGroupUpdateBuilder, infallible;
}

impl ReplicationGroupUpdate {
    pub fn create(action: CreateReplicationGroupMemberAction) -> Self {
        Self {
            create: action,
            ..Self::default()
        }
    }

    pub fn update(action: UpdateReplicationGroupMemberAction) -> Self {
        Self {
            update: action,
            ..Self::default()
        }
    }

    pub fn delete(region_name: impl Into<String>) -> Self {
        Self {
            delete: DeleteReplicationGroupMemberAction {
                region_name: region_name.into(),
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_region_only_action_is_not_empty() {
        let action = CreateReplicationGroupMemberAction {
            region_name: "us-east-1".to_string(),
            ..CreateReplicationGroupMemberAction::default()
        };
        assert!(!action.is_empty());
        assert!(action.provisioned_throughput_override.is_empty());
    }

    #[test]
    fn test_update_constructors_fill_one_action() {
        let update = ReplicationGroupUpdate::delete("eu-west-1");
        assert!(update.create.is_empty());
        assert!(update.update.is_empty());
        assert_eq!(update.delete.region_name, "eu-west-1");
    }
}
