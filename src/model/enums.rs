//! Wire enumerations used by the request records.
//!
//! Every enumeration starts at `NotSet`, the unset value; any other variant is
//! passed to the native object as its DynamoDB wire string.

wire_enum! {
    /// Role of a key attribute.
    pub enum KeyType => aws_sdk_dynamodb::types::KeyType {
        /// Partition key.
        Hash = "HASH",
        /// Sort key.
        Range = "RANGE",
    }
}

wire_enum! {
    /// Data type of a key attribute.
    pub enum ScalarAttributeType => aws_sdk_dynamodb::types::ScalarAttributeType {
        /// String.
        S = "S",
        /// Number.
        N = "N",
        /// Binary.
        B = "B",
    }
}

wire_enum! {
    /// Attributes copied into a secondary index.
    pub enum ProjectionType => aws_sdk_dynamodb::types::ProjectionType {
        All = "ALL",
        KeysOnly = "KEYS_ONLY",
        /// Keys plus the attributes listed in `non_key_attributes`.
        Include = "INCLUDE",
    }
}

wire_enum! {
    /// How read and write throughput is charged.
    pub enum BillingMode => aws_sdk_dynamodb::types::BillingMode {
        Provisioned = "PROVISIONED",
        PayPerRequest = "PAY_PER_REQUEST",
    }
}

wire_enum! {
    /// What a stream record carries when an item is modified.
    pub enum StreamViewType => aws_sdk_dynamodb::types::StreamViewType {
        NewImage = "NEW_IMAGE",
        OldImage = "OLD_IMAGE",
        NewAndOldImages = "NEW_AND_OLD_IMAGES",
        KeysOnly = "KEYS_ONLY",
    }
}

wire_enum! {
    /// Server-side encryption type.
    pub enum SseType => aws_sdk_dynamodb::types::SseType {
        Aes256 = "AES256",
        Kms = "KMS",
    }
}

wire_enum! {
    pub enum TableClass => aws_sdk_dynamodb::types::TableClass {
        Standard = "STANDARD",
        StandardInfrequentAccess = "STANDARD_INFREQUENT_ACCESS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumField;

    #[test]
    fn test_not_set_is_default() {
        assert_eq!(KeyType::default(), KeyType::NotSet);
        assert_eq!(KeyType::NotSet.as_str(), None);
        assert!(!BillingMode::default().is_set());
    }

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("RANGE".parse::<KeyType>(), Ok(KeyType::Range));
        assert_eq!("".parse::<KeyType>(), Ok(KeyType::NotSet));
        assert_eq!(
            "NEW_AND_OLD_IMAGES".parse::<StreamViewType>(),
            Ok(StreamViewType::NewAndOldImages)
        );

        let err = "range".parse::<KeyType>().unwrap_err();
        assert_eq!(err.type_name, "KeyType");
        assert_eq!(err.expected, &["HASH", "RANGE"]);
    }

    #[test]
    fn test_enum_field_roundtrip() {
        let mut sse = SseType::default();
        sse.set_wire_value("KMS").unwrap();
        assert_eq!(sse.wire_value(), Some("KMS"));
        assert_eq!(sse.to_string(), "KMS");
        sse.unset();
        assert_eq!(sse, SseType::NotSet);
        assert!(sse.set_wire_value("DES").is_err());
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&ProjectionType::KeysOnly).unwrap();
        assert_eq!(json, "\"KEYS_ONLY\"");
        let parsed: TableClass = serde_json::from_str("\"STANDARD_INFREQUENT_ACCESS\"").unwrap();
        assert_eq!(parsed, TableClass::StandardInfrequentAccess);
    }
}
