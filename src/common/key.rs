use crate::common::codec;

use serde::Serialize;
use serde_dynamo::{Error, Result};

/// Key component.
///
/// ```rust
/// use dynamodb_transact::common::key;
///
/// let key = key::Key {
///     name: "pk".to_string(),
///     value: "EMAIL".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

/// Primary key (partition key and optional sort key).
///
/// ```rust
/// use dynamodb_transact::common::key;
///
/// let keys = key::Keys {
///     partition_key: key::Key {
///         name: "pk".to_string(),
///         value: "EMAIL".to_string(),
///     },
///     sort_key: Some(key::Key {
///         name: "sk".to_string(),
///         value: "bilbo@baggins.com".to_string(),
///     }),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys<T> {
    /// The partition key (required).
    pub partition_key: Key<T>,
    /// The sort key (optional, only for tables with composite primary keys).
    pub sort_key: Option<Key<T>>,
}

impl<T: Serialize> TryFrom<Keys<T>> for codec::Item {
    type Error = Error;

    fn try_from(keys: Keys<T>) -> Result<Self> {
        let partition_key_value = codec::to_wire_value(keys.partition_key.value)?;
        let mut item = Self::from([(keys.partition_key.name, partition_key_value)]);
        if let Some(sort_key) = keys.sort_key {
            let sort_key_value = codec::to_wire_value(sort_key.value)?;
            item.insert(sort_key.name, sort_key_value);
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::partition_key_only(
        Keys {
            partition_key: Key {
                name: "pk".to_string(),
                value: Value::String(
                    "EMAIL".to_string()
                ),
            },
            ..Default::default()
        },
        codec::Item::from(
            [(
                "pk".to_string(),
                types::AttributeValue::S(
                    "EMAIL".to_string()
                ),
            )]
        )
    )]
    #[case::partition_key_and_sort_key(
        Keys {
            partition_key: Key {
                name: "pk".to_string(),
                value: Value::String(
                    "EMAIL".to_string()
                ),
            },
            sort_key: Some(
                Key {
                    name: "sk".to_string(),
                    value: Value::Number(
                        7.into()
                    ),
                }
            ),
        },
        codec::Item::from(
            [
                (
                    "pk".to_string(),
                    types::AttributeValue::S(
                        "EMAIL".to_string()
                    )
                ),
                (
                    "sk".to_string(),
                    types::AttributeValue::N(
                        "7".to_string()
                    )
                ),
            ]
        )
    )]
    fn test_keys_to_item(#[case] keys: Keys<Value>, #[case] expected: codec::Item) {
        let actual: codec::Item = keys.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
