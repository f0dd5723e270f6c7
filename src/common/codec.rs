use aws_sdk_dynamodb::{primitives::Blob, types};
use indexmap::IndexSet;
use serde::{Serialize, de::DeserializeOwned};
use serde_dynamo::{Result, from_item, to_attribute_value, to_item};
use std::collections;

/// An item as DynamoDB sees it: attribute names to attribute values.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Convert a value to its DynamoDB representation.
///
/// Anything implementing [`Serialize`] is accepted; dates, UUIDs and IP addresses end up as
/// strings through their own `Serialize` impls. Non-empty sequences whose elements are all
/// strings, all numbers or all binaries become the matching set type, so a `Vec<String>` or
/// a `BTreeSet<String>` is written as `SS`. Mixed sequences, and sequences holding maps,
/// lists, booleans or nulls, stay lists.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_transact::common::codec;
///
/// let value = codec::to_wire_value(vec!["a", "b", "a"]).unwrap();
/// assert_eq!(
///     value,
///     AttributeValue::Ss(vec!["a".to_string(), "b".to_string()])
/// );
/// ```
pub fn to_wire_value<T: Serialize>(value: T) -> Result<types::AttributeValue> {
    let value: types::AttributeValue = to_attribute_value(value)?;
    Ok(normalize(value))
}

/// Convert a value like [`to_wire_value`], except that a top-level sequence stays a list.
///
/// Used where DynamoDB requires a list, such as `list_append`.
pub fn to_wire_list<T: Serialize>(value: T) -> Result<types::AttributeValue> {
    let value: types::AttributeValue = to_attribute_value(value)?;
    let value = match value {
        types::AttributeValue::L(values) => {
            types::AttributeValue::L(values.into_iter().map(normalize).collect())
        }
        value => normalize(value),
    };
    Ok(value)
}

/// Convert a map-like value to a DynamoDB item, applying the same rules as [`to_wire_value`]
/// to every attribute.
pub fn to_wire_item<T: Serialize>(item: T) -> Result<Item> {
    let item: Item = to_item(item)?;
    let item = item
        .into_iter()
        .map(|(name, value)| (name, normalize(value)))
        .collect();
    Ok(item)
}

/// Convert a DynamoDB item back into a Rust value.
pub fn from_wire_item<T: DeserializeOwned>(item: Item) -> Result<T> {
    from_item(item)
}

/// Whether the value is the wire form of "no value".
pub(crate) fn is_null(value: &types::AttributeValue) -> bool {
    matches!(value, types::AttributeValue::Null(_))
}

/// Whether the value is one of the three set types.
pub(crate) fn is_set(value: &types::AttributeValue) -> bool {
    matches!(
        value,
        types::AttributeValue::Ss(_) | types::AttributeValue::Ns(_) | types::AttributeValue::Bs(_)
    )
}

/// Whether the value is a number.
pub(crate) fn is_number(value: &types::AttributeValue) -> bool {
    matches!(value, types::AttributeValue::N(_))
}

fn normalize(value: types::AttributeValue) -> types::AttributeValue {
    match value {
        types::AttributeValue::L(values) => {
            let values = values.into_iter().map(normalize).collect();
            into_set_or_list(values)
        }
        types::AttributeValue::M(map) => {
            let map = map
                .into_iter()
                .map(|(name, value)| (name, normalize(value)))
                .collect();
            types::AttributeValue::M(map)
        }
        value => value,
    }
}

fn into_set_or_list(values: Vec<types::AttributeValue>) -> types::AttributeValue {
    if values.is_empty() {
        return types::AttributeValue::L(values);
    }
    if values
        .iter()
        .all(|value| matches!(value, types::AttributeValue::S(_)))
    {
        let set: IndexSet<String> = values
            .into_iter()
            .filter_map(|value| match value {
                types::AttributeValue::S(value) => Some(value),
                _ => None,
            })
            .collect();
        return types::AttributeValue::Ss(set.into_iter().collect());
    }
    if values.iter().all(is_number) {
        let set: IndexSet<String> = values
            .into_iter()
            .filter_map(|value| match value {
                types::AttributeValue::N(value) => Some(value),
                _ => None,
            })
            .collect();
        return types::AttributeValue::Ns(set.into_iter().collect());
    }
    if values
        .iter()
        .all(|value| matches!(value, types::AttributeValue::B(_)))
    {
        let set: IndexSet<Vec<u8>> = values
            .into_iter()
            .filter_map(|value| match value {
                types::AttributeValue::B(value) => Some(value.into_inner()),
                _ => None,
            })
            .collect();
        return types::AttributeValue::Bs(set.into_iter().map(Blob::new).collect());
    }
    types::AttributeValue::L(values)
}
