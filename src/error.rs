use aws_sdk_dynamodb::error::BuildError;
use thiserror::Error;

/// An operation whose value cannot be used the way it was requested.
///
/// Raised synchronously when an update action or a transactional operation is built,
/// never deferred to the moment the write reaches DynamoDB.
#[derive(Debug, Error)]
pub enum InvalidOperation {
    /// ADD was given something other than a number or a set.
    #[error("ADD action on `{0}` supports only number and set data types")]
    Add(String),
    /// DELETE was given something other than a set.
    #[error("DELETE action on `{0}` supports only set data types")]
    Delete(String),
    /// An arithmetic operand did not serialize to a number.
    #[error("arithmetic operand on `{0}` must be a number")]
    Operand(String),
    /// Neither the operation nor the buffer names a table.
    #[error("transactional operation has no table name")]
    TableName,
    /// A value could not be converted to its DynamoDB representation.
    #[error(transparent)]
    Serialization(#[from] serde_dynamo::Error),
    /// The SDK rejected the assembled request.
    #[error(transparent)]
    Build(#[from] BuildError),
}
