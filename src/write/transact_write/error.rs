use crate::{common::codec, error::InvalidOperation};

use aws_sdk_dynamodb::types;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why one operation of a cancelled transaction failed.
#[derive(Clone, Debug, PartialEq)]
pub struct CancellationReason {
    /// Cancellation code reported by DynamoDB, such as `ConditionalCheckFailed`.
    pub code: String,
    /// Cancellation message reported by DynamoDB.
    pub message: String,
    /// The operation that failed, as it was submitted.
    pub operation: types::TransactWriteItem,
    /// The item as it was when the operation failed, kept in its DynamoDB representation.
    ///
    /// Empty unless the operation asked for `ALL_OLD` on condition check failure. Decode it
    /// with [`decode_old_item`](Self::decode_old_item).
    pub old_item: codec::Item,
}

impl CancellationReason {
    /// Decode [`old_item`](Self::old_item) into a Rust value.
    pub fn decode_old_item<T: DeserializeOwned>(&self) -> serde_dynamo::Result<T> {
        codec::from_wire_item(self.old_item.clone())
    }
}

/// A single operation caused a transaction to be cancelled.
///
/// This is the `(message, reason)` pair handed to the error constructor bound to the
/// operation. Wrap it in your own error type to tell failures apart:
///
/// ```rust
/// use dynamodb_transact::write::transact_write::TransactionOperationFailed;
///
/// #[derive(Debug)]
/// enum SignupError {
///     EmailConflict(TransactionOperationFailed),
///     UsernameConflict(TransactionOperationFailed),
/// }
///
/// let email_conflict: fn(TransactionOperationFailed) -> SignupError = SignupError::EmailConflict;
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct TransactionOperationFailed {
    /// Message of the cancelled transaction.
    pub message: String,
    /// Why this operation failed.
    pub reason: CancellationReason,
}

impl TransactionOperationFailed {
    /// Pair a transaction message with the reason of one of its operations.
    pub fn new(message: impl Into<String>, reason: CancellationReason) -> Self {
        Self {
            message: message.into(),
            reason,
        }
    }
}

/// A transaction was cancelled and no bound error type claimed the failure.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct TransactionCanceled {
    /// Message of the cancelled transaction.
    pub message: String,
    /// Reasons of every failed operation, in submission order.
    pub reasons: Vec<CancellationReason>,
}

/// Errors raised by the transactional write buffer.
///
/// `C` is the caller's error type produced by the constructors bound to operations, `E` the
/// transport's own error type.
#[derive(Debug, Error)]
pub enum Error<C, E> {
    /// An operation could not be built.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),
    /// The transaction was cancelled by an operation bound to a caller error.
    #[error("{0}")]
    Operation(C),
    /// The transaction was cancelled.
    #[error(transparent)]
    Cancelled(TransactionCanceled),
    /// The transport failed for any other reason.
    #[error("{0}")]
    Transport(E),
}
