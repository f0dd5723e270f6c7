//! Buffered transactional writes.
//!
//! [`TransactWriteBuffer`] collects condition checks, puts, deletes and updates and submits
//! them as `TransactWriteItems` calls of at most `flush_threshold` operations. When DynamoDB
//! cancels a transaction, the per-operation cancellation reasons are mapped back to the
//! operations that caused them and surfaced either as the caller error bound to the failed
//! operation or as a [`TransactionCanceled`] listing every reason.

mod error;
mod operation;
mod transport;

pub use error::{CancellationReason, Error, TransactionCanceled, TransactionOperationFailed};
pub use operation::{ConditionCheck, Delete, Put, Update};
pub use transport::{Cancellation, TransactWriteFailure, TransactWriteTransport};

use operation::{IntoTransactOperation, TransactOperation};

use serde::Serialize;

/// Default number of operations submitted per transaction.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 50;

/// Message used when a cancelled transaction carries none.
const UNKNOWN_MESSAGE: &str = "Unknown";

/// Configuration of a [`TransactWriteBuffer`].
///
/// ```rust
/// use dynamodb_transact::write::transact_write::TransactWriteConfig;
///
/// let config = TransactWriteConfig {
///     table_name: "users".to_string(),
///     fail_fast: false,
///     ..Default::default()
/// };
/// assert_eq!(config.flush_threshold, 50);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TransactWriteConfig {
    /// Table used by operations that do not name their own.
    ///
    /// Operations registered while both this and their own table name are empty are rejected
    /// with [`InvalidOperation::TableName`](crate::error::InvalidOperation::TableName).
    pub table_name: String,
    /// Number of buffered operations that triggers a flush, and the size of each transaction.
    ///
    /// Values below 1 are treated as 1.
    pub flush_threshold: usize,
    /// Raise the caller error of the first failed operation that has one bound.
    ///
    /// When disabled, every reason is collected into a single [`TransactionCanceled`].
    pub fail_fast: bool,
}

impl Default for TransactWriteConfig {
    fn default() -> Self {
        Self {
            table_name: String::new(),
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            fail_fast: true,
        }
    }
}

/// Accumulates transactional operations and submits them in bounded batches.
///
/// Registration methods flush the oldest `flush_threshold` operations as soon as that many
/// are pending. Whatever remains must be drained with [`close`](Self::close) or
/// [`flush_all`](Self::flush_all); [`scope`](Self::scope) does so on every exit path.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_transact::write::{
///     common::{Condition, TransactArgs},
///     transact_write::{
///         Error, Put, TransactWriteBuffer, TransactWriteConfig, TransactionOperationFailed,
///     },
/// };
/// use serde_json::json;
///
/// #[derive(Debug)]
/// enum SignupError {
///     EmailConflict(TransactionOperationFailed),
/// }
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let config = TransactWriteConfig {
///     table_name: "users".to_string(),
///     ..Default::default()
/// };
/// let buffer: TransactWriteBuffer<'_, Client, SignupError> =
///     TransactWriteBuffer::new(client, config);
/// let result = buffer
///     .scope(async |buffer| {
///         buffer
///             .put(Put {
///                 item: json!({"pk": "USER#1", "sk": "0", "name": "Bilbo Baggins"}),
///                 ..Default::default()
///             })
///             .await?;
///         buffer
///             .put(Put {
///                 item: json!({"pk": "EMAIL", "sk": "bilbo@baggins.com"}),
///                 condition: Some(Condition::new("attribute_not_exists(sk)")),
///                 transact_args: TransactArgs {
///                     error: Some(SignupError::EmailConflict),
///                     ..Default::default()
///                 },
///             })
///             .await
///     })
///     .await;
/// match result {
///     Err(Error::Operation(SignupError::EmailConflict(failed))) => {
///         println!("email taken: {}", failed.reason.code);
///     }
///     other => other.map_err(|err| format!("{err:?}"))?,
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TransactWriteBuffer<'a, W, C = TransactionOperationFailed> {
    client: &'a W,
    config: TransactWriteConfig,
    pending: Vec<TransactOperation<C>>,
}

impl<'a, W: TransactWriteTransport, C> TransactWriteBuffer<'a, W, C> {
    /// Create an empty buffer writing through `client`.
    pub fn new(client: &'a W, mut config: TransactWriteConfig) -> Self {
        config.flush_threshold = config.flush_threshold.max(1);
        Self {
            client,
            config,
            pending: Vec::new(),
        }
    }

    /// The buffer's configuration.
    pub fn config(&self) -> &TransactWriteConfig {
        &self.config
    }

    /// Number of operations waiting to be submitted.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Register a condition check.
    pub async fn condition_check<T: Serialize>(
        &mut self,
        condition_check: ConditionCheck<T, C>,
    ) -> Result<(), Error<C, W::Error>> {
        self.add_operation_and_process(condition_check).await
    }

    /// Register a put.
    pub async fn put<T: Serialize>(&mut self, put: Put<T, C>) -> Result<(), Error<C, W::Error>> {
        self.add_operation_and_process(put).await
    }

    /// Register a delete.
    pub async fn delete<T: Serialize>(
        &mut self,
        delete: Delete<T, C>,
    ) -> Result<(), Error<C, W::Error>> {
        self.add_operation_and_process(delete).await
    }

    /// Register an update.
    pub async fn update<T: Serialize>(
        &mut self,
        update: Update<T, C>,
    ) -> Result<(), Error<C, W::Error>> {
        self.add_operation_and_process(update).await
    }

    async fn add_operation_and_process(
        &mut self,
        operation: impl IntoTransactOperation<C>,
    ) -> Result<(), Error<C, W::Error>> {
        let operation = operation.into_transact_operation(&self.config.table_name)?;
        self.pending.push(operation);
        if self.pending.len() >= self.config.flush_threshold {
            self.flush().await?;
        }
        Ok(())
    }

    /// Submit the oldest `flush_threshold` pending operations as one transaction.
    ///
    /// The submitted operations leave the buffer whatever the outcome; failed flushes are not
    /// retried. Does nothing when the buffer is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_transact.flush",
            skip_all,
            fields(pending = self.pending.len(), table_name = %self.config.table_name),
        )
    )]
    pub async fn flush(&mut self) -> Result<(), Error<C, W::Error>> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let count = self.config.flush_threshold.min(self.pending.len());
        let batch: Vec<TransactOperation<C>> = self.pending.drain(..count).collect();
        let items = batch.iter().map(|operation| operation.item.clone()).collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(count, "submitting transaction");
        match self.client.transact_write(items).await {
            Ok(()) => Ok(()),
            Err(TransactWriteFailure::Cancelled(cancellation)) => {
                Err(self.map_cancellation(&batch, cancellation))
            }
            Err(TransactWriteFailure::Other(err)) => Err(Error::Transport(err)),
        }
    }

    /// Flush until no operation is pending.
    pub async fn flush_all(&mut self) -> Result<(), Error<C, W::Error>> {
        while !self.pending.is_empty() {
            self.flush().await?;
        }
        Ok(())
    }

    /// Flush every pending operation and release the buffer.
    pub async fn close(mut self) -> Result<(), Error<C, W::Error>> {
        self.flush_all().await
    }

    /// Run `f` with the buffer, then flush whatever it left pending.
    ///
    /// The pending operations are flushed whether `f` succeeded or failed. A failure while
    /// flushing is returned in place of `f`'s own result.
    pub async fn scope<F, R, X>(mut self, f: F) -> Result<R, X>
    where
        F: AsyncFnOnce(&mut Self) -> Result<R, X>,
        X: From<Error<C, W::Error>>,
    {
        let result = f(&mut self).await;
        self.flush_all().await?;
        result
    }

    fn map_cancellation(
        &self,
        batch: &[TransactOperation<C>],
        cancellation: Cancellation,
    ) -> Error<C, W::Error> {
        let message = cancellation
            .message
            .unwrap_or_else(|| UNKNOWN_MESSAGE.to_string());
        #[cfg(feature = "tracing")]
        tracing::warn!(%message, "transaction cancelled");
        let mut reasons = Vec::new();
        for (index, reason) in cancellation.reasons.into_iter().enumerate() {
            let Some(reason_message) = reason.message else {
                continue;
            };
            let Some(operation) = batch.get(index) else {
                continue;
            };
            let reason = CancellationReason {
                code: reason.code.unwrap_or_default(),
                message: reason_message,
                operation: operation.item.clone(),
                old_item: reason.item.unwrap_or_default(),
            };
            if self.config.fail_fast {
                if let Some(error) = operation.error {
                    return Error::Operation(error(TransactionOperationFailed::new(
                        message, reason,
                    )));
                }
            }
            reasons.push(reason);
        }
        Error::Cancelled(TransactionCanceled { message, reasons })
    }
}

#[cfg(feature = "tracing")]
impl<W, C> Drop for TransactWriteBuffer<'_, W, C> {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::warn!(
                pending = self.pending.len(),
                "transactional write buffer dropped with pending operations"
            );
        }
    }
}
