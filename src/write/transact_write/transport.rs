use aws_sdk_dynamodb::{
    Client, error,
    operation::transact_write_items::TransactWriteItemsError,
    types,
};

/// Cancellation reported by the transport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cancellation {
    /// Top-level message of the cancelled transaction.
    pub message: Option<String>,
    /// One reason per submitted operation, aligned by index.
    ///
    /// Operations that did not fail carry a reason without message.
    pub reasons: Vec<types::CancellationReason>,
}

/// Failure of a transactional write.
#[derive(Debug)]
pub enum TransactWriteFailure<E> {
    /// The transaction was cancelled.
    Cancelled(Cancellation),
    /// Anything else, passed through unchanged.
    Other(E),
}

/// Something able to submit an atomic batch of write operations.
///
/// Implemented for [`Client`]; implement it to route writes elsewhere or to test code that
/// uses the write buffer.
pub trait TransactWriteTransport {
    /// Transport failures other than cancellation.
    type Error;

    /// Submit the items as one transaction.
    fn transact_write(
        &self,
        items: Vec<types::TransactWriteItem>,
    ) -> impl Future<Output = Result<(), TransactWriteFailure<Self::Error>>> + Send;
}

impl From<&types::error::TransactionCanceledException> for Cancellation {
    fn from(cancelled: &types::error::TransactionCanceledException) -> Self {
        Self {
            message: cancelled.message().map(ToOwned::to_owned),
            reasons: cancelled.cancellation_reasons().to_vec(),
        }
    }
}

/// The cancellation carried by a service error, if it is one.
fn cancellation(err: &TransactWriteItemsError) -> Option<Cancellation> {
    match err {
        TransactWriteItemsError::TransactionCanceledException(cancelled) => Some(cancelled.into()),
        _ => None,
    }
}

impl TransactWriteTransport for Client {
    type Error = error::SdkError<TransactWriteItemsError>;

    async fn transact_write(
        &self,
        items: Vec<types::TransactWriteItem>,
    ) -> Result<(), TransactWriteFailure<Self::Error>> {
        let result = self
            .transact_write_items()
            .set_transact_items(Some(items))
            .send()
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let cancelled = err.as_service_error().and_then(cancellation);
                match cancelled {
                    Some(cancelled) => Err(TransactWriteFailure::Cancelled(cancelled)),
                    None => Err(TransactWriteFailure::Other(err)),
                }
            }
        }
    }
}
