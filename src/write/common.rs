use crate::{common, error::InvalidOperation, write::transact_write::TransactionOperationFailed};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use std::{collections, fmt};

/// Condition expression together with the placeholders it references.
///
/// ```rust
/// use dynamodb_transact::write::common::Condition;
///
/// # fn example() -> Result<(), dynamodb_transact::error::InvalidOperation> {
/// let condition = Condition::new("attribute_not_exists(#sk) OR #status = :status")
///     .name("#sk", "sk")
///     .name("#status", "status")
///     .value(":status", "pending")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Condition {
    /// The condition expression text.
    pub expression: String,
    /// Name placeholders used by the expression.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Value placeholders used by the expression, already in DynamoDB representation.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl Condition {
    /// Create a condition without placeholders.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..Default::default()
        }
    }

    /// Bind a name placeholder.
    pub fn name(mut self, placeholder: impl Into<String>, name: impl Into<String>) -> Self {
        self.expression_attribute_names
            .insert(placeholder.into(), name.into());
        self
    }

    /// Bind a value placeholder, converting the value through the codec.
    pub fn value<T: Serialize>(
        mut self,
        placeholder: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        let value = common::codec::to_wire_value(value)?;
        self.expression_attribute_values
            .insert(placeholder.into(), value);
        Ok(self)
    }
}

impl From<Condition> for common::ExpressionInput {
    fn from(condition: Condition) -> Self {
        Self {
            expression: condition.expression,
            expression_attribute_names: condition.expression_attribute_names,
            expression_attribute_values: condition.expression_attribute_values,
        }
    }
}

/// Builds the caller error for a cancelled operation.
pub type ErrorConstructor<C> = fn(TransactionOperationFailed) -> C;

/// Arguments common to all transactional operations (ConditionCheck, Put, Delete, Update).
pub struct TransactArgs<C = TransactionOperationFailed> {
    /// Error to raise when the transaction is cancelled because of this operation.
    ///
    /// Consulted only on cancellation. With fail-fast enabled, the first cancelled operation
    /// carrying a constructor short-circuits the flush with the value it builds.
    pub error: Option<ErrorConstructor<C>>,
    /// Which item attributes to return if the condition check fails.
    ///
    /// Defaults to `NONE`. Use `ALL_OLD` to receive the conflicting item in the
    /// cancellation reason.
    pub return_values_on_condition_check_failure:
        Option<types::ReturnValuesOnConditionCheckFailure>,
    /// Destination table, overriding the buffer's table.
    pub table_name: Option<String>,
}

impl<C> Default for TransactArgs<C> {
    fn default() -> Self {
        Self {
            error: None,
            return_values_on_condition_check_failure: None,
            table_name: None,
        }
    }
}

impl<C> Clone for TransactArgs<C> {
    fn clone(&self) -> Self {
        Self {
            error: self.error,
            return_values_on_condition_check_failure: self
                .return_values_on_condition_check_failure
                .clone(),
            table_name: self.table_name.clone(),
        }
    }
}

impl<C> fmt::Debug for TransactArgs<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactArgs")
            .field("error", &self.error.is_some())
            .field(
                "return_values_on_condition_check_failure",
                &self.return_values_on_condition_check_failure,
            )
            .field("table_name", &self.table_name)
            .finish()
    }
}

/// Internal representation of transactional operation parameters.
///
/// Holds the resolved condition, placeholder maps and destination table, ready to be
/// applied to one of the SDK's transactional builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WriteInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) return_values_on_condition_check_failure:
        Option<types::ReturnValuesOnConditionCheckFailure>,
    pub(crate) table_name: String,
}

impl WriteInput {
    pub(crate) fn new<C>(
        condition: Option<Condition>,
        transact_args: &TransactArgs<C>,
        default_table_name: &str,
    ) -> Result<Self, InvalidOperation> {
        let mut write_input = Self {
            return_values_on_condition_check_failure: Some(
                transact_args
                    .return_values_on_condition_check_failure
                    .clone()
                    .unwrap_or(types::ReturnValuesOnConditionCheckFailure::None),
            ),
            table_name: transact_args
                .table_name
                .clone()
                .unwrap_or_else(|| default_table_name.to_string()),
            ..Default::default()
        };
        if let Some(condition) = condition {
            let condition_expression = write_input.merge_expression(condition.into());
            write_input.condition_expression = Some(condition_expression);
        }
        if write_input.table_name.is_empty() {
            return Err(InvalidOperation::TableName);
        }
        Ok(write_input)
    }

    /// Merge an expression operation into this write input.
    pub(crate) fn merge_expression(&mut self, operation: common::ExpressionInput) -> String {
        operation.merge_into(
            &mut self.expression_attribute_names,
            &mut self.expression_attribute_values,
        )
    }
}

/// apply common write input settings to a transactional builder
macro_rules! apply_write_input {
    ($builder:expr, $write_input:expr) => {
        $builder
            .set_condition_expression($write_input.condition_expression)
            .set_expression_attribute_names($write_input.expression_attribute_names)
            .set_expression_attribute_values($write_input.expression_attribute_values)
            .set_return_values_on_condition_check_failure(
                $write_input.return_values_on_condition_check_failure,
            )
            .table_name($write_input.table_name)
    };
}

pub(crate) use apply_write_input;
