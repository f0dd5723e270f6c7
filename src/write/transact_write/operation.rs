use crate::{
    common::{self, codec},
    error::InvalidOperation,
    write::{
        self,
        common::{Condition, ErrorConstructor, TransactArgs},
        transact_write::TransactionOperationFailed,
        update_expression::UpdateExpression,
    },
};

use aws_sdk_dynamodb::types;
use serde::Serialize;

/// Condition check: the transaction only succeeds if the condition holds for the item.
///
/// ```rust
/// use dynamodb_transact::{common, write};
///
/// let check: write::transact_write::ConditionCheck<&str> = write::transact_write::ConditionCheck {
///     keys: common::key::Keys {
///         partition_key: common::key::Key {
///             name: "pk".to_string(),
///             value: "USER#1",
///         },
///         ..Default::default()
///     },
///     condition: write::common::Condition::new("attribute_exists(pk)"),
///     transact_args: Default::default(),
/// };
/// ```
#[derive(Debug)]
pub struct ConditionCheck<T, C = TransactionOperationFailed> {
    /// The primary key of the item to check.
    pub keys: common::key::Keys<T>,
    /// The condition that must hold.
    pub condition: Condition,
    /// Additional transactional arguments (error, return values, table).
    pub transact_args: TransactArgs<C>,
}

/// Put: create or replace an item.
#[derive(Debug)]
pub struct Put<T, C = TransactionOperationFailed> {
    /// The item to put into the table.
    pub item: T,
    /// Condition that must hold for the put to proceed.
    pub condition: Option<Condition>,
    /// Additional transactional arguments (error, return values, table).
    pub transact_args: TransactArgs<C>,
}

/// Delete: remove an item by its primary key.
#[derive(Debug)]
pub struct Delete<T, C = TransactionOperationFailed> {
    /// The primary key of the item to delete.
    pub keys: common::key::Keys<T>,
    /// Condition that must hold for the delete to proceed.
    pub condition: Option<Condition>,
    /// Additional transactional arguments (error, return values, table).
    pub transact_args: TransactArgs<C>,
}

/// Update: modify an item's attributes.
#[derive(Debug)]
pub struct Update<T, C = TransactionOperationFailed> {
    /// The primary key of the item to update.
    pub keys: common::key::Keys<T>,
    /// The update expression; its placeholders are merged with the condition's.
    pub update_expression: UpdateExpression,
    /// Condition that must hold for the update to proceed.
    pub condition: Option<Condition>,
    /// Additional transactional arguments (error, return values, table).
    pub transact_args: TransactArgs<C>,
}

impl<T: Default, C> Default for ConditionCheck<T, C> {
    fn default() -> Self {
        Self {
            keys: Default::default(),
            condition: Default::default(),
            transact_args: Default::default(),
        }
    }
}

impl<T: Default, C> Default for Put<T, C> {
    fn default() -> Self {
        Self {
            item: Default::default(),
            condition: None,
            transact_args: Default::default(),
        }
    }
}

impl<T: Default, C> Default for Delete<T, C> {
    fn default() -> Self {
        Self {
            keys: Default::default(),
            condition: None,
            transact_args: Default::default(),
        }
    }
}

impl<T: Default, C> Default for Update<T, C> {
    fn default() -> Self {
        Self {
            keys: Default::default(),
            update_expression: Default::default(),
            condition: None,
            transact_args: Default::default(),
        }
    }
}

/// An operation waiting in the buffer.
#[derive(Debug)]
pub(crate) struct TransactOperation<C> {
    pub(crate) item: types::TransactWriteItem,
    pub(crate) error: Option<ErrorConstructor<C>>,
}

/// Resolve a transactional operation against the buffer's table.
pub(crate) trait IntoTransactOperation<C> {
    fn into_transact_operation(
        self,
        default_table_name: &str,
    ) -> Result<TransactOperation<C>, InvalidOperation>;
}

impl<T: Serialize, C> IntoTransactOperation<C> for ConditionCheck<T, C> {
    fn into_transact_operation(
        self,
        default_table_name: &str,
    ) -> Result<TransactOperation<C>, InvalidOperation> {
        let keys: codec::Item = self.keys.try_into()?;
        let write_input =
            write::common::WriteInput::new(Some(self.condition), &self.transact_args, default_table_name)?;
        let builder = types::ConditionCheck::builder().set_key(Some(keys));
        let condition_check = write::common::apply_write_input!(builder, write_input).build()?;
        let item = types::TransactWriteItem::builder()
            .condition_check(condition_check)
            .build();
        Ok(TransactOperation {
            item,
            error: self.transact_args.error,
        })
    }
}

impl<T: Serialize, C> IntoTransactOperation<C> for Put<T, C> {
    fn into_transact_operation(
        self,
        default_table_name: &str,
    ) -> Result<TransactOperation<C>, InvalidOperation> {
        let item = codec::to_wire_item(self.item)?;
        let write_input =
            write::common::WriteInput::new(self.condition, &self.transact_args, default_table_name)?;
        let builder = types::Put::builder().set_item(Some(item));
        let put = write::common::apply_write_input!(builder, write_input).build()?;
        let item = types::TransactWriteItem::builder().put(put).build();
        Ok(TransactOperation {
            item,
            error: self.transact_args.error,
        })
    }
}

impl<T: Serialize, C> IntoTransactOperation<C> for Delete<T, C> {
    fn into_transact_operation(
        self,
        default_table_name: &str,
    ) -> Result<TransactOperation<C>, InvalidOperation> {
        let keys: codec::Item = self.keys.try_into()?;
        let write_input =
            write::common::WriteInput::new(self.condition, &self.transact_args, default_table_name)?;
        let builder = types::Delete::builder().set_key(Some(keys));
        let delete = write::common::apply_write_input!(builder, write_input).build()?;
        let item = types::TransactWriteItem::builder().delete(delete).build();
        Ok(TransactOperation {
            item,
            error: self.transact_args.error,
        })
    }
}

impl<T: Serialize, C> IntoTransactOperation<C> for Update<T, C> {
    fn into_transact_operation(
        self,
        default_table_name: &str,
    ) -> Result<TransactOperation<C>, InvalidOperation> {
        let keys: codec::Item = self.keys.try_into()?;
        let mut write_input =
            write::common::WriteInput::new(self.condition, &self.transact_args, default_table_name)?;
        let update_expression = write_input.merge_expression(self.update_expression.into());
        let builder = types::Update::builder()
            .set_key(Some(keys))
            .update_expression(update_expression);
        let update = write::common::apply_write_input!(builder, write_input).build()?;
        let item = types::TransactWriteItem::builder().update(update).build();
        Ok(TransactOperation {
            item,
            error: self.transact_args.error,
        })
    }
}
