//! Common utilities for DynamoDB expressions.
//!
//! This module provides shared types and utilities used by the update expression builder
//! and the transactional write buffer, including key handling, placeholder naming and
//! conversion between Rust values and DynamoDB attribute values.

/// Conversion between Rust values and DynamoDB attribute values.
pub mod codec;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

/// Separator for attribute path components.
const PATH_SEPARATOR: char = '.';

/// Name placeholder for an attribute path: `#n_<path>` with every `.` turned into `_`.
pub(crate) fn name_placeholder(path: &str) -> String {
    format!("#n_{path}").replace(PATH_SEPARATOR, "_")
}

/// Value placeholder for an attribute path: `:v_<path>`, dots preserved.
pub(crate) fn value_placeholder(path: &str) -> String {
    format!(":v_{path}")
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    /// Absorb the placeholder maps of `other`, returning its expression.
    ///
    /// Placeholders already present are overwritten.
    pub(crate) fn absorb(&mut self, other: Self) -> String {
        self.expression_attribute_names
            .extend(other.expression_attribute_names);
        self.expression_attribute_values
            .extend(other.expression_attribute_values);
        other.expression
    }

    /// Merge the placeholder maps into optional request maps, returning the expression.
    ///
    /// Empty maps leave the targets untouched: DynamoDB rejects empty placeholder maps.
    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        if !self.expression_attribute_names.is_empty() {
            names
                .get_or_insert_with(collections::HashMap::new)
                .extend(self.expression_attribute_names);
        }
        if !self.expression_attribute_values.is_empty() {
            values
                .get_or_insert_with(collections::HashMap::new)
                .extend(self.expression_attribute_values);
        }
        self.expression
    }
}
