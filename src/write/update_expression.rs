use crate::{
    common::{self, codec},
    error::InvalidOperation,
};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use std::collections;

/// Suffix appended to a function's value placeholder for its trailing operand.
const TRAILING_OPERAND_SUFFIX: &str = "_r";

/// Arithmetic operator usable in SET actions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArithmeticOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl AsRef<str> for ArithmeticOperator {
    fn as_ref(&self) -> &str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// Function reference usable as the value of a SET action.
///
/// The function is applied to its own attribute path, which may differ from the attribute
/// being set:
///
/// ```rust
/// use dynamodb_transact::write::update_expression::{FunctionCall, UpdateAction, UpdateExpression};
///
/// # fn example() -> Result<(), dynamodb_transact::error::InvalidOperation> {
/// let update_expression = UpdateExpression::new([UpdateAction::set_function(
///     "overall_score",
///     FunctionCall::if_not_exists("score", 0)?.plus(1)?,
/// )]);
/// assert_eq!(
///     update_expression.expression,
///     "SET #n_overall_score = if_not_exists(#n_score, :v_score) + :v_score_r"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    function: String,
    path: String,
    value: types::AttributeValue,
    trailing_operand: Option<(ArithmeticOperator, types::AttributeValue)>,
}

impl FunctionCall {
    /// Reference `function(path, value)`.
    pub fn new<T: Serialize>(
        function: impl Into<String>,
        path: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        let value = codec::to_wire_value(value)?;
        Ok(Self::with_wire_value(function, path, value))
    }

    fn with_wire_value(
        function: impl Into<String>,
        path: impl Into<String>,
        value: types::AttributeValue,
    ) -> Self {
        Self {
            function: function.into(),
            path: path.into(),
            value,
            trailing_operand: None,
        }
    }

    /// `if_not_exists(path, value)`: the existing value, or `value` when the attribute is absent.
    pub fn if_not_exists<T: Serialize>(
        path: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        Self::new("if_not_exists", path, value)
    }

    /// `list_append(path, value)`: the existing list followed by `value`.
    ///
    /// The value is kept a list even when its elements would otherwise form a set.
    pub fn list_append<T: Serialize>(
        path: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        let value = codec::to_wire_list(value)?;
        Ok(Self::with_wire_value("list_append", path, value))
    }

    /// Add a number to the function's result.
    pub fn plus<T: Serialize>(self, operand: T) -> Result<Self, InvalidOperation> {
        self.with_trailing_operand(ArithmeticOperator::Plus, operand)
    }

    /// Subtract a number from the function's result.
    pub fn minus<T: Serialize>(self, operand: T) -> Result<Self, InvalidOperation> {
        self.with_trailing_operand(ArithmeticOperator::Minus, operand)
    }

    fn with_trailing_operand<T: Serialize>(
        mut self,
        operator: ArithmeticOperator,
        operand: T,
    ) -> Result<Self, InvalidOperation> {
        let operand = codec::to_wire_value(operand)?;
        if !codec::is_number(&operand) {
            return Err(InvalidOperation::Operand(self.path));
        }
        self.trailing_operand = Some((operator, operand));
        Ok(self)
    }

    fn into_expression_input(self) -> common::ExpressionInput {
        let name_placeholder = common::name_placeholder(&self.path);
        let value_placeholder = common::value_placeholder(&self.path);
        let mut expression = format!(
            "{}({name_placeholder}, {value_placeholder})",
            self.function
        );
        let mut expression_attribute_values =
            collections::HashMap::from([(value_placeholder.clone(), self.value)]);
        if let Some((operator, operand)) = self.trailing_operand {
            let operand_placeholder = format!("{value_placeholder}{TRAILING_OPERAND_SUFFIX}");
            expression = format!("{expression} {} {operand_placeholder}", operator.as_ref());
            expression_attribute_values.insert(operand_placeholder, operand);
        }
        common::ExpressionInput {
            expression,
            expression_attribute_names: collections::HashMap::from([(
                name_placeholder,
                self.path,
            )]),
            expression_attribute_values,
        }
    }
}

/// Value of a SET action.
#[derive(Clone, Debug, PartialEq)]
pub enum SetValue {
    /// A plain value.
    Value(types::AttributeValue),
    /// A function reference standing in for the value.
    Function(FunctionCall),
}

/// A single action of an update expression.
///
/// ```rust
/// use dynamodb_transact::write::update_expression::UpdateAction;
///
/// # fn example() -> Result<(), dynamodb_transact::error::InvalidOperation> {
/// let assign = UpdateAction::set("name", "Bilbo")?;
/// let increment = UpdateAction::increment("logins", 1)?;
/// let tag = UpdateAction::add("tags", ["hobbit"])?;
/// let remove = UpdateAction::remove("nickname");
/// # Ok(())
/// # }
/// ```
///
/// `Set`, `Add` and `Delete` can only be built through their constructors, which check
/// the value type:
///
/// ```rust,compile_fail
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_transact::write::update_expression::UpdateAction;
///
/// let add = UpdateAction::Add {
///     path: "emails".to_string(),
///     value: AttributeValue::S("kubitschek@gov.br".to_string()),
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateAction {
    /// SET an attribute.
    #[non_exhaustive]
    Set {
        /// Attribute path.
        path: String,
        /// The value, or `None` when unset: unset actions are left out of the expression.
        value: Option<SetValue>,
        /// Apply the value to the attribute's current value instead of replacing it.
        ///
        /// Ignored when the value is a function reference.
        operator: Option<ArithmeticOperator>,
    },
    /// ADD a number to a numeric attribute, or elements to a set.
    #[non_exhaustive]
    Add {
        /// Attribute path.
        path: String,
        /// A number or a set.
        value: types::AttributeValue,
    },
    /// REMOVE an attribute.
    Remove {
        /// Attribute path.
        path: String,
    },
    /// DELETE elements from a set.
    #[non_exhaustive]
    Delete {
        /// Attribute path.
        path: String,
        /// A set.
        value: types::AttributeValue,
    },
}

impl UpdateAction {
    /// SET `path` to `value`.
    ///
    /// Values serializing to NULL, such as `None`, mark the action as unset so that optional
    /// attributes can be passed through without branching.
    pub fn set<T: Serialize>(path: impl Into<String>, value: T) -> Result<Self, InvalidOperation> {
        Self::set_with_operator(path, value, None)
    }

    /// SET `path` to its current value plus `value`.
    pub fn increment<T: Serialize>(
        path: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        Self::set_with_operator(path, value, Some(ArithmeticOperator::Plus))
    }

    /// SET `path` to its current value minus `value`.
    pub fn decrement<T: Serialize>(
        path: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        Self::set_with_operator(path, value, Some(ArithmeticOperator::Minus))
    }

    /// SET `path` to the result of a function.
    pub fn set_function(path: impl Into<String>, function_call: FunctionCall) -> Self {
        Self::Set {
            path: path.into(),
            value: Some(SetValue::Function(function_call)),
            operator: None,
        }
    }

    /// ADD `value` to `path`; the value must be a number or a set.
    pub fn add<T: Serialize>(path: impl Into<String>, value: T) -> Result<Self, InvalidOperation> {
        let path = path.into();
        let value = codec::to_wire_value(value)?;
        if !codec::is_number(&value) && !codec::is_set(&value) {
            return Err(InvalidOperation::Add(path));
        }
        Ok(Self::Add { path, value })
    }

    /// REMOVE `path`.
    pub fn remove(path: impl Into<String>) -> Self {
        Self::Remove { path: path.into() }
    }

    /// DELETE the elements of `value` from the set at `path`; the value must be a set.
    pub fn delete<T: Serialize>(
        path: impl Into<String>,
        value: T,
    ) -> Result<Self, InvalidOperation> {
        let path = path.into();
        let value = codec::to_wire_value(value)?;
        if !codec::is_set(&value) {
            return Err(InvalidOperation::Delete(path));
        }
        Ok(Self::Delete { path, value })
    }

    fn set_with_operator<T: Serialize>(
        path: impl Into<String>,
        value: T,
        operator: Option<ArithmeticOperator>,
    ) -> Result<Self, InvalidOperation> {
        let value = codec::to_wire_value(value)?;
        let value = (!codec::is_null(&value)).then_some(SetValue::Value(value));
        let action = Self::Set {
            path: path.into(),
            value,
            operator,
        };
        Ok(action)
    }

    fn is_unset(&self) -> bool {
        matches!(self, Self::Set { value: None, .. })
    }

    fn clause(&self) -> Clause {
        match self {
            Self::Set { .. } => Clause::Set,
            Self::Add { .. } => Clause::Add,
            Self::Remove { .. } => Clause::Remove,
            Self::Delete { .. } => Clause::Delete,
        }
    }

    fn into_expression_input(self) -> common::ExpressionInput {
        match self {
            Self::Set {
                path,
                value: Some(SetValue::Function(function_call)),
                ..
            } => {
                let name_placeholder = common::name_placeholder(&path);
                let mut operation = function_call.into_expression_input();
                operation.expression = format!("{name_placeholder} = {}", operation.expression);
                operation
                    .expression_attribute_names
                    .insert(name_placeholder, path);
                operation
            }
            Self::Set {
                path,
                value,
                operator,
            } => {
                let name_placeholder = common::name_placeholder(&path);
                let value_placeholder = common::value_placeholder(&path);
                let expression = match operator {
                    Some(operator) => format!(
                        "{name_placeholder} = {name_placeholder} {} {value_placeholder}",
                        operator.as_ref()
                    ),
                    None => format!("{name_placeholder} = {value_placeholder}"),
                };
                let expression_attribute_values = match value {
                    Some(SetValue::Value(value)) => {
                        collections::HashMap::from([(value_placeholder, value)])
                    }
                    _ => collections::HashMap::new(),
                };
                common::ExpressionInput {
                    expression,
                    expression_attribute_names: collections::HashMap::from([(
                        name_placeholder,
                        path,
                    )]),
                    expression_attribute_values,
                }
            }
            Self::Add { path, value } | Self::Delete { path, value } => {
                let name_placeholder = common::name_placeholder(&path);
                let value_placeholder = common::value_placeholder(&path);
                common::ExpressionInput {
                    expression: format!("{name_placeholder} {value_placeholder}"),
                    expression_attribute_names: collections::HashMap::from([(
                        name_placeholder,
                        path,
                    )]),
                    expression_attribute_values: collections::HashMap::from([(
                        value_placeholder,
                        value,
                    )]),
                }
            }
            Self::Remove { path } => {
                let name_placeholder = common::name_placeholder(&path);
                common::ExpressionInput {
                    expression: name_placeholder.clone(),
                    expression_attribute_names: collections::HashMap::from([(
                        name_placeholder,
                        path,
                    )]),
                    ..Default::default()
                }
            }
        }
    }
}

/// Update expression clauses, in the order they are written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Clause {
    Set,
    Add,
    Remove,
    Delete,
}

impl Clause {
    const ALL: [Self; 4] = [Self::Set, Self::Add, Self::Remove, Self::Delete];

    fn keyword(self) -> &'static str {
        match self {
            Self::Set => "SET",
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
            Self::Delete => "DELETE",
        }
    }
}

/// Update expression with its placeholder maps.
///
/// Clauses are always written `SET`, `ADD`, `REMOVE`, `DELETE`; actions keep the caller's
/// order within their clause. Building is deterministic: the same actions always produce the
/// same expression and maps.
///
/// ```rust
/// use dynamodb_transact::write::update_expression::{UpdateAction, UpdateExpression};
///
/// # fn example() -> Result<(), dynamodb_transact::error::InvalidOperation> {
/// let phone: Option<String> = None;
/// let update_expression = UpdateExpression::new([
///     UpdateAction::set("name", "Juscelino Kubitschek")?,
///     UpdateAction::set("phone", phone)?,
///     UpdateAction::add("emails", ["kubitschek@gov.br"])?,
/// ]);
/// assert_eq!(
///     update_expression.expression,
///     "SET #n_name = :v_name ADD #n_emails :v_emails"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateExpression {
    /// The update expression text.
    pub expression: String,
    /// Name placeholders to attribute paths.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Value placeholders to values.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl UpdateExpression {
    /// Build an update expression, skipping unset actions.
    pub fn new(actions: impl IntoIterator<Item = UpdateAction>) -> Self {
        let mut operation = common::ExpressionInput::default();
        let mut clauses: [Vec<String>; 4] = Default::default();
        for action in actions {
            if action.is_unset() {
                continue;
            }
            let clause = action.clause();
            let expression = operation.absorb(action.into_expression_input());
            clauses[clause as usize].push(expression);
        }
        operation.expression = Clause::ALL
            .into_iter()
            .zip(clauses)
            .filter(|(_, expressions)| !expressions.is_empty())
            .map(|(clause, expressions)| format!("{} {}", clause.keyword(), expressions.join(", ")))
            .collect::<Vec<_>>()
            .join(" ");
        operation.into()
    }

    /// Whether no action survived building.
    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }
}

impl FromIterator<UpdateAction> for UpdateExpression {
    fn from_iter<I: IntoIterator<Item = UpdateAction>>(actions: I) -> Self {
        Self::new(actions)
    }
}

impl From<common::ExpressionInput> for UpdateExpression {
    fn from(operation: common::ExpressionInput) -> Self {
        Self {
            expression: operation.expression,
            expression_attribute_names: operation.expression_attribute_names,
            expression_attribute_values: operation.expression_attribute_values,
        }
    }
}

impl From<UpdateExpression> for common::ExpressionInput {
    fn from(update_expression: UpdateExpression) -> Self {
        Self {
            expression: update_expression.expression,
            expression_attribute_names: update_expression.expression_attribute_names,
            expression_attribute_values: update_expression.expression_attribute_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    fn names<const N: usize>(entries: [(&str, &str); N]) -> collections::HashMap<String, String> {
        entries
            .into_iter()
            .map(|(placeholder, path)| (placeholder.to_string(), path.to_string()))
            .collect()
    }

    fn string(value: &str) -> types::AttributeValue {
        types::AttributeValue::S(value.to_string())
    }

    fn number(value: &str) -> types::AttributeValue {
        types::AttributeValue::N(value.to_string())
    }

    fn string_set(values: &[&str]) -> types::AttributeValue {
        types::AttributeValue::Ss(values.iter().map(|value| value.to_string()).collect())
    }

    #[rstest]
    #[case::set_assign(
        vec![
            UpdateAction::set("name", "Bilbo").unwrap(),
        ],
        UpdateExpression {
            expression: "SET #n_name = :v_name".to_string(),
            expression_attribute_names: names([("#n_name", "name")]),
            expression_attribute_values: collections::HashMap::from(
                [(":v_name".to_string(), string("Bilbo"))]
            ),
        }
    )]
    #[case::set_increment(
        vec![
            UpdateAction::increment("score", 10).unwrap(),
        ],
        UpdateExpression {
            expression: "SET #n_score = #n_score + :v_score".to_string(),
            expression_attribute_names: names([("#n_score", "score")]),
            expression_attribute_values: collections::HashMap::from(
                [(":v_score".to_string(), number("10"))]
            ),
        }
    )]
    #[case::set_decrement(
        vec![
            UpdateAction::decrement("stock", 2).unwrap(),
        ],
        UpdateExpression {
            expression: "SET #n_stock = #n_stock - :v_stock".to_string(),
            expression_attribute_names: names([("#n_stock", "stock")]),
            expression_attribute_values: collections::HashMap::from(
                [(":v_stock".to_string(), number("2"))]
            ),
        }
    )]
    #[case::exclude_unset(
        vec![
            UpdateAction::set("name", "Juscelino Kubitschek").unwrap(),
            UpdateAction::set("email", "kubitschek@gov.br").unwrap(),
            UpdateAction::set("phone", Value::Null).unwrap(),
            UpdateAction::add("emails", ["kubitschek@gov.br"]).unwrap(),
        ],
        UpdateExpression {
            expression: "SET #n_name = :v_name, #n_email = :v_email ADD #n_emails :v_emails"
                .to_string(),
            expression_attribute_names: names([
                ("#n_name", "name"),
                ("#n_email", "email"),
                ("#n_emails", "emails"),
            ]),
            expression_attribute_values: collections::HashMap::from(
                [
                    (":v_name".to_string(), string("Juscelino Kubitschek")),
                    (":v_email".to_string(), string("kubitschek@gov.br")),
                    (":v_emails".to_string(), string_set(&["kubitschek@gov.br"])),
                ]
            ),
        }
    )]
    #[case::functions(
        vec![
            UpdateAction::set("name", "Juscelino Kubitschek").unwrap(),
            UpdateAction::increment("score", 10).unwrap(),
            UpdateAction::set_function("points", FunctionCall::if_not_exists("points", 0).unwrap()),
            UpdateAction::set_function(
                "tags",
                FunctionCall::list_append("tags", ["python", "aws"]).unwrap(),
            ),
            UpdateAction::add("score", 5).unwrap(),
            UpdateAction::set("phone", Option::<String>::None).unwrap(),
            UpdateAction::remove("quantity"),
            UpdateAction::remove("brand.name"),
            UpdateAction::delete("emails", ["kubitschek@gov.br"]).unwrap(),
        ],
        UpdateExpression {
            expression: concat!(
                "SET #n_name = :v_name, ",
                "#n_score = #n_score + :v_score, ",
                "#n_points = if_not_exists(#n_points, :v_points), ",
                "#n_tags = list_append(#n_tags, :v_tags) ",
                "ADD #n_score :v_score ",
                "REMOVE #n_quantity, #n_brand_name ",
                "DELETE #n_emails :v_emails",
            )
            .to_string(),
            expression_attribute_names: names([
                ("#n_name", "name"),
                ("#n_score", "score"),
                ("#n_points", "points"),
                ("#n_tags", "tags"),
                ("#n_quantity", "quantity"),
                ("#n_brand_name", "brand.name"),
                ("#n_emails", "emails"),
            ]),
            expression_attribute_values: collections::HashMap::from(
                [
                    (":v_name".to_string(), string("Juscelino Kubitschek")),
                    (":v_score".to_string(), number("5")),
                    (":v_points".to_string(), number("0")),
                    (
                        ":v_tags".to_string(),
                        types::AttributeValue::L(
                            vec![
                                string("python"),
                                string("aws"),
                            ]
                        )
                    ),
                    (":v_emails".to_string(), string_set(&["kubitschek@gov.br"])),
                ]
            ),
        }
    )]
    #[case::function_with_trailing_operands(
        vec![
            UpdateAction::set_function("points", FunctionCall::if_not_exists("points", 1).unwrap()),
            UpdateAction::set_function(
                "attempts",
                FunctionCall::if_not_exists("attempts", 0).unwrap().plus(1).unwrap(),
            ),
            UpdateAction::set_function(
                "score",
                FunctionCall::if_not_exists("score", 100).unwrap().minus(1).unwrap(),
            ),
        ],
        UpdateExpression {
            expression: concat!(
                "SET #n_points = if_not_exists(#n_points, :v_points), ",
                "#n_attempts = if_not_exists(#n_attempts, :v_attempts) + :v_attempts_r, ",
                "#n_score = if_not_exists(#n_score, :v_score) - :v_score_r",
            )
            .to_string(),
            expression_attribute_names: names([
                ("#n_points", "points"),
                ("#n_attempts", "attempts"),
                ("#n_score", "score"),
            ]),
            expression_attribute_values: collections::HashMap::from(
                [
                    (":v_points".to_string(), number("1")),
                    (":v_attempts".to_string(), number("0")),
                    (":v_attempts_r".to_string(), number("1")),
                    (":v_score".to_string(), number("100")),
                    (":v_score_r".to_string(), number("1")),
                ]
            ),
        }
    )]
    #[case::function_on_other_path(
        vec![
            UpdateAction::set_function(
                "overall",
                FunctionCall::if_not_exists("score", 100).unwrap().plus(1).unwrap(),
            ),
        ],
        UpdateExpression {
            expression: "SET #n_overall = if_not_exists(#n_score, :v_score) + :v_score_r"
                .to_string(),
            expression_attribute_names: names([
                ("#n_overall", "overall"),
                ("#n_score", "score"),
            ]),
            expression_attribute_values: collections::HashMap::from(
                [
                    (":v_score".to_string(), number("100")),
                    (":v_score_r".to_string(), number("1")),
                ]
            ),
        }
    )]
    #[case::clause_order(
        vec![
            UpdateAction::delete("emails", ["a@b.c"]).unwrap(),
            UpdateAction::remove("phone"),
            UpdateAction::add("logins", 1).unwrap(),
            UpdateAction::set("name", "Frodo").unwrap(),
        ],
        UpdateExpression {
            expression: concat!(
                "SET #n_name = :v_name ",
                "ADD #n_logins :v_logins ",
                "REMOVE #n_phone ",
                "DELETE #n_emails :v_emails",
            )
            .to_string(),
            expression_attribute_names: names([
                ("#n_emails", "emails"),
                ("#n_phone", "phone"),
                ("#n_logins", "logins"),
                ("#n_name", "name"),
            ]),
            expression_attribute_values: collections::HashMap::from(
                [
                    (":v_emails".to_string(), string_set(&["a@b.c"])),
                    (":v_logins".to_string(), number("1")),
                    (":v_name".to_string(), string("Frodo")),
                ]
            ),
        }
    )]
    #[case::remove_only(
        vec![
            UpdateAction::remove("brand.name"),
        ],
        UpdateExpression {
            expression: "REMOVE #n_brand_name".to_string(),
            expression_attribute_names: names([("#n_brand_name", "brand.name")]),
            expression_attribute_values: collections::HashMap::new(),
        }
    )]
    #[case::empty(
        vec![
            UpdateAction::set("phone", Value::Null).unwrap(),
        ],
        UpdateExpression::default()
    )]
    fn test_update_expression(
        #[case] actions: Vec<UpdateAction>,
        #[case] expected: UpdateExpression,
    ) {
        let actual = UpdateExpression::new(actions);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_later_placeholders_overwrite_earlier_ones() {
        let actual = UpdateExpression::new([
            UpdateAction::add("score", 5).unwrap(),
            UpdateAction::set("score", 10).unwrap(),
        ]);
        assert_eq!(actual.expression, "SET #n_score = :v_score ADD #n_score :v_score");
        assert_eq!(
            actual.expression_attribute_values,
            collections::HashMap::from([(":v_score".to_string(), number("10"))])
        );
    }

    #[test]
    fn test_update_expression_is_deterministic() {
        let actions = vec![
            UpdateAction::set("name", "Bilbo").unwrap(),
            UpdateAction::add("tags", ["a", "b"]).unwrap(),
            UpdateAction::remove("brand.name"),
        ];
        let first: UpdateExpression = actions.clone().into_iter().collect();
        let second: UpdateExpression = actions.into_iter().collect();
        assert_eq!(first, second);
    }

    #[rstest]
    #[case::add_string(UpdateAction::add("emails", "kubitschek@gov.br"))]
    #[case::add_list_of_maps(UpdateAction::add("emails", json!([{"a": "b"}])))]
    #[case::add_empty_list(UpdateAction::add("emails", Vec::<String>::new()))]
    #[case::add_null(UpdateAction::add("emails", Value::Null))]
    #[case::delete_string(UpdateAction::delete("emails", "kubitschek@gov.br"))]
    #[case::delete_number(UpdateAction::delete("emails", 1))]
    fn test_invalid_action(#[case] action: Result<UpdateAction, InvalidOperation>) {
        assert!(matches!(
            action,
            Err(InvalidOperation::Add(_) | InvalidOperation::Delete(_))
        ));
    }

    #[test]
    fn test_invalid_trailing_operand() {
        let actual = FunctionCall::if_not_exists("score", 0)
            .unwrap()
            .plus("one");
        assert!(matches!(actual, Err(InvalidOperation::Operand(path)) if path == "score"));
    }
}
