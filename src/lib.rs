#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Transact
//!
//! Update expression building and buffered transactional writes for Amazon DynamoDB.
//!
//! ## Overview
//!
//! This library provides two pieces that are usually hand-rolled around `TransactWriteItems`:
//! - An update expression builder that turns typed actions into an expression string
//!   with deterministic `#n_<path>` / `:v_<path>` placeholders
//! - A write buffer that collects condition checks, puts, deletes and updates, submits them
//!   in bounded transactional batches, and maps cancellation reasons back to caller errors
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_transact::{common, write};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! use write::transact_write::{Put, TransactWriteBuffer, TransactWriteConfig, Update};
//! use write::update_expression::{FunctionCall, UpdateAction, UpdateExpression};
//!
//! let config = TransactWriteConfig {
//!     table_name: "users".to_string(),
//!     ..Default::default()
//! };
//! let mut buffer: TransactWriteBuffer<'_, Client> = TransactWriteBuffer::new(&client, config);
//! buffer
//!     .put(Put {
//!         item: json!({"pk": "USER#1", "sk": "0", "name": "Bilbo"}),
//!         ..Default::default()
//!     })
//!     .await?;
//! buffer
//!     .update(Update {
//!         keys: common::key::Keys {
//!             partition_key: common::key::Key {
//!                 name: "pk".to_string(),
//!                 value: json!("STATS"),
//!             },
//!             ..Default::default()
//!         },
//!         // "SET #n_users = if_not_exists(#n_users, :v_users) + :v_users_r"
//!         update_expression: UpdateExpression::new([UpdateAction::set_function(
//!             "users",
//!             FunctionCall::if_not_exists("users", 0)?.plus(1)?,
//!         )]),
//!         ..Default::default()
//!     })
//!     .await?;
//! buffer.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Shared utilities for keys, placeholders and the value codec
//! - [`mod@error`] - Errors raised while building operations
//! - [`mod@write`] - Update expressions and transactional write buffering

/// Common utilities for keys, placeholders and value conversion.
pub mod common;

/// Errors raised while building update actions and transactional operations.
pub mod error;

/// Write operations for modifying data in DynamoDB tables.
///
/// This module provides:
/// - Building update expressions from typed actions
/// - Buffering condition checks, puts, deletes and updates into transactional writes
/// - Mapping transaction cancellation reasons back to caller errors
pub mod write;
