//! Write operations for modifying data in DynamoDB tables.
//!
//! This module provides:
//! - Update expressions built from typed SET, ADD, REMOVE and DELETE actions
//! - Arguments shared by transactional operations
//! - A buffer turning condition checks, puts, deletes and updates into transactional writes

/// Common arguments for transactional operations.
pub mod common;

/// Buffered transactional writes and cancellation reason mapping.
pub mod transact_write;

/// Update expression building from typed actions.
pub mod update_expression;
