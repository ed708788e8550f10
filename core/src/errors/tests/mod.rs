//! Tests for error types

#[cfg(test)]
mod token_error_tests;
