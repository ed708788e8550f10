//! Tests for token service

#[cfg(test)]
mod fixtures;
