//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: helpers for checking the `{code, message, data}` envelope
//!
//! # Usage
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("test_create_category");
//! let name = builder.name("category", "main");
//! ```

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data derived from the
/// test name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test
    /// data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "category", "menu-item")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "other")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("category", "main");
    /// // Returns: "test-category-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Assertion helpers for the `{code, message, data}` response envelope
pub mod assertions {
    use serde_json::Value;

    /// Assert the envelope carries the expected code and a non-null payload
    pub fn assert_success_envelope(body: &Value, expected_code: i64) {
        assert_eq!(
            body["code"], expected_code,
            "envelope code mismatch: {}",
            body
        );
        assert!(
            !body["data"].is_null(),
            "expected non-null data in envelope: {}",
            body
        );
    }

    /// Assert the envelope is an error with the expected code and message
    pub fn assert_error_envelope(body: &Value, expected_code: i64, expected_message: &str) {
        assert_eq!(
            body["code"], expected_code,
            "envelope code mismatch: {}",
            body
        );
        assert_eq!(
            body["message"], expected_message,
            "envelope message mismatch: {}",
            body
        );
    }
}
