//! Property-Based Test Generators
//!
//! Provides proptest strategies for raw request bodies.

use proptest::prelude::*;

/// Product name text with no surrounding whitespace and at least one visible character
pub fn product_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 \\-]{0,30}[A-Za-z0-9]|[A-Za-z0-9]"
}

/// Leading or trailing padding that trimming removes
pub fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n\\x1c-\\x1f]{0,4}"
}

/// A product name wrapped in padding, paired with its trimmed form
pub fn padded_product_name_strategy() -> impl Strategy<Value = (String, String)> {
    (padding_strategy(), product_name_strategy(), padding_strategy())
        .prop_map(|(before, name, after)| (format!("{before}{name}{after}"), name))
}

/// Bodies that must be rejected: empty, whitespace or separators only
pub fn blank_body_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n\\x1c-\\x1f]{0,8}"
}
