//! API middleware.

mod charset;

pub use charset::{charset_middleware, sanitize_string};
