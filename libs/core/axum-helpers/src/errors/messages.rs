//! Standard error messages and codes for consistent error responses.

pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const INVALID_JSON: &str = "Invalid JSON request body";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";

// Error codes for observability and debugging
pub const CODE_VALIDATION: i32 = 1001;
pub const CODE_JSON_EXTRACTION: i32 = 1003;
pub const CODE_NOT_FOUND: i32 = 1004;
pub const CODE_CONFLICT: i32 = 1008;
