/// Signing secret used for access tokens in tests.
pub static TEST_JWT_SECRET: &str = "orrery-test-secret";

/// Pre-hashed password stored for fixture users; callers hash externally so
/// tests treat this as an opaque string.
pub static TEST_PASSWORD_HASH: &str = "f7c3bc1d808e04732adf679965ccc34ca7ae3441";
