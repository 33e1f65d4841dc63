//! Pure decisions taken on responses, kept apart from the I/O in `effects`.

mod validation;

pub use validation::is_success;
