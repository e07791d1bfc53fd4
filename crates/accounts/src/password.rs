use zeroize::{Zeroize, ZeroizeOnDrop};

/// Plain-text password held only for the lifetime of a registration request.
///
/// `Debug` prints `[REDACTED]` and the type is not `Serialize`, so the value
/// cannot leak through logs or responses. The buffer is zeroed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw value, e.g. for hashing inside the user store.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Password {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[REDACTED]")
    }
}
