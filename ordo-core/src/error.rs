/// The shared error taxonomy for every primitive operation (spec §7).
///
/// `Success` is not represented explicitly; operations return `Result<T, Error>` and success is
/// `Ok`. Errors are plain values: no operation partially commits on error, so a context may
/// always be re-initialized after a failed `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An external dependency failed, e.g. the OS entropy source was unavailable.
    Fail,
    /// Finalizing a mode with padding disabled found buffered input that was never emitted.
    /// Carries the number of leftover bytes.
    Leftover(usize),
    /// The key length supplied to a primitive's `init` is not valid for that primitive.
    KeyLen,
    /// PKCS#7 padding validation failed during decrypt finalization.
    Padding,
    /// Any other invalid argument: bad IV length, invalid parameter value, disallowed output
    /// length, counter overflow.
    Arg,
}

impl Error {
    /// A short, non-localized, human-readable description suitable for debug logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Error::Fail => "external dependency failed",
            Error::Leftover(_) => "leftover buffered input with padding disabled",
            Error::KeyLen => "invalid key length for primitive",
            Error::Padding => "invalid PKCS#7 padding",
            Error::Arg => "invalid argument",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::Leftover(n) => write!(f, "{} ({n} bytes buffered)", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn descriptions_are_non_empty() {
        for e in [
            Error::Fail,
            Error::Leftover(3),
            Error::KeyLen,
            Error::Padding,
            Error::Arg,
        ] {
            assert!(!e.as_str().is_empty());
        }
    }
}
