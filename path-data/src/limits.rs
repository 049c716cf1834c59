//! Guards against pathological input.

use crate::ParseError;

/// Resource limits applied by the parsers.
///
/// Attribute values are normally short, in-memory strings, so these limits
/// only exist to bound the work done on adversarial input.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Limits {
    /// Maximum length of the input, in bytes.
    ///
    /// Longer input is rejected without emitting any events other than the
    /// start and end notifications.
    pub max_input_len: usize,
    /// Maximum number of errors to recover from.
    ///
    /// Once reached, the remaining input is ignored.
    pub max_errors: usize,
}

impl Limits {
    /// Default maximum input length of 16 MiB.
    pub const DEFAULT_MAX_INPUT_LEN: usize = 16 << 20;
    /// Default maximum error count.
    pub const DEFAULT_MAX_ERRORS: usize = 1024;

    /// Limits that never trigger.
    pub const fn unlimited() -> Self {
        Self {
            max_input_len: usize::MAX,
            max_errors: usize::MAX,
        }
    }

    pub(crate) fn check_input_len(&self, len: usize) -> Result<(), ParseError> {
        if len > self.max_input_len {
            Err(ParseError::InputTooLong {
                len,
                limit: self.max_input_len,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
            max_errors: Self::DEFAULT_MAX_ERRORS,
        }
    }
}
