//! Display and trait implementations for FormattableError

use super::types::FormattableError;
use std::fmt;

impl fmt::Display for FormattableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.message.is_empty() {
            write!(f, "{}", self.inner.kind)?;
        } else {
            f.write_str(&self.inner.message)?;
        }

        // `{:#}` prints the whole chain
        if f.alternate() {
            for cause in self.chain().skip(1) {
                write!(f, "\nCaused by: {cause}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for FormattableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
