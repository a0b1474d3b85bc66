use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as-is when debug formatted, without quotes or escapes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
