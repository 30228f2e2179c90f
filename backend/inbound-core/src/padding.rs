//! xhttp padding defaults.
//!
//! The engine refuses an xhttp inbound whose padding range has an upper bound
//! of zero or less, which is what an unset range decodes to.

use crate::transport::{Int32Range, SplitHttpSettings};

use log::debug;

pub const DEFAULT_PADDING_BYTES: Int32Range = Int32Range::new(100, 200);

/// Pin the padding range to [`DEFAULT_PADDING_BYTES`].
///
/// Any range supplied by the panel is replaced.
pub fn normalize_padding(settings: SplitHttpSettings) -> SplitHttpSettings {
    if settings.x_padding_bytes != DEFAULT_PADDING_BYTES {
        debug!(
            "Overriding xhttp padding {} with {}",
            settings.x_padding_bytes, DEFAULT_PADDING_BYTES
        );
    }

    SplitHttpSettings {
        x_padding_bytes: DEFAULT_PADDING_BYTES,
        ..settings
    }
}
