use std::num::NonZeroUsize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Optional upper bound on the number of cached block parses.
    ///
    /// `None` keeps every parse until the document is reset.
    pub cache_capacity: Option<NonZeroUsize>,
    /// Convert `\r\n` and lone `\r` to `\n` as chunks are appended.
    ///
    /// Segmentation only recognizes `\n\n` as a separator, so CRLF input needs this to split.
    pub normalize_newlines: bool,
}
