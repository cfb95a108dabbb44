use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// The block parser rejected a block. Blocks before `index` were resolved and cached.
    #[error("block parser failed on block {index}")]
    BlockParse {
        index: usize,
        #[source]
        source: BoxError,
    },
}

impl DocumentError {
    pub(crate) fn block_parse(index: usize, source: impl Into<BoxError>) -> Self {
        Self::BlockParse {
            index,
            source: source.into(),
        }
    }

    /// Index of the block that failed, if the error is tied to one.
    pub fn block_index(&self) -> Option<usize> {
        match self {
            Self::BlockParse { index, .. } => Some(*index),
        }
    }
}
