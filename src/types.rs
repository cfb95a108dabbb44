use crate::scan::{html_comment_end, is_table_row, trim_block_whitespace};
use crate::syntax;

/// Best-effort hint describing what a segmented block contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    ThematicBreak,
    CodeFence,
    List,
    BlockQuote,
    /// A table, possibly preceded by the HTML comment that annotates it.
    Table,
    HtmlBlock,
    HtmlComment,
    Unknown,
}

impl BlockKind {
    /// Classify a block produced by [`crate::segment`].
    pub fn classify(block: &str) -> Self {
        let block = trim_block_whitespace(block);
        let mut lines = block.lines();
        let Some(first) = lines.next() else {
            return BlockKind::Unknown;
        };

        if syntax::is_html_comment_start(first) {
            let start = block.find("<!--").unwrap_or(0);
            return match html_comment_end(block, start) {
                Some(end) => {
                    let rest = block[end..].trim_start_matches([' ', '\t', '\n']);
                    if rest.is_empty() {
                        BlockKind::HtmlComment
                    } else if rest.lines().next().is_some_and(is_table_row) {
                        BlockKind::Table
                    } else {
                        BlockKind::HtmlBlock
                    }
                }
                None => BlockKind::HtmlBlock,
            };
        }
        if syntax::code_fence_start(first).is_some() {
            return BlockKind::CodeFence;
        }
        if syntax::is_heading(first) {
            return BlockKind::Heading;
        }
        if syntax::is_thematic_break(first) {
            return BlockKind::ThematicBreak;
        }
        if is_table_row(first) {
            return BlockKind::Table;
        }
        if syntax::is_html_start(first) {
            return BlockKind::HtmlBlock;
        }
        if syntax::is_blockquote_start(first) {
            return BlockKind::BlockQuote;
        }
        if syntax::is_list_item_start(first) {
            return BlockKind::List;
        }
        if lines.next().is_some_and(syntax::is_setext_underline) {
            return BlockKind::Heading;
        }
        BlockKind::Paragraph
    }
}

/// One segmented block together with its (possibly cached) parse result.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBlock<V> {
    /// Position of the block within the document.
    pub index: usize,
    pub kind: BlockKind,
    pub raw: String,
    /// Digest of `index` and `raw`; identical text at different positions hashes differently.
    pub hash: u64,
    pub value: V,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    pub blocks: usize,
    /// Blocks whose parse result came from the cache.
    pub cache_hits: usize,
    /// Blocks that were handed to the block parser.
    pub parsed: usize,
}

/// The full block list for one revision of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Update<V> {
    pub blocks: Vec<ParsedBlock<V>>,
    pub stats: UpdateStats,
}

impl<V> Update<V> {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.blocks.iter().map(|b| &b.value)
    }
}

fn fnv1a64_extend(mut h: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

/// FNV-1a digest of a block's position and text.
pub fn block_hash(index: usize, raw: &str) -> u64 {
    let h = fnv1a64_extend(0xcbf29ce484222325, &(index as u64).to_le_bytes());
    fnv1a64_extend(h, raw.as_bytes())
}
