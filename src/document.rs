use std::borrow::Cow;

use crate::cache::ParseCache;
use crate::error::DocumentError;
use crate::options::Options;
use crate::segment::segment;
use crate::types::{BlockKind, ParsedBlock, Update, UpdateStats, block_hash};

/// Turns one segmented block into an opaque parse result.
///
/// Results are cached by exact block text, so `parse_block` must be a pure function of `block`.
pub trait BlockParser {
    type Output: Clone;
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse_block(&mut self, block: &str) -> Result<Self::Output, Self::Error>;
}

/// A [`BlockParser`] backed by a closure.
pub struct FnBlockParser<F>(pub F);

impl<F, T, E> BlockParser for FnBlockParser<F>
where
    F: FnMut(&str) -> Result<T, E>,
    T: Clone,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = T;
    type Error = E;

    fn parse_block(&mut self, block: &str) -> Result<T, E> {
        (self.0)(block)
    }
}

/// A markdown document that is re-segmented on every change while reusing block parses.
///
/// The document owns its source text, its parse cache, and the block parser. Each revision is
/// split with [`segment`]; blocks whose exact text was seen before are served from the cache and
/// only new or edited blocks reach the parser.
pub struct IncrementalDocument<P: BlockParser> {
    opts: Options,
    parser: P,
    cache: ParseCache<P::Output>,
    source: String,
    // The previous chunk ended with '\r' (already emitted as '\n'); a leading '\n' completes it.
    pending_cr: bool,
}

impl<P: BlockParser> IncrementalDocument<P> {
    pub fn new(parser: P, opts: Options) -> Self {
        Self {
            cache: ParseCache::from_options(&opts),
            opts,
            parser,
            source: String::new(),
            pending_cr: false,
        }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn cache(&self) -> &ParseCache<P::Output> {
        &self.cache
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Mutable access to the block parser.
    ///
    /// Reconfiguring the parser can change what it returns for a block already in the cache, so
    /// the cache is cleared and the next update parses every block again.
    pub fn parser_mut(&mut self) -> &mut P {
        if !self.cache.is_empty() {
            log::debug!("parser borrowed mutably; dropping {} cached parses", self.cache.size());
            self.cache.clear();
        }
        &mut self.parser
    }

    /// Append a streamed chunk and rebuild the block list.
    pub fn append(&mut self, chunk: &str) -> Result<Update<P::Output>, DocumentError> {
        if self.opts.normalize_newlines {
            let chunk = self.normalize_newlines(chunk);
            self.source.push_str(&chunk);
        } else {
            self.source.push_str(chunk);
        }
        self.rebuild()
    }

    /// Replace the whole source (e.g. after an edit) and rebuild the block list.
    ///
    /// The cache is kept, so blocks that did not change are not parsed again.
    pub fn replace(&mut self, source: &str) -> Result<Update<P::Output>, DocumentError> {
        self.source.clear();
        self.pending_cr = false;
        self.append(source)
    }

    /// Drop the source text and every cached parse.
    pub fn reset(&mut self) {
        self.source.clear();
        self.cache.clear();
        self.pending_cr = false;
    }

    fn rebuild(&mut self) -> Result<Update<P::Output>, DocumentError> {
        let Self {
            parser,
            cache,
            source,
            ..
        } = self;

        let mut stats = UpdateStats::default();
        let mut blocks = Vec::new();
        for (index, raw) in segment(source.as_str()).into_iter().enumerate() {
            let (value, hit) = cache
                .get_or_try_insert_with(raw, || parser.parse_block(raw))
                .map_err(|e| DocumentError::block_parse(index, e))?;
            if hit {
                stats.cache_hits += 1;
            } else {
                stats.parsed += 1;
            }
            blocks.push(ParsedBlock {
                index,
                kind: BlockKind::classify(raw),
                raw: raw.to_string(),
                hash: block_hash(index, raw),
                value: value.clone(),
            });
        }
        stats.blocks = blocks.len();

        log::debug!(
            "document rebuilt: {} blocks, {} cache hits, {} parsed, cache size {}",
            stats.blocks,
            stats.cache_hits,
            stats.parsed,
            cache.size()
        );
        Ok(Update { blocks, stats })
    }

    fn normalize_newlines<'a>(&mut self, chunk: &'a str) -> Cow<'a, str> {
        let mut chunk = chunk;
        if self.pending_cr && !chunk.is_empty() {
            chunk = chunk.strip_prefix('\n').unwrap_or(chunk);
            self.pending_cr = false;
        }
        if !chunk.contains('\r') {
            return Cow::Borrowed(chunk);
        }

        let mut out = String::with_capacity(chunk.len());
        let mut chars = chunk.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\r' {
                out.push(c);
                continue;
            }
            out.push('\n');
            match chars.peek() {
                Some('\n') => {
                    chars.next();
                }
                Some(_) => {}
                // May be the first half of a CRLF pair split across chunks.
                None => self.pending_cr = true,
            }
        }
        Cow::Owned(out)
    }
}
