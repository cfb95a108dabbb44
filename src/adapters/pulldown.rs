use std::convert::Infallible;

use crate::document::BlockParser;

use pulldown_cmark::{Event, Options as PulldownOptions, Parser};

#[derive(Debug, Clone)]
pub struct PulldownBlockParserOptions {
    pub pulldown: PulldownOptions,
}

impl Default for PulldownBlockParserOptions {
    fn default() -> Self {
        Self {
            pulldown: PulldownOptions::ENABLE_TABLES | PulldownOptions::ENABLE_STRIKETHROUGH,
        }
    }
}

/// Parses each block into an owned pulldown-cmark event list.
///
/// Blocks are parsed in isolation, so reference-style links whose definition lives in another
/// block stay unresolved.
#[derive(Debug, Default, Clone)]
pub struct PulldownBlockParser {
    opts: PulldownBlockParserOptions,
}

impl PulldownBlockParser {
    pub fn new(opts: PulldownBlockParserOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &PulldownBlockParserOptions {
        &self.opts
    }
}

impl BlockParser for PulldownBlockParser {
    type Output = Vec<Event<'static>>;
    type Error = Infallible;

    fn parse_block(&mut self, block: &str) -> Result<Self::Output, Self::Error> {
        Ok(parse_events_static(block, self.opts.pulldown))
    }
}

fn parse_events_static(input: &str, options: PulldownOptions) -> Vec<Event<'static>> {
    Parser::new_ext(input, options)
        .map(|e| e.into_static())
        .collect()
}
