#![cfg(feature = "pulldown")]

use mdblocks::adapters::pulldown::{PulldownBlockParser, PulldownBlockParserOptions};
use mdblocks::{IncrementalDocument, Options};
use pulldown_cmark::{Event, Options as PulldownOptions, Tag};

#[test]
fn parses_blocks_into_events_and_reuses_them() {
    let parser = PulldownBlockParser::new(PulldownBlockParserOptions {
        pulldown: PulldownOptions::ENABLE_TABLES,
    });
    assert_eq!(parser.options().pulldown, PulldownOptions::ENABLE_TABLES);
    let mut doc = IncrementalDocument::new(parser, Options::default());

    let md = "# Title\n\n<!-- chart: bar -->\n\n| a | b |\n|---|---|\n| 1 | 2 |";
    let u1 = doc.append(md).unwrap();
    assert_eq!(u1.blocks.len(), 2);
    assert!(
        u1.blocks[0]
            .value
            .iter()
            .any(|e| matches!(e, Event::Start(Tag::Heading { .. })))
    );
    assert!(
        u1.blocks[1]
            .value
            .iter()
            .any(|e| matches!(e, Event::Start(Tag::Table(_))))
    );

    let u2 = doc.append("\n\nMore **text**").unwrap();
    assert_eq!(u2.stats.cache_hits, 2);
    assert_eq!(u2.stats.parsed, 1);
    assert!(
        u2.blocks[2]
            .value
            .iter()
            .any(|e| matches!(e, Event::Start(Tag::Strong)))
    );
}

#[test]
fn default_options_enable_tables_and_strikethrough() {
    let parser = PulldownBlockParser::default();
    assert!(parser.options().pulldown.contains(PulldownOptions::ENABLE_STRIKETHROUGH));
    let mut doc = IncrementalDocument::new(parser, Options::default());
    let update = doc.append("~~gone~~").unwrap();
    assert!(
        update.blocks[0]
            .value
            .iter()
            .any(|e| matches!(e, Event::Start(Tag::Strikethrough)))
    );
}
