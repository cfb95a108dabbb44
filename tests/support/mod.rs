#![allow(dead_code)]

use std::convert::Infallible;

use mdblocks::{BlockParser, IncrementalDocument, Options};

/// A block parser that records every block it is asked to parse.
#[derive(Debug, Default)]
pub struct RecordingParser {
    pub calls: Vec<String>,
}

impl BlockParser for RecordingParser {
    type Output = String;
    type Error = Infallible;

    fn parse_block(&mut self, block: &str) -> Result<String, Infallible> {
        self.calls.push(block.to_string());
        Ok(block.to_uppercase())
    }
}

pub fn recording_document(opts: Options) -> IncrementalDocument<RecordingParser> {
    IncrementalDocument::new(RecordingParser::default(), opts)
}

/// Feed `chunks` into a fresh document and return the raw text of the final blocks.
pub fn collect_final_raw(chunks: impl IntoIterator<Item = String>, opts: Options) -> Vec<String> {
    let mut doc = recording_document(opts);
    let mut last = Vec::new();
    for chunk in chunks {
        let update = doc.append(&chunk).expect("recording parser never fails");
        last = update.blocks.into_iter().map(|b| b.raw).collect();
    }
    last
}

pub fn chunk_whole(text: &str) -> Vec<String> {
    vec![text.to_string()]
}

pub fn chunk_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(|s| s.to_string()).collect()
}

pub fn chunk_chars(text: &str) -> Vec<String> {
    text.chars().map(|c| c.to_string()).collect()
}

fn fnv1a64(s: &str) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in s.as_bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

fn xorshift64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

pub fn chunk_pseudo_random(
    text: &str,
    seed_label: &str,
    trial: u64,
    max_bytes: usize,
) -> Vec<String> {
    assert!(max_bytes > 0);
    let mut state = fnv1a64(seed_label) ^ (trial.wrapping_mul(0x9e3779b97f4a7c15)) | 1;

    let mut out = Vec::new();
    let mut start = 0usize;
    while start < text.len() {
        let want = (xorshift64(&mut state) as usize % max_bytes) + 1;
        let mut end = (start + want).min(text.len());
        while end < text.len() && !text.is_char_boundary(end) {
            end += 1;
        }
        out.push(text[start..end].to_string());
        start = end;
    }
    out
}
