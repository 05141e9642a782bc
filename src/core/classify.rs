//! Title-tag classification.
//!
//! Every tag is a single letter looked up as a case-insensitive substring of
//! the whole title, so "Dyżur" carries `d` and `u`. This is the only place
//! that knows about the encoding.

use crate::models::tag::{Tag, TagSet};

pub fn classify(title: &str) -> TagSet {
    let lower = title.to_lowercase();
    Tag::ALL
        .into_iter()
        .filter(|t| lower.contains(t.letter()))
        .collect()
}
