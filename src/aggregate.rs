use std::collections::BTreeMap;

use anyhow::Context;
use log::debug;

use crate::{
    item::{ItemFields, LabelMatch},
    locale::Labels,
    normalize::{
        author, date, date::Year, item_type, journal, keyword, language, language::Language, tag,
    },
};

/// Frequency tables accumulated over a whole report.
///
/// Keys are normalized field values. Counts only ever grow, and no key is removed once it has
/// been inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateState {
    pub item_types: BTreeMap<String, u64>,
    pub authors: BTreeMap<String, u64>,
    /// Occurrences summed over all abstracts, not the number of items mentioning the keyword.
    pub keywords: BTreeMap<&'static str, u64>,
    pub years: BTreeMap<Year, u64>,
    pub languages: BTreeMap<Language, u64>,
    pub journals: BTreeMap<String, u64>,
    pub tags: BTreeMap<String, u64>,
}

fn bump<K: Ord>(table: &mut BTreeMap<K, u64>, key: K, by: u64) {
    *table.entry(key).or_default() += by;
}

/// Merge one item into `state`.
///
/// Each field is written to `state` as soon as it is read. When an accessor fails, the fields
/// merged before it stay counted and the error is returned.
pub fn aggregate_item(
    item: &impl ItemFields,
    labels: &Labels,
    state: &mut AggregateState,
) -> anyhow::Result<()> {
    let raw_type = item
        .field(labels.item_type, LabelMatch::CaseInsensitive)
        .context("reading item type")?;
    if let Some(raw) = &raw_type {
        bump(&mut state.item_types, item_type::normalize(raw), 1);
    }

    for raw in item.authors().context("reading authors")? {
        if let Some(name) = author::normalize(&raw) {
            bump(&mut state.authors, name, 1);
        }
    }

    for raw in item.tags().context("reading tags")? {
        if let Some(t) = tag::normalize(&raw) {
            bump(&mut state.tags, t, 1);
        }
    }

    if let Some(text) = item
        .field(labels.abstract_, LabelMatch::Exact)
        .context("reading abstract")?
    {
        for (kw, n) in keyword::count(&text) {
            bump(&mut state.keywords, kw, n as u64);
        }
    }

    if let Some(raw) = item
        .field(labels.date, LabelMatch::Exact)
        .context("reading date")?
    {
        let year = date::normalize(&raw);
        debug!("date {raw:?} -> {year:?}");
        bump(&mut state.years, year, 1);
    }

    if let Some(raw) = item
        .field(labels.language, LabelMatch::Exact)
        .context("reading language")?
    {
        bump(&mut state.languages, language::normalize(&raw), 1);
    }

    if raw_type
        .as_deref()
        .is_some_and(item_type::is_journal_article)
        && let Some(raw) = item
            .field(labels.publication_title, LabelMatch::Exact)
            .context("reading publication title")?
        && let Some(title) = journal::normalize(&raw)
    {
        bump(&mut state.journals, title, 1);
    }

    Ok(())
}
