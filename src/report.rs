use std::{collections::BTreeMap, fmt};

use log::{info, warn};

use crate::{
    aggregate::{AggregateState, aggregate_item},
    item::ItemFields,
    locale::{Heading, Locale},
    normalize::{date::Year, keyword::KEYWORDS, language::Language, title_case},
};

/// Result of one pass over a document.
#[derive(Debug)]
pub struct PassOutcome {
    pub state: AggregateState,
    pub items: usize,
    /// Items abandoned part-way. Whatever they contributed before failing is still counted.
    pub faulted: usize,
}

/// Aggregate every item in order. A failing item is logged and skipped; it never aborts the pass.
pub fn run_pass<I>(items: I, locale: Locale) -> PassOutcome
where
    I: IntoIterator,
    I::Item: ItemFields,
{
    let labels = locale.labels();
    let mut state = AggregateState::default();
    let mut total = 0;
    let mut faulted = 0;
    for (index, item) in items.into_iter().enumerate() {
        total += 1;
        if let Err(err) = aggregate_item(&item, labels, &mut state) {
            warn!("item {}: {err:#}; skipping the rest of it", index + 1);
            faulted += 1;
        }
    }
    info!("aggregated {total} items ({faulted} faulted)");
    PassOutcome {
        state,
        items: total,
        faulted,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn count(n: u64) -> Self {
        Cell::Number(n as i64)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub columns: [String; 2],
    pub rows: Vec<[Cell; 2]>,
}

impl Section {
    fn new(heading: &Heading, rows: Vec<[Cell; 2]>) -> Self {
        Section {
            title: heading.title.to_string(),
            columns: heading.columns.map(str::to_string),
            rows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Flatten into table rows: per section a title row, a header row, the data rows and an
    /// empty separator row. The last section has no separator.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        let mut out = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push(Vec::new());
            }
            out.push(vec![Cell::text(section.title.as_str())]);
            out.push(
                section
                    .columns
                    .iter()
                    .map(|c| Cell::text(c.as_str()))
                    .collect(),
            );
            out.extend(section.rows.iter().map(|r| r.to_vec()));
        }
        out
    }
}

/// Rows sorted by key ignoring case. Keys equal up to case stay in raw key order.
fn by_key_ignoring_case(table: BTreeMap<String, u64>) -> Vec<[Cell; 2]> {
    let mut entries: Vec<_> = table.into_iter().collect();
    entries.sort_by_cached_key(|(k, _)| k.to_lowercase());
    entries
        .into_iter()
        .map(|(k, n)| [Cell::Text(k), Cell::count(n)])
        .collect()
}

/// Lay the aggregated tables out as report sections.
pub fn render(state: AggregateState, locale: Locale) -> Report {
    let headings = locale.headings();

    let keywords = KEYWORDS
        .iter()
        .map(|k| {
            let n = state.keywords.get(k).copied().unwrap_or(0);
            [Cell::text(*k), Cell::count(n)]
        })
        .collect();

    let mut years: Vec<[Cell; 2]> = state
        .years
        .iter()
        .rev()
        .filter_map(|(year, n)| match year {
            Year::Known(y) => Some([Cell::Number(i64::from(*y)), Cell::count(*n)]),
            Year::Unknown => None,
        })
        .collect();
    if let Some(n) = state.years.get(&Year::Unknown) {
        years.push([Cell::text(locale.unknown_year()), Cell::count(*n)]);
    }

    let languages = Language::ALL
        .iter()
        .map(|l| {
            let n = state.languages.get(l).copied().unwrap_or(0);
            [Cell::text(locale.language_name(*l)), Cell::count(n)]
        })
        .collect();

    let mut tags: Vec<_> = state.tags.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let tags = tags
        .into_iter()
        .map(|(t, n)| [Cell::Text(title_case(&t)), Cell::count(n)])
        .collect();

    Report {
        sections: vec![
            Section::new(&headings.item_types, by_key_ignoring_case(state.item_types)),
            Section::new(&headings.authors, by_key_ignoring_case(state.authors)),
            Section::new(&headings.keywords, keywords),
            Section::new(&headings.dates, years),
            Section::new(&headings.languages, languages),
            Section::new(&headings.journals, by_key_ignoring_case(state.journals)),
            Section::new(&headings.tags, tags),
        ],
    }
}
