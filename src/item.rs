use serde_json::{Map, Value, json};

use crate::locale::Labels;

/// How a label cell's text is compared against the label being looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelMatch {
    Exact,
    CaseInsensitive,
}

impl LabelMatch {
    pub fn matches(self, cell: &str, label: &str) -> bool {
        let cell = cell.trim();
        match self {
            LabelMatch::Exact => cell == label,
            LabelMatch::CaseInsensitive => cell.to_lowercase() == label.to_lowercase(),
        }
    }
}

/// Key-value access to one bibliographic item.
///
/// Every accessor may fail: a failure aborts the current item only, never the report.
pub trait ItemFields {
    /// The trimmed value paired with `label`, or `None` when the label is missing or has no
    /// value.
    fn field(&self, label: &str, matching: LabelMatch) -> anyhow::Result<Option<String>>;
    /// Raw text of every author entry, in document order.
    fn authors(&self) -> anyhow::Result<Vec<String>>;
    /// Raw text of every tag entry, in document order.
    fn tags(&self) -> anyhow::Result<Vec<String>>;
}

/// An item detached from its document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    /// `(label, value)` pairs in document order. A value of `None` is a label with no value cell.
    pub fields: Vec<(String, Option<String>)>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

impl Item {
    /// Copy the labeled fields, authors and tags out of `item`. Missing fields are left out.
    pub fn snapshot(item: &impl ItemFields, labels: &Labels) -> anyhow::Result<Item> {
        let lookups = [
            (labels.item_type, LabelMatch::CaseInsensitive),
            (labels.abstract_, LabelMatch::Exact),
            (labels.date, LabelMatch::Exact),
            (labels.language, LabelMatch::Exact),
            (labels.publication_title, LabelMatch::Exact),
        ];
        let mut fields = Vec::new();
        for (label, matching) in lookups {
            if let Some(value) = item.field(label, matching)? {
                fields.push((label.to_string(), Some(value)));
            }
        }
        Ok(Item {
            fields,
            authors: item.authors()?,
            tags: item.tags()?,
        })
    }

    pub fn to_json(&self) -> Value {
        let fields: Map<String, Value> = self
            .fields
            .iter()
            .map(|(label, value)| (label.clone(), json!(value)))
            .collect();
        json!({ "fields": fields, "authors": self.authors, "tags": self.tags })
    }

    #[cfg(test)]
    pub fn with_field(mut self, label: &str, value: &str) -> Self {
        self.fields
            .push((label.to_string(), Some(value.to_string())));
        self
    }

    #[cfg(test)]
    pub fn with_author(mut self, author: &str) -> Self {
        self.authors.push(author.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

impl ItemFields for Item {
    fn field(&self, label: &str, matching: LabelMatch) -> anyhow::Result<Option<String>> {
        // First label wins, even if it has no value.
        Ok(self
            .fields
            .iter()
            .find(|(l, _)| matching.matches(l, label))
            .and_then(|(_, v)| v.as_deref())
            .map(|v| v.trim().to_string()))
    }

    fn authors(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.authors.clone())
    }

    fn tags(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}
