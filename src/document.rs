use std::{fs, path::Path};

use anyhow::Context;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::item::{ItemFields, LabelMatch};

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li.item").unwrap());
static LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
static AUTHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("th.author + td").unwrap());
static TAG: Lazy<Selector> = Lazy::new(|| Selector::parse("ul.tags li").unwrap());

/// A parsed repository report.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Document {
            html: Html::parse_document(source),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Ok(Self::parse(&source))
    }

    /// Every `li.item` in document order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = HtmlItem<'_>> {
        self.html
            .select(&ITEM)
            .map(|element| HtmlItem { element })
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// One item, read lazily from its `li` element.
pub struct HtmlItem<'a> {
    element: ElementRef<'a>,
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

impl ItemFields for HtmlItem<'_> {
    fn field(&self, label: &str, matching: LabelMatch) -> anyhow::Result<Option<String>> {
        let Some(th) = self
            .element
            .select(&LABEL)
            .find(|th| matching.matches(&text_of(*th), label))
        else {
            return Ok(None);
        };
        let value = th
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "td")
            .map(|td| text_of(td).trim().to_string());
        Ok(value)
    }

    fn authors(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.element.select(&AUTHOR).map(text_of).collect())
    }

    fn tags(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.element.select(&TAG).map(text_of).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"<!DOCTYPE html>
<html><body><ul class="report">
  <li id="item_1" class="item journalArticle">
    <h2>Green cities</h2>
    <table>
      <tr><th>Item Type</th><td>Journal Article</td></tr>
      <tr><th class="author">Author</th><td> maria SILVA </td></tr>
      <tr><th class="author">Author</th><td>João Souza</td></tr>
      <tr><th>Abstract</th><td>On <b>sustainability</b>.</td></tr>
      <tr><th>Date</th><td>2021</td></tr>
    </table>
    <h3 class="tags">Tags:</h3>
    <ul class="tags"><li>eco</li><li> Waste </li></ul>
  </li>
  <li id="item_2" class="item thesis">
    <table><tr><th>Date</th></tr></table>
  </li>
</ul></body></html>"#;

    #[test]
    fn items_are_listed_in_order() {
        let doc = Document::parse(REPORT);
        assert_eq!(doc.items().len(), 2);
    }

    #[test]
    fn field_reads_the_following_cell() {
        let doc = Document::parse(REPORT);
        let first = doc.items().next().unwrap();
        let ty = first
            .field("item type", LabelMatch::CaseInsensitive)
            .unwrap();
        assert_eq!(ty.as_deref(), Some("Journal Article"));
        let abs = first.field("Abstract", LabelMatch::Exact).unwrap();
        assert_eq!(abs.as_deref(), Some("On sustainability."));
        assert_eq!(first.field("date", LabelMatch::Exact).unwrap(), None);
    }

    #[test]
    fn label_without_cell_is_absent() {
        let doc = Document::parse(REPORT);
        let second = doc.items().nth(1).unwrap();
        assert_eq!(second.field("Date", LabelMatch::Exact).unwrap(), None);
        assert!(second.authors().unwrap().is_empty());
        assert!(second.tags().unwrap().is_empty());
    }

    #[test]
    fn authors_and_tags_keep_raw_text() {
        let doc = Document::parse(REPORT);
        let first = doc.items().next().unwrap();
        assert_eq!(
            first.authors().unwrap(),
            vec![" maria SILVA ", "João Souza"]
        );
        assert_eq!(first.tags().unwrap(), vec!["eco", " Waste "]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Document::load(Path::new("/definitely/not/here.html"))
            .err()
            .expect("missing file");
        assert!(
            err.to_string()
                .contains("reading /definitely/not/here.html")
        );
    }
}
