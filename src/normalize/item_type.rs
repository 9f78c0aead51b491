/// Substrings marking a journal article in any supported export language.
const JOURNAL_MARKERS: &[&str] = &["periódico", "journal"];

/// Lowercase the type and capitalize its first letter: `JOURNAL ARTICLE` becomes
/// `Journal article`.
pub fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_journal_article(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    JOURNAL_MARKERS.iter().any(|m| lower.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(normalize("  artigo de PERIÓDICO "), "Artigo de periódico");
        assert_eq!(normalize("Journal Article"), "Journal article");
        assert_eq!(normalize("élan"), "Élan");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn recognizes_journal_articles() {
        assert!(is_journal_article("Artigo de Periódico"));
        assert!(is_journal_article("JOURNAL ARTICLE"));
        assert!(is_journal_article("Periódico"));
        assert!(!is_journal_article("Dissertação"));
        assert!(!is_journal_article("Book Section"));
    }
}
