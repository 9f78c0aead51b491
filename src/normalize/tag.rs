/// Key for one tag entry, or `None` for a blank entry. Tags are counted lowercased.
pub fn normalize(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}
