/// Key for a journal title. The original casing is kept; blank titles are not counted.
pub fn normalize(raw: &str) -> Option<String> {
    let title = raw.trim();
    (!title.is_empty()).then(|| title.to_string())
}
