use super::title_case;

/// Key for one author entry, or `None` for a blank entry.
pub fn normalize(raw: &str) -> Option<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }
    Some(title_case(&name))
}
