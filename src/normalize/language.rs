/// The languages a report distinguishes. Anything else is `Unidentified`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Portuguese,
    English,
    Spanish,
    Unidentified,
}

impl Language {
    /// Rendering order of the language table.
    pub const ALL: [Language; 4] = [
        Language::Portuguese,
        Language::English,
        Language::Spanish,
        Language::Unidentified,
    ];
}

pub fn normalize(raw: &str) -> Language {
    match raw.trim().to_lowercase().as_str() {
        "por" => Language::Portuguese,
        "en" | "eng" => Language::English,
        "esp" | "spa" => Language::Spanish,
        _ => Language::Unidentified,
    }
}
