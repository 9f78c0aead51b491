use once_cell::sync::Lazy;
use regex::Regex;

/// Terms counted in abstracts, in report order.
pub const KEYWORDS: [&str; 20] = [
    "patrimônio ambiental",
    "environmental heritage",
    "património ambiental",
    "sustentabilidade",
    "sustainability",
    "sostenibilidad",
    "cidade sustentável",
    "cidades sustentáveis",
    "sustainable city",
    "sustainable cities",
    "ciudade sostenible",
    "ciudades sostenibles",
    "lixo eletrônico",
    "resíduo eletrônico",
    "resíduos eletrônicos",
    "e-waste",
    "electronic waste",
    "basura electrónica",
    "residuo electrónico",
    "residuos electrónicos",
];

// Unicode-aware word boundaries, so accented letters count as part of a word.
static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .map(|k| Regex::new(&format!(r"\b{}\b", regex::escape(&k.to_lowercase()))).unwrap())
        .collect()
});

/// Whole-word occurrences of every keyword in `text`, in [`KEYWORDS`] order.
pub fn count(text: &str) -> impl Iterator<Item = (&'static str, usize)> {
    let lower = text.to_lowercase();
    let counts: Vec<usize> = PATTERNS
        .iter()
        .map(|re| re.find_iter(&lower).count())
        .collect();
    KEYWORDS.into_iter().zip(counts)
}
