//! Per-field normalization rules. Each turns the raw text of one field into the key it is
//! counted under.

pub mod author;
pub mod date;
pub mod item_type;
pub mod journal;
pub mod keyword;
pub mod language;
pub mod tag;

/// Uppercase every letter that starts a word and lowercase the rest.
///
/// A word starts at any letter not preceded by another letter, so `o'brien` becomes `O'Brien`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("maria da silva"), "Maria Da Silva");
        assert_eq!(title_case("JEAN-LUC o'brien"), "Jean-Luc O'Brien");
        assert_eq!(title_case("élise ávila"), "Élise Ávila");
        assert_eq!(title_case("e-waste 2.0"), "E-Waste 2.0");
    }

    #[test]
    fn title_case_is_idempotent() {
        proptest::proptest!(|(s in "[a-zA-ZÀ-ÖØ-Ýà-öø-ý'. -]{0,40}")| {
            let once = title_case(&s);
            proptest::prop_assert_eq!(title_case(&once), once);
        })
    }
}
