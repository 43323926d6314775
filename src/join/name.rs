use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks stripped after canonical decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize a comuna name into a comparison key.
/// Lowercases, strips accents (NFD + combining marks), and trims surrounding whitespace.
pub fn normalize(name: &str) -> String {
    let stripped: String = name.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();
    stripped.trim().to_string()
}

/// Check whether two comuna names refer to the same district.
#[inline]
pub fn same_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Peñalolén"), normalize("penalolen"));
        assert_eq!(normalize("Peñalolén"), "penalolen");
        assert_eq!(normalize("ÑUÑOA"), "nunoa");
        assert_eq!(normalize("Maipú"), "maipu");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize(" LA FLORIDA "), normalize("la florida"));
        assert_eq!(normalize("\tSan Joaquín\n"), "san joaquin");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(normalize("Estación  Central"), "estacion  central");
        assert!(!same_name("Estación Central", "EstacionCentral"));
    }

    #[test]
    fn empty_and_plain_names() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("renca"), "renca");
    }

    #[test]
    fn precomposed_and_decomposed_forms_match() {
        // "í" as a single code point vs. "i" followed by a combining acute accent.
        assert!(same_name("Conchal\u{00ED}", "Conchali\u{0301}"));
    }
}
