use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("names from stdin cannot be modified; pass --names <file>")]
    StdinReadOnly,
}

/// One name per line, trimmed; blank lines dropped. Order and duplicates
/// are kept.
pub fn parse_names(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keeps the first occurrence of each name.
pub fn dedupe(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect()
}

/// Appends cleaned names, skipping blanks.
pub fn extend_names(names: &mut Vec<String>, extra: &[String]) -> usize {
    let before = names.len();
    names.extend(
        extra
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string),
    );
    names.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let names = parse_names("  Ann \n\n\tBo\r\n   \nAnn\n");
        assert_eq!(names, vec!["Ann", "Bo", "Ann"]);
    }

    #[test]
    fn parse_of_empty_text_is_empty() {
        assert!(parse_names("").is_empty());
        assert!(parse_names("\n \n").is_empty());
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let names = parse_names("C\nA\nC\nB\nA");
        assert_eq!(dedupe(&names), vec!["C", "A", "B"]);
    }

    #[test]
    fn extend_skips_blank_entries() {
        let mut names = vec!["A".to_string()];
        let added = extend_names(&mut names, &[" B ".to_string(), "  ".to_string()]);
        assert_eq!(added, 1);
        assert_eq!(names, vec!["A", "B"]);
    }
}
