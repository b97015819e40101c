//! Typo-tolerant answer matching
//!
//! Input is trimmed and lower-cased, then compared by edit distance against
//! both language names. The allowed distance depends on the length of the
//! name currently displayed:
//! - more than 4 characters: up to 2 edits
//! - otherwise: up to 1 edit

/// Names accepted for a round
#[derive(Clone, Copy, Debug)]
pub struct AcceptedNames<'a> {
    /// Name in the displayed language; sets the threshold
    pub primary: &'a str,
    /// Name in the other language
    pub alternate: &'a str,
}

impl<'a> AcceptedNames<'a> {
    pub fn new(primary: &'a str, alternate: &'a str) -> Self {
        AcceptedNames { primary, alternate }
    }
}

/// Allowed edit distance for a displayed name
pub fn threshold(displayed: &str) -> usize {
    if displayed.chars().count() > 4 {
        2
    } else {
        1
    }
}

/// Whether the player's input names the country
pub fn is_correct(input: &str, accepted: AcceptedNames<'_>) -> bool {
    let normalized = input.trim().to_lowercase();
    let max_distance = threshold(accepted.primary);

    [accepted.primary, accepted.alternate]
        .iter()
        .any(|name| levenshtein_distance(&normalized, &name.to_lowercase()) <= max_distance)
}

/// Levenshtein distance over chars (insert, delete, substitute)
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();

    if chars1.is_empty() {
        return chars2.len();
    }
    if chars2.is_empty() {
        return chars1.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=chars2.len()).collect();
    for (i, &c1) in chars1.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &c2) in chars2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[chars2.len()]
}
