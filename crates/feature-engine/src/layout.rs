//! Questionnaire Column Layout
//!
//! Answers arrive letter by letter in `R, I, A, S, E, C` order, eight items
//! per letter, i.e. `R1..R8, I1..I8, ..., C1..C8`.

/// Trait letters in training column order
pub const TRAIT_LETTERS: [char; 6] = ['R', 'I', 'A', 'S', 'E', 'C'];

/// Items answered per trait letter
pub const ITEMS_PER_LETTER: usize = 8;

/// Column names in training order
pub fn column_names() -> Vec<String> {
    TRAIT_LETTERS
        .iter()
        .flat_map(|letter| (1..=ITEMS_PER_LETTER).map(move |item| format!("{letter}{item}")))
        .collect()
}

/// Position of `item` (1-based) for `letter`, if both are valid
pub fn column_index(letter: char, item: usize) -> Option<usize> {
    let block = TRAIT_LETTERS.iter().position(|&l| l == letter)?;
    if !(1..=ITEMS_PER_LETTER).contains(&item) {
        return None;
    }
    Some(block * ITEMS_PER_LETTER + item - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INPUT_WIDTH;

    #[test]
    fn test_column_names() {
        let names = column_names();
        assert_eq!(names.len(), INPUT_WIDTH);
        assert_eq!(names[0], "R1");
        assert_eq!(names[8], "I1");
        assert_eq!(names[47], "C8");
    }

    #[test]
    fn test_column_index_matches_names() {
        let names = column_names();
        assert_eq!(column_index('S', 3), Some(26));
        assert_eq!(names[26], "S3");
        assert_eq!(column_index('C', 8), Some(47));
    }

    #[test]
    fn test_column_index_rejects_unknown() {
        assert_eq!(column_index('X', 1), None);
        assert_eq!(column_index('R', 0), None);
        assert_eq!(column_index('R', 9), None);
    }
}
