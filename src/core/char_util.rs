use unicode_blocks;

// ideographic space
const FULLWIDTH_SPACE: char = '\u{3000}';

/// full char -> half char
pub fn regularize(input: char) -> char {
    if input == FULLWIDTH_SPACE {
        return ' ';
    }
    if let Some(ub) = unicode_blocks::find_unicode_block(input) {
        if ub == unicode_blocks::HALFWIDTH_AND_FULLWIDTH_FORMS {
            let input_code = input as u32;
            // fullwidth ASCII variants sit at a fixed offset from their
            // halfwidth counterparts
            if (0xFF01..=0xFF5E).contains(&input_code) {
                return char::from_u32(input_code - 0xFEE0).unwrap_or(input);
            }
        }
    }
    input
}

/// Canonical lookup form of a designator: width-regularized, lower-cased.
pub fn fold(input: &str) -> String {
    input
        .chars()
        .map(regularize)
        .flat_map(char::to_lowercase)
        .collect()
}
