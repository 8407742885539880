/// The number of distinct live-neighbor counts in a Moore neighborhood (0..=8)
const NEIGHBOR_COUNTS: usize = 9;
type RuleTable = [[bool; NEIGHBOR_COUNTS]; 2];

/// Lookup table for the Game of Life ruleset (B3/S23)
///
/// Indexed first by whether the cell is currently alive, then by its number
/// of live neighbors.
const RULE_TABLE: RuleTable = generate_rule_table();

const fn generate_rule_table() -> RuleTable {
    let mut table = [[false; NEIGHBOR_COUNTS]; 2];
    let mut neighbors = 0;
    while neighbors < NEIGHBOR_COUNTS {
        // birth
        table[0][neighbors] = neighbors == 3;
        // survival
        table[1][neighbors] = neighbors == 2 || neighbors == 3;
        neighbors += 1;
    }
    table
}

/// Returns whether a cell is alive in the next generation
pub(super) fn next_state(alive: bool, neighbors: u8) -> bool {
    RULE_TABLE[usize::from(alive)]
        .get(usize::from(neighbors))
        .copied()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
        assert!(!next_state(false, 8));
    }

    #[test]
    fn impossible_counts_are_dead() {
        assert!(!next_state(true, 9));
        assert!(!next_state(false, u8::MAX));
    }
}
