use std::sync::OnceLock;

/// Cell states times every possible neighbor count (0..=8)
const NEIGHBOUR_COUNTS: usize = 9;
type RuleTable = [[bool; NEIGHBOUR_COUNTS]; 2];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed first by the current state of the cell, then by the
/// number of living cells in its Moore neighborhood.
fn generate_rule_table() -> RuleTable {
    let mut table = [[false; NEIGHBOUR_COUNTS]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (neighbours, next) in row.iter_mut().enumerate() {
            *next = matches!((alive == 1, neighbours), (true, 2) | (_, 3));
        }
    }
    table
}

/// The state of a cell in the next generation
#[inline]
pub(super) fn next_state(alive: bool, neighbours: u8) -> bool {
    rule_table()[alive as usize]
        .get(neighbours as usize)
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
    }

    #[test]
    fn births_only_on_three() {
        let births: Vec<u8> = (0..=8).filter(|&n| next_state(false, n)).collect();
        assert_eq!(births, vec![3]);
    }

    #[test]
    fn impossible_counts_are_dead() {
        assert!(!next_state(true, 9));
        assert!(!next_state(false, 200));
    }
}
