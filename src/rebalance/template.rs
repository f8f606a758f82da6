//! Literal block templates matching the canonical source formatting.
//!
//! Matching is byte-for-byte, so key order and spacing here must stay in
//! step with the source file:
//!
//! ```text
//! baseStats: { HP: 0, Attack: 70, Defense: 0, Instinct: 10, Speed: 15 }
//! trainingBonus: { typeMatch: 11, otherStats: 1, maxFriendshipTypeMatch: 29 }
//! ```

use crate::cards::{BaseStats, TrainingBonus};

/// Render a number the way the source writes it: `11` not `11.0`, `0.5`
/// as-is.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid printing negative zero as "-0".
        return "0".to_string();
    }
    format!("{value}")
}

#[must_use]
pub fn base_stats_literal(stats: &BaseStats) -> String {
    let body = stats
        .iter()
        .map(|(key, value)| format!("{}: {}", key.name(), value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("baseStats: {{ {body} }}")
}

#[must_use]
pub fn training_bonus_literal(bonus: &TrainingBonus) -> String {
    format!(
        "trainingBonus: {{ typeMatch: {}, otherStats: {}, maxFriendshipTypeMatch: {} }}",
        format_number(bonus.type_match),
        format_number(bonus.other_stats),
        format_number(bonus.max_friendship_type_match)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stats_literal() {
        let literal = base_stats_literal(&BaseStats::new(0, 70, 0, 10, 15));
        assert_eq!(
            literal,
            "baseStats: { HP: 0, Attack: 70, Defense: 0, Instinct: 10, Speed: 15 }"
        );
    }

    #[test]
    fn test_training_bonus_literal() {
        let literal = training_bonus_literal(&TrainingBonus::new(11.0, 1.0, 29.0));
        assert_eq!(
            literal,
            "trainingBonus: { typeMatch: 11, otherStats: 1, maxFriendshipTypeMatch: 29 }"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(11.0), "11");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
    }
}
