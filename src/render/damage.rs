use crate::utils::errors::RenderError;

/// Full HP of the king tower at tournament level.
pub const KING_TOWER_HP: f64 = 4824.0;
/// Full HP of one princess tower at tournament level.
pub const PRINCESS_TOWER_HP: f64 = 3052.0;

/// Computes the damage a side received from its remaining tower HP.
///
/// The backend stores no damage column; the score shown on the card is the
/// combined full tower HP minus whatever was left standing.
pub fn calculate_damage(king_hp: f64, princess1_hp: f64, princess2_hp: f64) -> f64 {
    KING_TOWER_HP + PRINCESS_TOWER_HP * 2.0 - king_hp - princess1_hp - princess2_hp
}

/// Parses a tower HP column value (a numeric string) for the damage formula.
pub fn parse_tower_hp(raw: &str) -> Result<f64, RenderError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RenderError::InvalidTowerHp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_all_towers_standing() {
        // Untouched towers mean zero damage dealt
        assert_eq!(calculate_damage(4824.0, 3052.0, 3052.0), 0.0);
    }

    #[test]
    fn test_damage_all_towers_down() {
        // Every HP point is accounted for: 4824 + 2 * 3052
        assert_eq!(calculate_damage(0.0, 0.0, 0.0), 10928.0);
    }

    #[test]
    fn test_damage_matches_linear_formula() {
        // damage = 10928 - king - princess1 - princess2
        assert_eq!(calculate_damage(4000.0, 2000.0, 1000.0), 10928.0 - 7000.0);
        assert_eq!(calculate_damage(100.5, 0.0, 0.0), 10928.0 - 100.5);
    }

    #[test]
    fn test_parse_tower_hp() {
        assert_eq!(parse_tower_hp("3052").unwrap(), 3052.0);
        assert_eq!(parse_tower_hp("3052.0").unwrap(), 3052.0);
        // Whitespace from the column value is tolerated
        assert_eq!(parse_tower_hp(" 480 ").unwrap(), 480.0);
        // Non-numeric HP is a render error, not a silent NaN
        assert!(parse_tower_hp("n/a").is_err());
    }
}
