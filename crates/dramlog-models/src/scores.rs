use serde::{Deserialize, Serialize};

/// The four named sub-scores of a tasting, each 0-25.
///
/// The 0-100 total is always computed from the parts on read and never
/// stored, so the two can't drift apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScoreCard {
    pub nose: u8,
    pub palate: u8,
    pub finish: u8,
    pub balance: u8,
}

impl ScoreCard {
    pub const SECTION_MAX: u8 = 25;

    pub fn total(&self) -> u16 {
        self.nose as u16 + self.palate as u16 + self.finish as u16 + self.balance as u16
    }

    pub fn is_valid(&self) -> bool {
        [self.nose, self.palate, self.finish, self.balance]
            .iter()
            .all(|s| *s <= Self::SECTION_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_parts() {
        let scores = ScoreCard { nose: 20, palate: 18, finish: 15, balance: 22 };
        assert_eq!(scores.total(), 75);
    }

    #[test]
    fn test_validity_bounds() {
        let scores = ScoreCard { nose: 25, palate: 25, finish: 25, balance: 25 };
        assert!(scores.is_valid());
        assert_eq!(scores.total(), 100);

        let over = ScoreCard { nose: 26, ..scores };
        assert!(!over.is_valid());
    }
}
