//! Row configuration search for the standard families.
//!
//! Enumerates how many rows of each full pattern to lay down, tops every
//! candidate up with [`greedy_fill`], and keeps the candidate that loads the
//! most boxes once legal stacking is counted.

use std::fmt;

use truckload_core::{BoxFamily, Inventory, TruckBed};

use crate::patterns::{greedy_fill, rows_that_fit, RowPattern};
use crate::stacking::stacking_bonus;

/// Row counts chosen for the standard families.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowConfig {
    /// Rows of pattern A.
    pub a: usize,
    /// Rows of pattern B.
    pub b: usize,
    /// Rows of pattern C.
    pub c: usize,
    /// Rows of pattern D.
    pub d: usize,
    /// Rows appended by the greedy filler, in the order it chose them.
    pub filler: Vec<RowPattern>,
}

impl RowConfig {
    /// Returns the total number of rows.
    pub fn row_count(&self) -> usize {
        self.a + self.b + self.c + self.d + self.filler.len()
    }

    /// Returns the floor positions this configuration offers `family`.
    pub fn floor_slots(&self, family: BoxFamily) -> usize {
        let full = match family {
            BoxFamily::American => 2 * self.a + self.d,
            BoxFamily::European => 3 * self.c + self.d + 2 * self.b,
        };
        full + self.filler.iter().map(|p| p.count(family)).sum::<usize>()
    }

    /// Returns the rows in layout order: A, D, C, B, then filler rows.
    pub fn rows(&self) -> impl Iterator<Item = RowPattern> + '_ {
        std::iter::repeat(RowPattern::A)
            .take(self.a)
            .chain(std::iter::repeat(RowPattern::D).take(self.d))
            .chain(std::iter::repeat(RowPattern::C).take(self.c))
            .chain(std::iter::repeat(RowPattern::B).take(self.b))
            .chain(self.filler.iter().copied())
    }

    /// Returns the length consumed along the truck.
    pub fn length(&self) -> f64 {
        let full = self.a as f64 * RowPattern::A.depth()
            + self.c as f64 * RowPattern::C.depth()
            + self.d as f64 * RowPattern::D.depth()
            + self.b as f64 * RowPattern::B.depth();
        full + self.filler.iter().map(RowPattern::depth).sum::<f64>()
    }
}

impl fmt::Display for RowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={} B={} C={} D={}", self.a, self.b, self.c, self.d)?;
        if !self.filler.is_empty() {
            let codes: Vec<&str> = self.filler.iter().map(RowPattern::code).collect();
            write!(f, " filler=[{}]", codes.join(","))?;
        }
        Ok(())
    }
}

/// Ranking of a candidate configuration.
///
/// More boxes wins; ties go to fewer rows, then to less length used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Floor boxes plus stacked boxes.
    pub total: usize,
    /// Rows laid down.
    pub rows: usize,
    /// Length consumed along the truck.
    pub length: f64,
}

impl Score {
    /// Returns true if `self` ranks strictly above `other`.
    pub fn beats(&self, other: &Score) -> bool {
        if self.total != other.total {
            return self.total > other.total;
        }
        if self.rows != other.rows {
            return self.rows < other.rows;
        }
        self.length < other.length
    }
}

/// Scores a floor allocation: boxes on the floor, capped at the inventory,
/// plus what each family can stack on top.
fn score_allocation(
    floor_american: usize,
    floor_european: usize,
    american: Inventory,
    european: Inventory,
) -> usize {
    let placed_american = floor_american.min(american.total());
    let placed_european = floor_european.min(european.total());

    placed_american
        + placed_european
        + stacking_bonus(placed_american, american)
        + stacking_bonus(placed_european, european)
}

/// Finds the row configuration that loads the most standard boxes.
///
/// `a` and `c` are enumerated within the length and inventory bounds, `d`
/// within what is left of both families, and `b` is taken as large as the
/// remaining European boxes and length allow. Among equal scores the first
/// candidate in enumeration order is kept.
pub fn find_best_row_config(
    american: Inventory,
    european: Inventory,
    bed: &TruckBed,
    tolerance: f64,
) -> RowConfig {
    let length = bed.length();
    let total_american = american.total();
    let total_european = european.total();

    let depth_a = RowPattern::A.depth();
    let depth_b = RowPattern::B.depth();
    let depth_c = RowPattern::C.depth();
    let depth_d = RowPattern::D.depth();

    let max_a = (total_american / 2).min(rows_that_fit(length, depth_a, tolerance));
    let max_c = (total_european / 3).min(rows_that_fit(length, depth_c, tolerance));

    let mut best: Option<(Score, RowConfig)> = None;
    let mut candidates = 0usize;

    for a in 0..=max_a {
        let len_a = a as f64 * depth_a;
        if len_a > length + tolerance {
            break;
        }
        let american_after_a = total_american - 2 * a;

        for c in 0..=max_c {
            let len_ac = len_a + c as f64 * depth_c;
            if len_ac > length + tolerance {
                break;
            }
            let european_after_c = total_european - 3 * c;
            let rem_len = length - len_ac;

            let max_d = american_after_a
                .min(european_after_c)
                .min(rows_that_fit(rem_len, depth_d, tolerance));

            for d in 0..=max_d {
                let american_left = american_after_a - d;
                let european_left = european_after_c - d;
                let rem = rem_len - d as f64 * depth_d;

                let b = (european_left / 2).min(rows_that_fit(rem, depth_b, tolerance));
                let used_len = len_ac + d as f64 * depth_d + b as f64 * depth_b;

                let filler = greedy_fill(
                    american_left,
                    european_left - 2 * b,
                    length - used_len,
                    tolerance,
                );
                candidates += 1;

                let config = RowConfig { a, b, c, d, filler };
                let score = Score {
                    total: score_allocation(
                        config.floor_slots(BoxFamily::American),
                        config.floor_slots(BoxFamily::European),
                        american,
                        european,
                    ),
                    rows: config.row_count(),
                    length: used_len + config.filler.iter().map(RowPattern::depth).sum::<f64>(),
                };

                let better = match &best {
                    Some((best_score, _)) => score.beats(best_score),
                    None => true,
                };
                if better {
                    best = Some((score, config));
                }
            }
        }
    }

    match best {
        Some((score, config)) => {
            log::debug!(
                "row search: {} candidates, best {} -> {} boxes in {} rows, {:.2} m",
                candidates,
                config,
                score.total,
                score.rows,
                score.length
            );
            config
        }
        None => RowConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-6;

    fn search(am_s: usize, am_ns: usize, eu_s: usize, eu_ns: usize) -> RowConfig {
        find_best_row_config(
            Inventory::new(am_s, am_ns),
            Inventory::new(eu_s, eu_ns),
            &TruckBed::standard(),
            EPS,
        )
    }

    #[test]
    fn test_score_ordering() {
        let base = Score {
            total: 10,
            rows: 5,
            length: 5.0,
        };
        let more = Score { total: 11, ..base };
        let fewer_rows = Score { rows: 4, ..base };
        let shorter = Score { length: 4.8, ..base };

        assert!(more.beats(&base));
        assert!(fewer_rows.beats(&base));
        assert!(shorter.beats(&base));
        assert!(!base.beats(&base));
        assert!(more.beats(&Score { rows: 1, length: 0.1, ..base }));
    }

    #[test]
    fn test_empty_inventory() {
        let config = search(0, 0, 0, 0);
        assert_eq!(config, RowConfig::default());
        assert_eq!(config.row_count(), 0);
    }

    #[test]
    fn test_pure_american_pair() {
        let config = search(0, 2, 0, 0);
        assert_eq!(config.floor_slots(BoxFamily::American), 2);
        assert_eq!(config.row_count(), 1);
        assert!(config.rows().all(|r| r == RowPattern::A));
    }

    #[test]
    fn test_mixed_prefers_fewer_rows() {
        // 4 American and 4 European fit in 4 rows either way; the first
        // candidate with the fewest rows is B B + filler A A.
        let config = search(3, 1, 2, 2);
        assert_eq!((config.a, config.b, config.c, config.d), (0, 2, 0, 0));
        assert_eq!(config.filler, vec![RowPattern::A, RowPattern::A]);
        assert_relative_eq!(config.length(), 3.6, epsilon = 1e-9);
    }

    #[test]
    fn test_american_overflow_fills_every_row() {
        let config = search(30, 0, 0, 0);
        assert_eq!(config.floor_slots(BoxFamily::American), 26);
        assert_eq!(config.row_count(), 13);
    }

    #[test]
    fn test_european_only_uses_narrow_rows() {
        let config = search(0, 0, 0, 40);
        assert_eq!((config.a, config.b, config.c, config.d), (0, 0, 11, 0));
        assert!(config.filler.is_empty());
        assert_eq!(config.floor_slots(BoxFamily::European), 33);
    }

    #[test]
    fn test_config_never_exceeds_inventory_or_length() {
        for (am, eu) in [(0, 7), (5, 0), (9, 13), (27, 31), (3, 50)] {
            let config = search(am, 0, eu, 0);
            assert!(config.floor_slots(BoxFamily::American) <= am);
            assert!(config.floor_slots(BoxFamily::European) <= eu);
            assert!(config.length() <= 13.2 + EPS);
        }
    }

    #[test]
    fn test_rows_layout_order() {
        let config = RowConfig {
            a: 1,
            b: 1,
            c: 1,
            d: 1,
            filler: vec![RowPattern::PartialB],
        };
        let rows: Vec<RowPattern> = config.rows().collect();
        assert_eq!(
            rows,
            vec![
                RowPattern::A,
                RowPattern::D,
                RowPattern::C,
                RowPattern::B,
                RowPattern::PartialB
            ]
        );
        assert_eq!(config.to_string(), "A=1 B=1 C=1 D=1 filler=[pB]");
    }
}
