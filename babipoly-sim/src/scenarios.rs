//! Starting-money scenarios for the balance sweep, plus the assessment
//! rules used to grade each configuration.

use babipoly_game::Money;
use serde::Serialize;

use crate::simulation::BatchSummary;

/// One starting-money configuration to sweep.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub starting_money: Money,
    pub description: &'static str,
}

/// The comparison set, from the published configuration down to an
/// ultra-low cash game.
pub const CATALOG: [Scenario; 5] = [
    Scenario {
        name: "Current (250k)",
        starting_money: 250_000,
        description: "Exactly as defined in the rule sheet",
    },
    Scenario {
        name: "100k start",
        starting_money: 100_000,
        description: "Lower starting money to 100,000 FCFA",
    },
    Scenario {
        name: "60k start (rec.)",
        starting_money: 60_000,
        description: "Recommended Option C: 60,000 FCFA",
    },
    Scenario {
        name: "40k start",
        starting_money: 40_000,
        description: "Option A: 40,000 FCFA (aggressive reduction)",
    },
    Scenario {
        name: "20k start",
        starting_money: 20_000,
        description: "Ultra-low: 20,000 FCFA (very fast game)",
    },
];

/// Player counts covered by the sweep.
pub const SWEEP_PLAYER_COUNTS: [usize; 4] = [2, 4, 6, 8];

/// Grade for one scenario at one player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    NeverEnds,
    MostlyTimeout,
    Short,
    Ideal,
    Long,
    VeryLong,
}

impl Verdict {
    /// Grade from the completion percentage and the median round count of
    /// games that actually finished.
    #[must_use]
    pub fn assess(median_done_rounds: f64, completion_pct: f64) -> Self {
        if completion_pct < 20.0 {
            Self::NeverEnds
        } else if completion_pct < 50.0 {
            Self::MostlyTimeout
        } else if median_done_rounds < 40.0 {
            Self::Short
        } else if median_done_rounds <= 150.0 {
            Self::Ideal
        } else if median_done_rounds <= 250.0 {
            Self::Long
        } else {
            Self::VeryLong
        }
    }

    #[must_use]
    pub fn for_summary(summary: &BatchSummary) -> Self {
        let completion = summary.decisive_rate() * 100.0;
        let median = summary
            .decisive_rounds
            .map_or(10_000.0, |stats| stats.median);
        Self::assess(median, completion)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NeverEnds => "✗ Games never end",
            Self::MostlyTimeout => "⚠ Mostly timeout",
            Self::Short => "⚠ Short",
            Self::Ideal => "✓ Ideal",
            Self::Long => "→ Long",
            Self::VeryLong => "✗ Very long",
        }
    }

    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Ideal | Self::Long)
    }
}

/// Static rent-pressure probes for a starting-money level: the worst
/// single rent hit and the per-round bank injection, each as a share of
/// starting cash. Classic Monopoly sits at roughly 133% and 13%; values
/// far below that mean the bank keeps everyone liquid forever.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceProbes {
    pub max_hotel_rent: Money,
    pub go_reward: Money,
    pub max_rent_pct: f64,
    pub go_reward_pct: f64,
}

impl BalanceProbes {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_starting_money(starting_money: Money) -> Self {
        let max_hotel_rent = babipoly_game::max_hotel_rent();
        let go_reward = babipoly_game::constants::GO_REWARD;
        Self {
            max_hotel_rent,
            go_reward,
            max_rent_pct: max_hotel_rent as f64 / starting_money as f64 * 100.0,
            go_reward_pct: go_reward as f64 / starting_money as f64 * 100.0,
        }
    }
}

/// Seat 0's win-rate deviation from a fair share, in percentage points of
/// all games. Positive means the first player wins too often.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn first_player_bias(summary: &BatchSummary) -> f64 {
    if summary.games == 0 {
        return 0.0;
    }
    let expected = summary.games as f64 / summary.num_players as f64;
    (summary.seats[0].wins as f64 - expected) / summary.games as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_descends_from_the_published_config() {
        assert_eq!(CATALOG[0].starting_money, 250_000);
        assert!(
            CATALOG
                .windows(2)
                .all(|w| w[0].starting_money > w[1].starting_money)
        );
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::assess(100.0, 10.0), Verdict::NeverEnds);
        assert_eq!(Verdict::assess(100.0, 30.0), Verdict::MostlyTimeout);
        assert_eq!(Verdict::assess(20.0, 90.0), Verdict::Short);
        assert_eq!(Verdict::assess(100.0, 90.0), Verdict::Ideal);
        assert_eq!(Verdict::assess(200.0, 90.0), Verdict::Long);
        assert_eq!(Verdict::assess(400.0, 90.0), Verdict::VeryLong);
        // Completion gates take precedence over length.
        assert_eq!(Verdict::assess(400.0, 10.0), Verdict::NeverEnds);
    }

    #[test]
    fn probes_relate_rent_pressure_to_starting_money() {
        let probes = BalanceProbes::for_starting_money(250_000);
        assert_eq!(probes.max_hotel_rent, 58_000);
        assert_eq!(probes.go_reward, 10_000);
        assert!((probes.max_rent_pct - 23.2).abs() < 0.1);
        assert!((probes.go_reward_pct - 4.0).abs() < f64::EPSILON);

        // Halving the bankroll doubles both pressure ratios.
        let tight = BalanceProbes::for_starting_money(125_000);
        assert!((tight.max_rent_pct - 2.0 * probes.max_rent_pct).abs() < 1e-9);
    }

    #[test]
    fn healthy_verdicts() {
        assert!(Verdict::Ideal.is_healthy());
        assert!(Verdict::Long.is_healthy());
        assert!(!Verdict::NeverEnds.is_healthy());
    }
}
