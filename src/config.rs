//! Build configuration, env-driven with defaults.

use crate::view::Variant;

#[derive(Debug, Clone)]
pub struct Config {
    /// Input file per variant. A variant is only read if it is listed in
    /// `variants`.
    pub goals_path: String,
    pub bets_path: String,
    pub pool_path: String,
    pub out_dir: String,
    /// Pages to build, in order.
    pub variants: Vec<Variant>,
    /// Revalidation interval for the watch loop.
    pub revalidate_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            goals_path: std::env::var("GOALS_DATA")
                .unwrap_or_else(|_| "public/goals.json".to_string()),
            bets_path: std::env::var("BETS_DATA")
                .unwrap_or_else(|_| "public/data.json".to_string()),
            pool_path: std::env::var("POOL_DATA")
                .unwrap_or_else(|_| "public/pool.json".to_string()),
            out_dir: std::env::var("OUT_DIR").unwrap_or_else(|_| "out/site".to_string()),
            variants: std::env::var("VARIANTS")
                .map(|v| parse_variants(&v))
                .unwrap_or_else(|_| {
                    vec![Variant::GoalTracker, Variant::BetTracker, Variant::PlayoffPool]
                }),
            revalidate_secs: std::env::var("REVALIDATE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    pub fn input_path(&self, variant: Variant) -> &str {
        match variant {
            Variant::GoalTracker => &self.goals_path,
            Variant::BetTracker => &self.bets_path,
            Variant::PlayoffPool => &self.pool_path,
        }
    }
}

/// Comma-separated variant names; unknown names are dropped.
fn parse_variants(spec: &str) -> Vec<Variant> {
    spec.split(',').filter_map(Variant::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_list() {
        assert_eq!(
            parse_variants("bets, pool"),
            vec![Variant::BetTracker, Variant::PlayoffPool]
        );
        assert_eq!(parse_variants("goals,nonsense"), vec![Variant::GoalTracker]);
        assert!(parse_variants("").is_empty());
    }
}
