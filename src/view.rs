//! Data-to-view shaping.
//!
//! Pure functions from loaded records to display structures. No I/O here and
//! no arithmetic beyond string formatting: tallies arrive precomputed and
//! ordering was fixed at the load seam.

use crate::model::{DateEntry, Game, Goal, GoalCredit, PoolData};

/// Which page is being rendered. Carries the per-variant static text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    GoalTracker,
    BetTracker,
    PlayoffPool,
}

impl Variant {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "goals" => Some(Variant::GoalTracker),
            "bets" => Some(Variant::BetTracker),
            "pool" => Some(Variant::PlayoffPool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::GoalTracker => "goals",
            Variant::BetTracker => "bets",
            Variant::PlayoffPool => "pool",
        }
    }

    pub fn page_file(&self) -> &'static str {
        match self {
            Variant::GoalTracker => "goals.html",
            Variant::BetTracker => "bets.html",
            Variant::PlayoffPool => "pool.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Variant::GoalTracker => "Goal Tracker",
            Variant::BetTracker => "Goal Bet Tracker",
            Variant::PlayoffPool => "Playoff Pool Tracker",
        }
    }

    pub fn description(&self) -> &'static [&'static str] {
        match self {
            Variant::GoalTracker => &["Goals by tracked players, most recent games first."],
            Variant::BetTracker => &[
                "Tracking goals to settle a bet. The bet settles if any of the \
                 following pairs score on the same night:",
                "Draisaitl and Matthews",
                "Nylander and Point",
                "Kaprizov and Caufield",
            ],
            Variant::PlayoffPool => &["Nightly playoff results and pool standings."],
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub title: &'static str,
    pub description: Vec<String>,
    pub tables: Vec<TableView>,
    pub sections: Vec<DateSection>,
}

#[derive(Debug, Clone)]
pub struct DateSection {
    pub date: String,
    /// `(team, count)` pairs; empty when the input carries no counts.
    pub played: Vec<(String, u32)>,
    pub games: Vec<GameCard>,
}

#[derive(Debug, Clone)]
pub struct GameCard {
    pub id: u64,
    pub title: String,
    /// `"4 - 2"`, or empty when the game has no final score yet.
    pub score: String,
    pub goals: Vec<GoalLine>,
}

/// One goal as displayed: `(name, emphasized)` pairs in scoring-credit order.
#[derive(Debug, Clone)]
pub struct GoalLine {
    pub period: String,
    pub time: String,
    pub players: Vec<(String, bool)>,
}

#[derive(Debug, Clone)]
pub struct TableView {
    pub caption: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// Shape a tracker page (bare date array input).
pub fn tracker_page(variant: Variant, dates: &[DateEntry]) -> PageView {
    PageView {
        title: variant.title(),
        description: variant.description().iter().map(|s| s.to_string()).collect(),
        tables: Vec::new(),
        sections: dates.iter().map(date_section).collect(),
    }
}

/// Shape the playoff-pool page: standings tables first, then the date cards.
pub fn pool_page(data: &PoolData) -> PageView {
    let variant = Variant::PlayoffPool;
    PageView {
        title: variant.title(),
        description: variant.description().iter().map(|s| s.to_string()).collect(),
        tables: pool_tables(data),
        sections: data.games.iter().map(date_section).collect(),
    }
}

fn pool_tables(data: &PoolData) -> Vec<TableView> {
    vec![
        TableView {
            caption: "Team wins",
            columns: &["Team", "Wins"],
            rows: data
                .team_wins
                .iter()
                .map(|r| vec![r.team.clone(), r.wins.to_string()])
                .collect(),
        },
        TableView {
            caption: "Player points",
            columns: &["Player", "Points"],
            rows: data
                .player_points
                .iter()
                .map(|r| vec![r.player.clone(), r.points.to_string()])
                .collect(),
        },
        TableView {
            caption: "Standings",
            columns: &["Person", "Wins", "Points", "Total"],
            rows: data
                .people
                .iter()
                .map(|r| {
                    vec![
                        r.person.clone(),
                        r.wins.to_string(),
                        r.points.to_string(),
                        r.total.to_string(),
                    ]
                })
                .collect(),
        },
    ]
}

fn date_section(entry: &DateEntry) -> DateSection {
    DateSection {
        date: entry.date.clone(),
        played: entry.played.clone().unwrap_or_default(),
        games: entry.games.iter().map(game_card).collect(),
    }
}

fn game_card(game: &Game) -> GameCard {
    let score = match &game.scores {
        Some([a, b]) => format!("{} - {}", a, b),
        None => String::new(),
    };
    GameCard {
        id: game.id,
        title: format!("{} - {}", game.names[0], game.names[1]),
        score,
        goals: game.goals.iter().map(goal_line).collect(),
    }
}

fn goal_line(goal: &Goal) -> GoalLine {
    let players = match &goal.credit {
        GoalCredit::Single { player, goals_to_date } => {
            let name = match goals_to_date {
                Some(n) => format!("{} ({})", player, n),
                None => player.clone(),
            };
            vec![(name, false)]
        }
        GoalCredit::Shared { scorers } => scorers.clone(),
    };
    GoalLine {
        period: goal.period.clone(),
        time: goal.time.clone(),
        players,
    }
}
