//! Text rendering for standings and profiles.
//!
//! Renders the ranked board as a box-drawing table with movement
//! arrows, a proportional points bar per row, and podium coloring for
//! the top three. Profile rendering mirrors the profile panel fields:
//! scope label, totals, formatted average, and the match breakdown.

use crate::aggregator::ranker::{bar_fraction, max_points, Movement, RankedPlayer};
use crate::aggregator::totals::Scope;
use crate::profile::summarizer::{Breakdown, ProfileSummary};

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const GREY: &str = "\x1b[90m";

/// Width of the proportional points bar in characters
const BAR_WIDTH: usize = 20;

/// Render the ranked standings as a text table
///
/// **Public** - main entry point for table output
pub fn render_standings(ranked: &[RankedPlayer], scope: &Scope) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  STANDINGS — {}", scope.label()));
    lines.push(format!(
        "  ┏━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━┳{}┳━━━━━━━━━┳━━━━━━━━━┓",
        "━".repeat(BAR_WIDTH + 2)
    ));
    lines.push(format!(
        "  ┃ {:<5} ┃ {:<20} ┃ {:>8} ┃ {:<width$} ┃ {:>7} ┃ {:>7} ┃",
        "Rank",
        "Player",
        "Points",
        "",
        "Matches",
        "Avg",
        width = BAR_WIDTH
    ));

    let max = max_points(ranked);

    for row in ranked {
        let arrow_color = match row.movement {
            Movement::Up => GREEN,
            Movement::Down => RED,
            Movement::Flat => GREY,
        };

        let bar_len = (bar_fraction(row.points, max) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len),
            " ".repeat(BAR_WIDTH - bar_len.min(BAR_WIDTH))
        );

        let (rank_color, rank_reset) = podium_color(row.rank);

        lines.push(format!(
            "  ┃ {}{:>3}{} {}{}{} ┃ {:<20} ┃ {:>8} ┃ {:<width$} ┃ {:>7} ┃ {:>7.2} ┃",
            rank_color,
            row.rank,
            rank_reset,
            arrow_color,
            row.movement.arrow(),
            RESET,
            truncate(&row.player, 20),
            row.points,
            bar,
            row.matches,
            row.avg,
            width = BAR_WIDTH
        ));
    }

    lines.push(format!(
        "  ┗━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━┻{}┻━━━━━━━━━┻━━━━━━━━━┛",
        "━".repeat(BAR_WIDTH + 2)
    ));

    if ranked.is_empty() {
        lines.push(format!("  (no players in scope {})", scope));
    }

    lines.join("\n")
}

/// Gold/silver/bronze coloring for the podium ranks
fn podium_color(rank: usize) -> (&'static str, &'static str) {
    match rank {
        1 => ("\x1b[93m", RESET), // gold
        2 => ("\x1b[37m", RESET), // silver
        3 => ("\x1b[33m", RESET), // bronze
        _ => ("", ""),
    }
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let kept: String = name.chars().take(max_chars - 3).collect();
        format!("{kept}...")
    }
}

/// Render a player profile with its match breakdown
///
/// **Public** - used by the profile command
pub fn render_profile(summary: &ProfileSummary) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  PLAYER PROFILE — {}", summary.player));
    lines.push(format!("  View:         {}", summary.scope_label));
    lines.push(format!("  Total Points: {}", summary.total));
    lines.push(format!("  Matches:      {}", summary.matches));
    lines.push(format!("  Average:      {}", summary.formatted_avg()));
    lines.push(String::new());

    match &summary.breakdown {
        Breakdown::PerMatch(series_list) => {
            if summary.scope_label == crate::utils::config::SCOPE_ALL_LABEL {
                lines.push("  Match Breakdown (All Series)".to_string());
            } else {
                lines.push(format!("  Match Breakdown ({})", summary.scope_label));
            }
            for series in series_list {
                lines.push(format!("  {}", series.series));
                for m in &series.matches {
                    lines.push(format!("    Match {:<3} {:>8} pts", m.match_no, m.points));
                }
            }
        }
        Breakdown::PerSeries(rows) => {
            lines.push("  Series Breakdown".to_string());
            for row in rows {
                lines.push(format!(
                    "    {:<20} {:>8} pts over {} matches",
                    truncate(&row.series, 20),
                    row.points,
                    row.matches
                ));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ranker::RankedPlayer;
    use crate::profile::summarizer::{MatchPoints, SeriesBreakdown};

    fn row(rank: usize, player: &str, points: f64) -> RankedPlayer {
        RankedPlayer {
            rank,
            movement: Movement::Flat,
            player: player.to_string(),
            points,
            matches: 1,
            avg: points,
        }
    }

    #[test]
    fn test_render_standings_contains_players() {
        let ranked = vec![row(1, "Bob", 20.0), row(2, "Alice", 15.0)];
        let table = render_standings(&ranked, &Scope::All);

        assert!(table.contains("Bob"));
        assert!(table.contains("Alice"));
        assert!(table.contains("All-Time"));
    }

    #[test]
    fn test_render_empty_standings_no_panic() {
        // Zero players means max_points is 0; the bar math must not divide
        let table = render_standings(&[], &Scope::Series("S".to_string()));
        assert!(table.contains("no players in scope S"));
    }

    #[test]
    fn test_render_zero_point_board() {
        let ranked = vec![row(1, "A", 0.0)];
        let table = render_standings(&ranked, &Scope::All);
        assert!(table.contains('A'));
    }

    #[test]
    fn test_movement_arrows_rendered() {
        let mut up = row(1, "A", 10.0);
        up.movement = Movement::Up;
        let table = render_standings(&[up], &Scope::All);
        assert!(table.contains('▲'));
    }

    #[test]
    fn test_render_profile_breakdown() {
        let summary = ProfileSummary {
            player: "Alice".to_string(),
            scope_label: "S1".to_string(),
            total: 15.0,
            matches: 2,
            avg: 7.5,
            breakdown: Breakdown::PerMatch(vec![SeriesBreakdown {
                series: "S1".to_string(),
                matches: vec![
                    MatchPoints { match_no: 1, points: 10.0 },
                    MatchPoints { match_no: 2, points: 5.0 },
                ],
            }]),
        };

        let text = render_profile(&summary);

        assert!(text.contains("Alice"));
        assert!(text.contains("Match Breakdown (S1)"));
        assert!(text.contains("7.50"));
        assert!(text.contains("Match 1"));
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 20), "short");
        let long = "a".repeat(30);
        let cut = truncate(&long, 20);
        assert_eq!(cut.chars().count(), 20);
        assert!(cut.ends_with("..."));
    }
}
