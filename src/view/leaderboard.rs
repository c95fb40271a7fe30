use maud::{DOCTYPE, Markup, html};

use crate::controller::leaderboard::LeaderboardPage;
use crate::model::{AggregationMode, Standing};
use crate::score::assign_positions;

/// Golf style score to par: `E`, `+3`, `-2`.
#[must_use]
pub fn format_to_par(relative_to_par: i32) -> String {
    match relative_to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

#[must_use]
pub fn render_standings(standings: &[Standing], mode: AggregationMode) -> Markup {
    let entity_header = match mode {
        AggregationMode::Team => "TEAM",
        AggregationMode::Individual => "PLAYER",
    };

    html! {
        table class="styled-table leaderboard" {
            thead {
                tr {
                    th { "POS" }
                    th { (entity_header) }
                    th { "NET" }
                    th { "GROSS" }
                    th { "THRU" }
                }
            }
            tbody {
                @if standings.is_empty() {
                    tr {
                        td colspan="5" { "No scores yet" }
                    }
                }
                @for standing in standings {
                    tr data-entity-id=(standing.row.entity_id) {
                        td class="position" { (standing.position_label()) }
                        td class="name" { (standing.row.display_name) }
                        td class="net" { (format_to_par(standing.row.net_relative_to_par)) }
                        td class="gross" { (format_to_par(standing.row.gross_relative_to_par)) }
                        td class="thru" { (standing.row.holes_completed) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_leaderboard_template(page: &LeaderboardPage) -> Markup {
    let standings = assign_positions(&page.report.rows);
    let skipped = page.report.skipped.len();

    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (page.tournament.name) }
        }
        body {
            h1 { (page.tournament.name) }
            h3 class="course" { (page.tournament.course_name) }
            (render_standings(&standings, page.mode))
            @if skipped > 0 {
                p class="skipped-scores" {
                    (skipped) " score entries could not be read and were left out."
                }
            }
            p class="generated-at" { "Updated " (page.generated_at) }
        }
    }
}
