use chrono::NaiveDate;
use maud::{Markup, html};

use crate::model::choices::Choice;
use crate::model::entry::StoredEntry;

fn green_mark(entry: &StoredEntry) -> &'static str {
    if entry.entry.is_green_on { "o" } else { "x" }
}

/// History for one round date, newest first, with the delete-latest action.
///
/// `rows` is `None` when loading failed; the error itself is shown as a notice.
#[must_use]
pub fn render_history(round_date: NaiveDate, rows: Option<&[StoredEntry]>) -> Markup {
    html! {
        h2 { "History " small { (round_date.to_string()) } }
        form method="post" action="/history/hide" {
            button type="submit" class="btn-secondary" { "\u{25C0} Back to entry" }
        }
        @match rows {
            None => {
                p class="muted" { "History is unavailable right now." }
            }
            Some([]) => {
                p class="muted" { "No entries yet." }
            }
            Some(rows) => {
                table class="history" {
                    thead {
                        tr {
                            th { "H" } th { "P" } th { "Score" } th { "Putt" } th { "Club" }
                            th { "Dist" } th { "On" } th { "Miss" } th { "Lie" } th { "Rec" }
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr data-id=(row.id) {
                                td { (row.entry.hole_no) }
                                td { (row.entry.par) }
                                td { (row.entry.hole_score) }
                                td { (row.entry.putts) }
                                td { (row.entry.club.label()) }
                                td { (row.entry.dist_range.label()) }
                                td { (green_mark(row)) }
                                td { (row.entry.miss_dir.label()) }
                                td { (row.entry.lie_type.label()) }
                                td { (row.entry.recovery_strokes) }
                            }
                        }
                    }
                }
                form method="post" action="/history/delete-latest" {
                    button type="submit" class="btn-danger" { "Delete latest entry" }
                }
            }
        }
    }
}
