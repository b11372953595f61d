use maud::{Markup, html};

use crate::model::choices::{Choice, Club, DistRange, GreenType, LieType, MissDir, StartSide};
use crate::model::entry::{MAX_HOLE_SCORE, MAX_PUTTS, MAX_RECOVERY_STROKES};
use crate::model::form::HoleForm;
use crate::model::navigator::RoundNavigator;
use crate::mvu::round::{Notice, RoundModel};
use crate::view::history::render_history;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template, render_notice};

fn score_label(score: u8) -> String {
    if score >= MAX_HOLE_SCORE {
        format!("{MAX_HOLE_SCORE}~")
    } else {
        score.to_string()
    }
}

fn plain_label(value: u8) -> String {
    value.to_string()
}

fn choice_radios<T: Choice>(name: &str, options: &[T], selected: T) -> Markup {
    html! {
        div class="radio-row" {
            @for choice in options {
                label {
                    input type="radio" name=(name) value=(choice.code()) checked[*choice == selected];
                    " " (choice.label())
                }
            }
        }
    }
}

fn number_radios(
    name: &str,
    values: impl Iterator<Item = u8>,
    selected: u8,
    label: fn(u8) -> String,
) -> Markup {
    html! {
        div class="radio-row" {
            @for value in values {
                label {
                    input type="radio" name=(name) value=(value) checked[value == selected];
                    " " (label(value))
                }
            }
        }
    }
}

fn choice_select<T: Choice>(name: &str, selected: T) -> Markup {
    html! {
        select name=(name) {
            @for choice in T::ALL {
                option value=(choice.code()) selected[*choice == selected] { (choice.label()) }
            }
        }
    }
}

/// Configuration panel, history button and prev/next navigation.
#[must_use]
pub fn render_sidebar(navigator: &RoundNavigator) -> Markup {
    let config = navigator.config();
    html! {
        h2 { "Settings" }
        form method="post" action="/config" class="config-form" {
            label { "Date" input type="date" name="round_date" value=(config.round_date.to_string()) required; }
            label { "Course" input type="text" name="course_name" value=(config.course_name); }
            p class="caption" { "Start" }
            (choice_radios("start_side", StartSide::ALL, config.start_side))
            p class="caption" { "Green" }
            (choice_radios("green_type", GreenType::ALL, config.green_type))
            button type="submit" { "Apply" }
        }
        hr;
        form method="post" action="/history/show" {
            button type="submit" class="btn-secondary" { "Show history" }
        }
        hr;
        div class="nav-row" {
            form method="post" action="/nav/prev" {
                button type="submit" { "\u{25C0} Prev" }
            }
            form method="post" action="/nav/next" {
                button type="submit" { "Next \u{25B6}" }
            }
        }
    }
}

#[must_use]
pub fn render_hole_header(navigator: &RoundNavigator) -> Markup {
    html! {
        div class="hole-header" {
            span { (navigator.current_hole()) "H" }
            span class="par" { "Par " (navigator.current_par()) }
            span { (navigator.config().green_type.label()) " Green" }
        }
    }
}

fn render_green_toggle(green_on: bool) -> Markup {
    html! {
        p class="caption" { "Result" }
        div class="toggle-row" {
            button type="submit" formaction="/green?green_on=true" class=(if green_on { "active" } else { "" }) {
                "Green hit"
            }
            button type="submit" formaction="/green?green_on=false" class=(if green_on { "" } else { "active" }) {
                "Missed"
            }
        }
    }
}

/// Entry form for the current hole, pre-filled from `form`.
#[must_use]
pub fn render_hole_form(navigator: &RoundNavigator, green_on: bool, form: &HoleForm) -> Markup {
    html! {
        (render_hole_header(navigator))
        form method="post" action="/hole" class="hole-form" {
            input type="hidden" name="hole_no" value=(navigator.current_hole());
            (render_green_toggle(green_on))
            div class="columns" {
                label { span class="caption" { "Distance left" } (choice_select::<DistRange>("dist_range", form.dist_range)) }
                label { span class="caption" { "Club" } (choice_select::<Club>("club", form.club)) }
            }
            @if !green_on {
                p class="caption" { "Missed to" }
                (choice_radios("miss_dir", MissDir::MISSED, form.miss_dir_or_default()))
                p class="caption" { "Lie" }
                (choice_radios("lie_type", LieType::MISSED, form.lie_type_or_default()))
            }
            hr;
            p class="caption" { "Putts" }
            (number_radios("putts", 0..=MAX_PUTTS, form.putts, plain_label))
            p class="caption" { "Hole score (Par " (navigator.current_par()) ")" }
            (number_radios("hole_score", 1..=MAX_HOLE_SCORE, form.hole_score, score_label))
            p class="caption" { "Recovery strokes" }
            (number_radios("recovery_strokes", 0..=MAX_RECOVERY_STROKES, form.recovery_strokes, plain_label))
            button type="submit" class="btn-reg" { "Save \u{27A1} next hole" }
        }
    }
}

#[must_use]
pub fn render_finished() -> Markup {
    html! {
        div class="finished" {
            h2 { "\u{1F3C6} Round finished!" }
            form method="post" action="/round/new" {
                button type="submit" class="btn-reg" { "Start a new round" }
            }
        }
    }
}

/// Whole page for the session's current screen.
#[must_use]
pub fn render_round_page(model: &RoundModel, notice: Option<&Notice>) -> Markup {
    let main = html! {
        (render_notice(notice))
        @if model.show_history {
            (render_history(model.round_date(), model.history.as_deref()))
        } @else if model.navigator.is_finished() {
            (render_finished())
        } @else {
            (render_hole_form(&model.navigator, model.green_on, &model.form_values()))
        }
    };
    let title = format!("{DEFAULT_INDEX_TITLE} - {}", model.navigator.config().course_name);
    render_index_template(&title, render_sidebar(&model.navigator), main)
}
