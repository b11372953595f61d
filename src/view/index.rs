use maud::{Markup, html};

use crate::mvu::round::{Notice, NoticeLevel};

pub const DEFAULT_INDEX_TITLE: &str = "Golf Log";
pub const STYLESHEET_PATH: &str = "/static/app.css";

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Error => "notice notice-error",
    }
}

#[must_use]
pub fn render_notice(notice: Option<&Notice>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            div class=(notice_class(notice.level)) role="status" { (notice.text) }
        }
    }
}

/// Page shell: settings sidebar next to the main area.
#[must_use]
pub fn render_index_template(title: &str, sidebar: Markup, main: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href=(STYLESHEET_PATH);
                title { (title) }
            }
            body {
                aside class="sidebar" { (sidebar) }
                main class="block-container" { (main) }
            }
        }
    }
}
