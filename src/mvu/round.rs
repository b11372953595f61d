use chrono::NaiveDate;

use crate::controller::request::SessionParams;
use crate::error::CoreError;
use crate::model::entry::{HoleEntry, HoleKey, StoredEntry};
use crate::model::form::HoleForm;
use crate::model::navigator::{RoundConfig, RoundNavigator};
use crate::storage::LogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Everything the UI remembers between requests for the single player.
#[derive(Debug, Clone)]
pub struct RoundModel {
    pub navigator: RoundNavigator,
    /// Result toggle for the current hole; decides whether miss fields show.
    pub green_on: bool,
    pub show_history: bool,
    /// Selections carried across reloads (green toggle, failed write) until
    /// the hole is stored.
    pub draft: Option<HoleForm>,
    pub history: Option<Vec<StoredEntry>>,
    pub notice: Option<Notice>,
    /// Set once the first page load has happened; URL restore only applies before that.
    pub restored: bool,
}

impl RoundModel {
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self {
            navigator: RoundNavigator::new(config),
            green_on: true,
            show_history: false,
            draft: None,
            history: None,
            notice: None,
            restored: false,
        }
    }

    #[must_use]
    pub fn round_date(&self) -> NaiveDate {
        self.navigator.config().round_date
    }

    /// Form values to pre-select: the pending draft, or the hole's defaults.
    #[must_use]
    pub fn form_values(&self) -> HoleForm {
        match self.draft {
            Some(draft) if draft.hole_no == self.navigator.current_hole() => draft,
            _ => HoleForm::defaults_for(self.navigator.current_hole(), self.navigator.current_par()),
        }
    }

    fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice::new(level, text));
    }

    fn start_hole(&mut self) {
        self.green_on = true;
        self.draft = None;
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Restore(SessionParams),
    PageLoad,
    Configure(RoundConfig),
    Prev,
    Next,
    SetGreenOn {
        green_on: bool,
        draft: Option<HoleForm>,
    },
    Submit(HoleForm),
    EntryStored(HoleKey, i64),
    ShowHistory,
    HideHistory,
    HistoryLoaded(Vec<StoredEntry>),
    DeleteLatest,
    LatestDeleted(Option<StoredEntry>),
    NewRound,
    Failed(CoreError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Insert(HoleEntry),
    LoadHistory(NaiveDate),
    DeleteLatest(NaiveDate),
}

pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Restore(params) => {
            if !model.restored {
                params.apply(&mut model.navigator);
            }
            vec![]
        }
        Msg::PageLoad => {
            model.restored = true;
            if model.show_history {
                vec![Effect::LoadHistory(model.round_date())]
            } else {
                vec![]
            }
        }
        Msg::Configure(config) => {
            model.navigator.reconfigure(config);
            model.start_hole();
            model.show_history = false;
            model.history = None;
            vec![]
        }
        Msg::Prev => {
            model.navigator.retreat();
            vec![]
        }
        Msg::Next => {
            model.navigator.skip_forward();
            vec![]
        }
        Msg::SetGreenOn { green_on, draft } => {
            model.green_on = green_on;
            if let Some(form) = draft.filter(|f| f.hole_no == model.navigator.current_hole()) {
                model.draft = Some(form);
            }
            vec![]
        }
        Msg::Submit(form) => submit(model, form),
        Msg::EntryStored(key, id) => {
            model.navigator.mark_registered(key);
            model.navigator.advance();
            model.start_hole();
            model.notify(NoticeLevel::Success, format!("{}H saved (#{id})", key.hole_no));
            vec![]
        }
        Msg::ShowHistory => {
            model.show_history = true;
            vec![Effect::LoadHistory(model.round_date())]
        }
        Msg::HideHistory => {
            model.show_history = false;
            model.history = None;
            vec![]
        }
        Msg::HistoryLoaded(rows) => {
            model.history = Some(rows);
            vec![]
        }
        Msg::DeleteLatest => vec![Effect::DeleteLatest(model.round_date())],
        Msg::LatestDeleted(Some(deleted)) => {
            model.navigator.after_delete();
            model.start_hole();
            model.notify(
                NoticeLevel::Info,
                format!("Deleted the latest entry ({}H)", deleted.entry.hole_no),
            );
            if model.show_history {
                vec![Effect::LoadHistory(model.round_date())]
            } else {
                vec![]
            }
        }
        Msg::LatestDeleted(None) => {
            model.notify(NoticeLevel::Info, "No entries yet.");
            vec![]
        }
        Msg::NewRound => {
            model.navigator.reset();
            model.start_hole();
            vec![]
        }
        Msg::Failed(e) => {
            model.notify(NoticeLevel::Error, e.to_string());
            vec![]
        }
    }
}

fn submit(model: &mut RoundModel, form: HoleForm) -> Vec<Effect> {
    if model.navigator.is_finished() {
        model.notify(NoticeLevel::Warning, "The round is finished.");
        return vec![];
    }
    let form_key = HoleKey {
        round_date: model.round_date(),
        hole_no: form.hole_no,
    };
    if model.navigator.is_duplicate(&form_key) {
        model.navigator.advance();
        model.start_hole();
        model.notify(
            NoticeLevel::Warning,
            format!("{}H is already registered. Moving to the next hole.", form.hole_no),
        );
        return vec![];
    }
    let current = model.navigator.current_hole();
    if form.hole_no != current {
        model.notify(
            NoticeLevel::Warning,
            format!(
                "Ignored a stale form for {}H; the current hole is {current}H.",
                form.hole_no
            ),
        );
        return vec![];
    }

    model.draft = Some(form);
    match HoleEntry::from_parts(model.navigator.hole_context(), form.shot(model.green_on)) {
        Ok(entry) => vec![Effect::Insert(entry)],
        Err(e) => {
            model.notify(NoticeLevel::Error, CoreError::from(e).to_string());
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub store: &'a dyn LogStore,
}

pub async fn run_effect(effect: Effect, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::Insert(entry) => match deps.store.insert(&entry).await {
            Ok(id) => {
                tracing::info!(id, round_date = %entry.round_date, hole = entry.hole_no, score = entry.hole_score, "entry stored");
                Msg::EntryStored(entry.key(), id)
            }
            Err(e) => Msg::Failed(CoreError::from(e)),
        },
        Effect::LoadHistory(round_date) => match deps.store.list(round_date).await {
            Ok(rows) => Msg::HistoryLoaded(rows),
            Err(e) => Msg::Failed(CoreError::from(e)),
        },
        Effect::DeleteLatest(round_date) => match deps.store.delete_latest(round_date).await {
            Ok(deleted) => {
                tracing::info!(
                    %round_date,
                    id = deleted.as_ref().map(|d| d.id),
                    hole = deleted.as_ref().map(|d| d.entry.hole_no),
                    "delete latest"
                );
                Msg::LatestDeleted(deleted)
            }
            Err(e) => Msg::Failed(CoreError::from(e)),
        },
    }
}
