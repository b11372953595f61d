mod common;

use approach_log::error::CoreError;
use approach_log::model::choices::{Club, DistRange, LieType, MissDir, StartSide};
use approach_log::model::navigator::RoundConfig;
use approach_log::mvu::round::{Deps, Msg, NoticeLevel, RoundModel};
use approach_log::mvu::runtime::run_round;
use approach_log::storage::{LogStore, StorageError};
use common::{COURSE, form_for, round_date, round_model, setup_test_context, unavailable_store};

async fn submit_current(model: &mut RoundModel, store: &dyn LogStore) -> Result<(), CoreError> {
    let form = form_for(model);
    run_round(model, Msg::Submit(form), Deps { store }).await
}

#[tokio::test]
async fn test3_same_hole_twice_stores_one_row() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();

    submit_current(&mut model, store).await?;
    assert_eq!(model.navigator.current_hole(), 2);
    let notice = model.notice.take().expect("saved notice");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert!(notice.text.starts_with("1H saved"), "{}", notice.text);

    run_round(&mut model, Msg::Prev, Deps { store }).await?;
    assert_eq!(model.navigator.current_hole(), 1);
    submit_current(&mut model, store).await?;
    assert_eq!(model.navigator.current_hole(), 2);
    let notice = model.notice.take().expect("duplicate notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.text, "1H is already registered. Moving to the next hole.");

    assert_eq!(store.list(round_date()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test3_double_posted_form_advances_twice() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();

    let first = form_for(&model);
    run_round(&mut model, Msg::Submit(first), Deps { store }).await?;
    // the same form posted again from a page that still shows 1H
    run_round(&mut model, Msg::Submit(first), Deps { store }).await?;

    assert_eq!(model.navigator.hole_index(), 2);
    assert_eq!(model.navigator.current_hole(), 3);
    assert_eq!(model.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Warning));
    assert_eq!(store.list(round_date()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test3_form_for_another_hole_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();
    submit_current(&mut model, store).await?;

    let mut other = form_for(&model);
    other.hole_no = 7;
    run_round(&mut model, Msg::Submit(other), Deps { store }).await?;

    assert_eq!(model.navigator.current_hole(), 2);
    let notice = model.notice.take().expect("stale notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.text.contains("7H"), "{}", notice.text);
    assert_eq!(store.list(round_date()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test3_green_toggle_keeps_selections() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();

    let mut picked = form_for(&model);
    picked.dist_range = DistRange::From160;
    picked.club = Club::Iron9;
    let msg = Msg::SetGreenOn {
        green_on: false,
        draft: Some(picked),
    };
    run_round(&mut model, msg, Deps { store }).await?;
    assert!(!model.green_on);
    assert_eq!(model.form_values(), picked);

    // a toggle posted from a page for another hole leaves the form alone
    let mut stale = picked;
    stale.hole_no = 5;
    let msg = Msg::SetGreenOn {
        green_on: true,
        draft: Some(stale),
    };
    run_round(&mut model, msg, Deps { store }).await?;
    assert!(model.green_on);
    assert_eq!(model.form_values(), picked);
    Ok(())
}

#[tokio::test]
async fn test3_delete_latest_reenables_the_hole() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();

    submit_current(&mut model, store).await?;
    submit_current(&mut model, store).await?;
    assert_eq!(model.navigator.current_hole(), 3);

    run_round(&mut model, Msg::DeleteLatest, Deps { store }).await?;
    assert_eq!(model.navigator.current_hole(), 2);
    assert_eq!(model.navigator.last_registered(), None);
    let rows = store.list(round_date()).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry.hole_no, 1);

    submit_current(&mut model, store).await?;
    let rows = store.list(round_date()).await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].entry.hole_no, 2);
    assert_eq!(model.navigator.current_hole(), 3);
    Ok(())
}

#[tokio::test]
async fn test3_delete_with_no_rows_leaves_position() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();
    run_round(&mut model, Msg::Next, Deps { store }).await?;

    run_round(&mut model, Msg::DeleteLatest, Deps { store }).await?;
    assert_eq!(model.navigator.current_hole(), 2);
    assert_eq!(model.notice.map(|n| n.text), Some("No entries yet.".to_string()));
    Ok(())
}

#[tokio::test]
async fn test3_failed_insert_keeps_the_draft() {
    let store = unavailable_store();
    let mut model = round_model();
    let msg = Msg::SetGreenOn {
        green_on: false,
        draft: None,
    };
    run_round(&mut model, msg, Deps { store: &store }).await.unwrap();
    let mut form = form_for(&model);
    form.hole_score = 6;

    let err = run_round(&mut model, Msg::Submit(form), Deps { store: &store })
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Storage(StorageError::Unavailable(_))), "{err:?}");
    assert_eq!(model.navigator.current_hole(), 1);
    assert_eq!(model.navigator.last_registered(), None);
    assert_eq!(model.draft, Some(form));
    assert_eq!(model.form_values(), form);
    assert!(!model.green_on);
    assert_eq!(model.notice.map(|n| n.level), Some(NoticeLevel::Error));
}

#[tokio::test]
async fn test3_missed_green_stores_miss_details() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();

    let msg = Msg::SetGreenOn {
        green_on: false,
        draft: None,
    };
    run_round(&mut model, msg, Deps { store }).await?;
    let mut form = form_for(&model);
    form.miss_dir = Some(MissDir::Short);
    form.lie_type = Some(LieType::Bunker);
    form.recovery_strokes = 1;
    run_round(&mut model, Msg::Submit(form), Deps { store }).await?;
    assert!(model.green_on);

    let rows = store.list(round_date()).await?;
    let entry = &rows[0].entry;
    assert!(!entry.is_green_on);
    assert_eq!(entry.miss_dir, MissDir::Short);
    assert_eq!(entry.lie_type, LieType::Bunker);
    assert_eq!(entry.recovery_strokes, 1);
    Ok(())
}

#[tokio::test]
async fn test3_full_round_from_the_back_nine() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut config = RoundConfig::new(round_date(), COURSE);
    config.start_side = StartSide::In;
    let mut model = RoundModel::new(config);

    for _ in 0..18 {
        assert!(!model.navigator.is_finished());
        submit_current(&mut model, store).await?;
    }
    assert!(model.navigator.is_finished());

    let rows = store.list(round_date()).await?;
    assert_eq!(rows.len(), 18);
    assert_eq!(rows.last().map(|r| r.entry.hole_no), Some(10));
    assert_eq!(rows[0].entry.hole_no, 9);
    assert!(rows.iter().all(|r| r.entry.hole_score == r.entry.par));

    submit_current(&mut model, store).await?;
    assert_eq!(store.list(round_date()).await?.len(), 18);

    run_round(&mut model, Msg::NewRound, Deps { store }).await?;
    assert!(!model.navigator.is_finished());
    assert_eq!(model.navigator.current_hole(), 10);
    Ok(())
}

#[tokio::test]
async fn test3_history_panel_loads_rows() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context().await?;
    let store = ctx.store();
    let mut model = round_model();
    submit_current(&mut model, store).await?;
    submit_current(&mut model, store).await?;

    run_round(&mut model, Msg::ShowHistory, Deps { store }).await?;
    let holes: Vec<u8> = model
        .history
        .as_ref()
        .map(|rows| rows.iter().map(|r| r.entry.hole_no).collect())
        .unwrap_or_default();
    assert_eq!(holes, vec![2, 1]);

    run_round(&mut model, Msg::DeleteLatest, Deps { store }).await?;
    assert_eq!(model.history.as_ref().map(Vec::len), Some(1));

    run_round(&mut model, Msg::HideHistory, Deps { store }).await?;
    assert!(model.history.is_none());
    Ok(())
}
