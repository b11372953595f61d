use crate::error::CoreError;
use crate::mvu::round::{Deps, Msg, RoundModel, run_effect, update};

/// Runs the MVU loop for the round session: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the `CoreError` carried by a failed effect, after it has been
/// applied to the model as a notice.
pub async fn run_round(
    model: &mut RoundModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), CoreError> {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        tracing::debug!(effect = ?effect, "effect_start");
        let msg = run_effect(effect, deps).await;
        tracing::debug!(msg = ?msg, "effect_done");
        match msg {
            Msg::Failed(e) => {
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                tracing::debug!(queued_effects = next.len(), "update");
                effects.extend(next);
            }
        }
    }
    Ok(())
}
