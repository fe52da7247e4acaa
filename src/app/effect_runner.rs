//! Executes side effects returned by the reducer.
//!
//! Effects run one at a time in the order given, so layout writes for a
//! table land in the order the changes happened.

use std::sync::Arc;

use color_eyre::eyre::Result;
use log::{debug, warn};

use crate::effect::Effect;
use crate::ports::{PreferenceStore, Renderer};
use crate::state::AppState;

pub struct EffectRunner {
    preference_store: Arc<dyn PreferenceStore>,
}

impl EffectRunner {
    pub fn new(preference_store: Arc<dyn PreferenceStore>) -> Self {
        Self { preference_store }
    }

    pub fn run(
        &self,
        effects: Vec<Effect>,
        renderer: &mut dyn Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Render => renderer.draw(state)?,
                Effect::Persist {
                    table_kind,
                    preferences,
                } => {
                    // a failed write never interrupts the UI
                    match self.preference_store.save(table_kind, &preferences) {
                        Ok(()) => debug!("{table_kind}: layout saved"),
                        Err(err) => {
                            warn!("{table_kind}: cannot save layout: {err}");
                            state.status_message = Some(format!("Layout not saved: {err}"));
                            state.mark_dirty();
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::layout::TableLayout;
    use crate::ports::preference_store::{MockPreferenceStore, PreferenceStoreError};
    use crate::table_pane::TablePane;
    use crate::tables::{positions, trades};
    use ledgerview_domain::LayoutPreferences;

    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _state: &mut AppState) -> Result<()> {
            self.draws += 1;
            Ok(())
        }
    }

    fn state() -> AppState {
        AppState::new(
            TablePane::new(
                TableLayout::new(Arc::new(positions::catalog().unwrap())),
                vec![],
            ),
            TablePane::new(TableLayout::new(Arc::new(trades::catalog().unwrap())), vec![]),
            "test",
        )
    }

    fn prefs(font_size: &str) -> LayoutPreferences {
        LayoutPreferences {
            font_size: font_size.into(),
            ..LayoutPreferences::default()
        }
    }

    #[test]
    fn persists_in_order() {
        let mut store = MockPreferenceStore::new();
        let mut seq = Sequence::new();
        store
            .expect_save()
            .with(eq("positions"), eq(prefs("small")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        store
            .expect_save()
            .with(eq("positions"), eq(prefs("large")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let runner = EffectRunner::new(Arc::new(store));
        let mut renderer = CountingRenderer::default();
        let mut state = state();

        runner
            .run(
                vec![
                    Effect::Persist {
                        table_kind: "positions",
                        preferences: prefs("small"),
                    },
                    Effect::Render,
                    Effect::Persist {
                        table_kind: "positions",
                        preferences: prefs("large"),
                    },
                ],
                &mut renderer,
                &mut state,
            )
            .unwrap();

        assert_eq!(renderer.draws, 1);
    }

    #[test]
    fn store_failure_is_reported_not_propagated() {
        let mut store = MockPreferenceStore::new();
        store.expect_save().returning(|_, _| {
            Err(PreferenceStoreError::Io(std::io::Error::other("disk full")))
        });
        let runner = EffectRunner::new(Arc::new(store));
        let mut state = state();

        let result = runner.run(
            vec![Effect::Persist {
                table_kind: "trades",
                preferences: prefs("medium"),
            }],
            &mut CountingRenderer::default(),
            &mut state,
        );

        assert!(result.is_ok());
        assert!(
            state
                .status_message
                .as_deref()
                .is_some_and(|msg| msg.contains("disk full"))
        );
    }
}
