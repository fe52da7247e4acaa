//! Side effects returned by the reducer, executed by EffectRunner.

use ledgerview_domain::LayoutPreferences;

use crate::layout::LayoutEffect;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    /// Written in the order emitted; a later write for the same table
    /// replaces an earlier one.
    Persist {
        table_kind: &'static str,
        preferences: LayoutPreferences,
    },
}

impl From<LayoutEffect> for Effect {
    fn from(effect: LayoutEffect) -> Self {
        match effect {
            LayoutEffect::Persist {
                table_kind,
                preferences,
            } => Self::Persist {
                table_kind,
                preferences,
            },
        }
    }
}
