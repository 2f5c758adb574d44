//! Gallows stages: the visual counterpart of the fail budget.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tracing::instrument;

/// One drawing of the gallows, from the empty scaffold to the full figure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Gallows {
    /// Nothing hanging yet.
    #[strum(to_string = "empty scaffold")]
    Scaffold,
    /// Head.
    #[strum(to_string = "head")]
    Head,
    /// Head and torso.
    #[strum(to_string = "torso")]
    Torso,
    /// One arm.
    #[strum(to_string = "left arm")]
    LeftArm,
    /// Both arms.
    #[strum(to_string = "right arm")]
    RightArm,
    /// One leg.
    #[strum(to_string = "left leg")]
    LeftLeg,
    /// The whole figure.
    #[strum(to_string = "right leg")]
    RightLeg,
}

impl Gallows {
    /// The final stage.
    pub const END: Gallows = Gallows::RightLeg;

    /// Stages beyond the empty scaffold. This is the default fail budget.
    pub const fn default_max_fails() -> usize {
        Self::COUNT - 1
    }

    /// Position of this stage, 0 for the scaffold.
    pub fn ordinal(self) -> usize {
        Self::iter().position(|stage| stage == self).unwrap_or(0)
    }

    /// Stage to draw after `fail_count` of `max_fails` failures.
    ///
    /// Budgets other than the default are scaled onto the available stages.
    /// The first failure always adds something, and the full figure appears
    /// only when the budget is spent.
    #[instrument]
    pub fn for_fails(fail_count: usize, max_fails: usize) -> Self {
        let steps = Self::default_max_fails();
        let ordinal = if max_fails == 0 || fail_count >= max_fails {
            steps
        } else if fail_count == 0 {
            0
        } else {
            (fail_count * steps / max_fails).clamp(1, steps - 1)
        };
        Self::iter().nth(ordinal).unwrap_or(Self::END)
    }

    /// ASCII drawing of the stage.
    pub fn drawing(self) -> &'static str {
        match self {
            Gallows::Scaffold => concat!(
                "  +---+\n",
                "  |   |\n",
                "      |\n",
                "      |\n",
                "      |\n",
                "      |\n",
                "=========",
            ),
            Gallows::Head => concat!(
                "  +---+\n",
                "  |   |\n",
                "  O   |\n",
                "      |\n",
                "      |\n",
                "      |\n",
                "=========",
            ),
            Gallows::Torso => concat!(
                "  +---+\n",
                "  |   |\n",
                "  O   |\n",
                "  |   |\n",
                "      |\n",
                "      |\n",
                "=========",
            ),
            Gallows::LeftArm => concat!(
                "  +---+\n",
                "  |   |\n",
                "  O   |\n",
                " /|   |\n",
                "      |\n",
                "      |\n",
                "=========",
            ),
            Gallows::RightArm => concat!(
                "  +---+\n",
                "  |   |\n",
                "  O   |\n",
                " /|\\  |\n",
                "      |\n",
                "      |\n",
                "=========",
            ),
            Gallows::LeftLeg => concat!(
                "  +---+\n",
                "  |   |\n",
                "  O   |\n",
                " /|\\  |\n",
                " /    |\n",
                "      |\n",
                "=========",
            ),
            Gallows::RightLeg => concat!(
                "  +---+\n",
                "  |   |\n",
                "  O   |\n",
                " /|\\  |\n",
                " / \\  |\n",
                "      |\n",
                "=========",
            ),
        }
    }
}
