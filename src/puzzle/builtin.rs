//! The built-in puzzle
//!
//! One hand-authored puzzle compiled into the binary: five friends, the five
//! real links between them, and the theme tying all of them together.

use super::definition::{DefinitionError, LinkAnswer, PuzzleDefinition, ThemeAnswer};
use crate::core::LinkKey;

// Entity indices, in display order.
const COLE: usize = 0;
const KENZIE: usize = 1;
const NICKY: usize = 2;
const REID: usize = 3;
const JULIA: usize = 4;

/// Build the built-in puzzle definition
///
/// # Errors
/// Returns `DefinitionError` if the embedded data fails validation. The
/// shipped data passes, but the check still runs on every load so an edit
/// here cannot ship a puzzle that mis-scores.
pub fn builtin() -> Result<PuzzleDefinition, DefinitionError> {
    let entities = ["Cole", "Kenzie", "Nicky", "Reid", "Julia"].map(String::from);

    let links = vec![
        (
            LinkKey::new(COLE, KENZIE)?,
            LinkAnswer::new(
                ["Braves", "Celtics"],
                &[
                    "sports lover",
                    "sports nut",
                    "loves sports",
                    "huge sports fans",
                    "like sports",
                ],
            ),
        ),
        (
            LinkKey::new(COLE, NICKY)?,
            LinkAnswer::new(
                ["Ja", "Flugzeug"],
                &[
                    "speak german",
                    "german speakers",
                    "know german",
                    "german dweebs",
                ],
            ),
        ),
        (
            LinkKey::new(KENZIE, NICKY)?,
            LinkAnswer::new(
                ["Greenville", "Florence"],
                &[
                    "south carolinian",
                    "from south carolina",
                    "local natives",
                    "in-state students",
                ],
            ),
        ),
        (
            LinkKey::new(NICKY, REID)?,
            LinkAnswer::new(
                ["Clutch Kick", "Drag"],
                &[
                    "car guys",
                    "car enthusiasts",
                    "love cars",
                    "car nerds",
                    "car lovers",
                    "car people",
                ],
            ),
        ),
        (
            LinkKey::new(REID, JULIA)?,
            LinkAnswer::new(
                ["Pacific", "Rockies"],
                &[
                    "west coast raised",
                    "grew up west coast",
                    "west coast kids",
                ],
            ),
        ),
    ];

    let theme = ThemeAnswer::new(
        ["Gamecocks", "School"],
        &[
            "university of south carolina students",
            "usc students",
            "go to south carolina",
        ],
    );

    let decoys = [
        "Appalachians",
        "Minnesota",
        "Corn",
        "Tigers",
        "Obama",
        "Gibbes",
    ]
    .map(String::from)
    .to_vec();

    PuzzleDefinition::new(entities, links, theme, decoys)
}
