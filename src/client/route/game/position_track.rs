use dioxus::prelude::*;

use crate::model::game::{POSITION_MAX, POSITION_MIN};

/// Row of cells from start to finish with the player's cell highlighted.
#[component]
pub fn PositionTrack(position: i32) -> Element {
    rsx!(
        div {
            class: "track",
            for cell in POSITION_MIN..=POSITION_MAX {
                div {
                    key: "{cell}",
                    class: if cell == position { "track-cell track-cell-current" } else { "track-cell" },
                    if cell == POSITION_MAX {
                        "Finish"
                    } else {
                        "{cell}"
                    }
                }
            }
        }
    )
}
