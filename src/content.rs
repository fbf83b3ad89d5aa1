use crate::panel::Panel;

pub const INTRO_PANEL: usize = 1;
pub const OUTRO_PANEL: usize = 8;

pub const CREDITS: &str = "Thank you for staying through the storm.\n\
\n\
Story: the author\n\
Weather: procedural\n\
Editing: the author\n\
\n\
- The End -";

/// The static panel set. Panel 1 is the intro (one-shot thunderclap),
/// panel 8 the outro (credits roll).
pub fn build_panels() -> Vec<Panel> {
    vec![
        Panel::new(1, "The Storm")
            .with_text(
                "The forecast said nothing about tonight.\n\
                 But the sky had been rehearsing all week.",
            )
            .with_next(2, "Begin"),
        Panel::new(2, "First Drops")
            .with_text(
                "It started the way these things always start.\n\
                 One drop. Then the whole window at once.",
            )
            .with_next(3, "Next"),
        Panel::new(3, "From the Porch")
            .with_media()
            .with_next(4, "Next"),
        Panel::new(4, "Counting Seconds")
            .with_text(
                "Flash, then count.\n\
                 One, two, three, four.\n\
                 Closer every time.",
            )
            .with_next(5, "Next"),
        Panel::new(5, "The Power Goes")
            .with_text("Candles. A deck of cards. Nowhere to be.")
            .with_next(6, "Next"),
        Panel::new(6, "Through the Glass")
            .with_media()
            .with_next(7, "Next"),
        Panel::new(7, "After")
            .with_text(
                "By morning the gutters were loud and the air was rinsed.\n\
                 Everything looked like it had been forgiven.",
            )
            .with_next(8, "Next"),
        Panel::new(8, "Credits").with_next(1, "Replay"),
    ]
}
