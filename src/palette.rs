use raylib::prelude::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Theme {
    Dark,  // Night storm
    Light, // Overcast daylight
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// The five colors the weather pass reads. Selected whole per theme,
/// never mutated in place.
pub struct Palette {
    pub sky_top: Color,
    pub sky_bottom: Color,
    pub cloud: Color,
    pub rain: Color,
    pub bolt: Color,
}

impl Palette {
    pub fn of(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                sky_top: Color::new(11, 15, 20, 255),
                sky_bottom: Color::new(16, 24, 35, 255),
                cloud: Color::new(200, 220, 255, 15),
                rain: Color::new(200, 230, 255, 140),
                bolt: Color::new(248, 251, 255, 255),
            },
            Theme::Light => Palette {
                sky_top: Color::new(232, 241, 251, 255),
                sky_bottom: Color::new(207, 227, 247, 255),
                cloud: Color::new(30, 40, 60, 18),
                rain: Color::new(40, 60, 90, 140),
                bolt: Color::new(255, 255, 255, 255),
            },
        }
    }
}

// Panel chrome colors (styling glue, not part of the weather palette).

pub fn ink(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::new(235, 242, 250, 255),
        Theme::Light => Color::new(24, 32, 44, 255),
    }
}

pub fn card(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::new(8, 12, 18, 185),
        Theme::Light => Color::new(250, 252, 255, 185),
    }
}
