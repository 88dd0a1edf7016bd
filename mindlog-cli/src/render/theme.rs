use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Soft evening palette; mood colors run from rose (low) over sand to sage (high).
pub struct Dusk;

impl Dusk {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Dusk::TEXT);
        skin.bold.set_fg(Dusk::HIGHLIGHT);
        skin.italic.set_fg(Dusk::MUTED);

        skin.headers[0].set_fg(Dusk::LAVENDER);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Dusk::SAND);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Dusk::MUTED);
        skin.bullet.set_fg(Dusk::LAVENDER);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Dusk::MUTED);
        skin.inline_code.set_fg(Dusk::SAGE);

        skin
    }

    /// Color for a score, relative to the `min..=max` range.
    pub fn mood_color(score: i64, min: i64, max: i64) -> Color {
        let span = (max - min).max(1) as f64;
        let position = (score - min) as f64 / span;
        if position < 1.0 / 3.0 {
            Dusk::ROSE
        } else if position < 2.0 / 3.0 {
            Dusk::SAND
        } else {
            Dusk::SAGE
        }
    }

    pub const TEXT: Color = Color::Rgb {
        r: 0xD8,
        g: 0xD4,
        b: 0xE0,
    }; // #D8D4E0
    pub const MUTED: Color = Color::Rgb {
        r: 0x7A,
        g: 0x75,
        b: 0x8C,
    }; // #7A758C
    pub const HIGHLIGHT: Color = Color::Rgb {
        r: 0xF2,
        g: 0xE9,
        b: 0xFF,
    }; // #F2E9FF
    pub const LAVENDER: Color = Color::Rgb {
        r: 0xB4,
        g: 0x9C,
        b: 0xE8,
    }; // #B49CE8
    pub const ROSE: Color = Color::Rgb {
        r: 0xE0,
        g: 0x7A,
        b: 0x8F,
    }; // #E07A8F
    pub const SAND: Color = Color::Rgb {
        r: 0xE8,
        g: 0xC5,
        b: 0x8A,
    }; // #E8C58A
    pub const SAGE: Color = Color::Rgb {
        r: 0x8F,
        g: 0xC9,
        b: 0x9A,
    }; // #8FC99A
}
