use ratatui::style::Color;

use crate::{cli::ThemeArg, domain::geometry::Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub capability: ColorCapability,
    pub sky: Color,
    pub outline: Color,
    pub surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub track: Color,
    pub warning: Color,
}

impl Theme {
    /// Maps a scene color onto what the terminal can show.
    #[must_use]
    pub fn paint(&self, rgb: Rgb) -> Color {
        to_terminal_color(rgb, self.capability)
    }
}

pub fn detect_color_capability() -> ColorCapability {
    capability_from_env(
        std::env::var_os("NO_COLOR").is_some(),
        &std::env::var("COLORTERM").unwrap_or_default(),
        &std::env::var("TERM").unwrap_or_default(),
    )
}

#[must_use]
pub fn capability_from_env(no_color: bool, colorterm: &str, term: &str) -> ColorCapability {
    if no_color {
        return ColorCapability::Basic16;
    }
    let colorterm = colorterm.to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }
    if term.to_lowercase().contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

#[must_use]
pub fn to_terminal_color(rgb: Rgb, capability: ColorCapability) -> Color {
    let Rgb(r, g, b) = rgb;
    match capability {
        ColorCapability::TrueColor => Color::Rgb(r, g, b),
        ColorCapability::Xterm256 => {
            let level = |c: u8| (u16::from(c) * 5 + 127) / 255;
            let index = 16 + 36 * level(r) + 6 * level(g) + level(b);
            Color::Indexed(u8::try_from(index).unwrap_or(231))
        }
        ColorCapability::Basic16 => basic_color(r, g, b),
    }
}

fn basic_color(r: u8, g: u8, b: u8) -> Color {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max < 0x40 {
        return Color::Black;
    }
    if max - min < 0x30 {
        return if max > 0xc0 { Color::White } else { Color::Gray };
    }
    let bright = max > 0xc0;
    if r == max {
        if g > 0xa0 {
            if bright { Color::LightYellow } else { Color::Yellow }
        } else if g > 0x60 {
            Color::Yellow
        } else if bright {
            Color::LightRed
        } else {
            Color::Red
        }
    } else if g == max {
        Color::Green
    } else if bright {
        Color::LightBlue
    } else {
        Color::Blue
    }
}

#[must_use]
pub fn theme_for(theme: ThemeArg, capability: ColorCapability) -> Theme {
    let paint = |rgb| to_terminal_color(rgb, capability);
    match theme {
        ThemeArg::Daylight => Theme {
            capability,
            sky: paint(Rgb(0xee, 0xee, 0xee)),
            outline: Color::Black,
            surface: Color::Reset,
            text: Color::Reset,
            muted_text: Color::DarkGray,
            accent: paint(Rgb(0xd6, 0x28, 0x28)),
            border: Color::Gray,
            track: Color::DarkGray,
            warning: Color::Yellow,
        },
        ThemeArg::Dusk => Theme {
            capability,
            sky: paint(Rgb(0x1b, 0x26, 0x3b)),
            outline: paint(Rgb(0xf0, 0xeb, 0xd8)),
            surface: paint(Rgb(0x0d, 0x13, 0x21)),
            text: paint(Rgb(0xf0, 0xeb, 0xd8)),
            muted_text: paint(Rgb(0x74, 0x8c, 0xab)),
            accent: paint(Rgb(0xfc, 0xbf, 0x49)),
            border: paint(Rgb(0x3e, 0x5c, 0x76)),
            track: paint(Rgb(0x3e, 0x5c, 0x76)),
            warning: paint(Rgb(0xf7, 0x7f, 0x00)),
        },
        ThemeArg::Terminal => Theme {
            capability,
            sky: Color::Reset,
            outline: Color::Gray,
            surface: Color::Reset,
            text: Color::Reset,
            muted_text: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            track: Color::DarkGray,
            warning: Color::Yellow,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_passes_rgb_through() {
        assert_eq!(
            to_terminal_color(Rgb(0xd6, 0x28, 0x28), ColorCapability::TrueColor),
            Color::Rgb(0xd6, 0x28, 0x28)
        );
    }

    #[test]
    fn xterm256_uses_color_cube() {
        assert_eq!(
            to_terminal_color(Rgb(0, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(16)
        );
        assert_eq!(
            to_terminal_color(Rgb(0xff, 0xff, 0xff), ColorCapability::Xterm256),
            Color::Indexed(231)
        );
    }

    #[test]
    fn basic16_keeps_palette_distinguishable() {
        let cap = ColorCapability::Basic16;
        assert_eq!(to_terminal_color(Rgb(0xd6, 0x28, 0x28), cap), Color::LightRed);
        assert_eq!(to_terminal_color(Rgb(0x00, 0x30, 0x49), cap), Color::Blue);
        assert_eq!(to_terminal_color(Rgb(0xfc, 0xbf, 0x49), cap), Color::LightYellow);
    }

    #[test]
    fn capability_detection_order() {
        assert_eq!(
            capability_from_env(true, "truecolor", "xterm-256color"),
            ColorCapability::Basic16
        );
        assert_eq!(
            capability_from_env(false, "24bit", "xterm"),
            ColorCapability::TrueColor
        );
        assert_eq!(
            capability_from_env(false, "", "xterm-256color"),
            ColorCapability::Xterm256
        );
        assert_eq!(capability_from_env(false, "", "vt100"), ColorCapability::Basic16);
    }
}
