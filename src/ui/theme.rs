use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_delete: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const BLACK: ColorSpec = ColorSpec::rgb(0, 0, 0);

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        let blue = ColorSpec::rgb(125, 207, 255);
        let magenta = ColorSpec::rgb(255, 159, 196);
        let comment = ColorSpec::rgb(117, 121, 148);
        let yellow = ColorSpec::rgb(255, 202, 40);
        let red = ColorSpec::rgb(247, 118, 142);
        Theme {
            name: "tokyo-night".to_string(),
            primary: blue,
            banner: magenta,
            text: ColorSpec::rgb(169, 177, 214),
            text_muted: comment,
            warning: yellow,
            error: red,
            border_active: blue,
            border_normal: comment,
            highlight_bg: blue,
            highlight_fg: ColorSpec::rgb(26, 27, 38),
            footer_search: blue,
            footer_delete: red,
            footer_edit: yellow,
            footer_normal: BLACK,
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        let purple = ColorSpec::rgb(189, 147, 249);
        let cyan = ColorSpec::rgb(139, 233, 253);
        let pink = ColorSpec::rgb(255, 121, 198);
        let comment = ColorSpec::rgb(98, 114, 164);
        let orange = ColorSpec::rgb(255, 184, 108);
        let red = ColorSpec::rgb(255, 85, 85);
        Theme {
            name: "dracula".to_string(),
            primary: purple,
            banner: pink,
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: comment,
            warning: orange,
            error: red,
            border_active: purple,
            border_normal: comment,
            highlight_bg: cyan,
            highlight_fg: ColorSpec::rgb(40, 42, 54),
            footer_search: cyan,
            footer_delete: red,
            footer_edit: orange,
            footer_normal: BLACK,
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        let mauve = ColorSpec::rgb(203, 166, 247);
        let blue = ColorSpec::rgb(137, 180, 250);
        let overlay = ColorSpec::rgb(166, 173, 200);
        let yellow = ColorSpec::rgb(249, 226, 175);
        let red = ColorSpec::rgb(243, 139, 168);
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: mauve,
            banner: ColorSpec::rgb(245, 189, 230),
            text: ColorSpec::rgb(205, 214, 244),
            text_muted: overlay,
            warning: yellow,
            error: red,
            border_active: mauve,
            border_normal: overlay,
            highlight_bg: blue,
            highlight_fg: ColorSpec::rgb(17, 17, 27),
            footer_search: blue,
            footer_delete: red,
            footer_edit: yellow,
            footer_normal: BLACK,
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        let iris = ColorSpec::rgb(161, 119, 255);
        let pine = ColorSpec::rgb(61, 174, 233);
        let love = ColorSpec::rgb(235, 111, 146);
        let gold = ColorSpec::rgb(255, 210, 0);
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: iris,
            banner: ColorSpec::rgb(255, 109, 146),
            text: ColorSpec::rgb(88, 82, 96),
            text_muted: ColorSpec::rgb(152, 147, 165),
            warning: gold,
            error: love,
            border_active: iris,
            border_normal: ColorSpec::rgb(88, 82, 96),
            highlight_bg: pine,
            highlight_fg: BLACK,
            footer_search: pine,
            footer_delete: love,
            footer_edit: gold,
            footer_normal: BLACK,
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(name, theme.name);
        }
    }

    #[test]
    fn unknown_theme() {
        assert_eq!(None, Theme::from_name("solarized"));
    }

    #[test]
    fn default_is_tokyo_night() {
        assert_eq!("tokyo-night", Theme::default().name);
    }

    #[test]
    fn to_color() {
        assert_eq!(Color::Rgb(1, 2, 3), ColorSpec::rgb(1, 2, 3).to_color());
    }
}
