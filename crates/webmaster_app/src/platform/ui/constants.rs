use webmaster_core::Theme;

pub const CMD_QUIT: &str = ":quit";
pub const CMD_THEME: &str = ":theme";
pub const CMD_DISMISS: &str = ":dismiss";

pub const RESET: &str = "\x1b[0m";

/// ANSI styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: &'static str,
    pub user: &'static str,
    pub bot: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub info: &'static str,
    pub status: &'static str,
}

pub const LIGHT: Palette = Palette {
    title: "\x1b[1;31m",
    user: "\x1b[34m",
    bot: "\x1b[30m",
    error: "\x1b[31m",
    success: "\x1b[32m",
    info: "\x1b[36m",
    status: "\x1b[2m",
};

pub const DARK: Palette = Palette {
    title: "\x1b[1;91m",
    user: "\x1b[94m",
    bot: "\x1b[97m",
    error: "\x1b[91m",
    success: "\x1b[92m",
    info: "\x1b[96m",
    status: "\x1b[90m",
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
