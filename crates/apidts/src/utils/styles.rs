use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;

use crate::utils::CHECK;

const ACCENT: Color = Color::Ansi(AnsiColor::Cyan);
const OK: Color = Color::Ansi(AnsiColor::Green);
const ERROR: Color = Color::Ansi(AnsiColor::Red);

pub(crate) fn get_styles() -> Styles {
    let heading = Style::new().bold().fg_color(Some(ACCENT));

    Styles::styled()
        .usage(heading)
        .header(heading)
        .literal(Style::new().fg_color(Some(OK)))
        .invalid(Style::new().bold().fg_color(Some(ERROR)))
        .error(Style::new().bold().fg_color(Some(ERROR)))
        .valid(Style::new().fg_color(Some(OK)))
        .placeholder(Style::new().italic())
}

fn paint(msg: &str, style: Style) -> String {
    format!("{style}{msg}{style:#}")
}

/// Input paths and other emphasised values in status lines
pub(crate) fn fmt_bold(msg: &str) -> String {
    paint(msg, Style::new().bold())
}

pub(crate) fn fmt_dimmed(msg: &str) -> String {
    paint(msg, Style::new().dimmed())
}

pub(crate) fn fmt_success(msg: &str) -> String {
    format!("{} {msg}", paint(CHECK, Style::new().fg_color(Some(OK))))
}
