//! Terminal detection.

use std::env;

/// Returns `true` if stdout is a terminal.
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns `true` if stdin is a terminal (an interactive session, not a pipe).
pub fn is_stdin_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdin())
}

/// Terminal width in columns, 80 if unknown.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols as usize)
        .unwrap_or(80)
}

/// Whether menu, wizard and cart output should carry ANSI colors.
///
/// Colors follow stdout, not stdin: a scripted `twin order < script` still
/// gets colored prices on a terminal, while `twin menu | less` stays plain.
/// `NO_COLOR`, `CLICOLOR=0` and `TERM=dumb` turn color off and
/// `CLICOLOR_FORCE` turns it on.
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }
    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }
    is_tty()
}
