//! Decorated terminal lines. Everything goes to stdout except errors.

use ansi_term::{Colour, Style};
use std::fmt;

fn line<T: fmt::Display>(style: Style, icon: &str, msg: T) -> String {
    format!("{} {msg}", style.paint(icon))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue.bold(), "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green.bold(), "✅", msg));
}

/// Success line that honours the `showNotifications` setting.
pub fn notify<T: fmt::Display>(enabled: bool, msg: T) {
    if enabled {
        success(msg);
    }
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow.bold(), "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red.bold(), "❌", msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Colour::Blue.bold().paint(format!("=== {msg} ===")));
}
