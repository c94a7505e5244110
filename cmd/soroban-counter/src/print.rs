use std::{env, fmt::Display};

const TERMS: &[&str] = &["Apple_Terminal", "vscode"];

/// Status lines for humans, written to stderr unless `--quiet` is set.
#[derive(Clone)]
pub struct Print {
    pub quiet: bool,
}

impl Print {
    pub fn new(quiet: bool) -> Print {
        Print { quiet }
    }

    // Some terminals like vscode's and macOS' default terminal will not render
    // the subsequent space if the emoji codepoints size is 2; in this case,
    // we need an additional space.
    pub fn compute_emoji<T: Display + Sized>(&self, emoji: T) -> String {
        if let Ok(term_program) = env::var("TERM_PROGRAM") {
            if TERMS.contains(&term_program.as_str()) && emoji.to_string().chars().count() == 2 {
                return format!("{emoji} ");
            }
        }

        emoji.to_string()
    }

    pub fn globeln<T: Display + Sized>(&self, message: T) {
        self.iconln("🌎", message);
    }

    pub fn warnln<T: Display + Sized>(&self, message: T) {
        self.iconln("⚠️", message);
    }

    fn iconln<T: Display + Sized>(&self, icon: &str, message: T) {
        if !self.quiet {
            eprintln!("{} {}", self.compute_emoji(icon), message);
        }
    }
}
