use gazetteer_core::Progress;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Bytes,
    Items,
}

/// Single-line progress on stderr, redrawn in place.
///
/// Silent when stderr is not a terminal.
pub struct ConsoleProgress {
    unit: Unit,
    label: String,
    total: Option<u64>,
    done: u64,
    last_drawn: Option<u64>,
    enabled: bool,
}

impl ConsoleProgress {
    pub fn bytes() -> Self {
        Self::new(Unit::Bytes)
    }

    pub fn items() -> Self {
        Self::new(Unit::Items)
    }

    fn new(unit: Unit) -> Self {
        Self {
            unit,
            label: String::new(),
            total: None,
            done: 0,
            last_drawn: None,
            enabled: io::stderr().is_terminal(),
        }
    }

    /// Position used to throttle redraws: percent when the total is known,
    /// otherwise one step per MiB (bytes) or per 10k items.
    fn step(&self) -> u64 {
        match self.total {
            Some(total) if total > 0 => self.done * 100 / total,
            _ => match self.unit {
                Unit::Bytes => self.done >> 20,
                Unit::Items => self.done / 10_000,
            },
        }
    }

    fn render(&self) -> String {
        let fmt = |n: u64| match self.unit {
            Unit::Bytes => human_bytes(n),
            Unit::Items => n.to_string(),
        };
        match self.total {
            Some(total) if total > 0 => format!(
                "{}: {}/{} ({}%)",
                self.label,
                fmt(self.done),
                fmt(total),
                self.done * 100 / total
            ),
            _ => format!("{}: {}", self.label, fmt(self.done)),
        }
    }

    fn draw(&mut self) {
        let step = self.step();
        if self.last_drawn == Some(step) {
            return;
        }
        self.last_drawn = Some(step);
        let mut err = io::stderr().lock();
        let _ = write!(err, "\r{}", self.render());
        let _ = err.flush();
    }
}

impl Progress for ConsoleProgress {
    fn start(&mut self, label: &str, total: Option<u64>) {
        self.label = label.to_string();
        self.total = total;
        self.done = 0;
        self.last_drawn = None;
        if self.enabled {
            self.draw();
        }
    }

    fn advance(&mut self, delta: u64) {
        self.done += delta;
        if self.enabled {
            self.draw();
        }
    }

    fn finish(&mut self) {
        if self.enabled && self.last_drawn.is_some() {
            let _ = writeln!(io::stderr(), "\r{}", self.render());
        }
    }
}

fn human_bytes(n: u64) -> String {
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];
    let mut value = n as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{n}B")
    } else {
        format!("{value:.2}{}", UNITS[unit])
    }
}
