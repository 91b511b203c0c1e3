//! In-place console progress bar

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;
use log::debug;
use msh_convert::Progress;

/// Number of cells in the bar
pub const BAR_WIDTH: usize = 70;

// Set while a bar occupies the current console line
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Whether a progress bar currently owns the console line.
///
/// Log lines written meanwhile must start with a carriage return so they
/// replace the bar instead of being appended to it.
pub fn is_active() -> bool {
    ACTIVE.load(Ordering::Acquire)
}

/// Render one bar line for `done` of `total`, e.g. `\r 50%  [===   ]`.
///
/// The percentage is rounded up and cell `i` is filled while
/// `i < done / total * BAR_WIDTH`. An empty run renders as complete.
pub fn render(done: usize, total: usize) -> String {
    let (done, total) = if total == 0 { (1, 1) } else { (done.min(total), total) };
    let percent = (done * 100).div_ceil(total);
    let pad = match percent {
        100.. => "",
        10..=99 => " ",
        _ => "  ",
    };

    let cells: String = (0..BAR_WIDTH)
        .map(|i| if i * total < done * BAR_WIDTH { '=' } else { ' ' })
        .collect();

    format!("\r{percent}%{pad} [{cells}]")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running,
    Finished,
}

/// Progress bar drawn on a single, repeatedly overwritten line
#[derive(Debug)]
pub struct ConsoleProgress<W: Write> {
    out: W,
    state: State,
}

impl ConsoleProgress<Term> {
    /// Bar on standard output
    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: State::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, done: usize, total: usize, newline: bool) -> io::Result<()> {
        self.out.write_all(render(done, total).as_bytes())?;
        if newline {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn update(&mut self, done: usize, total: usize) {
        if self.state == State::Finished {
            return;
        }

        self.state = State::Running;
        ACTIVE.store(true, Ordering::Release);
        if let Err(e) = self.draw(done, total, false) {
            debug!("Failed to draw progress: {e}");
        }
    }

    fn finish(&mut self) {
        if self.state == State::Finished {
            return;
        }

        let result = self.draw(1, 1, true);
        self.state = State::Finished;
        ACTIVE.store(false, Ordering::Release);
        if let Err(e) = result {
            debug!("Failed to draw progress: {e}");
        }
    }
}
