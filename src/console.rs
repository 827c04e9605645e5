// Console layer: the small set of terminal actions the menu loop needs.
// `TerminalConsole` talks to a real terminal through `dialoguer` and
// `crossterm`; `LineConsole` works over any reader/writer pair so piped
// input and tests drive the exact same menu code.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use dialoguer::console::Term;
use dialoguer::Input;

/// Line-oriented terminal actions used by the menu loop.
pub trait Console {
    /// Show `text` and read one line of input without its line terminator.
    /// End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn prompt(&mut self, text: &str) -> io::Result<String>;

    /// Print one line.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Wait for the user to press Enter.
    fn pause(&mut self) -> io::Result<()>;

    /// Clear the screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;
}

const PAUSE_MESSAGE: &str = "\nPress Enter to continue...";

/// Read one line, treating end of input as an error so loops terminate.
fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Interactive console for a real terminal. Prompts and output both go to
/// stdout.
#[derive(Debug)]
pub struct TerminalConsole {
    term: Term,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        // dialoguer appends its own ": " after the prompt.
        let label = text.trim_end().trim_end_matches(':');
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text_on(&self.term)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn pause(&mut self) -> io::Result<()> {
        self.say(PAUSE_MESSAGE)?;
        read_line(&mut io::stdin().lock()).map(|_| ())
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), MoveTo(0, 0), Clear(ClearType::All))
    }
}

/// Console over an arbitrary reader and writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        read_line(&mut self.input)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn pause(&mut self) -> io::Result<()> {
        self.say(PAUSE_MESSAGE)?;
        self.output.flush()?;
        read_line(&mut self.input).map(|_| ())
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))?;
        self.output.flush()
    }
}
