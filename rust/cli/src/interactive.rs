//! Terminal-backed dice source and decision provider.
//!
//! Both read from the same input and write to the same output, so they
//! share one [`Console`] behind `Rc<RefCell<_>>`. Quitting (`q`) or closing
//! the input ends the game with [`GameError::Aborted`].

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use farkell_engine::errors::{DiceError, GameError};
use farkell_engine::roller::DiceSource;
use farkell_engine::scoring::ScoringBreakdown;
use farkell_engine::turn::{DecisionProvider, TurnContext};

use crate::formatters::{format_entry, format_roll, format_roll_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_dice_line, parse_yes_no};

pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

pub type SharedConsole<'a> = Rc<RefCell<Console<'a>>>;

fn io_failure(e: std::io::Error) -> GameError {
    GameError::Aborted(format!("terminal I/O failed: {}", e))
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    pub fn shared(self) -> SharedConsole<'a> {
        Rc::new(RefCell::new(self))
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Prompt until `parse` accepts the line.
    pub(crate) fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> ParseResult<T>,
    ) -> Result<T, GameError> {
        loop {
            ui::prompt(self.out, prompt).map_err(io_failure)?;
            let Some(line) = read_stdin_line(self.input) else {
                return Err(GameError::Aborted("input closed".into()));
            };
            match parse(&line) {
                ParseResult::Value(v) => return Ok(v),
                ParseResult::Quit => return Err(GameError::Aborted("quit".into())),
                ParseResult::Invalid(msg) => {
                    ui::write_error(self.out, &msg).map_err(io_failure)?;
                }
            }
        }
    }

    pub(crate) fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.out, "{}", line).map_err(io_failure)
    }
}

/// Decisions typed in by the player at the terminal.
pub struct HumanDecider<'a> {
    console: SharedConsole<'a>,
    name: String,
}

impl<'a> HumanDecider<'a> {
    pub fn new(console: SharedConsole<'a>, name: impl Into<String>) -> Self {
        Self {
            console,
            name: name.into(),
        }
    }
}

impl DecisionProvider for HumanDecider<'_> {
    fn choose_banks(
        &mut self,
        ctx: &TurnContext<'_>,
        breakdown: &ScoringBreakdown,
    ) -> Result<Vec<bool>, GameError> {
        let mut console = self.console.borrow_mut();
        if let Some(roll) = ctx.roll {
            console.say(&format_roll(roll))?;
        }
        breakdown
            .iter()
            .map(|entry| {
                let prompt = format!("Bank {}? [y/n/q] ", format_entry(entry));
                console.ask(&prompt, parse_yes_no)
            })
            .collect()
    }

    fn keep_rolling(&mut self, ctx: &TurnContext<'_>) -> Result<bool, GameError> {
        let mut console = self.console.borrow_mut();
        if let Some(roll) = ctx.roll {
            if roll.auto_banked {
                console.say(&format_roll(roll))?;
            }
            console.say(&format_roll_result(roll))?;
        }
        console.say(&format!(
            "Turn bank: {}, dice left: {}",
            ctx.state.bank(),
            ctx.state.available_dice()
        ))?;
        console.ask("Roll again? [y/n/q] ", parse_yes_no)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Physical dice: the values are typed in after each throw.
pub struct RealDice<'a> {
    console: SharedConsole<'a>,
}

impl<'a> RealDice<'a> {
    pub fn new(console: SharedConsole<'a>) -> Self {
        Self { console }
    }
}

impl DiceSource for RealDice<'_> {
    fn supply(&mut self, count: usize) -> Result<Vec<u8>, GameError> {
        let prompt = format!("Roll {} dice and enter the values: ", count);
        self.console.borrow_mut().ask(&prompt, parse_dice_line)
    }

    fn reject(&mut self, error: &DiceError) {
        let mut console = self.console.borrow_mut();
        let _ = ui::write_error(console.out(), &error.to_string());
    }
}
