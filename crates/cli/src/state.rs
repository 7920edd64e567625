//! Session settings and action execution.
//!
//! Holds the settings resolved from flags and config, and turns a parsed
//! `CliAction` into an `Output`.

use chrono::{Datelike, Local, NaiveDate};
use ethiocal_core::{
    format_ethiopian_with, EthiopianDate, GregorianDate, InvalidDateError, MonthScript,
};
use serde::Serialize;
use tracing::debug;

use crate::parse::CliAction;

/// Result of one executed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    /// An Ethiopian date converted to Gregorian
    Gregorian {
        ethiopian: EthiopianDate,
        gregorian: GregorianDate,
    },
    /// A Gregorian date converted to Ethiopian
    Ethiopian {
        gregorian: GregorianDate,
        ethiopian: EthiopianDate,
        display: String,
    },
    /// A rendered Ethiopian date
    Formatted {
        ethiopian: EthiopianDate,
        display: String,
    },
    /// Today in both calendars
    Today {
        gregorian: GregorianDate,
        ethiopian: EthiopianDate,
        display: String,
    },
}

/// Settings shared by every command of one process.
pub struct SessionState {
    script: MonthScript,
    commands_run: u64,
}

impl SessionState {
    /// Create a session rendering month names in `script`.
    pub fn new(script: MonthScript) -> Self {
        Self {
            script,
            commands_run: 0,
        }
    }

    /// Number of actions executed so far.
    pub fn commands_run(&self) -> u64 {
        self.commands_run
    }

    /// Execute one action.
    pub fn execute(&mut self, action: CliAction) -> Result<Output, InvalidDateError> {
        self.commands_run += 1;
        debug!(?action, "executing");
        match action {
            CliAction::ToGregorian(ethiopian) => Ok(Output::Gregorian {
                ethiopian,
                gregorian: ethiopian.to_gregorian()?,
            }),
            CliAction::ToEthiopian(gregorian) => {
                let ethiopian = gregorian.to_ethiopian()?;
                Ok(Output::Ethiopian {
                    gregorian,
                    ethiopian,
                    display: self.render(&ethiopian),
                })
            }
            CliAction::Format(ethiopian) => Ok(Output::Formatted {
                ethiopian,
                display: self.render(&ethiopian),
            }),
            CliAction::Today => self.today(Local::now().date_naive()),
        }
    }

    fn today(&self, today: NaiveDate) -> Result<Output, InvalidDateError> {
        let gregorian = GregorianDate::new(today.year(), today.month() as u8, today.day() as u8)?;
        let ethiopian = gregorian.to_ethiopian()?;
        Ok(Output::Today {
            gregorian,
            ethiopian,
            display: self.render(&ethiopian),
        })
    }

    fn render(&self, date: &EthiopianDate) -> String {
        format_ethiopian_with(date, self.script)
    }
}
