/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::booking::entry::BookingEntry;
use crate::booking::store::EntryStore;
use crate::booking::validator::Validator;
use crate::parsing::command::Command;
use crate::screens::form::{AddForm, Submission};
use crate::screens::list::ListScreen;
use crate::util::date::{Date, DateStyle};
use anyhow::{anyhow, bail, Error};
use std::io::{BufRead, Write};
use tracing::{debug, trace};

const PROMPT: &str = "> ";

/// Everything a session needs besides the store and an output sink.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
	pub validator: Validator,
	pub style: DateStyle,
	/// Reference date for "arrival in the past"
	pub today: Date,
}

/// Which screen is showing. The add form only exists while it is open, so
/// leaving it discards whatever was typed.
enum Screen {
	List,
	Add(AddForm),
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
	Continue,
	Quit,
}

/// Drives the list and add screens from a stream of commands. The store is
/// handed in by the caller and handed back by `finish`; the session never
/// creates one of its own.
pub struct Session<W: Write> {
	store: EntryStore,
	settings: Settings,
	list: ListScreen,
	screen: Screen,
	out: W,
}

impl<W: Write> Session<W> {
	pub fn new(mut store: EntryStore, settings: Settings, out: W) -> Self {
		store.subscribe(Box::new(|entries: &[BookingEntry]| {
			debug!(count = entries.len(), "booking list changed")
		}));

		Self {
			store,
			settings,
			list: ListScreen::new(settings.style),
			screen: Screen::List,
			out,
		}
	}

	/// Runs a script to completion. Any malformed line aborts the run, with
	/// its line number in the error.
	pub fn run_script<R: BufRead>(
		&mut self,
		mut input: R,
	) -> Result<(), Error> {
		let mut i = 0;
		while let Some(line) = next_line(&mut input)? {
			i += 1;
			let command = line
				.and_then(|line| Command::parse(&line))
				.map_err(|e| anyhow!("{} (line {})", e, i))?;

			let Some(command) = command else {
				continue;
			};

			let flow = self
				.execute(command)
				.map_err(|e| anyhow!("{} (line {})", e, i))?;
			if flow == Flow::Quit {
				break;
			}
		}

		Ok(())
	}

	/// Interactive loop: prompts before every line and reports bad commands
	/// without ending the session.
	pub fn run_shell<R: BufRead>(
		&mut self,
		mut input: R,
	) -> Result<(), Error> {
		loop {
			write!(self.out, "{}", PROMPT)?;
			self.out.flush()?;

			let Some(line) = next_line(&mut input)? else {
				writeln!(self.out)?;
				break;
			};

			let result = line
				.and_then(|line| Command::parse(&line))
				.and_then(|command| match command {
					Some(command) => self.execute(command),
					None => Ok(Flow::Continue),
				});

			match result {
				Ok(Flow::Quit) => break,
				Ok(Flow::Continue) => {},
				Err(e) => writeln!(self.out, "Error: {}", e)?,
			}
		}

		Ok(())
	}

	/// Hands back the store and the output sink
	pub fn finish(self) -> (EntryStore, W) {
		(self.store, self.out)
	}

	fn execute(&mut self, command: Command) -> Result<Flow, Error> {
		trace!(?command, "executing");

		match command {
			Command::Add => {
				debug!("opening add form");
				self.screen = Screen::Add(AddForm::new());
			},
			Command::Name(name) => self.form()?.set_name(&name),
			Command::Dates(arrival, departure) => {
				self.form()?.set_dates(arrival, departure)
			},
			Command::Arrival(arrival) => self.form()?.set_arrival(arrival),
			Command::Departure(departure) => {
				self.form()?.set_departure(departure)
			},
			Command::Form => {
				let style = self.settings.style;
				let rendered = self.form()?.render(style);
				write!(self.out, "{}", rendered)?;
			},
			Command::Save => self.save()?,
			Command::List => self.show_list()?,
			Command::Delete(position) => {
				let entry = self.list.delete_at(&mut self.store, position)?;
				writeln!(
					self.out,
					"Deleted: {} ({})",
					entry.name(),
					entry.date_range(self.settings.style)
				)?;
				self.show_list()?;
			},
			Command::Quit => return Ok(Flow::Quit),
		}

		Ok(Flow::Continue)
	}

	fn form(&mut self) -> Result<&mut AddForm, Error> {
		match &mut self.screen {
			Screen::Add(form) => Ok(form),
			Screen::List => bail!("No open form; use 'add' first"),
		}
	}

	fn save(&mut self) -> Result<(), Error> {
		let Screen::Add(form) = &mut self.screen else {
			bail!("No open form; use 'add' first");
		};

		let submission = form.submit(
			&mut self.store,
			&self.settings.validator,
			self.settings.today,
		);

		match submission {
			Submission::Saved { entry, notice } => {
				if let Some(notice) = notice {
					writeln!(self.out, "Warning: {}", notice)?;
				}
				writeln!(
					self.out,
					"Saved: {} ({})",
					entry.name(),
					entry.date_range(self.settings.style)
				)?;
				self.show_list()?;
			},
			Submission::Rejected(rejection) => {
				writeln!(
					self.out,
					"Not saved ({}): {}",
					rejection.reason(),
					rejection
				)?;
			},
		}

		Ok(())
	}

	/// Closes the form, if any, and renders the list
	fn show_list(&mut self) -> Result<(), Error> {
		if matches!(self.screen, Screen::Add(_)) {
			debug!("closing add form");
		}
		self.screen = Screen::List;

		let rendered = self.list.render(self.store.current());
		write!(self.out, "{}", rendered)?;
		Ok(())
	}
}

/// Reads one line without its terminator. Bytes that are not UTF-8 fail
/// that line only; the reader stays usable for the next one.
fn next_line<R: BufRead>(
	input: &mut R,
) -> Result<Option<Result<String, Error>>, Error> {
	let mut buf = Vec::new();
	if input.read_until(b'\n', &mut buf)? == 0 {
		return Ok(None);
	}

	if buf.ends_with(b"\n") {
		buf.pop();
		if buf.ends_with(b"\r") {
			buf.pop();
		}
	}

	Ok(Some(
		String::from_utf8(buf).map_err(|_| anyhow!("Line is not valid UTF-8")),
	))
}
