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
use crate::booking::store::EntryStore;
use crate::booking::validator::{SameDayPolicy, Validator};
use crate::config::config_file::Config;
use crate::parsing::filesystem::Filesystem;
use crate::session::{Session, Settings};
use crate::util::date::{Date, DateStyle};
use anyhow::{bail, Error};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Write};
use tracing::info;

mod booking;
mod config;
mod logging;
mod parsing;
mod screens;
mod session;
mod util;

#[derive(Parser)]
#[command(name = "bookr", version, about = "Plain text booking list")]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	// -----------
	// -- FLAGS --
	// -----------
	/// Script to run (default: stdin)
	#[arg(short)]
	file: Option<String>,

	/// Treat this date as today (YYYY-MM-DD or DD.MM.YYYY)
	#[arg(short, long)]
	today: Option<String>,

	/// Whether a same-day range is accepted with a warning or rejected
	#[arg(long, value_enum)]
	same_day: Option<SameDayPolicy>,

	/// How dates are shown
	#[arg(long, value_enum)]
	date_style: Option<DateStyle>,

	/// Custom config file location (default: ~/.config/bookr/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Print the final booking list as JSON when the session ends
	#[arg(long)]
	json: bool,

	/// More log output on stderr (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if self.command == Directive::Shell && self.file.is_some() {
			bail!("The shell reads from stdin; use 'run' for script files");
		}

		Ok(())
	}

	/// Flags win over the config file, which wins over defaults
	fn settings(&self, config: &Config) -> Result<Settings, Error> {
		let today = match &self.today {
			Some(today) => Date::from_str(today)?,
			None => Date::today(),
		};

		Ok(Settings {
			validator: Validator::new(
				self.same_day.unwrap_or_else(|| config.same_day()),
			),
			style: self.date_style.unwrap_or_else(|| config.date_style()),
			today,
		})
	}
}

#[derive(ValueEnum, Clone, Copy, PartialEq)]
enum Directive {
	Run,   // execute a script, stopping at the first malformed line
	Shell, // interactive session on stdin
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	logging::init(args.verbose)?;
	args.validate()?;

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let settings = args.settings(&config)?;
	info!(today = %settings.today, style = ?settings.style, "starting session");

	let input = fs.open_input(args.file.as_ref())?;
	let mut session = Session::new(EntryStore::new(), settings, io::stdout());

	match args.command {
		Directive::Run => session.run_script(input)?,
		Directive::Shell => session.run_shell(input)?,
	}

	let (store, mut out) = session.finish();
	info!(bookings = store.len(), "session finished");
	if args.json {
		writeln!(out, "{}", serde_json::to_string_pretty(store.current())?)?;
	}
	out.flush()?;

	Ok(())
}
