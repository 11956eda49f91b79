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
use crate::util::date::Date;
use anyhow::{anyhow, bail, Error};

/// One line of session input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	/// Open a fresh add form
	Add,
	Name(String),
	Dates(Date, Date),
	Arrival(Date),
	Departure(Date),
	/// Show the add form
	Form,
	Save,
	/// Close any open form and show the list
	List,
	/// 1-based position as shown on the list
	Delete(usize),
	Quit,
}

impl Command {
	/// Parses a single line. Blank lines and lines starting with '#' yield
	/// `None`.
	pub fn parse(line: &str) -> Result<Option<Command>, Error> {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			return Ok(None);
		}

		let (keyword, rest) = match line.split_once(char::is_whitespace) {
			Some((keyword, rest)) => (keyword, rest.trim()),
			None => (line, ""),
		};
		let args: Vec<&str> = rest.split_whitespace().collect();

		let command = match keyword {
			"add" if args.is_empty() => Command::Add,
			"name" => Command::Name(rest.to_string()),
			"dates" if args.len() == 2 => {
				Command::Dates(Date::from_str(args[0])?, Date::from_str(args[1])?)
			},
			"arrival" if args.len() == 1 => {
				Command::Arrival(Date::from_str(args[0])?)
			},
			"departure" if args.len() == 1 => {
				Command::Departure(Date::from_str(args[0])?)
			},
			"form" if args.is_empty() => Command::Form,
			"save" if args.is_empty() => Command::Save,
			"list" if args.is_empty() => Command::List,
			"delete" if args.len() == 1 => {
				let position = args[0].parse::<usize>().map_err(|_| {
					anyhow!("Invalid position: {}", args[0])
				})?;
				Command::Delete(position)
			},
			"quit" | "exit" if args.is_empty() => Command::Quit,
			"add" | "dates" | "arrival" | "departure" | "form" | "save"
			| "list" | "delete" | "quit" | "exit" => {
				bail!("Wrong number of arguments for '{}'", keyword)
			},
			_ => bail!("Unknown command: {}", keyword),
		};

		Ok(Some(command))
	}
}
