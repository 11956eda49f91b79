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

use anyhow::{bail, Error};
use chrono::{Datelike, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A calendar date with no time-of-day component. Comparisons are purely
/// by (year, month, day), so there is no timezone ambiguity once a date has
/// been constructed.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

/// How dates are written on screen. Parsing always accepts both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
	/// dd.MM.yyyy
	#[default]
	Dotted,
	/// yyyy-MM-dd
	Iso,
}

/// Contains the number of days between two dates, always in positive terms.
/// Designed for convenient printing in human-readable terms.
pub struct Duration {
	years: u32,
	months: u8,
	days: u8,
	total_days: u32,
}

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.total_days == 0 {
			return write!(f, "0d");
		}

		let mut components = Vec::new();
		if self.years > 0 {
			components.push(format!("{}y", self.years));
		}
		if self.months > 0 {
			components.push(format!("{}m", self.months));
		}
		if self.days > 0 {
			components.push(format!("{}d", self.days));
		}
		if self.years > 0 || self.months > 0 {
			components.push(format!("({}d)", self.total_days));
		}

		write!(f, "{}", components.join(" "))
	}
}

impl Date {
	/// Constructor to parse a string in either the "YYYY-mm-dd" or the
	/// "dd.mm.YYYY" format
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let date_str = date_str.trim();

		let (year, month, day) = if date_str.contains('-') {
			let parts: Vec<&str> = date_str.split('-').collect();
			if parts.len() != 3 || parts[0].len() != 4 {
				bail!("Date format must be YYYY-MM-DD or DD.MM.YYYY");
			}
			(parts[0], parts[1], parts[2])
		} else if date_str.contains('.') {
			let parts: Vec<&str> = date_str.split('.').collect();
			if parts.len() != 3 || parts[2].len() != 4 {
				bail!("Date format must be YYYY-MM-DD or DD.MM.YYYY");
			}
			(parts[2], parts[1], parts[0])
		} else {
			bail!("Date format must be YYYY-MM-DD or DD.MM.YYYY");
		};

		let all_digits =
			|s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
		if !(all_digits(year) && all_digits(month) && all_digits(day)) {
			bail!("Invalid date: {}", date_str);
		}

		let year = year.parse::<u32>()?;
		let month = month.parse::<u8>()?;
		let day = day.parse::<u8>()?;

		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date: {}", date_str);
		}

		Ok(Date { year, month, day })
	}

	/// Today's date according to the local clock. Only the outermost layer
	/// should call this; everything else takes "today" as an argument.
	pub fn today() -> Date {
		let now = Local::now().date_naive();
		Date {
			year: now.year().max(1) as u32,
			month: now.month() as u8,
			day: now.day() as u8,
		}
	}

	pub fn format(&self, style: DateStyle) -> String {
		match style {
			DateStyle::Dotted => {
				format!("{:02}.{:02}.{:04}", self.day, self.month, self.year)
			},
			DateStyle::Iso => self.to_string(),
		}
	}

	/// Calculate the duration in calendar years, months, and days, and the
	/// total number of days, between two dates
	pub fn until(&self, other: &Date) -> Duration {
		let (earlier, later) = if self < other {
			(self, other)
		} else {
			(other, self)
		};

		let mut year_diff = later.year as i32 - earlier.year as i32;
		let mut month_diff = later.month as i32 - earlier.month as i32;
		let mut day_diff = later.day as i32 - earlier.day as i32;

		if day_diff < 0 {
			month_diff -= 1;
			let days_in_prev_month =
				Date::days_in_month(earlier.year, earlier.month);
			day_diff += days_in_prev_month as i32;
		}

		if month_diff < 0 {
			year_diff -= 1;
			month_diff += 12;
		}

		Duration {
			years: year_diff as u32,
			months: month_diff as u8,
			days: day_diff as u8,
			total_days: Date::days_between(earlier, later),
		}
	}

	/// Calculate the total number of days between two dates
	fn days_between(start: &Date, end: &Date) -> u32 {
		let days_in_start_year =
			Date::days_since_year_start(start.year, start.month, start.day);
		let days_in_end_year =
			Date::days_since_year_start(end.year, end.month, end.day);

		let days_in_full_years = (start.year..end.year)
			.map(|year| if Date::is_leap_year(year) { 366 } else { 365 })
			.sum::<u32>();

		days_in_full_years + days_in_end_year - days_in_start_year
	}

	fn days_since_year_start(year: u32, month: u8, day: u8) -> u32 {
		let mut days = 0;
		for m in 1..month {
			days += Date::days_in_month(year, m) as u32;
		}
		days + day as u32
	}

	fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: u32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Date::is_leap_year(year) {
					29
				} else {
					28
				}
			},
			_ => 0,
		}
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		if year == 0 || !(1..=12).contains(&month) {
			return false;
		}
		day >= 1 && day <= Date::days_in_month(year, month)
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
