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
use crate::util::date::Date;
use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Why raw form input was not turned into an entry. Only one reason is ever
/// reported: the first check that fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
	#[error("Please enter a name")]
	NameRequired,
	#[error("Please select arrival and departure dates")]
	DateRangeRequired,
	#[error("Arrival date cannot be after departure date")]
	ArrivalAfterDeparture,
	#[error("Arrival date cannot be in the past")]
	ArrivalInPast,
	#[error("Arrival date cannot be the same as departure date")]
	SameDayRange,
}

impl Rejection {
	/// Short, stable identifier for the reason
	pub fn reason(&self) -> &'static str {
		match self {
			Rejection::NameRequired => "name required",
			Rejection::DateRangeRequired => "date range required",
			Rejection::ArrivalAfterDeparture => "arrival after departure",
			Rejection::ArrivalInPast => "arrival in the past",
			Rejection::SameDayRange => "same-day range not allowed",
		}
	}
}

/// What to do with a range that starts and ends on the same day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SameDayPolicy {
	/// Accept the entry, but hand the message back as a notice
	#[default]
	Warn,
	/// Refuse the entry
	Reject,
}

/// Input that passed validation, already assembled into an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedInput {
	pub entry: BookingEntry,
	/// Set when a check failed that was configured not to block
	pub notice: Option<Rejection>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
	same_day: SameDayPolicy,
}

impl Validator {
	pub fn new(same_day: SameDayPolicy) -> Self {
		Self { same_day }
	}

	/// Checks raw form input against `today`. The checks run in a fixed order
	/// and the first failure wins, so e.g. a blank name is reported even when
	/// the dates are missing too.
	pub fn validate(
		&self,
		name: &str,
		arrival: Option<Date>,
		departure: Option<Date>,
		today: Date,
	) -> Result<ValidatedInput, Rejection> {
		if name.trim().is_empty() {
			return Err(Rejection::NameRequired);
		}

		let (arrival, departure) = match (arrival, departure) {
			(Some(a), Some(d)) => (a, d),
			_ => return Err(Rejection::DateRangeRequired),
		};

		if arrival > departure {
			return Err(Rejection::ArrivalAfterDeparture);
		}
		if arrival < today {
			return Err(Rejection::ArrivalInPast);
		}

		let mut notice = None;
		if arrival == departure {
			match self.same_day {
				SameDayPolicy::Reject => return Err(Rejection::SameDayRange),
				SameDayPolicy::Warn => notice = Some(Rejection::SameDayRange),
			}
		}

		Ok(ValidatedInput {
			entry: BookingEntry::new(name.to_string(), arrival, departure),
			notice,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	fn date(s: &str) -> Option<Date> {
		Some(Date::from_str(s).unwrap())
	}

	fn today() -> Date {
		Date::from_str("2025-01-01").unwrap()
	}

	#[test]
	fn test_accepts_valid_input_verbatim() {
		let result = Validator::default()
			.validate(
				"  Alice  ",
				date("2025-01-10"),
				date("2025-01-12"),
				today(),
			)
			.unwrap();

		assert_eq!(result.entry.name(), "  Alice  ");
		assert_eq!(Some(result.entry.arrival()), date("2025-01-10"));
		assert_eq!(Some(result.entry.departure()), date("2025-01-12"));
		assert_eq!(result.notice, None);
	}

	#[test]
	fn test_arrival_today_is_allowed() {
		let result = Validator::default().validate(
			"Alice",
			date("2025-01-01"),
			date("2025-01-02"),
			today(),
		);
		assert_matches!(result, Ok(ValidatedInput { notice: None, .. }));
	}

	#[test]
	fn test_name_required() {
		let v = Validator::default();
		for name in ["", " ", "\t \n"] {
			assert_eq!(
				v.validate(name, date("2025-01-01"), date("2025-01-05"), today()),
				Err(Rejection::NameRequired)
			);
		}
	}

	#[test]
	fn test_name_checked_before_dates() {
		let result = Validator::default().validate("", None, None, today());
		assert_eq!(result, Err(Rejection::NameRequired));
	}

	#[test]
	fn test_date_range_required() {
		let v = Validator::default();
		let d = date("2025-01-05");
		for (arrival, departure) in [(None, d), (d, None), (None, None)] {
			assert_eq!(
				v.validate("Alice", arrival, departure, today()),
				Err(Rejection::DateRangeRequired)
			);
		}
	}

	#[test]
	fn test_arrival_after_departure() {
		let result = Validator::default().validate(
			"Alice",
			date("2025-01-10"),
			date("2025-01-05"),
			today(),
		);
		assert_eq!(result, Err(Rejection::ArrivalAfterDeparture));
	}

	#[test]
	fn test_order_beats_past_check() {
		// both inverted and in the past; the ordering check comes first
		let result = Validator::default().validate(
			"Alice",
			date("2024-01-10"),
			date("2024-01-05"),
			today(),
		);
		assert_eq!(result, Err(Rejection::ArrivalAfterDeparture));
	}

	#[test]
	fn test_arrival_in_past() {
		let result = Validator::default().validate(
			"Bob",
			date("2024-01-01"),
			date("2024-01-05"),
			today(),
		);
		assert_eq!(result, Err(Rejection::ArrivalInPast));
	}

	#[test]
	fn test_same_day_warns_by_default() {
		let result = Validator::default()
			.validate("Bob", date("2025-02-01"), date("2025-02-01"), today())
			.unwrap();
		assert_eq!(result.notice, Some(Rejection::SameDayRange));
		assert_eq!(result.entry.arrival(), result.entry.departure());
	}

	#[test]
	fn test_same_day_rejected_when_strict() {
		let result = Validator::new(SameDayPolicy::Reject).validate(
			"Bob",
			date("2025-02-01"),
			date("2025-02-01"),
			today(),
		);
		assert_eq!(result, Err(Rejection::SameDayRange));
	}

	#[test]
	fn test_same_day_in_past_reports_past() {
		let result = Validator::new(SameDayPolicy::Reject).validate(
			"Bob",
			date("2024-02-01"),
			date("2024-02-01"),
			today(),
		);
		assert_eq!(result, Err(Rejection::ArrivalInPast));
	}

	#[test]
	fn test_reasons_and_messages() {
		assert_eq!(Rejection::NameRequired.reason(), "name required");
		assert_eq!(
			Rejection::DateRangeRequired.to_string(),
			"Please select arrival and departure dates"
		);
		assert_eq!(
			Rejection::SameDayRange.reason(),
			"same-day range not allowed"
		);
	}
}
