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
use crate::booking::validator::{Rejection, Validator};
use crate::util::date::{Date, DateStyle};

pub const TITLE: &str = "Add Booking Entry";

/// Outcome of pressing "save" on the form.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
	Saved {
		entry: BookingEntry,
		notice: Option<Rejection>,
	},
	Rejected(Rejection),
}

/// Raw, unvalidated state of the add screen. Fields can hold anything the
/// user typed or picked; nothing is checked until `submit`.
#[derive(Debug, Default)]
pub struct AddForm {
	name: String,
	arrival: Option<Date>,
	departure: Option<Date>,
	/// Message from the last failed submission, shown under the form
	error: Option<Rejection>,
}

impl AddForm {
	pub fn new() -> Self {
		Default::default()
	}

	pub fn set_name(&mut self, name: &str) {
		self.name = name.to_string();
	}

	pub fn set_dates(&mut self, arrival: Date, departure: Date) {
		self.arrival = Some(arrival);
		self.departure = Some(departure);
	}

	pub fn set_arrival(&mut self, arrival: Date) {
		self.arrival = Some(arrival);
	}

	pub fn set_departure(&mut self, departure: Date) {
		self.departure = Some(departure);
	}

	/// Validates the current fields and, if they pass, hands the new entry to
	/// the store. A rejection is remembered for `render` and the store is left
	/// untouched.
	pub fn submit(
		&mut self,
		store: &mut EntryStore,
		validator: &Validator,
		today: Date,
	) -> Submission {
		let result =
			validator.validate(&self.name, self.arrival, self.departure, today);

		match result {
			Ok(input) => {
				self.error = None;
				store.add(input.entry.clone());
				Submission::Saved {
					entry: input.entry,
					notice: input.notice,
				}
			},
			Err(rejection) => {
				self.error = Some(rejection);
				Submission::Rejected(rejection)
			},
		}
	}

	pub fn render(&self, style: DateStyle) -> String {
		let dates = match (self.arrival, self.departure) {
			(Some(arrival), Some(departure)) => format!(
				"{} - {}",
				arrival.format(style),
				departure.format(style)
			),
			_ => Rejection::DateRangeRequired.to_string(),
		};

		let mut out =
			format!("{}\nName: {}\nDates: {}\n", TITLE, self.name, dates);
		if let Some(error) = self.error {
			out.push_str(&format!("Error: {}\n", error));
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::booking::validator::SameDayPolicy;
	use assert_matches::assert_matches;

	fn date(s: &str) -> Date {
		Date::from_str(s).unwrap()
	}

	#[test]
	fn test_submit_adds_to_store() {
		let mut store = EntryStore::new();
		let mut form = AddForm::new();
		form.set_name("Alice");
		form.set_dates(date("2025-01-10"), date("2025-01-12"));

		let result =
			form.submit(&mut store, &Validator::default(), date("2025-01-01"));

		let expected = BookingEntry::new(
			"Alice".to_string(),
			date("2025-01-10"),
			date("2025-01-12"),
		);
		assert_eq!(
			result,
			Submission::Saved {
				entry: expected.clone(),
				notice: None
			}
		);
		assert_eq!(store.current(), &[expected]);
		assert_eq!(form.error, None);
	}

	#[test]
	fn test_rejection_leaves_store_alone() {
		let mut store = EntryStore::new();
		let mut form = AddForm::new();
		form.set_arrival(date("2025-01-10"));

		let result =
			form.submit(&mut store, &Validator::default(), date("2025-01-01"));
		assert_eq!(result, Submission::Rejected(Rejection::NameRequired));

		form.set_name("Alice");
		let result =
			form.submit(&mut store, &Validator::default(), date("2025-01-01"));
		assert_eq!(result, Submission::Rejected(Rejection::DateRangeRequired));
		assert_eq!(form.error, Some(Rejection::DateRangeRequired));
		assert!(store.current().is_empty());
	}

	#[test]
	fn test_error_clears_after_success() {
		let mut store = EntryStore::new();
		let mut form = AddForm::new();
		form.set_name("Alice");
		form.set_dates(date("2024-01-10"), date("2024-01-12"));
		let today = date("2025-01-01");

		form.submit(&mut store, &Validator::default(), today);
		assert_eq!(form.error, Some(Rejection::ArrivalInPast));

		form.set_arrival(date("2025-01-12"));
		form.set_departure(date("2025-01-12"));
		let result = form.submit(&mut store, &Validator::default(), today);
		assert_matches!(
			result,
			Submission::Saved {
				notice: Some(Rejection::SameDayRange),
				..
			}
		);
		assert_eq!(form.error, None);
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_strict_same_day() {
		let mut store = EntryStore::new();
		let mut form = AddForm::new();
		form.set_name("Alice");
		form.set_dates(date("2025-01-12"), date("2025-01-12"));

		let validator = Validator::new(SameDayPolicy::Reject);
		let result = form.submit(&mut store, &validator, date("2025-01-01"));
		assert_eq!(result, Submission::Rejected(Rejection::SameDayRange));
		assert!(store.current().is_empty());
	}

	#[test]
	fn test_render() {
		let mut form = AddForm::new();
		assert_eq!(
			form.render(DateStyle::Dotted),
			"Add Booking Entry\nName: \nDates: Please select arrival and departure dates\n"
		);

		form.set_name("Alice");
		form.set_dates(date("2025-01-12"), date("2025-01-10"));
		form.submit(
			&mut EntryStore::new(),
			&Validator::default(),
			date("2025-01-01"),
		);
		assert_eq!(
			form.render(DateStyle::Dotted),
			"Add Booking Entry\nName: Alice\nDates: 12.01.2025 - 10.01.2025\nError: Arrival date cannot be after departure date\n"
		);
	}
}
