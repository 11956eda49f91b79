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
use crate::screens::table::Table;
use crate::util::date::DateStyle;
use anyhow::{bail, Error};

pub const TITLE: &str = "Booking Entries";
pub const EMPTY_MESSAGE: &str = "No bookings yet";

/// The home screen: every booking with its position, name, date range and
/// length of stay. It holds no entries of its own and always renders
/// whatever it is handed from the store.
pub struct ListScreen {
	style: DateStyle,
}

impl ListScreen {
	pub fn new(style: DateStyle) -> Self {
		Self { style }
	}

	pub fn render(&self, entries: &[BookingEntry]) -> String {
		let mut out = format!("{}\n", TITLE);

		if entries.is_empty() {
			out.push_str(EMPTY_MESSAGE);
			out.push('\n');
			return out;
		}

		let mut table = Table::new(4);
		table.add_header(vec!["#", "Name", "Dates", "Stay"]);
		table.add_separator();
		for (i, entry) in entries.iter().enumerate() {
			table.add_row(vec![
				(i + 1).to_string(),
				entry.name().to_string(),
				entry.date_range(self.style),
				entry.stay().to_string(),
			]);
		}
		table.right_align(vec![0]);

		out.push_str(&table.render());
		out
	}

	/// Deletes the entry shown at the given 1-based position. Any other
	/// entries equal to it go too, since the store deletes by value.
	pub fn delete_at(
		&self,
		store: &mut EntryStore,
		position: usize,
	) -> Result<BookingEntry, Error> {
		let entry = match store.get(position) {
			Some(entry) => entry.clone(),
			None => bail!("No booking at position {}", position),
		};
		store.delete(&entry);
		Ok(entry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::date::Date;

	fn entry(name: &str, arrival: &str, departure: &str) -> BookingEntry {
		BookingEntry::new(
			name.to_string(),
			Date::from_str(arrival).unwrap(),
			Date::from_str(departure).unwrap(),
		)
	}

	#[test]
	fn test_render_empty() {
		let screen = ListScreen::new(DateStyle::Dotted);
		assert_eq!(screen.render(&[]), "Booking Entries\nNo bookings yet\n");
	}

	#[test]
	fn test_render_entries() {
		let screen = ListScreen::new(DateStyle::Dotted);
		let entries = vec![
			entry("Alice", "2025-01-10", "2025-01-12"),
			entry("Bob", "2025-01-02", "2025-01-02"),
		];

		let expected = "\
Booking Entries
# | Name  |          Dates          | Stay
------------------------------------------
1   Alice   10.01.2025 - 12.01.2025   2d
2   Bob     02.01.2025 - 02.01.2025   0d
";
		assert_eq!(screen.render(&entries), expected);
	}

	#[test]
	fn test_render_iso() {
		let screen = ListScreen::new(DateStyle::Iso);
		let entries = vec![entry("Alice", "2025-01-10", "2025-01-12")];
		assert!(screen.render(&entries).contains("2025-01-10 - 2025-01-12"));
	}

	#[test]
	fn test_delete_at() {
		let screen = ListScreen::new(DateStyle::Dotted);
		let alice = entry("Alice", "2025-01-10", "2025-01-12");
		let bob = entry("Bob", "2025-01-02", "2025-01-03");

		let mut store = EntryStore::new();
		store.add(alice.clone());
		store.add(bob.clone());
		store.add(alice.clone());

		assert_eq!(screen.delete_at(&mut store, 3).unwrap(), alice);
		assert_eq!(store.current(), &[bob]);
	}

	#[test]
	fn test_delete_at_out_of_range() {
		let screen = ListScreen::new(DateStyle::Dotted);
		let mut store = EntryStore::new();
		store.add(entry("Alice", "2025-01-10", "2025-01-12"));

		let err = screen.delete_at(&mut store, 0).unwrap_err();
		assert_eq!(err.to_string(), "No booking at position 0");
		assert!(screen.delete_at(&mut store, 2).is_err());
		assert_eq!(store.len(), 1);
	}
}
