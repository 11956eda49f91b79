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
use crate::util::date::{Date, DateStyle, Duration};
use serde::Serialize;

/// A named arrival/departure range. Entries are plain values: two entries
/// with the same name and dates are the same entry as far as the store is
/// concerned.
///
/// Nothing here checks that arrival precedes departure. The validator does
/// that once, before an entry is ever constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BookingEntry {
	name: String,
	arrival: Date,
	departure: Date,
}

impl BookingEntry {
	pub fn new(name: String, arrival: Date, departure: Date) -> Self {
		Self {
			name,
			arrival,
			departure,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn arrival(&self) -> Date {
		self.arrival
	}

	pub fn departure(&self) -> Date {
		self.departure
	}

	pub fn stay(&self) -> Duration {
		self.arrival().until(&self.departure())
	}

	/// "arrival - departure" in the given style
	pub fn date_range(&self, style: DateStyle) -> String {
		format!(
			"{} - {}",
			self.arrival().format(style),
			self.departure().format(style)
		)
	}
}
