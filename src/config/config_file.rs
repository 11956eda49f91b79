/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use crate::booking::validator::SameDayPolicy;
use crate::util::date::DateStyle;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub booking: Option<Booking>,
	pub display: Option<Display>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Booking {
	/// "warn" accepts same-day ranges with a warning, "reject" refuses them
	pub same_day: Option<SameDayPolicy>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Display {
	/// "dotted" (dd.MM.yyyy) or "iso" (yyyy-MM-dd)
	pub date_style: Option<DateStyle>,
}

impl Config {
	pub fn same_day(&self) -> SameDayPolicy {
		self.booking
			.as_ref()
			.and_then(|b| b.same_day)
			.unwrap_or_default()
	}

	pub fn date_style(&self) -> DateStyle {
		self.display
			.as_ref()
			.and_then(|d| d.date_style)
			.unwrap_or_default()
	}
}
