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
use tracing::debug;

/// Callback run after every mutation with the updated collection.
pub type Observer = Box<dyn FnMut(&[BookingEntry])>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// In-memory owner of the booking list. Insertion order is preserved and
/// duplicates are allowed.
///
/// Observers are called synchronously, in subscription order, before `add`
/// or `delete` returns, so anything reading the store afterwards (or inside
/// the callback) sees the new state.
#[derive(Default)]
pub struct EntryStore {
	entries: Vec<BookingEntry>,
	observers: Vec<(SubscriptionId, Observer)>,
	next_subscription: usize,
}

impl EntryStore {
	pub fn new() -> Self {
		Default::default()
	}

	// -----------
	// -- WRITE --
	// -----------

	pub fn add(&mut self, entry: BookingEntry) {
		debug!(name = entry.name(), "adding booking entry");
		self.entries.push(entry);
		self.notify();
	}

	/// Removes every entry equal to `entry` and returns how many went away.
	/// Observers are notified even when nothing matched.
	pub fn delete(&mut self, entry: &BookingEntry) -> usize {
		let before = self.entries.len();
		self.entries.retain(|e| e != entry);
		let removed = before - self.entries.len();

		debug!(name = entry.name(), removed, "deleting booking entry");
		self.notify();
		removed
	}

	// ----------
	// -- READ --
	// ----------

	pub fn current(&self) -> &[BookingEntry] {
		&self.entries
	}

	/// Entry at a 1-based list position
	pub fn get(&self, position: usize) -> Option<&BookingEntry> {
		position
			.checked_sub(1)
			.and_then(|index| self.entries.get(index))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	// -----------------
	// -- OBSERVATION --
	// -----------------

	pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
		let id = SubscriptionId(self.next_subscription);
		self.next_subscription += 1;
		self.observers.push((id, observer));
		id
	}

	/// Returns false if the subscription was already gone
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.observers.len();
		self.observers.retain(|(sub, _)| *sub != id);
		self.observers.len() != before
	}

	fn notify(&mut self) {
		for (_, observer) in self.observers.iter_mut() {
			observer(&self.entries);
		}
	}
}
