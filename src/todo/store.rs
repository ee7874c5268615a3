use super::TodoItem;
use crate::utils::dates::{date_key, parse_date_key};
use anyhow::{Result, anyhow};
use chrono::{Duration, NaiveDate};

/// The in-memory to-do list plus the view parameters the UI layer reads.
///
/// The store exclusively owns the item list. Every mutation keeps the rank
/// invariant: within each `(date, done)` partition the priorities are a dense
/// `{0, 1, ..., n-1}` with no gaps or duplicates. Pending items display in
/// ascending rank order, done items in descending order.
///
/// Derived views (`dates`, `pending_for`, `done_for`, counts) recompute from
/// the item list on every call; nothing is cached across mutations.
#[derive(Debug, Clone)]
pub struct TodoStore {
    list: Vec<TodoItem>,
    next_id: u64,
    selected_id: Option<u64>,
    current_date: NaiveDate,
    side_length: usize,
}

impl TodoStore {
    pub fn new(current_date: NaiveDate, side_length: usize) -> Self {
        Self {
            list: Vec::new(),
            next_id: 1,
            selected_id: None,
            current_date,
            side_length,
        }
    }

    /// Rebuild a store from persisted items and the persisted id counter.
    pub fn with_items(
        list: Vec<TodoItem>,
        next_id: u64,
        current_date: NaiveDate,
        side_length: usize,
    ) -> Self {
        Self {
            list,
            next_id,
            selected_id: None,
            current_date,
            side_length,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.list
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    // --- mutations ---

    /// Append a new pending item on `date_key`, ranked after everything
    /// already pending there. Returns the assigned id.
    pub fn add(&mut self, text: impl Into<String>, date_key: &str) -> u64 {
        let priority = self.pending_count(date_key);
        let id = self.next_id;
        self.list.push(TodoItem::new(id, date_key, priority, text));
        self.next_id += 1;
        id
    }

    /// Mark an item done: it leaves the pending partition (whose ranks close
    /// up behind it) and lands at the end of its date's done partition.
    /// Clears the selection marker.
    pub fn done(&mut self, id: u64) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| anyhow!("no todo with id {id}"))?;
        if self.list[index].done {
            return Err(anyhow!("todo {id} is already done"));
        }

        let date = self.list[index].date.clone();
        let old_rank = self.list[index].priority;
        // Rank within the done partition, counted before the flag flips so
        // the item itself is excluded.
        let done_rank = self.done_count(&date);

        self.list[index].done = true;
        self.list[index].priority = done_rank;
        self.close_gap(&date, false, old_rank);

        self.selected_id = None;
        Ok(())
    }

    /// Delete an item and close the rank gap in whichever partition owned
    /// it. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let item = self.list.remove(index);
        self.close_gap(&item.date, item.done, item.priority);
    }

    pub fn update_text(&mut self, id: u64, text: impl Into<String>) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| anyhow!("no todo with id {id}"))?;
        self.list[index].text = text.into();
        Ok(())
    }

    /// Move a pending item to `new_priority` within its date's pending
    /// partition. Classic array-move semantics: moving down shifts the items
    /// in `(old, new]` up by one rank, moving up shifts `[new, old)` down.
    pub fn update_priority(&mut self, id: u64, new_priority: usize) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| anyhow!("no todo with id {id}"))?;
        if self.list[index].done {
            return Err(anyhow!("todo {id} is done; only pending todos can be reordered"));
        }

        let date = self.list[index].date.clone();
        let old = self.list[index].priority;
        let pending = self.pending_count(&date);
        if new_priority >= pending {
            return Err(anyhow!(
                "rank {new_priority} is out of range: {date} has {pending} pending todos"
            ));
        }
        if new_priority == old {
            return Ok(());
        }

        for item in &mut self.list {
            if item.date != date || item.done {
                continue;
            }
            if old < new_priority && item.priority > old && item.priority <= new_priority {
                item.priority -= 1;
            } else if new_priority < old && item.priority >= new_priority && item.priority < old {
                item.priority += 1;
            }
        }
        self.list[index].priority = new_priority;
        Ok(())
    }

    // --- selection ---

    pub fn select(&mut self, id: Option<u64>) {
        self.selected_id = id;
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected_id
    }

    // --- visible date window ---

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn set_side_length(&mut self, side_length: usize) {
        self.side_length = side_length;
    }

    pub fn window_len(&self) -> usize {
        self.side_length * 2 + 1
    }

    /// The visible date window: `2 * side_length + 1` consecutive date keys
    /// centered on the current date.
    pub fn dates(&self) -> Vec<String> {
        let side = self.side_length as i64;
        (-side..=side)
            .map(|offset| date_key(self.current_date + Duration::days(offset)))
            .collect()
    }

    /// Position of a date key within the visible window, if it is visible.
    pub fn date_index(&self, key: &str) -> Option<usize> {
        let date = parse_date_key(key).ok()?;
        let offset = (date - self.current_date).num_days() + self.side_length as i64;
        usize::try_from(offset)
            .ok()
            .filter(|&index| index < self.window_len())
    }

    // --- derived per-date views ---

    /// Pending items for a date, highest rank last (ascending priority).
    pub fn pending_for(&self, date_key: &str) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self
            .list
            .iter()
            .filter(|item| item.date == date_key && !item.done)
            .collect();
        items.sort_by_key(|item| item.priority);
        items
    }

    /// Done items for a date, most recently completed first (descending
    /// priority).
    pub fn done_for(&self, date_key: &str) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self
            .list
            .iter()
            .filter(|item| item.date == date_key && item.done)
            .collect();
        items.sort_by(|a, b| b.priority.cmp(&a.priority));
        items
    }

    pub fn pending_count(&self, date_key: &str) -> usize {
        self.list
            .iter()
            .filter(|item| item.date == date_key && !item.done)
            .count()
    }

    pub fn done_count(&self, date_key: &str) -> usize {
        self.list
            .iter()
            .filter(|item| item.date == date_key && item.done)
            .count()
    }

    // --- internals ---

    fn index_of(&self, id: u64) -> Option<usize> {
        self.list.iter().position(|item| item.id == id)
    }

    /// Decrement the rank of every item in the `(date, done)` partition
    /// ranked after `removed_rank`, closing the hole a removal or completion
    /// left behind.
    fn close_gap(&mut self, date: &str, done: bool, removed_rank: usize) {
        for item in &mut self.list {
            if item.date == date && item.done == done && item.priority > removed_rank {
                item.priority -= 1;
            }
        }
    }
}
