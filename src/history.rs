use std::collections::VecDeque;

use serde::Serialize;

use crate::response::QueryResponse;

pub(crate) const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HistoryEntry {
    pub(crate) id: u64,
    pub(crate) text: String,
    pub(crate) loading: bool,
    pub(crate) response: Option<QueryResponse>,
}

/// Recently asked questions, newest first.
#[derive(Debug)]
pub(crate) struct QueryHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
    next_id: u64,
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl QueryHistory {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
            next_id: 1,
        }
    }

    /// Records a question that is still waiting for its answer and returns
    /// its id. The oldest entries are dropped beyond the limit.
    pub(crate) fn start(&mut self, text: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(HistoryEntry {
            id,
            text: text.to_string(),
            loading: true,
            response: None,
        });
        self.entries.truncate(self.limit);
        id
    }

    /// Attaches the answer. Returns `false` if the entry is no longer kept.
    pub(crate) fn complete(&mut self, id: u64, response: QueryResponse) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        entry.loading = false;
        entry.response = Some(response);
        true
    }

    /// Records a request that never produced a response.
    pub(crate) fn fail(&mut self, id: u64, message: &str) -> bool {
        let text = match self.get(id) {
            Some(entry) => entry.text.clone(),
            None => return false,
        };
        self.complete(id, QueryResponse::failure(&text, message))
    }

    pub(crate) fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
