//! Out-of-order guard for loads keyed to the current selection.
//!
//! Every selection change bumps a generation. A response is applied only if
//! the ticket it was issued under is still current; anything else is a stale
//! answer to an earlier selection and is dropped.

/// Issued when a load for `key` starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadTicket<K> {
    key: K,
    generation: u64,
}

impl<K: Copy> LoadTicket<K> {
    pub fn key(&self) -> K {
        self.key
    }
}

/// Issued when a batch submission starts; carries the exact payload sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket<K, R> {
    ticket: LoadTicket<K>,
    pub request: R,
}

impl<K: Copy, R> SubmitTicket<K, R> {
    pub fn key(&self) -> K {
        self.ticket.key
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Selection<K> {
    current: Option<K>,
    generation: u64,
}

impl<K: Copy + PartialEq> Selection<K> {
    pub(crate) fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    pub(crate) fn current(&self) -> Option<K> {
        self.current
    }

    /// Change the selection, invalidating every outstanding ticket.
    pub(crate) fn select(&mut self, key: Option<K>) -> Option<LoadTicket<K>> {
        self.current = key;
        self.reissue()
    }

    /// New ticket for the same selection (e.g. refresh after save).
    pub(crate) fn reissue(&mut self) -> Option<LoadTicket<K>> {
        self.generation += 1;
        self.current.map(|key| LoadTicket {
            key,
            generation: self.generation,
        })
    }

    /// Ticket for the current generation without invalidating anything.
    pub(crate) fn ticket(&self) -> Option<LoadTicket<K>> {
        self.current.map(|key| LoadTicket {
            key,
            generation: self.generation,
        })
    }

    pub(crate) fn is_current(&self, ticket: &LoadTicket<K>) -> bool {
        self.current == Some(ticket.key) && self.generation == ticket.generation
    }

    pub(crate) fn submit_ticket<R>(&self, request: R) -> Option<SubmitTicket<K, R>> {
        self.ticket().map(|ticket| SubmitTicket { ticket, request })
    }

    pub(crate) fn is_current_submit<R>(&self, ticket: &SubmitTicket<K, R>) -> bool {
        self.is_current(&ticket.ticket)
    }
}
