use crate::hub::session::{Outbox, Peer};
use podium_core::SessionId;
use std::collections::HashMap;

/// Result of a presenter claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterClaim {
    Accepted,
    Rejected,
}

/// Members of one room and its presenter, if any.
///
/// The presenter is always one of the members: removing the presenter's
/// session also clears the presenter slot.
#[derive(Debug)]
pub struct Room {
    name: String,
    members: HashMap<SessionId, Outbox>,
    presenter: Option<SessionId>,
}

impl Room {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: HashMap::new(),
            presenter: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.members.contains_key(id)
    }

    pub fn presenter(&self) -> Option<SessionId> {
        self.presenter
    }

    pub(crate) fn insert(&mut self, peer: Peer) {
        self.members.insert(peer.id, peer.outbox);
    }

    /// Removes a member. Returns `true` when it was the presenter.
    pub(crate) fn remove(&mut self, id: &SessionId) -> bool {
        if self.members.remove(id).is_none() {
            return false;
        }
        if self.presenter == Some(*id) {
            self.presenter = None;
            return true;
        }
        false
    }

    pub(crate) fn claim_presenter(&mut self, id: &SessionId) -> PresenterClaim {
        if !self.contains(id) {
            return PresenterClaim::Rejected;
        }
        match self.presenter {
            None => {
                self.presenter = Some(*id);
                PresenterClaim::Accepted
            }
            Some(current) if current == *id => PresenterClaim::Accepted,
            Some(_) => PresenterClaim::Rejected,
        }
    }

    pub(crate) fn clear_presenter_if(&mut self, id: &SessionId) -> bool {
        if self.presenter == Some(*id) {
            self.presenter = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn peers(&self) -> Vec<Peer> {
        self.members
            .iter()
            .map(|(id, outbox)| Peer {
                id: *id,
                outbox: outbox.clone(),
            })
            .collect()
    }

    pub(crate) fn peers_except(&self, excluded: &SessionId) -> Vec<Peer> {
        self.members
            .iter()
            .filter(|(id, _)| *id != excluded)
            .map(|(id, outbox)| Peer {
                id: *id,
                outbox: outbox.clone(),
            })
            .collect()
    }

    pub(crate) fn presenter_peer(&self) -> Option<Peer> {
        let id = self.presenter?;
        let outbox = self.members.get(&id)?;
        Some(Peer {
            id,
            outbox: outbox.clone(),
        })
    }
}
