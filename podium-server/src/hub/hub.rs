use crate::hub::room::{PresenterClaim, Room};
use crate::hub::session::{Peer, Session};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use podium_core::{ControlMessage, Frame, SessionId};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Registry of all live rooms.
///
/// Each room is mutated only while its map entry is locked, so membership
/// changes and presenter transitions within one room are totally ordered.
/// No lock is held while frames are handed to outboxes: recipients are
/// snapshotted first, then written to.
#[derive(Clone, Default)]
pub struct Hub {
    rooms: Arc<DashMap<String, Room>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&self, session: &Session) {
        let mut room = self
            .rooms
            .entry(session.room().to_owned())
            .or_insert_with(|| {
                info!("Creating new room: {}", session.room());
                Room::new(session.room())
            });
        room.insert(session.peer());
        debug!(
            "Session {} joined '{}' ({} members)",
            session.id(),
            room.name(),
            room.len()
        );
    }

    /// Removes the session from its room. Safe to call more than once.
    ///
    /// If the session was presenting, every remaining member is told with a
    /// `presenter-left` message. The room disappears with its last member.
    pub fn leave(&self, session: &Session) {
        let remaining = match self.rooms.entry(session.room().to_owned()) {
            Entry::Occupied(mut entry) => {
                let room = entry.get_mut();
                if !room.contains(&session.id()) {
                    return;
                }

                let was_presenter = room.remove(&session.id());
                let remaining = if was_presenter {
                    info!(
                        "Presenter {} left '{}', presenter slot is vacant",
                        session.id(),
                        room.name()
                    );
                    room.peers()
                } else {
                    Vec::new()
                };

                if room.is_empty() {
                    entry.remove();
                    info!("Room '{}' is empty, removing it", session.room());
                }
                remaining
            }
            Entry::Vacant(_) => return,
        };

        notify(&remaining, &ControlMessage::PresenterLeft);
    }

    /// Relays `frame` to every member of the sender's room except the sender.
    ///
    /// Returns how many recipients accepted the frame. Failed recipients are
    /// logged and skipped.
    pub fn broadcast(&self, sender: &Session, frame: &Frame) -> usize {
        let recipients = match self.rooms.get(sender.room()) {
            Some(room) => room.peers_except(&sender.id()),
            None => return 0,
        };

        deliver(&recipients, frame)
    }

    /// Atomically makes the session the room's presenter if the slot is free.
    ///
    /// A presenter claiming again is accepted. Anyone else is rejected until
    /// the slot is cleared.
    pub fn try_become_presenter(&self, session: &Session) -> PresenterClaim {
        let Some(mut room) = self.rooms.get_mut(session.room()) else {
            warn!(
                "Session {} claimed presenter of unknown room '{}'",
                session.id(),
                session.room()
            );
            return PresenterClaim::Rejected;
        };

        let claim = room.claim_presenter(&session.id());
        match claim {
            PresenterClaim::Accepted => {
                debug!("Session {} presents in '{}'", session.id(), room.name())
            }
            PresenterClaim::Rejected => info!(
                "Rejected offer from {} in '{}': presenter exists",
                session.id(),
                room.name()
            ),
        }
        claim
    }

    /// Ends the session's presentation, if it has one, and tells the other
    /// members with `end-presentation`. Returns whether anything changed.
    pub fn clear_presenter_if_self(&self, session: &Session) -> bool {
        let others = {
            let Some(mut room) = self.rooms.get_mut(session.room()) else {
                return false;
            };
            if !room.clear_presenter_if(&session.id()) {
                return false;
            }
            info!(
                "Presenter {} ended presentation in '{}'",
                session.id(),
                room.name()
            );
            room.peers_except(&session.id())
        };

        notify(&others, &ControlMessage::EndPresentation);
        true
    }

    pub fn current_presenter(&self, room: &str) -> Option<Peer> {
        self.rooms.get(room)?.presenter_peer()
    }

    pub fn is_presenter(&self, session: &Session) -> bool {
        self.rooms
            .get(session.room())
            .is_some_and(|room| room.presenter() == Some(session.id()))
    }

    pub fn presenter_id(&self, room: &str) -> Option<SessionId> {
        self.rooms.get(room)?.presenter()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn member_count(&self, room: &str) -> usize {
        self.rooms.get(room).map_or(0, |room| room.len())
    }
}

fn deliver(recipients: &[Peer], frame: &Frame) -> usize {
    recipients
        .iter()
        .filter(|peer| match peer.outbox.send(frame.clone()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Dropping frame for {}: {}", peer.id, e);
                false
            }
        })
        .count()
}

fn notify(recipients: &[Peer], msg: &ControlMessage) {
    if recipients.is_empty() {
        return;
    }
    match msg.to_frame() {
        Ok(frame) => {
            deliver(recipients, &frame);
        }
        Err(e) => error!("Failed to encode {:?}: {}", msg, e),
    }
}
