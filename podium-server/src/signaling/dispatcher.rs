use crate::hub::{Hub, Outbox, PresenterClaim, Session};
use podium_core::{ControlMessage, ErrorReason, Frame, SessionId, SignalKind};
use tracing::{debug, info, warn};

enum State {
    Unjoined,
    Joined(Session),
}

/// Per-connection control loop state.
///
/// The first frame naming a room binds the connection to it. After that,
/// frames are routed by their `type`: presenter control goes through the
/// hub, everything else is relayed verbatim to the rest of the room.
///
/// Dropping a dispatcher leaves its room, so an aborted connection task
/// still cleans up.
pub struct Dispatcher {
    id: SessionId,
    outbox: Outbox,
    hub: Hub,
    state: State,
}

impl Dispatcher {
    pub fn new(hub: Hub, outbox: Outbox) -> Self {
        Self {
            id: SessionId::new(),
            outbox,
            hub,
            state: State::Unjoined,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            State::Unjoined => None,
            State::Joined(session) => Some(session),
        }
    }

    pub fn handle(&mut self, frame: Frame) {
        match &self.state {
            State::Unjoined => self.try_join(&frame),
            State::Joined(session) => self.route(session, frame),
        }
    }

    /// Ends the connection: leaves the room if one was joined.
    pub fn close(mut self) {
        self.leave();
    }

    fn try_join(&mut self, frame: &Frame) {
        if frame.is_keepalive() {
            return;
        }

        let room = frame.field("room");
        if room.is_empty() {
            warn!("Session {} sent a message before joining a room", self.id);
            self.reply(&ControlMessage::error(ErrorReason::MissingRoom));
            return;
        }

        let session = Session::new(self.id, room, self.outbox.clone());
        self.hub.join(&session);
        info!("Session {} joined room '{}'", self.id, session.room());
        self.reply(&ControlMessage::Joined {
            room: session.room().to_owned(),
        });

        if let Some(presenter) = self.hub.current_presenter(session.room()) {
            if presenter.id != self.id {
                debug!("Asking presenter {} to renegotiate", presenter.id);
                if let Err(e) = presenter.outbox.send_control(&ControlMessage::NeedOffer) {
                    warn!("Failed to reach presenter {}: {}", presenter.id, e);
                }
            }
        }

        self.state = State::Joined(session);
    }

    fn route(&self, session: &Session, frame: Frame) {
        match SignalKind::from(&frame) {
            SignalKind::EndPresentation => {
                self.hub.clear_presenter_if_self(session);
            }
            SignalKind::NeedOffer => match self.hub.current_presenter(session.room()) {
                Some(presenter) if presenter.id != session.id() => {
                    if let Err(e) = presenter.outbox.send(frame) {
                        warn!("Failed to reach presenter {}: {}", presenter.id, e);
                    }
                }
                _ => debug!("need-offer from {} has no presenter to go to", session.id()),
            },
            SignalKind::Offer => match self.hub.try_become_presenter(session) {
                PresenterClaim::Accepted => {
                    self.hub.broadcast(session, &frame);
                }
                PresenterClaim::Rejected => {
                    self.reply(&ControlMessage::error(ErrorReason::PresenterExists));
                }
            },
            SignalKind::Relay => {
                let delivered = self.hub.broadcast(session, &frame);
                debug!("Relayed frame from {} to {} peers", session.id(), delivered);
            }
        }
    }

    fn reply(&self, msg: &ControlMessage) {
        if let Err(e) = self.outbox.send_control(msg) {
            warn!("Failed to reply to {}: {}", self.id, e);
        }
    }

    fn leave(&mut self) {
        if let State::Joined(session) = std::mem::replace(&mut self.state, State::Unjoined) {
            self.hub.leave(&session);
            info!("Session {} left room '{}'", session.id(), session.room());
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.leave();
    }
}
