use crate::error::SignalingError;
use podium_core::{ControlMessage, Frame, SessionId};
use tokio::sync::mpsc;

/// Write side of one connection.
///
/// Frames are queued and drained into the socket by that connection's writer
/// task, so any task may send to any connection without touching its socket.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: mpsc::UnboundedSender<Frame>,
}

impl Outbox {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, frame: Frame) -> Result<(), SignalingError> {
        self.tx.send(frame).map_err(|_| SignalingError::Closed)
    }

    pub fn send_control(&self, msg: &ControlMessage) -> Result<(), SignalingError> {
        self.send(msg.to_frame()?)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Addressable member of a room: who it is and where its frames go.
#[derive(Debug, Clone)]
pub struct Peer {
    pub id: SessionId,
    pub outbox: Outbox,
}

/// A connection that has joined a room. The room binding never changes.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    room: String,
    outbox: Outbox,
}

impl Session {
    pub fn new(id: SessionId, room: impl Into<String>, outbox: Outbox) -> Self {
        Self {
            id,
            room: room.into(),
            outbox,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    pub fn peer(&self) -> Peer {
        Peer {
            id: self.id,
            outbox: self.outbox.clone(),
        }
    }
}
