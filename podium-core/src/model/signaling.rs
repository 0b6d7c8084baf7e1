use crate::model::Frame;
use serde::{Deserialize, Serialize};

/// Control messages the broker itself produces.
///
/// Everything else on the wire is relayed untouched and never decoded into
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlMessage {
    /// Acknowledges a join, echoing the room name.
    Joined { room: String },
    Error { reason: ErrorReason },
    /// The presenter's connection went away.
    PresenterLeft,
    /// The presenter stopped presenting on purpose.
    EndPresentation,
    /// Asks the presenter for a fresh offer.
    NeedOffer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorReason {
    #[serde(rename = "missing room")]
    MissingRoom,
    #[serde(rename = "presenter-exists")]
    PresenterExists,
}

impl ControlMessage {
    pub fn error(reason: ErrorReason) -> Self {
        Self::Error { reason }
    }

    pub fn to_frame(&self) -> serde_json::Result<Frame> {
        serde_json::to_string(self).map(Frame::Text)
    }
}

/// How an inbound message is classified by its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    EndPresentation,
    NeedOffer,
    Offer,
    /// Answers, ICE candidates and anything unknown. Relayed verbatim.
    Relay,
}

impl SignalKind {
    pub fn classify(message_type: &str) -> Self {
        match message_type {
            "end-presentation" => Self::EndPresentation,
            "need-offer" => Self::NeedOffer,
            "offer" => Self::Offer,
            _ => Self::Relay,
        }
    }
}

impl From<&Frame> for SignalKind {
    fn from(frame: &Frame) -> Self {
        Self::classify(&frame.field("type"))
    }
}
