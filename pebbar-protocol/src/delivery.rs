//! Reasons reported by the transport when an inbound message is dropped

/// Why an inbound message never reached the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeliveryFailure {
    SendTimeout,
    SendRejected,
    NotConnected,
    AppNotRunning,
    InvalidArgs,
    Busy,
    /// Message larger than the inbox
    BufferOverflow,
    AlreadyReleased,
    CallbackAlreadyRegistered,
    CallbackNotRegistered,
    OutOfMemory,
    Closed,
    InternalError,
    InvalidState,
    /// Code not known to this firmware
    Unknown(u32),
}

// Wire format values
const RESULT_SEND_TIMEOUT: u32 = 1 << 1;
const RESULT_SEND_REJECTED: u32 = 1 << 2;
const RESULT_NOT_CONNECTED: u32 = 1 << 3;
const RESULT_APP_NOT_RUNNING: u32 = 1 << 4;
const RESULT_INVALID_ARGS: u32 = 1 << 5;
const RESULT_BUSY: u32 = 1 << 6;
const RESULT_BUFFER_OVERFLOW: u32 = 1 << 7;
const RESULT_ALREADY_RELEASED: u32 = 1 << 9;
const RESULT_CALLBACK_ALREADY_REGISTERED: u32 = 1 << 10;
const RESULT_CALLBACK_NOT_REGISTERED: u32 = 1 << 11;
const RESULT_OUT_OF_MEMORY: u32 = 1 << 12;
const RESULT_CLOSED: u32 = 1 << 13;
const RESULT_INTERNAL_ERROR: u32 = 1 << 14;
const RESULT_INVALID_STATE: u32 = 1 << 15;

impl DeliveryFailure {
    /// Parse a failure from its result code
    pub fn from_code(code: u32) -> Self {
        match code {
            RESULT_SEND_TIMEOUT => DeliveryFailure::SendTimeout,
            RESULT_SEND_REJECTED => DeliveryFailure::SendRejected,
            RESULT_NOT_CONNECTED => DeliveryFailure::NotConnected,
            RESULT_APP_NOT_RUNNING => DeliveryFailure::AppNotRunning,
            RESULT_INVALID_ARGS => DeliveryFailure::InvalidArgs,
            RESULT_BUSY => DeliveryFailure::Busy,
            RESULT_BUFFER_OVERFLOW => DeliveryFailure::BufferOverflow,
            RESULT_ALREADY_RELEASED => DeliveryFailure::AlreadyReleased,
            RESULT_CALLBACK_ALREADY_REGISTERED => DeliveryFailure::CallbackAlreadyRegistered,
            RESULT_CALLBACK_NOT_REGISTERED => DeliveryFailure::CallbackNotRegistered,
            RESULT_OUT_OF_MEMORY => DeliveryFailure::OutOfMemory,
            RESULT_CLOSED => DeliveryFailure::Closed,
            RESULT_INTERNAL_ERROR => DeliveryFailure::InternalError,
            RESULT_INVALID_STATE => DeliveryFailure::InvalidState,
            other => DeliveryFailure::Unknown(other),
        }
    }

    /// Convert back to the result code
    pub fn code(self) -> u32 {
        match self {
            DeliveryFailure::SendTimeout => RESULT_SEND_TIMEOUT,
            DeliveryFailure::SendRejected => RESULT_SEND_REJECTED,
            DeliveryFailure::NotConnected => RESULT_NOT_CONNECTED,
            DeliveryFailure::AppNotRunning => RESULT_APP_NOT_RUNNING,
            DeliveryFailure::InvalidArgs => RESULT_INVALID_ARGS,
            DeliveryFailure::Busy => RESULT_BUSY,
            DeliveryFailure::BufferOverflow => RESULT_BUFFER_OVERFLOW,
            DeliveryFailure::AlreadyReleased => RESULT_ALREADY_RELEASED,
            DeliveryFailure::CallbackAlreadyRegistered => RESULT_CALLBACK_ALREADY_REGISTERED,
            DeliveryFailure::CallbackNotRegistered => RESULT_CALLBACK_NOT_REGISTERED,
            DeliveryFailure::OutOfMemory => RESULT_OUT_OF_MEMORY,
            DeliveryFailure::Closed => RESULT_CLOSED,
            DeliveryFailure::InternalError => RESULT_INTERNAL_ERROR,
            DeliveryFailure::InvalidState => RESULT_INVALID_STATE,
            DeliveryFailure::Unknown(code) => code,
        }
    }

    /// Returns true if the phone link itself is the problem
    pub fn is_link_failure(&self) -> bool {
        matches!(
            self,
            DeliveryFailure::NotConnected | DeliveryFailure::SendTimeout | DeliveryFailure::Closed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(DeliveryFailure::from_code(128), DeliveryFailure::BufferOverflow);
        assert_eq!(DeliveryFailure::from_code(64), DeliveryFailure::Busy);
        assert_eq!(DeliveryFailure::from_code(8), DeliveryFailure::NotConnected);
        assert_eq!(DeliveryFailure::BufferOverflow.code(), 128);
    }

    #[test]
    fn test_unknown_code_preserved() {
        let failure = DeliveryFailure::from_code(3);
        assert_eq!(failure, DeliveryFailure::Unknown(3));
        assert_eq!(failure.code(), 3);
    }

    #[test]
    fn test_is_link_failure() {
        assert!(DeliveryFailure::NotConnected.is_link_failure());
        assert!(!DeliveryFailure::BufferOverflow.is_link_failure());
    }
}
