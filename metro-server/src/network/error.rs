//! Network error types.

/// Errors raised by graph construction and lookups.
///
/// "No route exists" is deliberately absent: searches report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The named station is not part of the network
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The two stations exist but are not directly connected
    #[error("no connection between {from} and {to}")]
    NoEdge { from: String, to: String },

    /// Travel times must be strictly positive
    #[error("invalid travel time {minutes} between {from} and {to}: must be positive")]
    InvalidWeight {
        from: String,
        to: String,
        minutes: u32,
    },

    /// A connection must join two distinct stations
    #[error("station {0} cannot be connected to itself")]
    SelfLoop(String),
}

impl NetworkError {
    /// Returns true for errors caused by a station or connection that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NetworkError::UnknownStation(_) | NetworkError::NoEdge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::UnknownStation("Лісова".into());
        assert_eq!(err.to_string(), "unknown station: Лісова");

        let err = NetworkError::NoEdge {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "no connection between A and B");

        let err = NetworkError::InvalidWeight {
            from: "A".into(),
            to: "B".into(),
            minutes: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid travel time 0 between A and B: must be positive"
        );

        let err = NetworkError::SelfLoop("A".into());
        assert_eq!(err.to_string(), "station A cannot be connected to itself");
    }

    #[test]
    fn not_found_family() {
        assert!(NetworkError::UnknownStation("A".into()).is_not_found());
        assert!(
            NetworkError::NoEdge {
                from: "A".into(),
                to: "B".into()
            }
            .is_not_found()
        );
        assert!(!NetworkError::SelfLoop("A".into()).is_not_found());
    }
}
