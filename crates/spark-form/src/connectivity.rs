//! Connectivity signal used to classify failed submissions.

/// The runtime's online/offline signal.
///
/// Consulted only after a delivery fails, to decide between connectivity
/// feedback and generic failure feedback. Never consulted before sending.
pub trait Connectivity {
    /// Whether the runtime currently reports a usable network connection.
    fn is_online(&self) -> bool;
}

/// Connectivity for environments without an offline signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_online() {
        assert!(AlwaysOnline.is_online());
    }
}
