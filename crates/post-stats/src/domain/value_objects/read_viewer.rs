// crates/post-stats/src/domain/value_objects/read_viewer.rs

use sha2::{Digest, Sha256};
use shared_kernel::domain::value_objects::UserId;

/// Identité utilisée pour dédoublonner les lectures d'un post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadViewer {
    User(UserId),
    /// Empreinte hexadécimale de `ip|user_agent`
    Anonymous(String),
}

impl ReadViewer {
    pub fn resolve(user_id: UserId, ip: &str, user_agent: &str) -> Self {
        if user_id.is_authenticated() {
            return Self::User(user_id);
        }

        let digest = Sha256::digest(format!("{}|{}", ip, user_agent).as_bytes());
        Self::Anonymous(format!("{:x}", digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_users_are_identified_by_id() {
        let viewer = ReadViewer::resolve(UserId::from_raw(42), "10.0.0.1", "curl");
        assert_eq!(viewer, ReadViewer::User(UserId::from_raw(42)));
    }

    #[test]
    fn anonymous_fingerprint_depends_on_ip_and_agent() {
        let a = ReadViewer::resolve(UserId::ANONYMOUS, "10.0.0.1", "curl");
        let b = ReadViewer::resolve(UserId::ANONYMOUS, "10.0.0.1", "curl");
        let c = ReadViewer::resolve(UserId::ANONYMOUS, "10.0.0.2", "curl");

        assert_eq!(a, b);
        assert_ne!(a, c);
        match a {
            ReadViewer::Anonymous(fingerprint) => assert_eq!(fingerprint.len(), 64),
            other => panic!("expected anonymous viewer, got {:?}", other),
        }
    }
}
