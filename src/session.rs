/// The signed-in user, as recorded after identity-provider sign-in.
///
/// Owned by whoever builds the feed and handed in explicitly; nothing in
/// the engine reads it from the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Identity-provider user id.
    pub uid: String,
    pub username: String,
    pub email: String,
}

pub const UID_VAR: &str = "PROJECT_FEED_UID";
pub const USERNAME_VAR: &str = "PROJECT_FEED_USERNAME";
pub const EMAIL_VAR: &str = "PROJECT_FEED_EMAIL";

impl Session {
    /// Build a session from the process environment. `None` when no uid is set.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let uid = lookup(UID_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())?;
        let email = lookup(EMAIL_VAR).unwrap_or_default().trim().to_string();
        // Same fallback the sign-in page uses: local part of the email.
        let username = lookup(USERNAME_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
        Some(Self { uid, username, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_uid_means_no_session() {
        assert_eq!(Session::from_vars(lookup(&[(EMAIL_VAR, "a@b.c")])), None);
        assert_eq!(Session::from_vars(lookup(&[(UID_VAR, "   ")])), None);
    }

    #[test]
    fn test_full_session() {
        let session = Session::from_vars(lookup(&[
            (UID_VAR, "fb-1"),
            (USERNAME_VAR, "asha"),
            (EMAIL_VAR, "asha@example.com"),
        ]))
        .unwrap();
        assert_eq!(session.uid, "fb-1");
        assert_eq!(session.username, "asha");
        assert_eq!(session.email, "asha@example.com");
    }

    #[test]
    fn test_username_falls_back_to_email_local_part() {
        let session = Session::from_vars(lookup(&[
            (UID_VAR, "fb-2"),
            (EMAIL_VAR, "ravi.k@example.com"),
        ]))
        .unwrap();
        assert_eq!(session.username, "ravi.k");
    }
}
