//! Who is signed in and which domains they belong to.

use shared::{Domain, User};

use super::observable::{Readable, Writable};

#[derive(Debug, Default)]
pub struct SessionStores {
    current_user_id: Writable<Option<String>>,
    current_user: Writable<Option<User>>,
    domains: Writable<Option<Vec<Domain>>>,
}

impl SessionStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the signed-in user; a different id drops the previous profile
    pub fn sign_in(&self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        let switched = self
            .current_user
            .with(|user| user.as_ref().is_some_and(|user| user.id != user_id));
        if switched {
            self.current_user.set(None);
            self.domains.set(None);
        }
        self.current_user_id.set(Some(user_id));
    }

    pub fn set_user(&self, user: User) {
        self.current_user_id.set(Some(user.id.clone()));
        self.current_user.set(Some(user));
    }

    /// Forget the user and everything loaded for them
    pub fn sign_out(&self) {
        self.current_user_id.set(None);
        self.current_user.set(None);
        self.domains.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user_id.with(Option::is_some)
    }

    pub fn current_user_id(&self) -> Option<String> {
        self.current_user_id.get()
    }

    pub fn set_domains(&self, domains: Vec<Domain>) {
        self.domains.set(Some(domains));
    }

    pub fn push_domain(&self, domain: Domain) {
        self.domains.update(|domains| domains.get_or_insert_with(Vec::new).push(domain));
    }

    pub fn current_user_id_view(&self) -> Readable<Option<String>> {
        self.current_user_id.readable()
    }

    pub fn current_user_view(&self) -> Readable<Option<User>> {
        self.current_user.readable()
    }

    pub fn domains_view(&self) -> Readable<Option<Vec<Domain>>> {
        self.domains.readable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn domain(name: &str) -> Domain {
        Domain {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            banner_url: None,
            icon_url: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: "ferris".to_string(),
            display_name: "Ferris".to_string(),
            first_name: None,
            last_name: None,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_push_domain_starts_list_when_unloaded() {
        let session = SessionStores::new();
        session.push_domain(domain("Gardening"));

        let domains = session.domains_view().get().unwrap();
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].name, "Gardening");
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let session = SessionStores::new();
        session.set_user(user("u-1"));
        session.set_domains(vec![domain("Chess")]);
        assert!(session.is_signed_in());

        session.sign_out();

        assert!(!session.is_signed_in());
        assert!(session.current_user_view().get().is_none());
        assert!(session.domains_view().get().is_none());
    }

    #[test]
    fn test_sign_in_as_other_user_drops_stale_profile() {
        let session = SessionStores::new();
        session.set_user(user("u-1"));
        session.set_domains(vec![domain("Chess")]);

        session.sign_in("u-1");
        assert!(session.current_user_view().get().is_some());

        session.sign_in("u-2");
        assert_eq!(session.current_user_id().as_deref(), Some("u-2"));
        assert!(session.current_user_view().get().is_none());
        assert!(session.domains_view().get().is_none());
    }
}
