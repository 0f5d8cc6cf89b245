#![allow(dead_code)]

use std::sync::Mutex;

use addrbook::api::{AuthService, DirectoryService};
use addrbook::error::{AppError, AppResult};
use addrbook::model::*;

/// Directory backed by a fixed contact list. Records every call.
pub struct FakeDirectory {
    contacts: Vec<Contact>,
    pub calls: Mutex<Vec<String>>,
    fail_next: Mutex<bool>,
}

impl FakeDirectory {
    pub fn with_size(n: u64) -> Self {
        let contacts = (1..=n)
            .map(|id| {
                let mut c = Contact::new(id, &format!("First{}", id), &format!("Last{}", id));
                c.gender = if id % 2 == 0 { "female".into() } else { "male".into() };
                c
            })
            .collect();
        Self::with_contacts(contacts)
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(false),
        }
    }

    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn page(&self, matching: Vec<Contact>, skip: u64, limit: u64) -> AppResult<DirectoryPage> {
        if std::mem::take(&mut *self.fail_next.lock().unwrap()) {
            return Err(AppError::Network("timed out".into()));
        }
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();
        Ok(DirectoryPage::new(items, total, skip, limit))
    }
}

impl DirectoryService for FakeDirectory {
    fn list(&self, skip: u64, limit: u64) -> AppResult<DirectoryPage> {
        self.calls.lock().unwrap().push(format!("list {} {}", skip, limit));
        self.page(self.contacts.clone(), skip, limit)
    }

    fn search(&self, query: &str, skip: u64, limit: u64) -> AppResult<DirectoryPage> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search {} {} {}", query, skip, limit));
        let q = query.to_lowercase();
        let matching = self
            .contacts
            .iter()
            .filter(|c| c.full_name().to_lowercase().contains(&q))
            .cloned()
            .collect();
        self.page(matching, skip, limit)
    }
}

pub fn emily() -> AuthUser {
    AuthUser {
        id: Id::new(1),
        username: "emilys".into(),
        email: "emily.johnson@x.dummyjson.com".into(),
        first_name: "Emily".into(),
        last_name: "Johnson".into(),
        gender: "female".into(),
        image: Some("https://dummyjson.com/icon/emilys/128".into()),
    }
}

/// Accepts only emilys/emilyspass.
pub struct FakeAuth {
    pub profile_fails: bool,
    pub logins: Mutex<Vec<Credentials>>,
}

impl FakeAuth {
    pub fn new() -> Self {
        Self {
            profile_fails: false,
            logins: Mutex::new(Vec::new()),
        }
    }

    pub fn expired() -> Self {
        Self {
            profile_fails: true,
            ..Self::new()
        }
    }
}

impl AuthService for FakeAuth {
    fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        self.logins.lock().unwrap().push(credentials.clone());
        if credentials.username == "emilys" && credentials.password == "emilyspass" {
            Ok(LoginResponse {
                user: emily(),
                access_token: "access-1".into(),
                refresh_token: "refresh-1".into(),
            })
        } else {
            Err(AppError::Auth {
                message: "Invalid credentials".into(),
            })
        }
    }

    fn me(&self) -> AppResult<AuthUser> {
        if self.profile_fails {
            Err(AppError::Auth {
                message: "Token Expired!".into(),
            })
        } else {
            let mut user = emily();
            user.email = "emily@new.example.com".into();
            Ok(user)
        }
    }
}
