use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use crate::app::AppContext;
use crate::browser::{Completion, FetchRequest};
use crate::error::AppError;
use crate::model::{Contact, Id};
use crate::queries::contact_queries;

pub struct CLIContext {
    pub app: AppContext,
}

impl CLIContext {
    pub fn new(app: AppContext) -> Self {
        Self { app }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Runs a fetch against the live service and reports failures.
    pub fn drive(&mut self, request: FetchRequest) -> Completion {
        let AppContext { api, browser, .. } = &mut self.app;
        let completion = browser.run(request, &*api);
        if completion == Completion::Failed {
            if let Some(e) = &self.app.browser.state().error {
                println!("Error: {}", e);
            }
        }
        completion
    }

    /// Waits out the search debounce window, then runs the search if one is due.
    pub fn settle_search(&mut self) -> Option<Completion> {
        let deadline = self.app.browser.next_deadline()?;
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        let request = self.app.browser.poll(Instant::now())?;
        Some(self.drive(request))
    }

    /// Looks up a contact among the loaded ones by id.
    pub fn find_contact(&self, args: &str) -> Option<Contact> {
        let id: Id<Contact> = match args.parse() {
            Ok(id) => id,
            Err(_) => {
                println!("'{}' is not a contact id", args.trim());
                return None;
            }
        };
        let found = contact_queries::find_by_id(&self.app.browser.state().contacts, id).cloned();
        if found.is_none() {
            println!("No loaded contact with id {}. Try 'list' or 'search' first.", id);
        }
        found
    }

    pub fn contact_line(&self, contact: &Contact) -> String {
        let star = if self.app.favorites.contains(contact.id) { "*" } else { " " };
        format!(
            "{} {:>4}  [{}] {:<28} {}",
            star,
            contact.id,
            contact_queries::initials(contact),
            contact.full_name(),
            contact.phone
        )
    }

    /// Print an error.
    pub fn print_error(&self, e: &AppError) {
        println!("Error: {}", e);
    }
}
