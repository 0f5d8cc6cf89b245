use crate::cli::context::CLIContext;
use crate::model::{Contact, Id};
use crate::queries::favorites_queries;

pub fn add(ctx: &mut CLIContext, args: &str) {
    let id = match parse_id(args, "fav") {
        Some(id) => id,
        None => return,
    };
    match ctx.app.favorites.add(id) {
        Ok(set) => println!("Added {} to favorites ({} total).", id, set.len()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &mut CLIContext, args: &str) {
    let id = match parse_id(args, "unfav") {
        Some(id) => id,
        None => return,
    };
    match ctx.app.favorites.remove(id) {
        Ok(set) => println!("Removed {} from favorites ({} total).", id, set.len()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn toggle(ctx: &mut CLIContext, args: &str) {
    let id = match parse_id(args, "toggle") {
        Some(id) => id,
        None => return,
    };
    match ctx.app.favorites.toggle(id) {
        Ok(true) => println!("Added {} to favorites.", id),
        Ok(false) => println!("Removed {} from favorites.", id),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn list(ctx: &mut CLIContext) {
    ctx.app.favorites.load();
    if let Some(e) = ctx.app.favorites.error() {
        println!("Warning: {}", e);
    }
    if ctx.app.favorites.favorites().is_empty() {
        println!("No favorites yet. Use 'fav <id>' on any contact.");
        return;
    }

    let app = &ctx.app;
    let shown = match app.favorites.resolve(&app.api, app.config.page_limit) {
        Ok(contacts) => contacts,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };
    let favorites = ctx.app.favorites.favorites();
    println!("Favorites ({}):", favorites.len());
    for contact in &shown {
        println!("{}", ctx.contact_line(contact));
    }
    let missing = favorites_queries::missing_favorites(&shown, favorites);
    if !missing.is_empty() {
        let ids: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
        println!("  (not loaded yet: {})", ids.join(", "));
    }
}

fn parse_id(args: &str, command: &str) -> Option<Id<Contact>> {
    if args.is_empty() {
        println!("Usage: {} <id>", command);
        return None;
    }
    match args.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("'{}' is not a contact id", args);
            None
        }
    }
}
