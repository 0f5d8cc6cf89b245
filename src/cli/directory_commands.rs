use std::time::Instant;

use chrono::Local;

use crate::browser::Mode;
use crate::cli::context::CLIContext;
use crate::queries::contact_queries;

pub fn list(ctx: &mut CLIContext) {
    if let Some(request) = ctx.app.browser.start() {
        ctx.drive(request);
    }
    print_page(ctx);
}

pub fn search(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: search <text>");
        return;
    }
    if let Some(request) = ctx.app.browser.set_query(args, Instant::now()) {
        ctx.drive(request);
    }
    ctx.settle_search();
    print_page(ctx);
}

pub fn clear(ctx: &mut CLIContext) {
    match ctx.app.browser.set_query("", Instant::now()) {
        Some(request) => {
            ctx.drive(request);
        }
        None => {
            if let Some(request) = ctx.app.browser.start() {
                ctx.drive(request);
            }
        }
    }
    print_page(ctx);
}

pub fn more(ctx: &mut CLIContext) {
    match ctx.app.browser.load_more() {
        Some(request) => {
            ctx.drive(request);
            print_page(ctx);
        }
        None if !ctx.app.browser.state().has_more => println!("No more contacts."),
        None => println!("A fetch is already in progress."),
    }
}

pub fn refresh(ctx: &mut CLIContext) {
    let request = ctx.app.browser.refresh();
    ctx.drive(request);
    print_page(ctx);
}

pub fn gender(ctx: &mut CLIContext, args: &str) {
    let filter = match args {
        "" | "all" | "any" => None,
        other => Some(other),
    };
    ctx.app.browser.set_gender_filter(filter);
    match ctx.app.browser.gender_filter() {
        Some(g) => println!("Showing {} contacts only.", g),
        None => println!("Showing all contacts."),
    }
    print_page(ctx);
}

pub fn show(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <id>");
        return;
    }
    let contact = match ctx.find_contact(args) {
        Some(c) => c,
        None => return,
    };

    println!();
    println!("{}{}", contact.full_name(), if ctx.app.favorites.contains(contact.id) { "  (favorite)" } else { "" });
    if let Some(company) = &contact.company {
        if !company.title.is_empty() {
            println!("{} at {}", company.title, company.name);
        }
    }
    println!("Phone: {}", contact.phone);
    println!("Email: {}", contact.email);
    if let Some(address) = &contact.address {
        println!("Address: {}", contact_queries::format_address(address));
    }
    if let Some(company) = &contact.company {
        if !company.department.is_empty() {
            println!("Department: {}", company.department);
        }
    }
    if let Some(birthday) = contact_queries::birthday(&contact) {
        println!("Birthday: {}", birthday.format("%B %-d, %Y"));
    }
    if let Some(age) = contact_queries::age_on(&contact, Local::now().date_naive()) {
        println!("Age: {} years old", age);
    }
    if !contact.university.is_empty() {
        println!("University: {}", contact.university);
    }
    match &contact.image {
        Some(url) => println!("Photo: {}", url),
        None => println!("Avatar: {} on {}", contact_queries::initials(&contact), contact_queries::avatar_color(&contact)),
    }
    println!();
}

fn print_page(ctx: &CLIContext) {
    let state = ctx.app.browser.state();
    let visible = ctx.app.browser.visible_contacts();

    match (&state.mode, &state.active_query) {
        (Mode::Searching, Some(q)) => println!("Search '{}': {} contacts", q, state.total),
        _ => println!("Address book: {} contacts", state.total),
    }
    if visible.is_empty() {
        if state.active_query.is_some() {
            println!("  No contacts found matching your search");
        } else {
            println!("  No contacts available");
        }
        return;
    }
    for contact in visible {
        println!("{}", ctx.contact_line(contact));
    }
    println!(
        "Showing {} of {}{}",
        state.contacts.len(),
        state.total,
        if state.has_more { " (type 'more' for the next page)" } else { "" }
    );
}
