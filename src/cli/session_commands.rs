use crate::cli::context::CLIContext;
use crate::error::ErrorKind;

/// Interactive login. Returns false on EOF.
pub fn login(ctx: &mut CLIContext, args: &str) -> bool {
    let mut parts = args.split_whitespace();
    let username = match parts.next() {
        Some(u) => u.to_string(),
        None => match ctx.prompt("Username: ") {
            Some(u) => u,
            None => return false,
        },
    };
    let password = match parts.next() {
        Some(p) => p.to_string(),
        None => match ctx.prompt("Password: ") {
            Some(p) => p,
            None => return false,
        },
    };

    let app = &mut ctx.app;
    let result = app
        .session
        .login(&app.api, &username, &password)
        .map(|session| session.user.as_ref().map(|u| u.display_name()).unwrap_or_default());
    match result {
        Ok(name) => println!("Welcome back, {}!", name),
        Err(e) if e.kind() == ErrorKind::Validation => {
            println!("Please enter both username and password");
        }
        Err(e) => ctx.print_error(&e),
    }
    true
}

pub fn logout(ctx: &mut CLIContext) {
    ctx.app.logout();
    println!("Signed out.");
}

pub fn me(ctx: &CLIContext) {
    let session = ctx.app.session.session();
    match &session.user {
        Some(user) => {
            println!();
            println!("{}", user.display_name());
            println!("@{}", user.username);
            if !user.email.is_empty() {
                println!("Email: {}", user.email);
            }
            if !user.gender.is_empty() {
                println!("Gender: {}", user.gender);
            }
            println!("User ID: {}", user.id);
            println!("Favorites: {}", ctx.app.favorites.favorites().len());
            println!();
        }
        None => println!("Not signed in."),
    }
}

/// Re-validates the session against the service.
pub fn profile(ctx: &mut CLIContext) {
    let app = &mut ctx.app;
    let result = app.session.fetch_profile(&app.api).map(|_| ());
    match result {
        Ok(_) => me(ctx),
        Err(e) => {
            ctx.print_error(&e);
            println!("Your session has ended. Please sign in again.");
        }
    }
}
