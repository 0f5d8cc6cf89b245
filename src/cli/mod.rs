pub mod context;
pub mod directory_commands;
pub mod favorite_commands;
pub mod session_commands;

use crate::app::AppContext;
use crate::config::Config;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(config: Config) {
    println!("Address Book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut app = match AppContext::open(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error opening local storage: {}", e);
            return;
        }
    };
    app.bootstrap();

    let mut ctx = CLIContext::new(app);
    if let Some(e) = ctx.app.favorites.error() {
        println!("Warning: favorites could not be loaded ({}).", e);
        ctx.app.favorites.clear_error();
    }

    repl_loop(&mut ctx);
}

/// Keeps asking for credentials until a session exists. Returns false on EOF.
fn ensure_signed_in(ctx: &mut CLIContext) -> bool {
    while !ctx.app.session.is_authenticated() {
        println!("Sign in to your account");
        if !session_commands::login(ctx, "") {
            return false;
        }
    }
    true
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        if !ensure_signed_in(ctx) {
            break;
        }

        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Directory
            "list" | "ls" => directory_commands::list(ctx),
            "search" | "find" => directory_commands::search(ctx, args),
            "clear" => directory_commands::clear(ctx),
            "more" | "next" => directory_commands::more(ctx),
            "refresh" => directory_commands::refresh(ctx),
            "show" | "view" => directory_commands::show(ctx, args),
            "gender" => directory_commands::gender(ctx, args),

            // Favorites
            "favorites" | "favs" => favorite_commands::list(ctx),
            "fav" => favorite_commands::add(ctx, args),
            "unfav" => favorite_commands::remove(ctx, args),
            "toggle" => favorite_commands::toggle(ctx, args),

            // Session
            "me" => session_commands::me(ctx),
            "profile" => session_commands::profile(ctx),
            "logout" => session_commands::logout(ctx),
            "login" => {
                if !session_commands::login(ctx, args) {
                    break;
                }
            }

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Directory:
    list                    Show the first page of contacts
    search <text>           Search contacts by name
    clear                   Leave search and list everyone again
    more                    Load the next page
    refresh                 Reload from the first page
    show <id>               Show contact details
    gender <male|female>    Only show one gender ('gender all' to reset)

  Favorites:
    favorites               List favorite contacts
    fav <id>                Add a contact to favorites
    unfav <id>              Remove a contact from favorites
    toggle <id>             Flip a contact's favorite status

  Account:
    me                      Show the signed-in account
    profile                 Re-check the account with the server
    login [user] [pass]     Sign in (again)
    logout                  Sign out and forget the session

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Contacts marked with * are favorites
  - Search waits for a short pause before querying the server"#);
}
