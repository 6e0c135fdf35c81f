//! Cart session: one owned cart driven by line-oriented commands.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::str::FromStr;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Local, Utc};
use console::style;
use dialoguer::Confirm;
use repairzon_commerce::cart::{Cart, LineKey};
use repairzon_commerce::catalog::Catalog;
use repairzon_commerce::checkout::{CheckoutSummary, Order};
use thiserror::Error;

use super::SessionArgs;
use crate::context::Context;
use crate::output::pluralize;

const HELP: &str = "\
commands:
  add OFFERING VARIANT   add one unit (e.g. add ac-master 1-1.5)
  inc KEY                one more of a cart line (e.g. inc ac-master-1-1.5)
  dec KEY                one fewer; removes the line at quantity 1
  remove KEY             remove a line
  cart                   show the cart
  checkout               show the summary and place the order
  clear                  empty the cart
  help                   show this help
  quit                   end the session";

/// A command typed into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add { offering: String, variant: String },
    Inc(String),
    Dec(String),
    Remove(String),
    Cart,
    Checkout,
    Clear,
    Help,
    Quit,
}

/// Errors parsing a session command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for SessionCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        let one_key = |usage: &'static str| match args.as_slice() {
            [key] => Ok(key.to_string()),
            _ => Err(ParseError::Usage(usage)),
        };
        let no_args = |cmd: SessionCommand, usage: &'static str| {
            if args.is_empty() {
                Ok(cmd)
            } else {
                Err(ParseError::Usage(usage))
            }
        };

        match command.as_str() {
            "add" => match args.as_slice() {
                [offering, variant] => Ok(SessionCommand::Add {
                    offering: offering.to_string(),
                    variant: variant.to_string(),
                }),
                _ => Err(ParseError::Usage("add OFFERING VARIANT")),
            },
            "inc" | "+" => one_key("inc KEY").map(SessionCommand::Inc),
            "dec" | "-" => one_key("dec KEY").map(SessionCommand::Dec),
            "remove" | "rm" => one_key("remove KEY").map(SessionCommand::Remove),
            "cart" | "ls" => no_args(SessionCommand::Cart, "cart"),
            "checkout" => no_args(SessionCommand::Checkout, "checkout"),
            "clear" => no_args(SessionCommand::Clear, "clear"),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// What a command did, for the caller to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The cart changed.
    Changed,
    /// A line key did not resolve; the cart is unchanged.
    StaleKey(String),
    /// The catalog has no such offering or variant.
    NotInCatalog(String),
    ShowCart,
    Checkout,
    Help,
    Quit,
}

/// The cart for one session and the catalog it draws from.
pub struct Session<'a> {
    catalog: &'a Catalog,
    cart: Cart,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Apply one command to the cart.
    pub fn apply(&mut self, command: SessionCommand) -> Outcome {
        match command {
            SessionCommand::Add { offering, variant } => {
                match self.catalog.variant(&offering, &variant) {
                    Ok((o, v)) => {
                        self.cart.add(o, v);
                        Outcome::Changed
                    }
                    Err(e) => Outcome::NotInCatalog(e.to_string()),
                }
            }
            SessionCommand::Inc(text) => self.with_key(text, Cart::inc),
            SessionCommand::Dec(text) => self.with_key(text, Cart::dec),
            SessionCommand::Remove(text) => self.with_key(text, Cart::remove),
            SessionCommand::Clear => {
                self.cart.clear();
                Outcome::Changed
            }
            SessionCommand::Cart => Outcome::ShowCart,
            SessionCommand::Checkout => Outcome::Checkout,
            SessionCommand::Help => Outcome::Help,
            SessionCommand::Quit => Outcome::Quit,
        }
    }

    /// Place the order for the current cart and empty it.
    pub fn place_order(&mut self) -> Result<Order> {
        let order = CheckoutSummary::from_cart(&self.cart).place_order()?;
        self.cart.clear();
        Ok(order)
    }

    fn with_key(&mut self, text: String, op: fn(&mut Cart, &LineKey)) -> Outcome {
        match self.cart.find_key(&text) {
            Some(key) => {
                op(&mut self.cart, &key);
                Outcome::Changed
            }
            None => Outcome::StaleKey(text),
        }
    }
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let interactive = args.script.is_none() && io::stdin().is_terminal() && !ctx.output.is_json();
    let reader: Box<dyn BufRead> = match args.script {
        Some(ref path) => {
            let path = ctx.resolve_path(path);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let mode = Mode {
        interactive,
        confirm: interactive && ctx.config.checkout.confirm && !args.yes,
    };

    let mut session = Session::new(&ctx.catalog);
    tracing::info!(catalog = %ctx.catalog_source, interactive, "cart session started");

    if interactive {
        ctx.output.info("Cart session. Type 'help' for commands.");
    }
    let handled = drive(reader, ctx, &mut session, mode)?;

    tracing::info!(
        commands = handled,
        lines = session.cart().len(),
        count = session.cart().count(),
        "cart session ended"
    );
    Ok(())
}

/// How the input loop talks to the user.
#[derive(Debug, Clone, Copy, Default)]
struct Mode {
    /// Print a prompt before each line.
    interactive: bool,
    /// Ask before placing an order.
    confirm: bool,
}

/// Feed input lines to the session until `quit` or end of input.
///
/// Blank lines and `#` comments are skipped. A line that does not parse is
/// reported and skipped. Returns the number of commands applied.
fn drive(
    reader: impl BufRead,
    ctx: &Context,
    session: &mut Session<'_>,
    mode: Mode,
) -> Result<usize> {
    let mut handled = 0;
    let mut lines = reader.lines();

    loop {
        if mode.interactive {
            prompt()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read session input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        ctx.output.debug(&format!("> {}", line));
        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                ctx.output.warn(&e.to_string());
                continue;
            }
        };
        handled += 1;

        match session.apply(command) {
            Outcome::Changed => ctx.output.badge(session.cart()),
            Outcome::StaleKey(key) => {
                ctx.output
                    .warn(&format!("No cart line '{}'; cart unchanged", key));
            }
            Outcome::NotInCatalog(reason) => ctx.output.warn(&reason),
            Outcome::ShowCart => show_cart(ctx, session.cart()),
            Outcome::Checkout => checkout(ctx, session, mode.confirm)?,
            Outcome::Help => println!("{}", HELP),
            Outcome::Quit => break,
        }
    }

    Ok(handled)
}

fn prompt() -> Result<()> {
    print!("{} ", style(">").cyan().bold());
    io::stdout().flush()?;
    Ok(())
}

fn show_cart(ctx: &Context, cart: &Cart) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "count": cart.count(),
            "total": cart.total(),
        }));
        return;
    }

    ctx.output.header("Your Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }
    for item in cart.items() {
        let key = item.key.to_string();
        let price = format!("{} \u{00d7} {}", item.price.display(), item.qty);
        ctx.output.table_row(
            &[key.as_str(), item.title.as_str(), item.variant_label.as_str(), price.as_str()],
            &[24, 46, 18, 0],
        );
    }
    ctx.output.kv("Total", &cart.total().display());
}

fn checkout(ctx: &Context, session: &mut Session<'_>, confirm: bool) -> Result<()> {
    let summary = CheckoutSummary::from_cart(session.cart());

    if summary.is_empty() {
        ctx.output.warn("Your cart is empty.");
        return Ok(());
    }

    if !ctx.output.is_json() {
        ctx.output.header("Summary");
        for line in &summary.lines {
            ctx.output.kv(
                &format!("{} ({})", line.title, line.variant_label),
                &format!(
                    "{} \u{00d7} {} = {}",
                    line.price.display(),
                    line.qty,
                    line.line_total.display()
                ),
            );
        }
        ctx.output.kv("Subtotal", &summary.subtotal.display());
        ctx.output.kv("Discount", &format!("-{}", summary.discount.display()));
        ctx.output.kv("Total", &summary.total.display());
    }

    if confirm {
        let place = Confirm::new()
            .with_prompt(format!("Place order for {}?", summary.total.display()))
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if !place {
            ctx.output.info("Order not placed; your cart is unchanged.");
            return Ok(());
        }
    }

    let order = session.place_order()?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    let placed = DateTime::<Utc>::from_timestamp(order.placed_at, 0)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    ctx.output.success(&format!(
        "Order {} placed at {}: {} for {}",
        order.id,
        placed,
        pluralize(order.summary.item_count, "item"),
        order.summary.total.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::config::CliConfig;
    use crate::output::Output;
    use repairzon_commerce::money::Money;

    fn test_context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
            catalog: Catalog::demo(),
            catalog_source: "built-in demo".to_string(),
        }
    }

    fn drive_script(ctx: &Context, script: &str) -> (Cart, usize) {
        let mut session = Session::new(&ctx.catalog);
        let handled = drive(Cursor::new(script), ctx, &mut session, Mode::default()).unwrap();
        (session.cart().clone(), handled)
    }

    fn parse(line: &str) -> Result<SessionCommand, ParseError> {
        line.parse()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse("add ac-master 1-1.5"),
            Ok(SessionCommand::Add {
                offering: "ac-master".to_string(),
                variant: "1-1.5".to_string(),
            })
        );
        assert_eq!(
            parse("  DEC   ac-master-1-1.5 "),
            Ok(SessionCommand::Dec("ac-master-1-1.5".to_string()))
        );
        assert_eq!(parse("+ drill-4holes"), Ok(SessionCommand::Inc("drill-4holes".to_string())));
        assert_eq!(parse("rm drill-4holes"), Ok(SessionCommand::Remove("drill-4holes".to_string())));
        assert_eq!(parse("cart"), Ok(SessionCommand::Cart));
        assert_eq!(parse("q"), Ok(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("add ac-master"), Err(ParseError::Usage("add OFFERING VARIANT")));
        assert_eq!(parse("inc"), Err(ParseError::Usage("inc KEY")));
        assert_eq!(parse("cart now"), Err(ParseError::Usage("cart")));
        assert_eq!(
            parse("buy everything"),
            Err(ParseError::UnknownCommand("buy".to_string()))
        );
    }

    #[test]
    fn test_session_walkthrough() {
        let catalog = Catalog::demo();
        let mut session = Session::new(&catalog);

        let add_small = SessionCommand::Add {
            offering: "ac-master".to_string(),
            variant: "1-1.5".to_string(),
        };
        assert_eq!(session.apply(add_small.clone()), Outcome::Changed);
        assert_eq!(session.apply(add_small), Outcome::Changed);
        session.apply(SessionCommand::Add {
            offering: "ac-master".to_string(),
            variant: "2-3".to_string(),
        });
        assert_eq!(session.cart().total(), Money::new(3470));
        assert_eq!(session.cart().count(), 3);

        session.apply(SessionCommand::Dec("ac-master-1-1.5".to_string()));
        session.apply(SessionCommand::Dec("ac-master-1-1.5".to_string()));
        assert_eq!(session.cart().len(), 1);

        session.apply(SessionCommand::Remove("ac-master-2-3".to_string()));
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().total(), Money::zero());
    }

    #[test]
    fn test_stale_key_leaves_cart_alone() {
        let catalog = Catalog::demo();
        let mut session = Session::new(&catalog);
        session.apply(SessionCommand::Add {
            offering: "drill".to_string(),
            variant: "4holes".to_string(),
        });

        let outcome = session.apply(SessionCommand::Inc("drill-10holes".to_string()));

        assert_eq!(outcome, Outcome::StaleKey("drill-10holes".to_string()));
        assert_eq!(session.cart().count(), 1);
    }

    #[test]
    fn test_add_unknown_variant() {
        let catalog = Catalog::demo();
        let mut session = Session::new(&catalog);
        let outcome = session.apply(SessionCommand::Add {
            offering: "drill".to_string(),
            variant: "100holes".to_string(),
        });
        assert!(matches!(outcome, Outcome::NotInCatalog(_)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_place_order_empties_cart() {
        let catalog = Catalog::demo();
        let mut session = Session::new(&catalog);
        assert!(session.place_order().is_err());

        session.apply(SessionCommand::Add {
            offering: "carpet-clean".to_string(),
            variant: "carpet-small".to_string(),
        });
        let order = session.place_order().unwrap();

        assert_eq!(order.summary.total, Money::new(990));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_script_skips_comments_and_bad_lines() {
        let ctx = test_context();
        let script = "\
# two small units and one medium
add ac-master 1-1.5

add ac-master 1-1.5
buy ac-master
add ac-master
add ac-master 2-3
   # indented comment
inc ac-master-9-9
";
        let (cart, handled) = drive_script(&ctx, script);

        assert_eq!(handled, 4);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Money::new(3470));
    }

    #[test]
    fn test_script_stops_at_quit() {
        let ctx = test_context();
        let script = "add drill 4holes\nquit\nadd drill 10holes\nclear\n";
        let (cart, handled) = drive_script(&ctx, script);

        assert_eq!(handled, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].key.to_string(), "drill-4holes");
    }

    #[test]
    fn test_script_checkout_empties_cart() {
        let ctx = test_context();
        let script = "add carpet-clean carpet-small\ncheckout\nadd drill 4holes\n";
        let (cart, _) = drive_script(&ctx, script);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::new(200));
    }

    #[test]
    fn test_script_from_file() {
        let ctx = test_context();
        let path = std::env::temp_dir().join(format!("repairzon-session-{}.txt", std::process::id()));
        std::fs::write(&path, "add drill 10holes\ninc drill-10holes\n").unwrap();

        let file = File::open(&path).unwrap();
        let mut session = Session::new(&ctx.catalog);
        drive(BufReader::new(file), &ctx, &mut session, Mode::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(session.cart().count(), 2);
        assert_eq!(session.cart().total(), Money::new(900));
    }
}
