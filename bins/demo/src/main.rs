//! Scripted walkthrough of a day at the Marquee box office.
//!
//! Credits two customers, then drives the full ticket lifecycle past
//! them: booking with change returned, a blocked double booking, a
//! cancellation with the deposit released, a check-in that captures
//! the deposit as revenue, and the rejections every gate produces.
//!
//! Usage: cargo run --bin marquee

use anyhow::Result;
use marquee_core::booking::{BookingError, MIN_DEPOSIT, TICKET_PRICE};
use marquee_core::boxoffice::BoxOffice;
use marquee_shared::{CustomerId, Money};
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ALICE: &str = "00000000-0000-0000-0000-00000000000a";
const BOB: &str = "00000000-0000-0000-0000-00000000000b";
const CAROL: &str = "00000000-0000-0000-0000-00000000000c";

/// Opening balance credited to each funded customer.
const STARTING_CREDIT: Money = Money::new(dec!(200000000000000000));

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=debug,marquee_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let office = BoxOffice::new();
    let alice: CustomerId = ALICE.parse()?;
    let bob: CustomerId = BOB.parse()?;
    let carol: CustomerId = CAROL.parse()?;

    info!(price = %TICKET_PRICE, minimum = %MIN_DEPOSIT, "Box office open");

    println!("Funding customers...");
    office.credit(alice, STARTING_CREDIT)?;
    office.credit(bob, STARTING_CREDIT)?;
    println!("  alice and bob start with {STARTING_CREDIT} each");

    println!("Alice books spiderman4 with the minimum payment...");
    let receipt = office.book_ticket(alice, "spiderman4", 34, MIN_DEPOSIT)?;
    println!(
        "  kept {} in escrow, returned {} in change",
        receipt.amount_kept, receipt.refunded
    );

    println!("Alice tries to book a second ticket...");
    show_rejection(office.book_ticket(alice, "spiderman5", 34, MIN_DEPOSIT));

    println!("Alice checks in...");
    office.check_in(alice)?;
    println!("  deposit captured as revenue, ticket used");

    println!("Alice tries to cancel the used ticket...");
    show_rejection(office.cancel_ticket(alice));

    println!("Bob books spiderman5, overpaying...");
    let receipt = office.book_ticket(bob, "spiderman5", 27, Money::new(dec!(150000000000000000)))?;
    println!(
        "  kept {} in escrow, returned {} in change",
        receipt.amount_kept, receipt.refunded
    );

    println!("Bob changes his mind and cancels...");
    let refunded = office.cancel_ticket(bob)?;
    println!("  deposit of {refunded} released back to his balance");

    println!("Bob books spiderman4 instead...");
    office.book_ticket(bob, "spiderman4", 27, MIN_DEPOSIT)?;
    println!("  booked, deposit held until he shows up");

    println!("Carol runs into every gate...");
    show_rejection(office.book_ticket(carol, "spiderman4", 16, MIN_DEPOSIT));
    show_rejection(office.book_ticket(carol, "", 30, MIN_DEPOSIT));
    show_rejection(office.book_ticket(carol, "spiderman4", 30, Money::new(dec!(10000000))));
    show_rejection(office.book_ticket(carol, "spiderman4", 30, MIN_DEPOSIT));

    println!("Closing out the day:");
    println!("  alice balance   {}", office.balance_of(alice));
    println!("  bob balance     {}", office.balance_of(bob));
    println!("  escrow held     {}", office.escrow_total());
    println!("  revenue taken   {}", office.revenue_total());
    println!("  total custody   {}", office.custody_total());

    let journal = serde_json::to_string_pretty(&office.events())?;
    println!("Journal:\n{journal}");

    info!(
        escrow = %office.escrow_total(),
        revenue = %office.revenue_total(),
        "Box office closed"
    );

    Ok(())
}

/// Prints the rejection a gated operation produced.
fn show_rejection<T>(result: Result<T, BookingError>) {
    match result {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected: {err} [{}]", err.error_code()),
    }
}
