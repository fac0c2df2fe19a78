//! Interactive swap session walkthrough.
//!
//! Demonstrates the full simulator lifecycle: quoting, executing, toggling
//! direction, reading the price history, and resetting.
//!
//! # Run
//!
//! ```bash
//! cargo run --example swap_session
//! ```

use swapsim::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Constant Product Swap Simulator (x · y = k) ===\n");

    // ── 1. Start a session with the stock configuration ─────────────────
    let mut session = SwapSession::new();
    session.labels_mut().set_name_a("TOKEN");
    session.labels_mut().set_name_b("USDT");

    println!("Pool:   {}", session.pool());
    println!("Wallet: {}", session.wallet());

    // ── 2. Quote a trade as the user types ──────────────────────────────
    for input in ["1", "10", "100"] {
        let quote = session.set_input(input);
        println!(
            "\nInput {input:>4} {} -> quote {}  (severity: {:?})",
            session.labels().input_name(session.direction()),
            quote,
            quote.impact_severity()
        );
    }

    // ── 3. Execute the pending 100-token swap ───────────────────────────
    let receipt = session.execute_pending()?;
    println!("\n--- Executed: {receipt} ---");
    println!("Pool:   {}", session.pool());
    println!("Wallet: {}", session.wallet());

    // ── 4. Current prices and history ───────────────────────────────────
    let prices = session.current_prices()?;
    println!("\nPrices now: {prices}");
    println!("Swaps executed: {}", session.history().swap_count());

    // ── 5. Toggle direction and swap the proceeds back ──────────────────
    session.toggle_direction();
    let back = format!("{}", receipt.amount_out().get());
    session.set_input(&back);
    let round_trip = session.execute_pending()?;
    println!(
        "\nRound trip returned {} of the original 100.000000 (the fee-less curve is value-neutral)",
        round_trip.amount_out()
    );

    // ── 6. Show the recent history, newest last ─────────────────────────
    println!("\nRecent price history (1 A in B terms):");
    for (i, snapshot) in session.history().last_n(5).iter().enumerate() {
        println!("  #{i}: {snapshot}");
    }

    // ── 7. Reset: state goes back, labels stay ──────────────────────────
    session.reset()?;
    println!("\nAfter reset:");
    println!("Pool:   {}", session.pool());
    println!("Labels: {}", session.labels());

    Ok(())
}
