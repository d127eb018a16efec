//! Purchase Flow
//!
//! This example walks the controller through a complete purchase by
//! hand, printing every output request it emits along the way.
//!
//! Key concepts:
//! - Driving the controller directly, one event at a time
//! - Inspecting emitted output requests as plain values
//! - The insufficient-credit re-display path
//!
//! Run with: cargo run --example purchase_flow

use vendo::catalog::Catalog;
use vendo::controller::Controller;
use vendo::core::{Event, OutputRequest};

fn feed(controller: &mut Controller, event: Event) {
    println!("-> {}", event.name());
    for request in controller.handle_event(event) {
        describe(&request);
    }
}

fn describe(request: &OutputRequest) {
    match request {
        OutputRequest::Welcome => println!("   display: welcome"),
        OutputRequest::ShowSelection { index, credit } => {
            println!("   display: product {index}, credit {credit}")
        }
        OutputRequest::DispenseProduct { index } => println!("   dispense: product {index}"),
        OutputRequest::ReturnCredit { amount } => println!("   pay out: {amount} units"),
    }
}

fn main() {
    println!("=== Purchase Flow ===\n");

    let mut controller = Controller::new(Catalog::standard());
    for request in controller.start() {
        describe(&request);
    }

    // Try to buy product 3 (price 3) with only 2 units of credit.
    feed(&mut controller, Event::Coin2);
    feed(&mut controller, Event::Browse);
    feed(&mut controller, Event::Browse);
    feed(&mut controller, Event::Browse);
    feed(&mut controller, Event::Enter); // insufficient: re-displays

    // Top up and confirm again.
    feed(&mut controller, Event::Coin1);
    feed(&mut controller, Event::Enter); // dispenses product 3

    println!("\nFinal state: {:?}", controller.state());
    println!("Phase path:  {:?}", controller.log().path());

    println!("\n=== Example Complete ===");
}
