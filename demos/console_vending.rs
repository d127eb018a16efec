//! Console Vending Machine
//!
//! This example wires the controller to a console renderer through the
//! event pump, with a scripted "user" raising button presses from a
//! separate thread — the same shape a hardware deployment has, with
//! interrupts replaced by a thread and LEDs replaced by text.
//!
//! Key concepts:
//! - FIFO event delivery across threads via the pump
//! - A custom Renderer implementation
//! - The run loop ending when every sender is dropped
//!
//! Run with: cargo run --example console_vending

use std::thread;
use std::time::Duration;

use vendo::catalog::Catalog;
use vendo::controller::Controller;
use vendo::core::{Event, OutputRequest};
use vendo::pump::{EventPump, Renderer};

/// Renders output requests as console text, the way the reference
/// machine printed to its serial console.
struct ConsoleRenderer {
    prices: Vec<u32>,
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, request: &OutputRequest) {
        match request {
            OutputRequest::Welcome => {
                println!("Welcome! Insert coins or browse the available products.");
            }
            OutputRequest::ShowSelection { index: 0, credit } => {
                println!("Return Credit selected (current credit: {credit})");
            }
            OutputRequest::ShowSelection { index, credit } => {
                let price = self.prices.get(*index).copied().unwrap_or(0);
                println!("Product {index} costs {price} (current credit: {credit})");
            }
            OutputRequest::DispenseProduct { index } => {
                println!("Product {index} dispensed!");
            }
            OutputRequest::ReturnCredit { amount } => {
                println!("Credit {amount} returned!");
            }
        }
    }
}

fn main() {
    let catalog = Catalog::standard();
    let prices = catalog.products().iter().map(|p| p.price).collect();

    let controller = Controller::new(catalog);
    let (pump, buttons) = EventPump::new(controller, ConsoleRenderer { prices });

    // Scripted user: pay 3 units, browse to product 2 (price 2), buy it.
    // Then browse around once and cash out the remaining nothing.
    let user = thread::spawn(move || {
        let presses = [
            Event::Coin2,
            Event::Coin1,
            Event::Browse,
            Event::Browse,
            Event::Enter,
            Event::Browse,
            Event::Enter,
        ];
        for press in presses {
            buttons.raise(press).expect("pump stopped early");
            thread::sleep(Duration::from_millis(50));
        }
    });

    let _renderer = pump.run();
    user.join().expect("user thread panicked");
}
