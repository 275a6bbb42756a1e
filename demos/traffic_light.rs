//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine built with the
//! fluent builder.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - One event dispatching differently depending on the current state
//! - Fluent construction via StateMachineBuilder
//!
//! Run with: cargo run --example traffic_light

use statemap::builder::StateMachineBuilder;
use statemap::core::State;
use statemap::{event_enum, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

event_enum! {
    enum Signal {
        Advance,
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Traffic Light State Machine ===\n");

    // One event, three rules: the table picks the destination from the
    // current state.
    let machine = StateMachineBuilder::new()
        .initial(TrafficLight::Red)
        .rule(Signal::Advance, TrafficLight::Red, TrafficLight::Green, |_| {
            println!("Go!")
        })
        .rule(
            Signal::Advance,
            TrafficLight::Green,
            TrafficLight::Yellow,
            |_| println!("Caution"),
        )
        .rule(
            Signal::Advance,
            TrafficLight::Yellow,
            TrafficLight::Red,
            |_| println!("Stop"),
        )
        .build()
        .unwrap();

    println!("Initial state: {}\n", machine.current_state().name());

    for _ in 0..4 {
        machine.trigger(Signal::Advance);
        println!("  -> {}", machine.current_state().name());
    }

    println!("\nThe sequence repeats: Red -> Green -> Yellow -> Red -> ...");
    println!("\n=== Example Complete ===");
}
