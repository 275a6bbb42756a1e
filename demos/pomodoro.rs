//! Pomodoro State Machine
//!
//! This example demonstrates event-triggered dispatch with per-rule callbacks.
//!
//! Key concepts:
//! - Table-driven transitions keyed on (state, event)
//! - Callbacks receiving the executed transition
//! - Silent no-op for events with no rule in the current state
//! - Previous-state tracking via last_state
//!
//! Run with: cargo run --example pomodoro

use statemap::core::{Event, State, StateMachine};
use statemap::{event_enum, state_enum};
use tracing::info;

state_enum! {
    enum Pomodoro {
        Idle,
        Work,
        ShortBreak,
        LongBreak,
    }
}

event_enum! {
    enum Clock {
        StartWork,
        StartShortBreak,
        StartLongBreak,
        BackToIdle,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Pomodoro State Machine ===\n");

    let machine = StateMachine::new(Pomodoro::Idle);

    machine.listen(Clock::StartWork, Pomodoro::Idle, Pomodoro::Work, |t| {
        info!("{} fired {}, now {}", t.from.name(), t.event.name(), t.to.name());
    });
    machine.listen(Clock::StartShortBreak, Pomodoro::Work, Pomodoro::ShortBreak, |t| {
        info!("{} fired {}, now {}", t.from.name(), t.event.name(), t.to.name());
    });
    machine.listen(Clock::StartLongBreak, Pomodoro::Work, Pomodoro::LongBreak, |t| {
        info!("{} fired {}, now {}", t.from.name(), t.event.name(), t.to.name());
    });
    machine.listen_all(
        Clock::BackToIdle,
        [Pomodoro::Work, Pomodoro::ShortBreak, Pomodoro::LongBreak],
        Pomodoro::Idle,
        |t| info!("{} fired {}, back to {}", t.from.name(), t.event.name(), t.to.name()),
    );

    println!("Initial state: {}\n", machine.current_state().name());

    machine.trigger(Clock::StartWork);
    machine.trigger(Clock::StartShortBreak);

    // No rule for ShortBreak + StartWork: silently ignored.
    let fired = machine.trigger(Clock::StartWork);
    println!(
        "StartWork during {}: fired = {}",
        machine.current_state().name(),
        fired
    );

    machine.trigger(Clock::BackToIdle);

    println!("\nFinal state: {}", machine.current_state().name());
    match machine.last_state() {
        Some(state) => println!("Came from: {}", state.name()),
        None => println!("No transition has happened yet"),
    }

    println!("\n=== Example Complete ===");
}
