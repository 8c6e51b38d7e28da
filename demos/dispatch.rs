//! Event dispatch example demonstrating esp_utils.
//!
//! This example shows:
//! - Declaring a typesafe enum and parsing it from text
//! - Wiring one producer to several consumers with a `Signal`
//! - Rejecting bad input with a `TrySignal`
//!
//! Run with `RUST_LOG=esp_utils=trace` to see the dispatch events.

use esp_utils::prelude::*;
use std::cell::{Cell, RefCell};

typesafe_enum! {
    /// Position of a rotary selector.
    pub enum Gear: u8 {
        Park,
        Reverse,
        Neutral,
        Drive,
    }
}

struct Throttle {
    changed: Signal<'static, (Gear, u16)>,
}

impl Throttle {
    fn new() -> Self {
        Self {
            changed: Signal::new(),
        }
    }

    fn set(&mut self, gear: Gear, raw: u16) {
        // 12-bit ADC reading to percent.
        let percent = map_value(clamp(raw, 0, 4095) as u32, 0, 4095, 0, 100) as u16;
        self.changed.emit((gear, percent));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut throttle = Throttle::new();
    throttle.changed += |(gear, percent): &(Gear, u16)| {
        tracing::info!(%gear, percent, "display updated");
    };
    throttle.changed += |(gear, percent): &(Gear, u16)| {
        if *gear == Gear::Reverse && *percent > 50 {
            tracing::warn!(percent, "reverse throttle limited");
        }
    };

    for input in ["Drive", "Reverse", "Overdrive"] {
        match input.parse::<Gear>() {
            Ok(gear) => throttle.set(gear, 3000),
            Err(err) => tracing::warn!(%err, "ignoring input"),
        }
    }
    throttle.set(Gear::from_repr(9), 5000);

    let accepted = Cell::new(0);
    let rejected = RefCell::new(Vec::new());
    let mut validate: TrySignal<Gear, String> = TrySignal::new();
    validate += |gear: &Gear| {
        if gear.is_known() {
            Ok(())
        } else {
            Err(format!("{gear} is not a selector position"))
        }
    };
    validate += |_: &Gear| {
        accepted.set(accepted.get() + 1);
        Ok(())
    };

    for gear in Gear::variants().chain([Gear::from_repr(42)]) {
        if let Err(err) = validate.try_emit(gear) {
            rejected.borrow_mut().push(err);
        }
    }

    tracing::info!(
        accepted = accepted.get(),
        rejected = ?rejected.borrow(),
        "validation finished"
    );
}
