//! Example: step through the LIS trace of a preset.
//!
//! Run with:
//! `cargo run --example walkthrough`

use lis_trace::{Session, StepKind};

fn main() {
    let mut session = Session::new();
    session
        .load_example("Complex Pattern")
        .expect("built-in preset");

    println!("Sequence: {:?}", session.sequence());
    loop {
        let step = session.current();
        match step.kind() {
            StepKind::Init => println!("[{}] {}", step.index, step.description),
            StepKind::Improve => println!(
                "[{}] {}  -> lengths {:?}",
                step.index,
                step.description,
                step.lengths().unwrap_or(&[])
            ),
            StepKind::Final => println!(
                "[{}] {}: {:?}",
                step.index,
                step.description,
                step.result().unwrap_or(&[])
            ),
        }
        if !session.advance() {
            break;
        }
    }

    // Going back past the first step is a no-op.
    session.rewind();
    session.retreat();
    println!("Back at step {}", session.cursor().position());
    println!("LIS: {:?} (length {})", session.lis(), session.lis().len());
}
