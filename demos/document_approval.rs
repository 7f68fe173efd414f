//! Document Approval Workflow
//!
//! Drives a document through INCOMPLETE -> PENDING -> COMPLETE -> ARCHIVED
//! with guards on the form contents and actions that keep an audit trail.
//!
//! Run with: RUST_LOG=debug cargo run --example document_approval

use gated_fsm::core::State;
use gated_fsm::{event_enum, state_enum, StateMachineBuilder};

state_enum! {
    enum DocState {
        Incomplete,
        Pending,
        Complete,
        Archived,
    }
    final: [Archived]
}

event_enum! {
    enum DocEvent {
        Submit,
        Approve,
        Reject,
        Archive,
    }
}

#[derive(Default)]
struct Document {
    title: Option<String>,
    body: Option<String>,
    approved: bool,
    audit: Vec<String>,
}

fn init_log() {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() {
    init_log();

    let mut doc = Document::default();
    let mut builder = StateMachineBuilder::new(DocState::Incomplete, &mut doc);

    builder
        .external_transition()
        .from(DocState::Incomplete)
        .to(DocState::Pending)
        .on(DocEvent::Submit)
        .when(|d: &Document| d.title.is_some() && d.body.is_some())
        .perform(|d: &mut Document| d.audit.push("submitted for review".to_string()))
        .build_transition()
        .external_transition()
        .from(DocState::Pending)
        .to(DocState::Complete)
        .on(DocEvent::Approve)
        .when(|d: &Document| d.approved)
        .perform(|d: &mut Document| d.audit.push("approved".to_string()))
        .build_transition()
        .external_transition()
        .from(DocState::Pending)
        .to(DocState::Incomplete)
        .on(DocEvent::Reject)
        .perform(|d: &mut Document| {
            d.approved = false;
            d.audit.push("rejected".to_string());
        })
        .build_transition()
        .external_transition()
        .from(DocState::Complete)
        .to(DocState::Archived)
        .on(DocEvent::Archive)
        .perform(|d: &mut Document| d.audit.push("archived".to_string()))
        .build_transition();

    let mut machine = builder.build();

    println!("=== Document Approval Workflow ===\n");

    println!("Submit empty form: {}", machine.fire(DocEvent::Submit));

    machine.context_mut().title = Some("Quarterly report".to_string());
    machine.context_mut().body = Some("Revenue grew.".to_string());
    println!("Submit filled form: {}", machine.fire(DocEvent::Submit));

    println!("Approve unapproved: {}", machine.fire(DocEvent::Approve));
    println!("Reject: {}", machine.fire(DocEvent::Reject));

    machine.fire(DocEvent::Submit);
    machine.context_mut().approved = true;
    println!("Approve approved: {}", machine.fire(DocEvent::Approve));
    println!("Archive: {}", machine.fire(DocEvent::Archive));

    println!(
        "\nFinal state: {} (final: {})",
        machine.current_state().name(),
        machine.is_final()
    );

    let path: Vec<&str> = machine
        .history()
        .get_path()
        .into_iter()
        .map(|s| s.name())
        .collect();
    println!("Path: {}", path.join(" -> "));

    match machine.checkpoint().to_json() {
        Ok(json) => println!("Checkpoint: {} bytes of JSON", json.len()),
        Err(e) => eprintln!("Checkpoint failed: {e}"),
    }

    println!("\nAudit trail:");
    for entry in &machine.context().audit {
        println!("  - {entry}");
    }
}
