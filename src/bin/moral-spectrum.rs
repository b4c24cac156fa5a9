//! Run a roster and print every story plus the population gradient
//!
//! Usage: `moral-spectrum [ROSTER.json]`. Without an argument a built-in
//! demonstration roster is used.

use moral_spectrum_core::simulate_from_json;
use std::process::ExitCode;
use tracing::{error, info};

const DEMO_ROSTER: &str = r#"{
    "steps": 15,
    "people": [
        {
            "id": "adam",
            "name": "Adam",
            "belief": "believer",
            "behaviour": "repentant",
            "moral_score": 80,
            "derivatives": [
                { "name": "Habil", "belief": "believer", "behaviour": "devout", "moral_score": 85 },
                { "name": "Qabil", "belief": "wrongdoer", "behaviour": "jealous", "moral_score": 25 }
            ]
        },
        {
            "id": "hawa",
            "name": "Hawa",
            "belief": "believer",
            "behaviour": "patient",
            "moral_score": 75,
            "derivatives": [{}]
        },
        {
            "id": "wanderer",
            "name": "Wanderer",
            "behaviour": "undecided"
        },
        {
            "id": "tyrant",
            "name": "Tyrant",
            "belief": "wrongdoer",
            "behaviour": "oppressive",
            "moral_score": 15
        }
    ]
}"#;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let roster = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => {
                info!(%path, "loaded roster");
                json
            }
            Err(e) => {
                error!(%path, "failed to read roster: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DEMO_ROSTER.to_string(),
    };

    match simulate_from_json(&roster) {
        Ok(result) => {
            print!("{}", result.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
