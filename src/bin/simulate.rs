//! Headless scripted-match runner. Drives a full session from start
//! trigger to terminal state and prints a JSON summary to stdout.
//!
//! Usage: simulate [idle|rush] [seed]

use duel_sim::{button, default_config, FrameInput, Phase, Session, Winner, NULL_INPUT};

#[derive(serde::Serialize)]
struct Summary {
    mode: String,
    seed: u32,
    ticks: u32,
    phase: Phase,
    winner: Option<Winner>,
    player_health: i32,
    opponent_health: i32,
    remaining_secs: u32,
}

fn script(mode: &str, tick: u32) -> FrameInput {
    match mode {
        "idle" => NULL_INPUT,
        // walk right, re-pressing attack in bursts so the edge trigger
        // keeps firing
        "rush" => {
            let mut buttons = button::RIGHT;
            if tick % 10 < 5 {
                buttons |= button::ATTACK;
            }
            FrameInput { buttons }
        }
        _ => {
            eprintln!("unknown mode {mode:?}; expected idle or rush");
            std::process::exit(1);
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "idle".to_string());
    let seed = args
        .next()
        .map(|s| s.parse().unwrap_or(42))
        .unwrap_or(42);

    let config = default_config(seed);
    // countdown, banner, full round, plus slack
    let budget = (config.countdown_from + 1 + config.round_secs + 5) * config.tick_rate;

    let mut session = Session::new(config);
    session.request_start();

    let mut tick = 0;
    while tick < budget {
        if !session.advance_frame(script(&mode, tick)) {
            break;
        }
        tick += 1;
    }

    let summary = Summary {
        mode,
        seed,
        ticks: session.state.tick,
        phase: session.state.round.phase,
        winner: session.winner(),
        player_health: session.player_health(),
        opponent_health: session.opponent_health(),
        remaining_secs: session.remaining_secs(),
    };
    eprintln!(
        "finished after {} ticks: {:?}",
        summary.ticks, summary.winner
    );
    println!("{}", serde_json::to_string_pretty(&summary).unwrap());
}
