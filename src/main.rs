//! UCI entry point: reads commands from stdin and drives the engine
//! controller. All output goes through the serialized printer.

use std::io::{self, BufRead};
use std::time::Instant;

use ember::engine::EngineController;
use ember::uci::command::{parse_go_params, parse_uci_command, UciCommand};
use ember::uci::{build_search_params, print, try_parse_position_command};

fn main() {
    let stdin = io::stdin();
    let mut engine = EngineController::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(command) = parse_uci_command(&line) else {
            continue;
        };

        match command {
            UciCommand::Uci => print::identify(),
            UciCommand::IsReady => print::ready(),
            UciCommand::UciNewGame => engine.new_game(),
            UciCommand::Position(parts) => {
                engine.stop_search();
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                if let Err(e) = try_parse_position_command(engine.board_mut(), &parts) {
                    print::info_string(&e.to_string());
                }
            }
            UciCommand::Go(parts) => {
                engine.stop_search();
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let go = parse_go_params(&parts);
                let restricted = !go.search_moves.is_empty();
                let params = build_search_params(&go);
                engine.start_search(params, move |result| {
                    if restricted && result.best_move.is_none() {
                        print::info_string("no matching searchmoves");
                    }
                    print::bestmove(&result);
                });
            }
            UciCommand::Perft(depth) => {
                engine.stop_search();
                let started = Instant::now();
                let divide = engine.board_mut().perft_divide(depth);
                print::perft_report(depth, &divide, started.elapsed());
            }
            UciCommand::Stop => engine.signal_stop(),
            UciCommand::PonderHit | UciCommand::SetOption(_) | UciCommand::Unknown(_) => {}
            UciCommand::Quit => break,
        }
    }

    engine.stop_search();
}
