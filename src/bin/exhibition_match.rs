//! Headless exhibition driver.
//!
//! Plays both sides of a game by choosing uniformly at random among the
//! safe movements the engine reports, until checkmate, a side with no
//! moves, or the ply cap. This is the command-line stand-in for the
//! interactive controller: it exercises the full public contract (turn
//! query, legal-move enumeration, move commitment, check/checkmate status)
//! and doubles as a long-running restore-invariance smoke test, since every
//! ply probes dozens of hypothetical moves against the live board.

use std::path::Path;

use rand::prelude::IndexedRandom;

use parlor_chess::check_inspection::inspect_check;
use parlor_chess::chess_errors::ChessErrors;
use parlor_chess::game_log::GameLog;
use parlor_chess::move_safety::{has_secure_moves, is_checkmate, safe_movements};
use parlor_chess::render_board::render_board;
use parlor_chess::team_setup::standard_board;

const PLY_CAP: u32 = 300;

fn main() -> Result<(), ChessErrors> {
    let mut board = standard_board()?;
    let mut log = GameLog::new();
    let mut rng = rand::rng();

    log.log_board(&board);

    loop {
        if board.turn_counter() > PLY_CAP {
            log.log(&format!("Ply cap of {} reached, calling it a day.", PLY_CAP));
            break;
        }

        let team = board.turn_team();
        let movable = has_secure_moves(&mut board, team)?;
        let Some(id) = movable.choose(&mut rng).copied() else {
            if inspect_check(&board)?.in_check(team) {
                log.log(&format!("{:?} is checkmated.", team));
            } else {
                log.log(&format!("{:?} has no legal moves left.", team));
            }
            break;
        };

        let destinations = safe_movements(&mut board, id)?;
        let destination = *destinations
            .choose(&mut rng)
            .ok_or(ChessErrors::FailedTest)?;

        let mover = *board.view_piece(id)?;
        let captured = board
            .occupant(destination)
            .and_then(|victim| board.view_piece(victim).ok().copied());

        let turn = board.turn_counter();
        board.confirm_movement(id, destination)?;
        log.log_movement(turn, &mover, mover.cell, destination, captured.as_ref());

        if let Some(checked) = inspect_check(&board)?.checked_team(board.turn_team()) {
            if is_checkmate(&mut board)? {
                log.log(&format!(
                    "Checkmate. {:?} wins.",
                    checked.opposite()
                ));
                break;
            }
            log.log(&format!("{:?} is in check.", checked));
        }
    }

    log.log_board(&board);
    println!("{}", log.contents());
    println!("{}", render_board(&board));

    if let Some(path) = std::env::args().nth(1) {
        if log.save_to_file(Path::new(&path)).is_err() {
            eprintln!("Could not write the game log to {}", path);
        }
    }

    Ok(())
}
