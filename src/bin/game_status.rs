use std::env;
use std::process;

use chess_rules::{GameSession, Move};

fn main() {
    let mut args = env::args().skip(1).peekable();
    if args.peek().is_none() {
        eprintln!("usage: game_status [--fen <FEN>] <move1> <move2> ...");
        return;
    }

    let mut game = GameSession::new();
    if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        let Some(fen) = args.next() else {
            eprintln!("--fen needs a position");
            process::exit(2);
        };
        if let Err(err) = game.import_fen(&fen) {
            eprintln!("bad position: {err}");
            process::exit(2);
        }
    }

    for text in args {
        let mv = match text.parse::<Move>() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{text}: {err}");
                process::exit(1);
            }
        };
        if let Err(err) = game.apply_move(mv) {
            eprintln!("{text}: {err}");
            process::exit(1);
        }
    }

    let position = game.position();
    let legal_moves = if game.status().is_terminal() {
        Vec::new()
    } else {
        position.legal_moves().into_iter().collect()
    };
    let status = game.status();
    println!("fen: {}", game.fen());
    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", status.checkmate());
    println!("stalemate: {}", status.stalemate());
    println!("status: {status}");
    for entry in game.move_list() {
        println!("{entry}");
    }
    for mv in &legal_moves {
        println!("{mv}");
    }
}
