//! End-to-end game session scenarios through the public API.

use chess_rules::board::CastlingSide;
use chess_rules::{
    validate_fen, Color, DrawReason, GameSession, IllegalMoveReason, Move, ParseError, Position, Square,
    PIECE_GLYPHS, STARTING_FEN,
};

fn mv(uci: &str) -> Move {
    uci.parse().unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut GameSession, moves: &[&str]) {
    for uci in moves {
        game.apply_move(mv(uci))
            .unwrap_or_else(|err| panic!("{uci} rejected: {err}"));
    }
}

#[test]
fn starting_position_has_twenty_moves() {
    let game = GameSession::new();
    assert_eq!(game.position().legal_moves().len(), 20);
    assert_eq!(game.fen(), STARTING_FEN);
}

#[test]
fn black_replies_after_king_pawn() {
    let mut game = GameSession::new();
    play(&mut game, &["e2e4"]);

    let replies = game.position().legal_moves();
    assert!(replies.contains(mv("e7e5")));
    assert!(replies.contains(mv("d7d5")));
    assert!(replies.contains(mv("e7e6")));
    assert!(!replies.contains(mv("e7e4")));
    assert_eq!(game.legal_moves_from(sq("e7")).len(), 2);
}

#[test]
fn fools_mate() {
    let mut game = GameSession::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    let status = game.status();
    assert!(status.checkmate());
    assert!(status.in_check());
    assert_eq!(status.winner(), Some(Color::Black));
    assert_eq!(game.moves()[3].san(), "Qh4#");
    assert_eq!(
        game.apply_move(mv("a2a3")).unwrap_err().reason,
        IllegalMoveReason::GameOver
    );
}

#[test]
fn seven_rank_position_is_rejected() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert!(matches!(
        GameSession::from_fen(fen),
        Err(ParseError::WrongRankCount { found: 7 })
    ));
    assert!(validate_fen(fen).is_err());

    let mut game = GameSession::new();
    assert!(game.import_fen(fen).is_err());
    assert_eq!(game.fen(), STARTING_FEN);
}

#[test]
fn undo_restores_start_and_redo_restores_move() {
    let mut game = GameSession::new();
    play(&mut game, &["e2e4"]);
    let after = game.fen();

    assert!(game.undo());
    assert_eq!(game.fen(), STARTING_FEN);
    assert!(game.redo());
    assert_eq!(game.fen(), after);
}

#[test]
fn castle_through_attacked_square_is_refused() {
    // Black bishop on a6 covers f1; rights intact and squares empty
    let fen = "rn1qkbnr/pppppppp/b7/8/8/4PN2/PPPP1PPP/RNBQK2R w KQkq - 0 1";
    let mut game = GameSession::from_fen(fen).unwrap();

    let err = game.apply_move(mv("e1g1")).unwrap_err();
    assert_eq!(err.reason, IllegalMoveReason::NotLegal);
    assert_eq!(err.mv, mv("e1g1"));
    assert_eq!(game.fen(), fen);
    assert!(game
        .position()
        .castling_rights()
        .has(Color::White, CastlingSide::KingSide));
}

#[test]
fn rewind_replays_from_the_initial_position() {
    let mut game = GameSession::new();
    play(&mut game, &["d2d4", "d7d5", "c2c4", "e7e6"]);
    let snapshots: Vec<String> = (0..=4)
        .map(|ply| {
            assert!(game.rewind_to(ply));
            game.fen()
        })
        .collect();

    assert_eq!(snapshots[0], STARTING_FEN);
    assert_eq!(
        snapshots[2],
        "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq d6 0 2"
    );
    assert_eq!(game.ply(), 4);
    assert!(!game.rewind_to(5));
}

#[test]
fn import_then_export() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut game = GameSession::new();
    game.import_fen(fen).unwrap();
    assert_eq!(game.fen(), fen);
    assert_eq!(game.initial_fen(), fen);
    assert_eq!(game.position(), &Position::from_fen(fen).unwrap());

    play(&mut game, &["f1b5"]);
    assert_eq!(
        game.fen(),
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"
    );
    assert_eq!(game.move_list()[0].to_string(), "3. Bb5");
}

#[test]
fn repetition_ends_the_game() {
    let mut game = GameSession::new();
    for _ in 0..2 {
        play(&mut game, &["b1c3", "b8c6", "c3b1", "c6b8"]);
    }
    assert_eq!(
        game.status().draw_reason(),
        Some(DrawReason::ThreefoldRepetition)
    );
    assert!(game.status().is_terminal());
}

#[test]
fn glyph_table_covers_every_piece() {
    assert_eq!(PIECE_GLYPHS.len(), 12);
    for (piece, glyph) in PIECE_GLYPHS {
        assert_eq!(piece.glyph(), glyph);
    }
}
