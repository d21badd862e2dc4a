//! Whole-game scenarios played through the public API.

use dojo_rules::{
    Color, ColoredPiece, FenError, Game, GameRecord, GameResult, GameState, MoveError, MoveKind,
    Piece, Square,
};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn play(game: Game, moves: &[&str]) -> Game {
    moves
        .iter()
        .fold(game, |g, m| g.try_move_uci(m).unwrap_or_else(|e| panic!("{m}: {e}")))
}

#[test]
fn twenty_moves_each_side_at_start() {
    let game = Game::new();
    assert_eq!(game.legal_moves().len(), 20);
    let game = game.try_move_uci("g1f3").unwrap();
    assert_eq!(game.legal_moves().len(), 20);
}

#[test]
fn en_passant_capture_and_expiry() {
    let game = play(Game::new(), &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(game.position().en_passant, Some(sq("d6")));

    let ep = game
        .legal_moves_from(sq("e5"))
        .find(sq("e5"), sq("d6"))
        .unwrap();
    assert_eq!(ep.kind(), MoveKind::EnPassant);

    let taken = game.try_move_uci("e5d6").unwrap();
    assert_eq!(taken.notation(), Some("exd6 e.p."));
    assert_eq!(taken.piece_at(sq("d5")), None);

    // Declining the capture lets the target lapse.
    let declined = play(game, &["b1c3", "a6a5"]);
    assert_eq!(declined.position().en_passant, None);
    assert!(!declined
        .legal_moves_from(sq("e5"))
        .contains_target(sq("d6")));
}

#[test]
fn kingside_castling() {
    let game = play(
        Game::new(),
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"],
    );
    let castle = game.legal_moves_from(Square::E1).find(Square::E1, Square::G1);
    assert_eq!(castle.map(|m| m.kind()), Some(MoveKind::CastleKingside));

    let castled = game.try_move(Square::E1, Square::G1, None).unwrap();
    assert_eq!(castled.notation(), Some("O-O"));
    assert_eq!(
        castled.piece_at(Square::F1),
        Some(ColoredPiece::new(Piece::Rook, Color::White))
    );
    assert_eq!(castled.piece_at(Square::H1), None);
    let rights = castled.position().castling;
    assert!(!rights.can_castle_kingside(Color::White));
    assert!(!rights.can_castle_queenside(Color::White));
}

#[test]
fn castling_through_attacked_square_is_absent() {
    // The c4 bishop covers f1.
    let game = Game::from_fen("rn1qk2r/pppp1ppp/8/4p3/2b1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1")
        .unwrap();
    assert!(!game
        .legal_moves_from(Square::E1)
        .contains_target(Square::G1));
    assert_eq!(
        game.try_move(Square::E1, Square::G1, None),
        Err(MoveError::IllegalMove {
            from: Square::E1,
            to: Square::G1
        })
    );
}

#[test]
fn queenside_castling_for_black() {
    let game = Game::from_fen("r3kbnr/pppqpppp/2n5/3p1b2/3P1B2/2N5/PPPQPPPP/R3KBNR b KQkq - 0 1")
        .unwrap();
    let castled = game.try_move_uci("e8c8").unwrap();
    assert_eq!(castled.notation(), Some("O-O-O"));
    assert_eq!(
        castled.piece_at(Square::D8),
        Some(ColoredPiece::new(Piece::Rook, Color::Black))
    );
    assert_eq!(
        castled.piece_at(Square::C8),
        Some(ColoredPiece::new(Piece::King, Color::Black))
    );
}

#[test]
fn fools_mate() {
    let game = play(Game::new(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(game.state(), &GameState::Checkmate);
    assert_eq!(game.winner(), Some(GameResult::BlackWins));
    assert!(game.legal_moves().is_empty());
    for (square, piece) in game.pieces() {
        if piece.color == Color::White {
            assert!(game.legal_moves_from(square).is_empty());
        }
    }
}

#[test]
fn scholars_mate_notation() {
    let mut record = GameRecord::new();
    for m in ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"] {
        record.play_uci(m).unwrap();
    }
    assert_eq!(
        record.notations(),
        ["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7+"]
    );
    assert_eq!(record.current().winner(), Some(GameResult::WhiteWins));
}

#[test]
fn stalemate_differs_from_checkmate() {
    let stalemate = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(stalemate.state(), &GameState::Stalemate);
    assert!(!stalemate.is_check());
    assert_eq!(stalemate.winner(), Some(GameResult::Draw));

    let mate = Game::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(mate.state(), &GameState::Checkmate);
    assert_eq!(mate.winner(), Some(GameResult::WhiteWins));
}

#[test]
fn promotion_ending_the_game() {
    // A queen on b8 mates the h8 king boxed in by its own pawns.
    let game = Game::from_fen("7k/1P4pp/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let pending = game.try_move_uci("b7b8").unwrap();
    assert!(matches!(pending.state(), GameState::AwaitingPromotion { .. }));
    assert!(!pending.is_terminal());

    let mated = pending.promote(Piece::Queen).unwrap();
    assert_eq!(mated.notation(), Some("b8=Q+"));
    assert_eq!(mated.state(), &GameState::Checkmate);

    let quiet = pending.promote(Piece::Knight).unwrap();
    assert_eq!(quiet.notation(), Some("b8=N"));
    assert_eq!(quiet.state(), &GameState::InProgress);
}

#[test]
fn capture_promotion_notation() {
    let game = Game::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let done = game.try_move_uci("a7b8q").unwrap();
    assert_eq!(done.notation(), Some("axb8=Q+"));
}

#[test]
fn black_promotes_downwards() {
    let game = Game::from_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1").unwrap();
    let done = game.try_move(sq("a2"), Square::A1, Some(Piece::Rook)).unwrap();
    assert_eq!(done.notation(), Some("a1=R+"));
    assert_eq!(
        done.piece_at(Square::A1),
        Some(ColoredPiece::new(Piece::Rook, Color::Black))
    );
    assert_eq!(done.position().fullmove_number, 2);
}

#[test]
fn only_check_evasions_offered() {
    let game = play(Game::new(), &["e2e4", "d7d5", "f1b5"]);
    assert!(game.is_check());
    assert_eq!(game.notation(), Some("Bb5+"));
    // Only moves that deal with the check are offered.
    assert_eq!(game.legal_moves().len(), 5);
    assert!(matches!(
        game.try_move_uci("a7a6"),
        Err(MoveError::IllegalMove { .. })
    ));
}

#[test]
fn rejected_moves_keep_snapshot() {
    let game = Game::new();
    let before = game.clone();
    let _ = game.try_move_uci("e2e5");
    let _ = game.try_move_uci("e7e5");
    let _ = game.promote(Piece::Queen);
    assert_eq!(game, before);
}

#[test]
fn fen_setup_rejects_missing_king() {
    assert!(Game::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
    assert!(Game::from_fen("4k3/8/8/8/8/8/8/4KK2 w - - 0 1").is_err());
}

#[test]
fn fen_setup_rejects_impossible_en_passant_target() {
    // The target must sit behind a pawn that could just have made a double step.
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/3PK3/8 w - e3 0 1"),
        Err(FenError::InvalidEnPassantSquare("e3".to_string()))
    );
    assert_eq!(
        Game::from_fen("4k3/8/8/3nP3/8/8/8/4K3 w - d6 0 1"),
        Err(FenError::InvalidEnPassantSquare("d6".to_string()))
    );

    let game = Game::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let taken = game.try_move_uci("e5d6").unwrap();
    assert_eq!(taken.notation(), Some("exd6 e.p."));
}

#[test]
fn fen_setup_rejects_waiting_side_in_check() {
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1"),
        Err(FenError::OpponentInCheck(Color::Black))
    );
    // With black to move the same board is an ordinary check.
    let game = Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(game.is_check());
    assert_eq!(game.state(), &GameState::InProgress);
}
