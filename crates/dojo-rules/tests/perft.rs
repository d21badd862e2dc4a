//! Move generator validation against published perft counts.

use dojo_rules::{perft, perft_divide, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[test]
fn startpos_depth_4() {
    assert_eq!(perft(&Position::startpos(), 4), 197_281);
}

#[test]
fn kiwipete_depth_2() {
    let position = Position::from_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&position, 2), 2039);
}

#[test]
fn position3_depth_3() {
    let position = Position::from_fen(POSITION_3).unwrap();
    assert_eq!(perft(&position, 3), 2812);
}

// Slow in debug builds.
#[test]
#[ignore]
fn kiwipete_depth_3() {
    let position = Position::from_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&position, 3), 97_862);
}

#[test]
fn divide_sums_to_perft() {
    let position = Position::from_fen(KIWIPETE).unwrap();
    let divide = perft_divide(&position, 2);
    assert_eq!(divide.len(), 48);
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 2039);
}
