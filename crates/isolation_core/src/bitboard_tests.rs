use super::*;

#[test]
fn test_set_bits() {
    let mut bb = Bitboard::EMPTY;
    bb.set(0);
    bb.set(5);
    bb.set(63);
    assert_eq!(bb.0, 1 | 32 | (1 << 63));
}

#[test]
fn test_first_n() {
    assert_eq!(Bitboard::first_n(0), Bitboard::EMPTY);
    assert_eq!(Bitboard::first_n(6).0, 0b111111);
    assert_eq!(Bitboard::first_n(64).popcount(), 64);
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard(0b1000).popcount(), 1);
    assert_eq!(Bitboard::first_n(6).popcount(), 6);
}

#[test]
fn test_iterator_is_ascending() {
    let bb = Bitboard(0b101010);
    let cells: Vec<u8> = bb.collect();
    assert_eq!(cells, vec![1, 3, 5]);
}

#[test]
fn test_open_mask_excludes_blocked_cells() {
    // Only the operations a board uses: set, contains, !, & and popcount.
    let mut blocked = Bitboard::EMPTY;
    blocked.set(4);
    assert!(blocked.contains(4));
    assert!(!blocked.contains(3));
    let open = !blocked & Bitboard::first_n(6);
    assert_eq!(open.popcount(), 5);
    assert!(!open.contains(4));
    assert_eq!(open.collect::<Vec<u8>>(), vec![0, 1, 2, 3, 5]);
}
