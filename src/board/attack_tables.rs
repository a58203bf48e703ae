use once_cell::sync::Lazy;

use super::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// Direction order matters: the first four are orthogonal, the last four diagonal.
const DIRS: [(i8, i8); 8] = [
    (1, 0),   // N
    (-1, 0),  // S
    (0, 1),   // E
    (0, -1),  // W
    (1, 1),   // NE
    (1, -1),  // NW
    (-1, 1),  // SE
    (-1, -1), // SW
];

const ORTHOGONAL: [usize; 4] = [0, 1, 2, 3];
const DIAGONAL: [usize; 4] = [4, 5, 6, 7];

fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        for &(dr, df) in deltas {
            if let Some(target) = sq.offset(dr, df) {
                attacks[sq.index()] |= Bitboard::from_square(target);
            }
        }
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Squares a pawn of the given color attacks from each square
pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

static RAYS: Lazy<[[Bitboard; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for sq in Square::all() {
        for (d, &(dr, df)) in DIRS.iter().enumerate() {
            let mut cur = sq.offset(dr, df);
            while let Some(target) = cur {
                rays[d][sq.index()] |= Bitboard::from_square(target);
                cur = target.offset(dr, df);
            }
        }
    }
    rays
});

/// N, E and the two northward diagonals walk toward higher indices
fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, 0 | 2 | 4 | 5)
}

fn nearest_blocker(dir: usize, blockers: Bitboard) -> usize {
    if is_increasing_dir(dir) {
        blockers.0.trailing_zeros() as usize
    } else {
        63 - blockers.0.leading_zeros() as usize
    }
}

/// Ray from `from` in one direction, stopping at (and including) the first blocker
fn ray_attacks(from: Square, dir: usize, occupancy: Bitboard) -> Bitboard {
    let ray = RAYS[dir][from.index()];
    let blockers = ray & occupancy;
    if blockers.is_empty() {
        return ray;
    }
    let blocker_idx = nearest_blocker(dir, blockers);
    Bitboard(ray.0 ^ RAYS[dir][blocker_idx].0)
}

fn sliding(from: Square, occupancy: Bitboard, dirs: &[usize]) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        acc | ray_attacks(from, dir, occupancy)
    })
}

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    sliding(sq, occupancy, &ORTHOGONAL)
}

#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    sliding(sq, occupancy, &DIAGONAL)
}

#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(sq, occupancy) | bishop_attacks(sq, occupancy)
}
