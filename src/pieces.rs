//! The Blokus piece catalog: 21 polyominoes of sizes 1 to 5.
//!
//! Each piece carries a canonical footprint plus its rotation count (1, 2 or
//! 4 distinct quarter-turns) and flip count (1 or 2 distinct mirror states).
//! The derived orientation list contains exactly the distinct footprints for
//! that piece, 91 across the whole catalog, so callers never see duplicate
//! shapes when iterating orientations.

use std::sync::OnceLock;

/// Number of pieces each player starts with.
pub const PIECE_COUNT: usize = 21;

/// Piece id of the single-square piece, which carries the end-game bonus.
pub const MONOMINO: usize = 0;

/// One of the four diagonal directions used by corner bookkeeping.
///
/// Corner sets, footprint corner flags and the corner-contact rule all index
/// by this enum. `opposite` gives the mirrored sense: a cell whose top-left
/// corner is free may legally land on a recorded bottom-right corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Diagonal {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Diagonal {
    pub const ALL: [Diagonal; 4] = [
        Diagonal::TopLeft,
        Diagonal::TopRight,
        Diagonal::BottomLeft,
        Diagonal::BottomRight,
    ];

    pub fn opposite(self) -> Diagonal {
        match self {
            Diagonal::TopLeft => Diagonal::BottomRight,
            Diagonal::TopRight => Diagonal::BottomLeft,
            Diagonal::BottomLeft => Diagonal::TopRight,
            Diagonal::BottomRight => Diagonal::TopLeft,
        }
    }

    /// Row/column offset of the diagonal neighbor in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Diagonal::TopLeft => (-1, -1),
            Diagonal::TopRight => (-1, 1),
            Diagonal::BottomLeft => (1, -1),
            Diagonal::BottomRight => (1, 1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The occupied-cell pattern of a piece in one specific orientation.
///
/// Besides the occupancy matrix itself, a footprint precomputes the list of
/// occupied cells and, for each of them, which of its four diagonal corners
/// are convex (both in-footprint neighbors toward that diagonal empty).
/// Those flags drive the corner-contact test during move validation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Footprint {
    rows: usize,
    cols: usize,
    grid: Vec<bool>,
    cells: Vec<(usize, usize)>,
    corner_flags: Vec<[bool; 4]>,
}

impl Footprint {
    fn from_offsets(offsets: &[(i32, i32)]) -> Self {
        let min_r = offsets.iter().map(|p| p.0).min().unwrap_or(0);
        let min_c = offsets.iter().map(|p| p.1).min().unwrap_or(0);
        let mut cells: Vec<(usize, usize)> = offsets
            .iter()
            .map(|&(r, c)| ((r - min_r) as usize, (c - min_c) as usize))
            .collect();
        cells.sort_unstable();
        cells.dedup();

        let rows = cells.iter().map(|p| p.0).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|p| p.1).max().unwrap_or(0) + 1;
        let mut grid = vec![false; rows * cols];
        for &(r, c) in &cells {
            grid[r * cols + c] = true;
        }

        let occ = |r: i32, c: i32| {
            r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols
                && grid[r as usize * cols + c as usize]
        };
        let corner_flags = cells
            .iter()
            .map(|&(r, c)| {
                let mut flags = [false; 4];
                for d in Diagonal::ALL {
                    let (dr, dc) = d.offset();
                    let (r, c) = (r as i32, c as i32);
                    // Convex corner: both orthogonal neighbors sharing the
                    // diagonal, and the diagonal cell itself, are empty.
                    flags[d.index()] = !occ(r + dr, c) && !occ(r, c + dc) && !occ(r + dr, c + dc);
                }
                flags
            })
            .collect();

        Footprint { rows, cols, grid, cells, corner_flags }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of occupied cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn occupied(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols && self.grid[r * self.cols + c]
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Convex-corner flags, parallel to `cells`, indexed by `Diagonal`.
    pub fn corner_flags(&self) -> &[[bool; 4]] {
        &self.corner_flags
    }

    /// Quarter-turn clockwise.
    fn rotated(&self) -> Footprint {
        let offsets: Vec<(i32, i32)> = self
            .cells
            .iter()
            .map(|&(r, c)| (c as i32, -(r as i32)))
            .collect();
        Footprint::from_offsets(&offsets)
    }

    /// Mirrored across the horizontal axis.
    fn flipped(&self) -> Footprint {
        let offsets: Vec<(i32, i32)> = self
            .cells
            .iter()
            .map(|&(r, c)| (-(r as i32), c as i32))
            .collect();
        Footprint::from_offsets(&offsets)
    }
}

/// A catalog piece: canonical shape plus orientation metadata.
#[derive(Clone, Debug)]
pub struct Piece {
    pub id: usize,
    pub name: &'static str,
    /// Number of occupied squares (1..=5).
    pub size: usize,
    /// Distinct 90-degree rotation states (1, 2 or 4).
    pub rotations: usize,
    /// Distinct mirror states (1 or 2).
    pub flips: usize,
    orientations: Vec<Footprint>,
}

impl Piece {
    fn new(
        id: usize,
        name: &'static str,
        rotations: usize,
        flips: usize,
        shape: &[(i32, i32)],
    ) -> Self {
        let base = Footprint::from_offsets(shape);
        let size = base.size();
        let mut orientations = Vec::with_capacity(rotations * flips);
        let mut current = base.clone();
        for _ in 0..rotations {
            let next = current.rotated();
            orientations.push(current);
            current = next;
        }
        if flips == 2 {
            let mut current = base.flipped();
            for _ in 0..rotations {
                let next = current.rotated();
                orientations.push(current);
                current = next;
            }
        }
        Piece { id, name, size, rotations, flips, orientations }
    }

    /// All distinct orientation footprints of this piece.
    pub fn orientations(&self) -> &[Footprint] {
        &self.orientations
    }

    pub fn orientation(&self, idx: usize) -> &Footprint {
        &self.orientations[idx]
    }
}

fn build_catalog() -> Vec<Piece> {
    vec![
        Piece::new(0, "I1", 1, 1, &[(0, 0)]),
        Piece::new(1, "I2", 2, 1, &[(0, 0), (0, 1)]),
        Piece::new(2, "V3", 4, 1, &[(0, 0), (0, 1), (1, 1)]),
        Piece::new(3, "I3", 2, 1, &[(0, 0), (0, 1), (0, 2)]),
        Piece::new(4, "O4", 1, 1, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
        Piece::new(5, "I4", 2, 1, &[(0, 0), (0, 1), (0, 2), (0, 3)]),
        Piece::new(6, "S4", 2, 2, &[(0, 0), (0, 1), (1, 1), (1, 2)]),
        Piece::new(7, "T4", 4, 1, &[(0, 1), (1, 0), (1, 1), (1, 2)]),
        Piece::new(8, "L4", 4, 2, &[(0, 0), (0, 1), (0, 2), (1, 2)]),
        Piece::new(9, "I5", 2, 1, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
        Piece::new(10, "L5", 4, 2, &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
        Piece::new(11, "P5", 4, 2, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
        Piece::new(12, "U5", 4, 1, &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]),
        Piece::new(13, "T5", 4, 1, &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
        Piece::new(14, "V5", 4, 1, &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
        Piece::new(15, "F5", 4, 2, &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]),
        Piece::new(16, "N5", 4, 2, &[(0, 1), (1, 1), (2, 0), (2, 1), (3, 0)]),
        Piece::new(17, "X5", 1, 1, &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]),
        Piece::new(18, "Z5", 2, 2, &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
        Piece::new(19, "W5", 4, 1, &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
        Piece::new(20, "Y5", 4, 2, &[(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)]),
    ]
}

static CATALOG: OnceLock<Vec<Piece>> = OnceLock::new();

/// The shared, immutable piece catalog.
pub fn catalog() -> &'static [Piece] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

pub fn piece(id: usize) -> &'static Piece {
    &catalog()[id]
}

pub fn piece_by_name(name: &str) -> Option<&'static Piece> {
    catalog().iter().find(|p| p.name == name)
}
