//! Pieces module - shape matrices, spawning position and rotation
//!
//! Shapes are small 0/1 matrices (row-major, row 0 on top) stored inline so a
//! [`Piece`] stays `Copy`. Rotation builds a new matrix; templates are never
//! touched.

use crate::types::{PieceKind, COLS};

/// Largest width or height a shape matrix can have.
pub const SHAPE_MAX: usize = 4;

/// Horizontal probe offsets tried, in order, when a rotation collides.
pub const KICK_OFFSETS: [i8; 3] = [0, 1, -1];

/// Rectangular 0/1 matrix of at most `SHAPE_MAX` x `SHAPE_MAX` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// `bits[row][col]`; cells outside width/height are always false.
    bits: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

const I_SHAPE: Shape = Shape::build(&[&[1, 1, 1, 1]]);
const O_SHAPE: Shape = Shape::build(&[&[1, 1], &[1, 1]]);
const T_SHAPE: Shape = Shape::build(&[&[0, 1, 0], &[1, 1, 1]]);
const L_SHAPE: Shape = Shape::build(&[&[1, 0], &[1, 0], &[1, 1]]);
const J_SHAPE: Shape = Shape::build(&[&[0, 1], &[0, 1], &[1, 1]]);
const S_SHAPE: Shape = Shape::build(&[&[0, 1, 1], &[1, 1, 0]]);
const Z_SHAPE: Shape = Shape::build(&[&[1, 1, 0], &[0, 1, 1]]);

impl Shape {
    /// Compile-time constructor for the fixed templates.
    const fn build(rows: &[&[u8]]) -> Shape {
        let mut bits = [[false; SHAPE_MAX]; SHAPE_MAX];
        let mut y = 0;
        while y < rows.len() {
            let mut x = 0;
            while x < rows[y].len() {
                bits[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Shape {
            width: rows[0].len() as u8,
            height: rows.len() as u8,
            bits,
        }
    }

    /// The template for a piece kind (a fresh copy every call).
    pub fn template(kind: PieceKind) -> Shape {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
        }
    }

    /// Build a shape from a 0/1 matrix.
    ///
    /// Returns `None` when the matrix is empty, ragged, or larger than
    /// `SHAPE_MAX` in either direction. Any non-zero value counts as set.
    ///
    /// ```
    /// use kid_tetris_core::pieces::Shape;
    ///
    /// let bar = Shape::from_rows(&[[1u8, 1, 1]]).unwrap();
    /// assert_eq!((bar.width(), bar.height()), (3, 1));
    /// assert!(Shape::from_rows(&[vec![1u8, 1], vec![1]]).is_none());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Shape> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if width == 0 || width > SHAPE_MAX || height > SHAPE_MAX {
            return None;
        }

        let mut bits = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                bits[y][x] = v != 0;
            }
        }

        Some(Shape {
            width: width as u8,
            height: height as u8,
            bits,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` is set. Out of range is unset.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.bits[y][x]
    }

    /// Offsets `(dx, dy)` of every set cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (w, h) = (self.width as usize, self.height as usize);
        (0..h).flat_map(move |y| {
            (0..w)
                .filter(move |&x| self.bits[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// 90° clockwise rotation.
    ///
    /// An H x W matrix becomes W x H with `out[r][c] = self[H - 1 - c][r]`
    /// (transpose, then reverse each row).
    pub fn rotated(&self) -> Shape {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut bits = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (r, row) in bits.iter_mut().enumerate().take(w) {
            for (c, bit) in row.iter_mut().enumerate().take(h) {
                *bit = self.bits[h - 1 - c][r];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    /// Expand back into a 0/1 matrix.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.bits[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// A falling piece: kind, current shape, and the grid position of the
/// shape's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece from its template at the spawn position.
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Move back to the spawn position for the current shape.
    pub fn reset_to_spawn(&mut self) {
        self.x = spawn_x(&self.shape);
        self.y = 0;
    }

    /// Copy of this piece moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece with its shape rotated clockwise, same position.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Absolute grid coordinates of every set cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Spawn column for a shape: centered, rounding toward the left wall.
pub fn spawn_x(shape: &Shape) -> i8 {
    (COLS as i8 - shape.width() as i8).div_euclid(2)
}

/// Rotate clockwise, probing the kick offsets in order.
///
/// `collides` is asked about each candidate; the first free one wins.
/// Returns `None` when every probe collides, in which case the caller keeps
/// the original piece untouched.
pub fn try_rotate(piece: &Piece, collides: impl Fn(&Piece) -> bool) -> Option<Piece> {
    let rotated = piece.rotated();
    KICK_OFFSETS
        .iter()
        .map(|&dx| rotated.shifted(dx, 0))
        .find(|candidate| !collides(candidate))
}
