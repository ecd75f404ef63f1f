//! Board position addressing.

use derive_more::Display;

/// A cell position on the 9x9 board.
///
/// Coordinates are zero-based and row-major: `row` counts down from the top,
/// `col` across from the left. Out-of-range coordinates are unrepresentable;
/// both constructors reject them.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 25);
/// assert_eq!(pos.to_string(), "(2, 7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[9], Position::new(1, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from `(row, col)` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!(pos.row(), 0);
    /// assert_eq!(pos.col(), 8);
    /// ```
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        match Self::try_new(row, col) {
            Some(pos) => pos,
            None => panic!("invalid position: ({row}, {col})"),
        }
    }

    /// Creates a position, or `None` if either coordinate is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
    /// assert_eq!(Position::try_new(9, 0), None);
    /// assert_eq!(Position::try_new(0, 9), None);
    /// ```
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from a flat index in the range 0-80.
    ///
    /// Inverse of [`index`](Self::index).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "invalid cell index: {index}");
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / 9) as u8, (index % 9) as u8);
        Self { row, col }
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the flat row-major index of this position (0-80).
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).index(), 0);
    /// assert_eq!(Position::new(1, 0).index(), 9);
    /// assert_eq!(Position::new(8, 8).index(), 80);
    /// ```
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.col)
    }

    /// Returns the index of the 3x3 box containing this position (0-8, left
    /// to right, top to bottom).
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 2).box_index(), 6);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }
}
