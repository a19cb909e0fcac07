/// Compact bit matrix for storing resolved module colors
///
/// Coordinates are `(x, y)` = `(column, row)`. A set bit is a dark module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let mask = 1 << (index % 8);
        if value {
            self.data[index / 8] |= mask;
        } else {
            self.data[index / 8] &= !mask;
        }
    }

    /// Toggle bit at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Copy out as a row-major grid of booleans
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.get(x, y)).collect())
            .collect()
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// State of one module while a symbol is under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written by pattern placement or data mapping
    #[default]
    Unset,
    /// Dark module
    Dark,
    /// Light module
    Light,
}

impl Module {
    /// Module for a color flag (`true` = dark)
    pub fn from_dark(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// Whether this module has been written
    pub fn is_set(self) -> bool {
        self != Module::Unset
    }
}

/// Square module grid with an explicit unset state, indexed `(row, col)`
///
/// Only used while placing patterns and data; [`ModuleGrid::resolve`]
/// turns it into the boolean [`BitMatrix`] handed to callers.
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    /// Create a `size` x `size` grid with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Module {
        self.cells[row * self.size + col]
    }

    /// Write the module at (row, col)
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        self.cells[row * self.size + col] = Module::from_dark(dark);
    }

    /// Whether (row, col) has been written
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_set()
    }

    /// Whether every module has been written
    pub fn is_resolved(&self) -> bool {
        self.cells.iter().all(|m| m.is_set())
    }

    /// Convert into a boolean matrix.
    ///
    /// Data mapping writes every cell left by pattern placement, so an unset
    /// module here is a construction bug.
    pub fn resolve(&self) -> BitMatrix {
        assert!(self.is_resolved(), "module grid has unset cells");
        let mut matrix = BitMatrix::new(self.size, self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) == Module::Dark {
                    matrix.set(col, row, true);
                }
            }
        }
        matrix
    }
}
