// grid.rs - Cell and board state for the Game of Life

// Reference board size
pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_HEIGHT: usize = 30;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> CellState {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

/// Fixed-size board: a flat row-major vector of cell states.
///
/// Width and height never change after construction. Coordinates are (x, y)
/// with 0 <= x < width and 0 <= y < height; positions outside the board are
/// absent, never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid. Dimensions must be nonzero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be nonzero");
        Self {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.in_bounds(x, y));
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    /// Flip one cell, returning its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> CellState {
        let i = self.index(x, y);
        self.cells[i] = self.cells[i].toggled();
        self.cells[i]
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Row-major snapshot of all cells, for renderers.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// The existing neighbor positions of (x, y): the 3x3 window around the
    /// cell minus the cell itself, clipped to the board. Corners get 3,
    /// edges 5, interior cells 8.
    pub fn neighbor_coords(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        debug_assert!(self.in_bounds(x, y));
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(self.width - 1);
        let y1 = (y + 1).min(self.height - 1);
        (y0..=y1)
            .flat_map(move |j| (x0..=x1).map(move |i| (i, j)))
            .filter(move |&pos| pos != (x, y))
    }

    /// Count the live cells among the existing neighbors of (x, y).
    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        self.neighbor_coords(x, y)
            .filter(|&(i, j)| self.get(i, j).is_alive())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 30);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(0, 0), CellState::Dead);
        assert_eq!(grid.get(29, 29), CellState::Dead);
    }

    #[test]
    fn toggle_flips_state() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.toggle(1, 1), CellState::Alive);
        assert_eq!(grid.get(1, 1), CellState::Alive);
        assert_eq!(grid.toggle(1, 1), CellState::Dead);
        assert_eq!(grid.get(1, 1), CellState::Dead);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 0, CellState::Alive);
        grid.set(3, 2, CellState::Alive);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn population_counts_live_cells() {
        let mut grid = Grid::new(4, 4);
        grid.set(1, 1, CellState::Alive);
        grid.set(2, 3, CellState::Alive);
        grid.set(0, 0, CellState::Alive);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn corner_has_three_neighbors() {
        let grid = Grid::new(5, 5);
        let coords: Vec<_> = grid.neighbor_coords(0, 0).collect();
        assert_eq!(coords, vec![(1, 0), (0, 1), (1, 1)]);

        let far: Vec<_> = grid.neighbor_coords(4, 4).collect();
        assert_eq!(far, vec![(3, 3), (4, 3), (3, 4)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let grid = Grid::new(5, 5);
        let coords: Vec<_> = grid.neighbor_coords(2, 0).collect();
        assert_eq!(coords.len(), 5);
        assert!(coords.iter().all(|&(x, y)| grid.in_bounds(x, y)));
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.neighbor_coords(2, 2).count(), 8);
    }

    #[test]
    fn neighbor_counts_clip_at_the_boundary() {
        // Light the whole board; counts still exclude anything off-grid.
        let mut grid = Grid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, CellState::Alive);
            }
        }
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(3, 3), 3);
        assert_eq!(grid.live_neighbors(0, 2), 5);
        assert_eq!(grid.live_neighbors(1, 1), 8);
    }
}
