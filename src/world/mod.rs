mod rule;
mod view;

use crate::Pos2;

/// Offsets of the Moore neighborhood around a cell
const NEIGHBOURHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A bounded grid of cells evolving under the B3/S23 rule
///
/// Cells outside the grid are permanently dead: they are never wrapped to the
/// opposite edge and every query or mutation addressing them falls back to a
/// harmless default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    cols: usize,
    rows: usize,
    /// row-major, `rows * cols` long
    cells: Vec<bool>,
    generation: u64,
}

impl World {
    #[inline]
    pub fn new(cols: usize, rows: usize) -> Self {
        let mut world = Self::default();
        world.create_matrix(cols, rows);
        world
    }

    /// Reallocates the grid with the given dimensions, every cell dead
    pub fn create_matrix(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![false; cols * rows];
        self.generation = 0;
    }

    /// Advances the whole grid by one generation
    ///
    /// Every next state is computed from the current generation before any
    /// cell is replaced. An empty grid only counts the generation.
    pub fn step(&mut self) {
        self.generation += 1;
        if self.cells.is_empty() {
            return;
        }

        let next = (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| (x, y)))
            .map(|(x, y)| rule::next_state(self.cells[y * self.cols + x], self.count_at(x, y)))
            .collect::<Vec<_>>();
        debug_assert_eq!(next.len(), self.cells.len(), "generation changed size");

        self.cells = next;
    }

    /// Flips the cell at (x, y), ignoring coordinates outside the grid
    pub fn on_cell_clicked(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = !self.cells[i];
        }
    }

    /// Sets the cell at (x, y), ignoring coordinates outside the grid
    pub fn set_alive(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = alive;
        }
    }

    /// Brings every cell of `pattern` to life, shifted by `origin`
    ///
    /// Cells landing outside the grid are dropped.
    pub fn stamp<I>(&mut self, origin: Pos2, pattern: I)
    where
        I: IntoIterator<Item = Pos2>,
    {
        for cell in pattern {
            let pos = origin + cell;
            self.set_alive(pos.x, pos.y, true);
        }
    }

    #[inline]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Number of living cells around (x, y), or 0 outside the grid
    pub fn living_neighbours(&self, x: i32, y: i32) -> u8 {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) if x < self.cols && y < self.rows => self.count_at(x, y),
            _ => 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates the positions of all living cells, row by row
    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| Pos2::new((i % self.cols) as i32, (i / self.cols) as i32))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    /// Counts living neighbors of an in-bounds cell
    fn count_at(&self, x: usize, y: usize) -> u8 {
        NEIGHBOURHOOD
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < self.cols && ny < self.rows).then(|| self.cells[ny * self.cols + nx])
            })
            .filter(|&alive| alive)
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn world_with(cols: usize, rows: usize, alive: &[(i32, i32)]) -> World {
        let mut world = World::new(cols, rows);
        for &(x, y) in alive {
            world.set_alive(x, y, true);
        }
        world
    }

    fn alive_cells(world: &World) -> Vec<(i32, i32)> {
        world.alive().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn blinker_has_period_two() {
        let vertical = [(1, 0), (1, 1), (1, 2)];
        let mut world = world_with(5, 5, &vertical);

        world.step();
        assert_eq!(alive_cells(&world), vec![(0, 1), (1, 1), (2, 1)]);

        world.step();
        assert_eq!(alive_cells(&world), vertical.to_vec());
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn block_is_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut world = world_with(4, 4, &block);

        for _ in 0..5 {
            world.step();
        }
        assert_eq!(alive_cells(&world), block.to_vec());
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_steps() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut world = world_with(8, 8, &glider);

        for _ in 0..4 {
            world.step();
        }
        let mut expected: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(alive_cells(&world), expected);
    }

    #[test]
    fn empty_world_stays_empty() {
        let mut world = World::new(6, 4);
        for _ in 0..10 {
            world.step();
        }
        assert_eq!(world.alive_count(), 0);
    }

    #[test]
    fn corner_cell_does_not_wrap() {
        let world = world_with(3, 3, &[(0, 0), (2, 2), (2, 0), (0, 2)]);

        assert_eq!(world.living_neighbours(0, 0), 0);
        assert_eq!(world.living_neighbours(1, 1), 4);
    }

    #[test]
    fn lone_corner_cell_dies() {
        let mut world = world_with(2, 2, &[(0, 0)]);
        world.step();
        assert_eq!(world.alive_count(), 0);
    }

    #[test]
    fn out_of_range_is_safe() {
        let mut world = world_with(4, 3, &[(0, 0), (3, 2)]);
        let before = world.clone();

        assert!(!world.is_alive(-1, -1));
        assert!(!world.is_alive(4, 3));
        assert_eq!(world.living_neighbours(-1, -1), 0);
        assert_eq!(world.living_neighbours(4, 3), 0);

        world.on_cell_clicked(-1, -1);
        world.on_cell_clicked(4, 3);
        world.on_cell_clicked(4, 0);
        world.on_cell_clicked(0, 3);
        world.set_alive(i32::MIN, i32::MAX, true);
        assert_eq!(world, before);
    }

    #[test]
    fn create_matrix_discards_state() {
        let mut world = world_with(5, 5, &[(1, 1), (2, 2), (3, 3)]);
        world.step();

        world.create_matrix(7, 3);
        assert_eq!((world.cols(), world.rows()), (7, 3));
        assert_eq!(world.alive_count(), 0);
        assert_eq!(world.generation(), 0);

        world.create_matrix(7, 3);
        assert_eq!(world.alive_count(), 0);
    }

    #[test]
    fn zero_sized_world_is_valid() {
        let mut world = World::new(0, 5);
        world.step();
        world.on_cell_clicked(0, 0);
        assert!(!world.is_alive(0, 0));
        assert_eq!(world.alive().count(), 0);
        assert_eq!(world.generation(), 1);
    }

    #[test]
    fn stamp_drops_cells_outside() {
        let mut world = World::new(3, 3);
        let pattern = [Pos2::new(0, 0), Pos2::new(1, 1), Pos2::new(2, 2)];

        world.stamp(Pos2::new(1, 1), pattern);
        assert_eq!(alive_cells(&world), vec![(1, 1), (2, 2)]);
    }

    proptest! {
        #[test]
        fn clicking_twice_restores_state(
            cells in proptest::collection::vec(any::<bool>(), 30),
            x in -2i32..8,
            y in -2i32..7,
        ) {
            let mut world = World::new(6, 5);
            world.cells = cells;
            let before = world.clone();

            world.on_cell_clicked(x, y);
            world.on_cell_clicked(x, y);
            prop_assert_eq!(world, before);
        }

        #[test]
        fn neighbour_count_matches_brute_force(
            cells in proptest::collection::vec(any::<bool>(), 7 * 4),
        ) {
            let mut world = World::new(7, 4);
            world.cells = cells;

            for y in 0..4i32 {
                for x in 0..7i32 {
                    let mut expected = 0;
                    for dy in -1..=1 {
                        for dx in -1..=1 {
                            if (dx, dy) != (0, 0) && world.is_alive(x + dx, y + dy) {
                                expected += 1;
                            }
                        }
                    }
                    let count = world.living_neighbours(x, y);
                    prop_assert!(count <= 8);
                    prop_assert_eq!(count, expected);
                }
            }
        }
    }
}
