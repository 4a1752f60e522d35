use super::World;

const ALIVE: char = '█';
const DEAD: char = '·';

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                write!(f, "{}", if alive { ALIVE } else { DEAD })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_top_to_bottom() {
        let mut world = World::new(3, 2);
        world.set_alive(0, 0, true);
        world.set_alive(2, 1, true);

        assert_eq!(world.to_string(), "█··\n··█");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(World::new(0, 4).to_string(), "");
        assert_eq!(World::new(4, 0).to_string(), "");
    }
}
