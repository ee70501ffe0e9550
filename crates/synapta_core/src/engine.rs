use crate::grid::StateGrid;

/// Double-buffered Brian's Brain generation engine.
///
/// `current` is the externally visible generation; `scratch` receives the
/// next one. During a pass every neighbor read references `current` only
/// and every write lands in `scratch`, so each cell's successor depends
/// solely on the previous generation regardless of visitation order.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: StateGrid,
    scratch: StateGrid,
    generation: u64,
}

impl Simulation {
    /// Allocates both buffers with every cell `Ready`.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current: StateGrid::new(width, height),
            scratch: StateGrid::new(width, height),
            generation: 0,
        }
    }

    /// The live, presented generation.
    pub fn grid(&self) -> &StateGrid {
        &self.current
    }

    /// Mutable access to the live grid, for input injection between
    /// generations.
    pub fn grid_mut(&mut self) -> &mut StateGrid {
        &mut self.current
    }

    /// Generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances exactly one generation. Total; cannot fail.
    ///
    /// Every cell of `scratch` is written on every pass, so the stale
    /// contents left behind by the previous swap are never read.
    pub fn step(&mut self) {
        for y in 0..self.current.height() as i32 {
            for x in 0..self.current.width() as i32 {
                let firing = self.current.firing_neighbors(x, y);
                let next = self.current.get(x, y).next(firing);
                self.scratch.set(x, y, next);
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
    }
}
