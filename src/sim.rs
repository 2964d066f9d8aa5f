//! Fixed-timestep simulation driving the car manager over a layout,
//! recording a history of per-car events.

use crate::cars::{CarId, CarLogEvent, CarManager};
use crate::track::{GridId, Layout};

/// Everything that happened during a run: per tick, the events of each
/// car that moved or stopped.
#[derive(Debug, Default)]
pub struct History {
    pub ticks: Vec<Vec<(CarId, CarLogEvent)>>,
}

pub struct Sim {
    pub layout: Layout,
    pub grid: GridId,
    pub cars: CarManager,
    time: f64,
}

impl Sim {
    pub fn new(layout: Layout, grid: GridId, cars: CarManager) -> Sim {
        Sim {
            layout,
            grid,
            cars,
            time: 0.0,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance one tick. Structural edits and position updates are
    /// serialized here; the layout is static while cars move.
    pub fn update(&mut self, dt: f64) -> Vec<(CarId, CarLogEvent)> {
        self.time += dt;
        self.cars.update(&self.layout, dt)
    }

    pub fn run(&mut self, ticks: usize, dt: f64) -> History {
        let mut history = History::default();
        for _ in 0..ticks {
            history.ticks.push(self.update(dt));
        }
        history
    }
}
