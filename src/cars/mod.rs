//! Moving cars: per-tick Euler physics feeding track-position
//! arithmetic, and the manager that owns and ticks them.

use log::debug;

use crate::track::{Layout, TrackError, TrackPosition};

pub type CarId = usize;

/// What one car did during one tick.
#[derive(Debug, PartialEq)]
pub enum CarLogEvent {
    Move { dt: f64, du: f64 },
    /// The car ran out of track and was stopped in place.
    DeadEnd(TrackError),
}

#[derive(Debug)]
pub struct Car {
    pub position: TrackPosition,
    pub length: f64,
    pub mass: f64,
    pub velocity: f64,
    force: f64,
}

impl Car {
    pub fn new(position: TrackPosition) -> Car {
        Car::with_dimensions(position, 1.0, 1.0)
    }

    pub fn with_dimensions(position: TrackPosition, length: f64, mass: f64) -> Car {
        Car {
            position,
            length,
            mass,
            velocity: 0.0,
            force: 0.0,
        }
    }

    /// Accumulate a force for the next update.
    pub fn apply_force(&mut self, force: f64) {
        self.force += force;
    }

    /// Instantaneous velocity change.
    pub fn apply_impulse(&mut self, impulse: f64) {
        self.velocity += impulse / self.mass;
    }

    pub fn advance(&mut self, layout: &Layout, du: f64) -> Result<(), TrackError> {
        self.position = self.position.add(layout, du)?;
        Ok(())
    }

    /// One Euler step: integrate accumulated force into velocity, then
    /// velocity into a track-position delta. Hitting a dead end is a
    /// recoverable condition: the car stops where it is, the pending
    /// motion is discarded, and the event reports which end ran out.
    pub fn update(&mut self, layout: &Layout, dt: f64) -> CarLogEvent {
        self.velocity += self.force / self.mass * dt;
        self.force = 0.0;
        let du = self.velocity * dt;
        match self.position.add(layout, du) {
            Ok(position) => {
                self.position = position;
                CarLogEvent::Move { dt, du }
            }
            Err(err) => {
                self.velocity = 0.0;
                CarLogEvent::DeadEnd(err)
            }
        }
    }
}

/// Arena of cars. Ids stay stable; removed cars leave a tombstone slot.
#[derive(Debug, Default)]
pub struct CarManager {
    cars: Vec<Option<Car>>,
}

impl CarManager {
    pub fn new() -> CarManager {
        Default::default()
    }

    pub fn add_car(&mut self, car: Car) -> CarId {
        let id = self.cars.len();
        self.cars.push(Some(car));
        id
    }

    pub fn remove_car(&mut self, id: CarId) -> Option<Car> {
        self.cars.get_mut(id)?.take()
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id)?.as_ref()
    }

    pub fn car_mut(&mut self, id: CarId) -> Option<&mut Car> {
        self.cars.get_mut(id)?.as_mut()
    }

    pub fn contains(&self, id: CarId) -> bool {
        self.car(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.cars.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (CarId, &Car)> {
        self.cars
            .iter()
            .enumerate()
            .filter_map(|(id, car)| car.as_ref().map(|c| (id, c)))
    }

    /// Tick every car, collecting the per-car events.
    pub fn update(&mut self, layout: &Layout, dt: f64) -> Vec<(CarId, CarLogEvent)> {
        let mut events = Vec::new();
        for (id, slot) in self.cars.iter_mut().enumerate() {
            if let Some(car) = slot.as_mut() {
                let event = car.update(layout, dt);
                if let CarLogEvent::DeadEnd(ref err) = event {
                    debug!("car {} stopped: {}", id, err);
                }
                events.push((id, event));
            }
        }
        events
    }
}
