//! The arrival-ordered waiting line.

use std::collections::VecDeque;

use crate::Vehicle;

/// FIFO of vehicles waiting for a booth.
///
/// Vehicles are appended at the back on arrival.  Removal is not strictly
/// FIFO: [`take_first`][Self::take_first] pulls the earliest vehicle matching
/// a booth's capability, which may sit behind vehicles that booth rejects.
/// The relative order of everyone left behind is preserved.
#[derive(Clone, Debug, Default)]
pub struct VehicleQueue {
    inner: VecDeque<Vehicle>,
}

impl VehicleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, vehicle: Vehicle) {
        self.inner.push_back(vehicle);
    }

    /// Remove and return the earliest-arrived vehicle satisfying `accept`.
    pub fn take_first<F>(&mut self, mut accept: F) -> Option<Vehicle>
    where
        F: FnMut(&Vehicle) -> bool,
    {
        let pos = self.position(&mut accept)?;
        self.remove(pos)
    }

    /// Index of the earliest-arrived vehicle satisfying `accept`.
    pub fn position<F>(&self, mut accept: F) -> Option<usize>
    where
        F: FnMut(&Vehicle) -> bool,
    {
        self.inner.iter().position(|v| accept(v))
    }

    pub fn remove(&mut self, index: usize) -> Option<Vehicle> {
        self.inner.remove(index)
    }

    /// Put `vehicle` back at `index`, shifting later vehicles back by one.
    pub fn insert(&mut self, index: usize, vehicle: Vehicle) {
        self.inner.insert(index, vehicle);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Waiting vehicles, front (earliest) first.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.inner.iter()
    }
}
