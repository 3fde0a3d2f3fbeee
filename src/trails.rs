//! Bounded position histories for drawing orbit trails

use crate::appearance::Color;
use crate::physics::math::Vector;
use crate::physics::system::BodySystem;
use std::collections::VecDeque;

/// Default number of points kept per body
pub const DEFAULT_TRAIL_CAPACITY: usize = 1500;

/// Most recent positions of one body, oldest first.
///
/// Pushing onto a full trail evicts the oldest point, so a trail never holds
/// more than its capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vector>,
    capacity: usize,
    pub color: Color,
}

impl Trail {
    pub fn new(capacity: usize, color: Color) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            color,
        }
    }

    pub fn push(&mut self, position: Vector) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    /// Points from oldest to newest
    pub fn points(&self) -> impl ExactSizeIterator<Item = &Vector> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Vector> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<Vector> {
        self.points.front().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// One trail per body, indexed like the bodies themselves
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trails {
    trails: Vec<Trail>,
}

impl Trails {
    pub fn new(colors: impl IntoIterator<Item = Color>, capacity: usize) -> Self {
        Self {
            trails: colors
                .into_iter()
                .map(|color| Trail::new(capacity, color))
                .collect(),
        }
    }

    /// Append every body's current position to its trail
    pub fn record(&mut self, system: &BodySystem) {
        for (trail, body) in self.trails.iter_mut().zip(system.bodies()) {
            trail.push(body.position);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Trail> {
        self.trails.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trail> {
        self.trails.iter()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    pub fn clear(&mut self) {
        self.trails.iter_mut().for_each(Trail::clear);
    }
}

impl<'a> IntoIterator for &'a Trails {
    type Item = &'a Trail;
    type IntoIter = std::slice::Iter<'a, Trail>;

    fn into_iter(self) -> Self::IntoIter {
        self.trails.iter()
    }
}
