use crate::Vector2;

/// One point of a trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub acceleration: Vector2,
    pub velocity: Vector2,
    pub position: Vector2,
}

/// Full time history of an integration run.
///
/// Stored as four parallel sequences indexed by the same sample index,
/// which is the layout plotting consumers expect. A trajectory always
/// holds at least one sample and is never modified after it is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    accelerations: Vec<Vector2>,
    velocities: Vec<Vector2>,
    positions: Vec<Vector2>,
}

impl Trajectory {
    /// Starts a history with room for `capacity` samples.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            accelerations: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.times.push(sample.t);
        self.accelerations.push(sample.acceleration);
        self.velocities.push(sample.velocity);
        self.positions.push(sample.position);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn accelerations(&self) -> &[Vector2] {
        &self.accelerations
    }

    pub fn velocities(&self) -> &[Vector2] {
        &self.velocities
    }

    pub fn positions(&self) -> &[Vector2] {
        &self.positions
    }

    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            t: *self.times.get(index)?,
            acceleration: self.accelerations[index],
            velocity: self.velocities[index],
            position: self.positions[index],
        })
    }

    pub fn last(&self) -> Option<Sample> {
        self.sample(self.len().checked_sub(1)?)
    }

    pub fn samples(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        (0..self.len()).map(|i| Sample {
            t: self.times[i],
            acceleration: self.accelerations[i],
            velocity: self.velocities[i],
            position: self.positions[i],
        })
    }

    /// Splits into `(time, acceleration, velocity, position)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<Vector2>, Vec<Vector2>, Vec<Vector2>) {
        (self.times, self.accelerations, self.velocities, self.positions)
    }

    /// Index and distance of the sample nearest the planet centre.
    /// Non-finite positions are skipped; `None` if no position is finite.
    pub fn closest_approach(&self) -> Option<(usize, f64)> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, pos)| (i, pos.mag()))
            .filter(|(_, distance)| distance.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Index of the first sample whose state holds a NaN or infinite component.
    pub fn first_non_finite(&self) -> Option<usize> {
        (0..self.len()).find(|&i| {
            let a = self.accelerations[i];
            let v = self.velocities[i];
            let p = self.positions[i];
            ![a.x, a.y, v.x, v.y, p.x, p.y].iter().all(|c| c.is_finite())
        })
    }
}
