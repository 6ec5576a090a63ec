//! Bounded, stride-sampled position history for trail rendering.

use nalgebra::Point3;

/// Fixed-capacity ring buffer of past body positions.
///
/// A trail does not store every position it is offered: an internal
/// counter increments on every [`record`](Trail::record) call and only
/// every `stride`-th call stores the position. A body integrated
/// exactly `N` times therefore holds `⌊N / stride⌋` samples, bounded by
/// `capacity` with the oldest evicted first. Storage is allocated once
/// at construction; recording never reallocates.
///
/// # Examples
///
/// ```
/// use pointmass::trail::Trail;
/// use nalgebra::Point3;
///
/// let mut trail = Trail::new(8, 2);
/// for i in 0..6 {
///     trail.record(Point3::new(i as f64, 0.0, 0.0));
/// }
///
/// // Every 2nd offered position is stored: x = 1, 3, 5
/// assert_eq!(trail.len(), 3);
/// assert_eq!(trail.latest(), Some(&Point3::new(5.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Trail {
    /// Stored samples, at most `capacity`
    samples: Vec<Point3<f64>>,
    /// Index of the oldest sample once the buffer is full
    head: usize,
    /// Maximum retained samples
    capacity: usize,
    /// Store one position per this many `record` calls
    stride: u32,
    /// Calls since the last stored sample
    counter: u32,
}

impl Trail {
    /// Creates an empty trail.
    ///
    /// A `stride` of 0 is treated as 1 (store every offered position).
    /// A `capacity` of 0 stores nothing.
    pub fn new(capacity: usize, stride: u32) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            head: 0,
            capacity,
            stride: stride.max(1),
            counter: 0,
        }
    }

    /// Offers a position to the trail.
    ///
    /// Stores it only when the sampling counter reaches the stride;
    /// otherwise only the counter advances. Once `capacity` samples are
    /// held, storing a new one overwrites the oldest.
    pub fn record(&mut self, position: Point3<f64>) {
        self.counter += 1;
        if self.counter < self.stride {
            return;
        }
        self.counter = 0;

        if self.capacity == 0 {
            return;
        }
        if self.samples.len() < self.capacity {
            self.samples.push(position);
        } else {
            self.samples[self.head] = position;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sampling stride.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Most recently stored position, if any.
    pub fn latest(&self) -> Option<&Point3<f64>> {
        let n = self.samples.len();
        if n == 0 {
            return None;
        }
        Some(&self.samples[(self.head + n - 1) % n])
    }

    /// Iterates over stored positions from oldest to newest.
    ///
    /// This is the order a renderer draws a trail in.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        let n = self.samples.len();
        (0..n).map(move |i| &self.samples[(self.head + i) % n])
    }
}
