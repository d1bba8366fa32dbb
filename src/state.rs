use rand::Rng;

use common::{Point, Segment, Bounds};
use viewport::Viewport;

pub const MAX_POINTS: usize = 4;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Stage {
    Empty,
    Seg1Partial,
    Seg1Complete,
    Seg2Partial,
    Seg2Complete,
}

impl Stage {
    pub fn from_count(count: usize) -> Stage {
        match count {
            0 => Stage::Empty,
            1 => Stage::Seg1Partial,
            2 => Stage::Seg1Complete,
            3 => Stage::Seg2Partial,
            _ => Stage::Seg2Complete,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Event {
    /// Pointer press in window pixels.
    PointerPress { x: f64, y: f64, },
    Randomize,
    Clear,
    Resize { width: u32, height: u32, },
}

#[derive(Debug)]
pub struct State {
    viewport: Viewport,
    points: Vec<Point>,
    intersected: bool,
}

impl State {
    pub fn new(viewport: Viewport) -> State {
        State {
            viewport,
            points: Vec::with_capacity(MAX_POINTS),
            intersected: false,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn bounds(&self) -> &Bounds {
        &self.viewport.bounds
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn intersected(&self) -> bool {
        self.intersected
    }

    pub fn stage(&self) -> Stage {
        Stage::from_count(self.points.len())
    }

    /// Segments completed so far, first one is built from points 0 and 1.
    pub fn segments(&self) -> Vec<Segment> {
        self.points.chunks(2)
            .filter(|pair| pair.len() == 2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect()
    }

    pub fn handle_event<R>(&mut self, event: Event, rng: &mut R) where R: Rng {
        match event {
            Event::PointerPress { x, y, } => {
                let point = self.viewport.to_world(x, y);
                self.add_point(point);
            },
            Event::Randomize =>
                self.randomize(rng),
            Event::Clear =>
                self.clear(),
            Event::Resize { width, height, } =>
                if !self.viewport.resize(width, height) {
                    debug!("ignoring {}x{} resize", width, height);
                },
        }
    }

    /// Appends a point unless both segments are already complete. Returns
    /// whether the point was taken.
    pub fn add_point(&mut self, point: Point) -> bool {
        if self.points.len() >= MAX_POINTS {
            return false;
        }
        self.points.push(point);
        debug!("point #{} added at ({}, {})", self.points.len(), point.x, point.y);
        if self.points.len() == MAX_POINTS {
            self.check_intersection();
        }
        true
    }

    /// Fills the remaining slots with points drawn uniformly from the bounds.
    pub fn randomize<R>(&mut self, rng: &mut R) where R: Rng {
        if self.stage() == Stage::Seg2Complete {
            return;
        }
        let bounds = self.viewport.bounds;
        for _ in 0 .. MAX_POINTS {
            let point = Point {
                x: rng.gen_range(bounds.x_min, bounds.x_max),
                y: rng.gen_range(bounds.y_min, bounds.y_max),
            };
            debug_assert!(bounds.contains(&point));
            self.add_point(point);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.intersected = false;
        debug!("points cleared");
    }

    pub fn check_intersection(&mut self) {
        if self.points.len() != MAX_POINTS {
            warn!("invalid point count for two segments: {} instead of {}", self.points.len(), MAX_POINTS);
            return;
        }
        let first = Segment::new(self.points[0], self.points[1]);
        let second = Segment::new(self.points[2], self.points[3]);
        self.intersected = first.intersects(&second);
        info!("intersected = {}", self.intersected);
    }
}
