use intersect;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y, }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn new(src: Point, dst: Point) -> Segment {
        Segment { src, dst, }
    }

    pub fn intersects(&self, other: &Segment) -> bool {
        intersect::intersects(self.src, self.dst, other.src, other.dst)
    }
}

/// World coordinates rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x_min && point.x <= self.x_max &&
            point.y >= self.y_min && point.y <= self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Segment, Bounds};

    #[test]
    fn segment_intersects_delegates() {
        let a = Segment::new(Point::new(0., 0.), Point::new(2., 2.));
        let b = Segment::new(Point::new(0., 2.), Point::new(2., 0.));
        let c = Segment::new(Point::new(5., 5.), Point::new(6., 5.));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn bounds_contains_edges() {
        let bounds = Bounds { x_min: -1., x_max: 1., y_min: -2., y_max: 2., };
        assert!(bounds.contains(&Point::new(-1., 2.)));
        assert!(bounds.contains(&Point::new(0., 0.)));
        assert!(!bounds.contains(&Point::new(1.5, 0.)));
        assert!(!bounds.contains(&Point::new(0., -2.5)));
        assert_eq!(bounds.width(), 2.);
        assert_eq!(bounds.height(), 4.);
    }
}
