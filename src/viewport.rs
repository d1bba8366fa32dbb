use common::{Point, Bounds};

/// Maps between world coordinates and window pixels.
///
/// Pixel origin is the top left corner with `y` growing downwards, world
/// origin is wherever `bounds` put it with `y` growing upwards.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub bounds: Bounds,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(bounds: Bounds, width: u32, height: u32) -> Viewport {
        Viewport { bounds, width, height, }
    }

    /// Zero sized windows (minimized) keep the previous size. Returns whether
    /// the size was applied.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        let width = self.width as f64;
        let height = self.height as f64;
        Point {
            x: screen_x / width * self.bounds.width() + self.bounds.x_min,
            y: (height - screen_y) / height * self.bounds.height() + self.bounds.y_min,
        }
    }

    pub fn to_screen(&self, point: &Point) -> [f64; 2] {
        let width = self.width as f64;
        let height = self.height as f64;
        [
            (point.x - self.bounds.x_min) / self.bounds.width() * width,
            height - (point.y - self.bounds.y_min) / self.bounds.height() * height,
        ]
    }

    /// Screen space `[x0, y0, x1, y1]` line between two world points.
    pub fn line(&self, src: &Point, dst: &Point) -> [f64; 4] {
        let [x0, y0] = self.to_screen(src);
        let [x1, y1] = self.to_screen(dst);
        [x0, y0, x1, y1]
    }
}
