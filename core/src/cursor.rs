/// Eases a decorative element toward the last known pointer position.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    x: f64,
    y: f64,
    pointer: Option<(f64, f64)>,
    ease: f64,
}

impl CursorFollower {
    pub fn new(ease: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            pointer: None,
            ease: ease.clamp(0.01, 1.0),
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.pointer.is_none() {
            // Start on the pointer instead of sliding in from the corner.
            self.x = x;
            self.y = y;
        }
        self.pointer = Some((x, y));
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn step(&mut self) -> Option<(f64, f64)> {
        let (px, py) = self.pointer?;
        self.x += (px - self.x) * self.ease;
        self.y += (py - self.y) * self.ease;
        Some((self.x, self.y))
    }

    pub fn transform(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}
