use winit::event::MouseScrollDelta;

// Trackpads report pixels rather than lines; scale them down to
// line-sized units before accumulating.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Accumulates wheel events between frames.
///
/// Scroll events arrive zero or more times per frame from the window system.
/// They are summed here and drained exactly once per frame by the render
/// loop, which applies the total to the camera angles.
#[derive(Default, Debug, Clone, Copy)]
pub struct ScrollState {
    wheel_x: f32,
    wheel_y: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one winit wheel event into the accumulator.
    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        let (dx, dy) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (*x, *y),
            MouseScrollDelta::PixelDelta(pos) => (
                pos.x as f32 * PIXEL_SCROLL_SCALE,
                pos.y as f32 * PIXEL_SCROLL_SCALE,
            ),
        };
        self.wheel_x += dx;
        self.wheel_y += dy;
    }

    /// Return the accumulated delta and clear it for the next frame.
    pub fn take_wheel(&mut self) -> (f32, f32) {
        let drained = (self.wheel_x, self.wheel_y);
        self.wheel_x = 0.0;
        self.wheel_y = 0.0;
        drained
    }
}
