//! Drawing-mode canvas state.
//!
//! Strokes are accumulated in normalized frame coordinates; compositing
//! onto video frames is the renderer's job. The pen is down while the index
//! finger is up and the middle finger is down.

use crate::landmark::{HandObservation, Point2, INDEX_TIP, MIDDLE_TIP};
use crate::render::Rgb;

/// Pen colors cycled by `cycle_color`.
pub const PALETTE: [Rgb; 5] = [Rgb::GREEN, Rgb::BLUE, Rgb::RED, Rgb::CYAN, Rgb::MAGENTA];

/// One drawn line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: Point2,
    pub to: Point2,
    pub color: Rgb,
}

/// Accumulated freehand drawing for one session.
#[derive(Debug, Clone, Default)]
pub struct DrawingCanvas {
    strokes: Vec<Stroke>,
    last_point: Option<Point2>,
    color_index: usize,
}

impl DrawingCanvas {
    /// Create an empty canvas with the default pen color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one hand observation while in drawing mode.
    ///
    /// Extends the current stroke when the pen is down, otherwise lifts the
    /// pen so the next touch starts a new stroke.
    pub fn observe(&mut self, hand: &HandObservation) {
        let point = Point2::new(hand[INDEX_TIP].x, hand[INDEX_TIP].y);

        if pen_down(hand) {
            if let Some(last) = self.last_point {
                self.strokes.push(Stroke {
                    from: last,
                    to: point,
                    color: self.color(),
                });
            }
            self.last_point = Some(point);
        } else {
            self.last_point = None;
        }
    }

    /// All strokes drawn so far, in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Current pen color.
    pub fn color(&self) -> Rgb {
        PALETTE[self.color_index]
    }

    /// Advance to the next pen color.
    pub fn cycle_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTE.len();
    }

    /// Erase everything and lift the pen.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.last_point = None;
    }

    /// True if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Index finger up (tip above its first joint), middle finger down.
fn pen_down(hand: &HandObservation) -> bool {
    hand[INDEX_TIP].y < hand[INDEX_TIP - 1].y && hand[MIDDLE_TIP].y > hand[MIDDLE_TIP - 1].y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{HandObservation, Landmark, LANDMARK_COUNT};

    fn drawing_hand(x: f32, y: f32) -> HandObservation {
        let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[INDEX_TIP] = Landmark::new(x, y, 0.0);
        points[INDEX_TIP - 1] = Landmark::new(x, y + 0.2, 0.0);
        points[MIDDLE_TIP].y = 0.8; // middle down
        points[MIDDLE_TIP - 1].y = 0.5;
        HandObservation::from_landmarks(points).unwrap()
    }

    fn idle_hand() -> HandObservation {
        let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[INDEX_TIP].y = 0.8; // index down too
        points[INDEX_TIP - 1].y = 0.5;
        points[MIDDLE_TIP].y = 0.8;
        points[MIDDLE_TIP - 1].y = 0.5;
        HandObservation::from_landmarks(points).unwrap()
    }

    #[test]
    fn strokes_connect_consecutive_pen_down_points() {
        let mut canvas = DrawingCanvas::new();
        canvas.observe(&drawing_hand(0.1, 0.3));
        canvas.observe(&drawing_hand(0.2, 0.3));
        canvas.observe(&drawing_hand(0.3, 0.3));

        assert_eq!(canvas.strokes().len(), 2);
        assert_eq!(canvas.strokes()[0].from, Point2::new(0.1, 0.3));
        assert_eq!(canvas.strokes()[1].to, Point2::new(0.3, 0.3));
    }

    #[test]
    fn lifting_the_pen_breaks_the_stroke() {
        let mut canvas = DrawingCanvas::new();
        canvas.observe(&drawing_hand(0.1, 0.3));
        canvas.observe(&idle_hand());
        canvas.observe(&drawing_hand(0.5, 0.3));
        canvas.observe(&drawing_hand(0.6, 0.3));

        // No stroke between 0.1 and 0.5.
        assert_eq!(canvas.strokes().len(), 1);
        assert_eq!(canvas.strokes()[0].from, Point2::new(0.5, 0.3));
    }

    #[test]
    fn color_cycles_through_palette() {
        let mut canvas = DrawingCanvas::new();
        assert_eq!(canvas.color(), Rgb::GREEN);
        for _ in 0..PALETTE.len() {
            canvas.cycle_color();
        }
        assert_eq!(canvas.color(), Rgb::GREEN);
    }

    #[test]
    fn clear_empties_and_lifts() {
        let mut canvas = DrawingCanvas::new();
        canvas.observe(&drawing_hand(0.1, 0.3));
        canvas.observe(&drawing_hand(0.2, 0.3));
        canvas.clear();

        assert!(canvas.is_empty());
        // Next observation starts fresh, no stroke back to the old point.
        canvas.observe(&drawing_hand(0.9, 0.3));
        assert!(canvas.is_empty());
    }
}
