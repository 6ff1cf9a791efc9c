use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left: show the next page.
    Next,
    /// Finger moved left to right: show the previous page.
    Prev,
}

/// Single-finger horizontal swipe recognizer shared by the hero carousel and
/// the lightbox.
///
/// A gesture is only considered a swipe once its horizontal travel dominates
/// the vertical one and exceeds the lock distance. From then on the caller
/// should cancel the native scroll. On release the gesture changes page only
/// if the total horizontal travel exceeds the threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    swiping: bool,
    lock_distance: f64,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(config::SWIPE_LOCK_DISTANCE, config::SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(lock_distance: f64, threshold: f64) -> Self {
        Self {
            start: None,
            swiping: false,
            lock_distance,
            threshold,
        }
    }

    /// Returns false and ignores the touch when more than one finger is down.
    pub fn start(&mut self, touches: u32, x: f64, y: f64) -> bool {
        if touches != 1 {
            return false;
        }
        self.start = Some((x, y));
        self.swiping = false;
        true
    }

    /// Returns true when the move belongs to a horizontal swipe and the
    /// default scroll should be prevented.
    pub fn update(&mut self, x: f64, y: f64) -> bool {
        let Some((sx, sy)) = self.start else {
            return false;
        };
        let dx = x - sx;
        let dy = y - sy;
        if dx.abs() > dy.abs() && dx.abs() > self.lock_distance {
            self.swiping = true;
        }
        self.swiping
    }

    /// Finishes the gesture. `end_x` is the release position, if known.
    pub fn end(&mut self, end_x: Option<f64>) -> Option<SwipeDirection> {
        let (sx, _) = self.start.take()?;
        let swiping = std::mem::take(&mut self.swiping);
        let dx = end_x.unwrap_or(sx) - sx;
        if swiping && dx.abs() > self.threshold {
            Some(if dx < 0.0 { SwipeDirection::Next } else { SwipeDirection::Prev })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(points: &[(f64, f64)]) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::default();
        let (x0, y0) = points[0];
        tracker.start(1, x0, y0);
        for &(x, y) in &points[1..] {
            tracker.update(x, y);
        }
        tracker.end(points.last().map(|p| p.0))
    }

    #[test]
    fn left_swipe_goes_next() {
        assert_eq!(gesture(&[(200.0, 100.0), (170.0, 102.0), (120.0, 104.0)]), Some(SwipeDirection::Next));
    }

    #[test]
    fn right_swipe_goes_prev() {
        assert_eq!(gesture(&[(100.0, 100.0), (130.0, 100.0), (180.0, 95.0)]), Some(SwipeDirection::Prev));
    }

    #[test]
    fn short_swipe_is_ignored() {
        assert_eq!(gesture(&[(100.0, 100.0), (115.0, 100.0), (140.0, 100.0)]), None);
    }

    #[test]
    fn vertical_drag_is_ignored() {
        assert_eq!(gesture(&[(100.0, 100.0), (90.0, 200.0), (40.0, 300.0)]), None);
    }

    #[test]
    fn multi_touch_does_not_start() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.start(2, 0.0, 0.0));
        assert!(!tracker.update(-100.0, 0.0));
        assert_eq!(tracker.end(Some(-100.0)), None);
    }

    #[test]
    fn state_resets_after_end() {
        let mut tracker = SwipeTracker::default();
        tracker.start(1, 200.0, 0.0);
        assert!(tracker.update(100.0, 0.0));
        assert_eq!(tracker.end(Some(100.0)), Some(SwipeDirection::Next));
        assert_eq!(tracker.start, None);
        tracker.start(1, 200.0, 0.0);
        assert_eq!(tracker.end(Some(100.0)), None);
    }
}
