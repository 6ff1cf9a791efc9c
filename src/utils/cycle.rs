/// Moves `index` by `delta` positions around a ring of `len` slots.
/// A ring of zero slots behaves like a ring of one, so the result is always 0.
pub fn step(index: usize, delta: isize, len: usize) -> usize {
    let len = len.max(1) as isize;
    ((index as isize % len + delta % len + len) % len) as usize
}

pub fn next(index: usize, len: usize) -> usize {
    step(index, 1, len)
}

pub fn prev(index: usize, len: usize) -> usize {
    step(index, -1, len)
}

/// Slot the carousel should advance to when its countdown fires, or `None`
/// when no countdown should run: while paused, or with nothing to rotate.
pub fn autoplay_target(current: usize, paused: bool, len: usize) -> Option<usize> {
    (!paused && len > 1).then(|| next(current, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways_for_every_length() {
        for len in 1..=12 {
            assert_eq!(next(len - 1, len), 0);
            assert_eq!(prev(0, len), len - 1);
            for i in 0..len {
                assert_eq!(prev(next(i, len), len), i);
            }
        }
    }

    #[test]
    fn empty_ring_stays_at_zero() {
        assert_eq!(next(0, 0), 0);
        assert_eq!(prev(0, 0), 0);
    }

    #[test]
    fn large_jumps_wrap() {
        assert_eq!(step(2, 7, 5), 4);
        assert_eq!(step(0, -6, 5), 4);
    }

    #[test]
    fn autoplay_stops_while_paused() {
        assert_eq!(autoplay_target(1, true, 3), None);
        assert_eq!(autoplay_target(1, false, 3), Some(2));
    }

    #[test]
    fn autoplay_restarts_from_the_new_index() {
        // A manual jump to the last slide makes the next countdown wrap.
        assert_eq!(autoplay_target(0, false, 3), Some(1));
        assert_eq!(autoplay_target(2, false, 3), Some(0));
    }

    #[test]
    fn single_slide_never_autoplays() {
        assert_eq!(autoplay_target(0, false, 1), None);
        assert_eq!(autoplay_target(0, false, 0), None);
    }
}
