//! X-Direction Flips
//!
//! Counts local direction reversals along the x axis. A flip is a committed
//! change of direction: the walk keeps a pointer to the last sample that
//! differed (the running extremum) and a flag for the current direction.
//! The first committed direction establishes the flag without counting, so
//! the count covers reversals after the initial move, not the move itself.
//! Equal consecutive values are not a direction and do not advance the
//! pointer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Increasing,
    Decreasing,
}

/// Count x-direction reversals over a trajectory's x samples
pub fn x_flips(xs: &[f64]) -> u32 {
    let mut count = 0u32;
    let mut direction: Option<Direction> = None;
    let mut anchor = 0usize;

    for i in 1..xs.len() {
        if xs[i] > xs[anchor] {
            match direction {
                Some(Direction::Decreasing) => {
                    count += 1;
                    direction = Some(Direction::Increasing);
                }
                None => direction = Some(Direction::Increasing),
                _ => {}
            }
            anchor = i;
        } else if xs[i] < xs[anchor] {
            match direction {
                Some(Direction::Increasing) => {
                    count += 1;
                    direction = Some(Direction::Decreasing);
                }
                None => direction = Some(Direction::Decreasing),
                _ => {}
            }
            anchor = i;
        }
        // tie: pointer stays, direction unchanged
    }

    count
}
