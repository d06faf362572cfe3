use raylib::prelude::*;

/// Progress (0..1) of a springy pop-in that starts at `start` and lasts
/// `duration`, sampled at `elapsed`. Overshoots slightly before settling.
pub fn spring(elapsed: f32, start: f32, duration: f32) -> f32 {
    let t = elapsed - start;
    if t <= 0.0 {
        0.0
    } else if t >= duration {
        1.0
    } else {
        ease::back_out(t, 0.0, 1.0, duration)
    }
}

/// Eased (cubic out) progress of a fade that has been running for `age`.
pub fn fade(age: f32, duration: f32) -> f32 {
    if age <= 0.0 {
        0.0
    } else if age >= duration {
        1.0
    } else {
        ease::cubic_out(age, 0.0, 1.0, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_is_closed_before_start_and_open_after_end() {
        assert_eq!(spring(0.0, 1.0, 0.5), 0.0);
        assert_eq!(spring(1.0, 1.0, 0.5), 0.0);
        assert_eq!(spring(1.5, 1.0, 0.5), 1.0);
        assert_eq!(spring(9.0, 1.0, 0.5), 1.0);
        assert!(spring(1.25, 1.0, 0.5) > 0.0);
    }

    #[test]
    fn fade_runs_from_zero_to_one() {
        assert_eq!(fade(-1.0, 1.0), 0.0);
        assert_eq!(fade(1.0, 1.0), 1.0);
        let mid = fade(0.5, 1.0);
        assert!(mid > 0.5 && mid < 1.0, "{mid}");
    }
}
