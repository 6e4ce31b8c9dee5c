use glide::{BezierPath, LoopMode, PathTween, Point2, Transition};

// Steps a tween along an S-shaped path at a fixed tick, printing the frame
// that a scheduler would write onto its target's transform each update.
fn main() -> Result<(), glide::Error> {
    let mut path = BezierPath::new();
    path.add_cubic(
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 3.0),
        Point2::new(4.0, 3.0),
        Point2::new(4.0, 0.0),
    );
    path.add_cubic(
        Point2::new(4.0, 0.0),
        Point2::new(4.0, -3.0),
        Point2::new(8.0, -3.0),
        Point2::new(8.0, 0.0),
    );

    let mut tween = PathTween::new(path, 2.0)?
        .with_transition(Transition::EaseInOut)
        .with_loop_mode(LoopMode::None)
        .with_delay(0.2)
        .with_angle_update(0.0);

    println!("t(s)    u       x       y       angle(deg)");
    let dt = 0.1;
    loop {
        let progress = tween.advance(dt);
        let frame = tween.frame()?;
        let degrees = frame.angle.unwrap_or(0.0).to_degrees();
        println!(
            "{:>4.1}  {:>5.3}  {:>6.3}  {:>6.3}  {:>9.2}",
            tween.elapsed(),
            progress.u,
            frame.position.x,
            frame.position.y,
            degrees
        );
        if progress.done {
            break;
        }
    }

    Ok(())
}
