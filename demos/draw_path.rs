extern crate plotters;
use plotters::prelude::*;

extern crate glide;
use glide::{BezierPath, Point2};

// Rasterizes a two-segment path and overlays sample points taken with the
// raw parameter t against points taken with the arc-length parameter u,
// to make the even spacing of the mapped queries visible.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut path = BezierPath::new();
    path.add_cubic(
        Point2::new(0.0, 0.0),
        Point2::new(0.2, 2.4),
        Point2::new(2.6, 2.4),
        Point2::new(3.0, 0.0),
    );
    path.add_quadratic(
        Point2::new(3.0, 0.0),
        Point2::new(4.0, -2.2),
        Point2::new(5.5, 0.5),
    );

    println!("path length (approx): {:.4}", path.length());

    // flatten the path for the background line
    let polyline: Vec<(f64, f64)> = path
        .polyline(200)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();

    let nsamples = 24;
    let mut raw_samples: Vec<(f64, f64)> = Vec::with_capacity(nsamples + 1);
    let mut even_samples: Vec<(f64, f64)> = Vec::with_capacity(nsamples + 1);
    for i in 0..=nsamples {
        let s = i as f64 / nsamples as f64;
        let raw = path.eval(s)?;
        let even = path.position(s)?;
        raw_samples.push((raw.x, raw.y));
        even_samples.push((even.x, even.y));
    }

    let root = BitMapBackend::new("bezier_path_sampling.png", (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "raw t samples (blue) vs arc-length u samples (red)",
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-0.5f64..6.0f64, -2.5f64..3.0f64)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(polyline, &BLACK))?
        .label("path");

    chart
        .draw_series(
            raw_samples
                .iter()
                .map(|&coord| Circle::new(coord, 4, BLUE.filled())),
        )?
        .label("B(t)");

    chart
        .draw_series(
            even_samples
                .iter()
                .map(|&coord| Circle::new(coord, 4, RED.filled())),
        )?
        .label("B(map(u))");

    root.present()?;
    println!("wrote bezier_path_sampling.png");

    Ok(())
}
