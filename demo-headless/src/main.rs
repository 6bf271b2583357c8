use clap::Parser;
use std::f64::consts::PI;
use vec3_core::{distance, from_spherical, lerp, weighted_average, Vec3};

/// Swarm rendezvous demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "vec3-demo")]
#[command(about = "Headless swarm rendezvous demo", long_about = None)]
struct Args {
    /// Number of points seeded on the sphere
    #[arg(short, long, default_value_t = 16)]
    points: usize,

    /// Seeding sphere radius
    #[arg(short, long, default_value_t = 100.0)]
    radius: f64,

    /// Maximum step length per iteration
    #[arg(short, long, default_value_t = 4.0)]
    step: f64,

    /// Blend factor toward the capped step (1 = full step)
    #[arg(short, long, default_value_t = 1.0)]
    blend: f64,

    /// Number of iterations
    #[arg(short = 'n', long, default_value_t = 80)]
    iterations: usize,

    /// Report interval in iterations
    #[arg(long, default_value_t = 10)]
    report_interval: usize,
}

fn main() {
    let args = Args::parse();

    // Golden-spiral seeding gives near-even coverage of the sphere.
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    let mut points: Vec<Vec3> = (0..args.points)
        .map(|i| {
            let frac = (i as f64 + 0.5) / args.points as f64;
            let polar = (1.0 - 2.0 * frac).acos();
            let azimuth = golden_angle * i as f64;
            from_spherical(args.radius, polar, azimuth)
        })
        .collect();

    // Heavier points pull the rendezvous point toward themselves.
    let masses: Vec<f64> = (0..args.points).map(|i| 1.0 + (i % 3) as f64).collect();

    println!(
        "Seeded {} points on a sphere of radius {}",
        args.points, args.radius
    );

    for iteration in 1..=args.iterations {
        let target = weighted_average(&points, &masses);
        for point in &mut points {
            let advance = (target - *point).capped(args.step);
            *point = lerp(*point, *point + advance, args.blend);
        }

        if iteration % args.report_interval == 0 || iteration == args.iterations {
            let target = weighted_average(&points, &masses);
            let mean_distance = points.iter().map(|&p| distance(p, target)).sum::<f64>()
                / args.points as f64;
            println!("iteration {iteration:4}: mean distance to rendezvous {mean_distance:10.4}");
        }
    }

    let meeting = weighted_average(&points, &masses);
    println!(
        "Rendezvous point {} (magnitude {:.4}, azimuth {:.4} rad, polar {:.4} rad)",
        meeting,
        meeting.magnitude(),
        meeting.azimuth(),
        meeting.polar()
    );
}
