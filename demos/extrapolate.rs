extern crate cubic_curve;

use cubic_curve::{HermiteSpline, Vec2};

fn main() {

    let positions = vec![
        Vec2::new(1.0, 1.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(3.0, -2.0),
        Vec2::new(4.0, 1.0),
        Vec2::new(5.0, 1.0)
    ];

    let spline = HermiteSpline::catmull_rom(vec![1.0, 2.0, 3.0, 4.0, 5.0], positions).unwrap();

    let t_min = 0.0;
    let t_max = 6.0;
    let number_of_steps = 60;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;x;y");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        let point = spline.extrapolate(t).unwrap();
        println!("{:.2};{:.3};{:.3}", t, point.x, point.y);
    }
}
