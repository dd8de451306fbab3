extern crate cubic_curve;

use cubic_curve::{Curve2d, HermiteSpline, Vec2};

fn main() {

    let positions = vec![
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(4.0, 3.0),
        Vec2::new(5.0, 1.0),
        Vec2::new(6.0, 1.0)
    ];

    let spline = HermiteSpline::catmull_rom(vec![], positions).unwrap();

    let (t_min, t_max) = spline.domain();
    let number_of_steps = 50;
    let step = (t_max - t_min) / number_of_steps as f64;

    println!("t;x;y");
    for i in 0..=number_of_steps {
        let t = t_min + step * i as f64;
        let point = spline.at(t).unwrap();
        println!("{:.2};{:.3};{:.3}", t, point.x, point.y);
    }
}
