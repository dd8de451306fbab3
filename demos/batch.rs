extern crate cubic_curve;

use cubic_curve::{HermiteSpline, Vec2};

fn main() {

    let t_min = 0.0;
    let t_max = 5.0;

    let positions = vec![
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(4.0, 3.0),
        Vec2::new(5.0, 1.0),
        Vec2::new(6.0, 1.0)
    ];

    let spline = HermiteSpline::natural(vec![], positions).unwrap();

    let number_of_steps = 50;
    let step = (t_max - t_min) / number_of_steps as f64;

    let mut t_vector = Vec::new();

    for i in 0..=number_of_steps {
        t_vector.push(t_min + step * i as f64);
    }

    let result = spline.batch_at(&t_vector).unwrap();

    println!("t;x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.3};{:.3}", t_vector[i], result[i].x, result[i].y);
    }
}
