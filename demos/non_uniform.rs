extern crate cubic_curve;

use cubic_curve::{CardinalTangents, Curve2d, HermiteSpline, NaturalTangents, Vec2};

fn main() {

    // knots roughly follow distance between vertices
    let knots = vec![0.0, 2.2, 3.6, 7.2, 9.4, 10.4];
    let positions = vec![
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(4.0, 3.0),
        Vec2::new(5.0, 1.0),
        Vec2::new(6.0, 1.0)
    ];

    let mut spline = HermiteSpline::with_tangent_finder(knots, CardinalTangents::new(0.2), positions).unwrap();
    let cardinal = spline.sample(50).unwrap();

    spline.set_tangent_finder(NaturalTangents).unwrap();
    let natural = spline.sample(50).unwrap();

    println!("cardinal_x;cardinal_y;natural_x;natural_y");
    for (c, n) in cardinal.iter().zip(natural.iter()) {
        println!("{:.3};{:.3};{:.3};{:.3}", c.x, c.y, n.x, n.y);
    }
}
