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

    let spline = HermiteSpline::natural(vec![], positions).unwrap();

    println!("vertex;entry_x;entry_y;exit_x;exit_y");
    for (i, vertex) in spline.vertices().iter().enumerate() {
        println!(
            "{};{:.3};{:.3};{:.3};{:.3}",
            i,
            vertex.entry_tangent().x,
            vertex.entry_tangent().y,
            vertex.exit_tangent().x,
            vertex.exit_tangent().y
        );
    }

    println!("x;y");
    for point in spline.sample(50).unwrap() {
        println!("{:.3};{:.3}", point.x, point.y);
    }
}
