extern crate interp1d;

use interp1d::{InterpolationOptions, Interpolator};

fn main() {

    let x_min = 0.0;
    let x_max = 6.0;

    let x = vec![x_min, 1.0, 2.0, 4.0, 5.0, x_max];
    let y = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let options = InterpolationOptions::cubic()
        .sorted(true)
        .first_derivative(0.0)
        .last_derivative(-1.0);
    let spline = Interpolator::from_slices(&x, &y, options).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        let y = spline.interpolate_point(x).unwrap().as_scalar().unwrap();
        println!("{:.2};{:.3}", x, y);
    }
}
