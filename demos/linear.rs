extern crate interp1d;

use interp1d::{InterpolationOptions, Interpolator};

fn main() {

    let x_min = 0.0;
    let x_max = 9.0;

    // unsorted samples of exp(x)
    let x = vec![3.0, 0.0, 9.0, 1.0, 7.0, 2.0, 5.0, 8.0, 4.0, 6.0];
    let y: Vec<f64> = x.iter().map(|v: &f64| v.exp()).collect();

    let linear = Interpolator::from_slices(&x, &y, InterpolationOptions::linear()).unwrap();

    let number_of_steps = 45;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();
    let result = linear.interpolate(&x_vector).unwrap();

    println!("x;y");
    for (x, y) in x_vector.iter().zip(result.scalars().unwrap()) {
        println!("{:.2};{:.3}", x, y);
    }
}
