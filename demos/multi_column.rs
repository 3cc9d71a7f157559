extern crate interp1d;

use interp1d::{Axis, InterpolationOptions, Interpolator};

fn main() {

    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let columns: Vec<Vec<f64>> = vec![
        x.iter().map(|v| v.exp()).collect(),
        x.iter().map(|v| v * v).collect(),
        x.iter().map(|v| v.cos()).collect(),
    ];

    let all = Interpolator::from_columns(&x, &columns, InterpolationOptions::cubic().axis(Axis::All)).unwrap();
    let cosine = Interpolator::from_columns(&x, &columns, InterpolationOptions::cubic().axis(Axis::Index(2))).unwrap();

    let queries = vec![0.5, 2.5, 4.0, 6.7, 8.6];
    let matrix = all.interpolate(&queries).unwrap().into_matrix();
    let cosines = cosine.interpolate(&queries).unwrap().scalars().unwrap();

    println!("x;exp;square;cos;cos_only");
    for (row, x) in queries.iter().enumerate() {
        println!(
            "{:.2};{:.3};{:.3};{:.3};{:.3}",
            x,
            matrix[(row, 0)],
            matrix[(row, 1)],
            matrix[(row, 2)],
            cosines[row]
        );
    }
}
