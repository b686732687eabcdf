use ferrite_svm::{LinearSvm, LossVariant, Matrix, Sgd, TrainConfig};
use rand::prelude::*;

/// Three gaussian-ish blobs in the plane, one per class. Every example gets
/// a trailing constant 1.0 so the classifier can learn a bias.
fn make_blobs(per_class: usize, rng: &mut ThreadRng) -> (Matrix, Vec<usize>) {
    let centers = [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)];
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (class, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..per_class {
            let dx: f64 = rng.gen::<f64>() + rng.gen::<f64>() - 1.0;
            let dy: f64 = rng.gen::<f64>() + rng.gen::<f64>() - 1.0;
            rows.push(vec![cx + dx, cy + dy, 1.0]);
            labels.push(class);
        }
    }
    (Matrix::from_data(rows), labels)
}

fn main() {
    let mut rng = rand::thread_rng();
    let (inputs, labels) = make_blobs(100, &mut rng);

    let mut svm = LinearSvm::new(3, 3);
    let optimizer = Sgd::new(0.05);
    let config = TrainConfig::new(1500, 32, 1e-4, LossVariant::Batch);

    let history = svm.train(&inputs, &labels, &optimizer, &config);

    for (iteration, loss) in history.iter().enumerate() {
        if iteration % 150 == 0 {
            println!("Iteration {iteration}: loss = {loss:.6}");
        }
    }

    let predictions = svm.predict(&inputs);
    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(p, y)| p == y)
        .count();
    println!(
        "Training accuracy: {:.1}%",
        100.0 * correct as f64 / labels.len() as f64
    );
}
