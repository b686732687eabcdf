// This binary crate is intentionally minimal.
// All classifier logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example blobs
fn main() {
    println!("ferrite-svm: a from-scratch multiclass linear SVM in Rust.");
    println!("Run `cargo run --example blobs` to see the demo.");
}
