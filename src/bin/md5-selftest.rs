use legacy_md5::{md5_hex, self_test};

fn main() {
    // Check the engine before trusting any output
    if !self_test() {
        println!("Self-test FAILED");
        std::process::exit(1);
    }
    println!("Self-test passed");

    for arg in std::env::args().skip(1) {
        println!("{}  {:?}", md5_hex(&arg), arg);
    }
}
