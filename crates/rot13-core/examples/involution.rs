//! Demonstrates decoding a ROT13 string and the round-trip property.

use rot13_core::rot13;

fn main() {
    let encoded = "Uryyb, Jbeyq!";
    let decoded = rot13(encoded);
    assert_eq!(decoded, "Hello, World!");
    assert_eq!(rot13(&decoded), encoded);

    println!("example succeeded; {encoded:?} decodes to {decoded:?}");
}
