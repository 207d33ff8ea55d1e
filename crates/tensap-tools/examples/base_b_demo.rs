//! Walk a small tensor grid through base-b digit matrices
//!
//! Run with:
//! ```bash
//! cargo run --example base_b_demo -p tensap-tools
//! ```

use anyhow::Result;
use scirs2_core::ndarray_ext::{array, Array1};
use tensap_tools::{baseb2integer, fast_intersect, fast_setdiff, integer2baseb, num_digits};

fn main() -> Result<()> {
    println!("=== Base-b encoding ===\n");

    let values = Array1::from_vec(vec![0u64, 5, 17, 26]);
    let base = 3;
    let digits = num_digits(26, base)?;
    println!("values {:?} need {} digits in base {}", values.to_vec(), digits, base);

    let encoded = integer2baseb(&values.view(), base, None)?;
    for (value, row) in values.iter().zip(encoded.outer_iter()) {
        println!("  {:>3} -> {:?}", value, row.to_vec());
    }

    let decoded = baseb2integer(&encoded.view(), base)?;
    println!("decoded back: {:?}", decoded.to_vec());

    match integer2baseb(&array![27u64].view(), base, Some(digits)) {
        Ok(_) => println!("27 unexpectedly fits"),
        Err(err) => println!("27 with {} digits: {}", digits, err),
    }

    println!("\n=== Set operations ===\n");

    let a = array![1u64, 3, 5, 7];
    let b = array![3u64, 4, 5];
    println!("a = {:?}, b = {:?}", a.to_vec(), b.to_vec());
    println!("a & b = {:?}", fast_intersect(&a.view(), &b.view()).to_vec());
    println!("a - b = {:?}", fast_setdiff(&a.view(), &b.view()).to_vec());

    Ok(())
}
