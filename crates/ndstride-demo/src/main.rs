//! Walkthrough of the four core operations: create, get, iterate, slice.
//!
//! Set `RUST_LOG=debug` to see allocations and view construction.

use ndstride_core::{Result, SliceSpec, StridedArray};

fn main() -> Result<()> {
    env_logger::init();

    let array = StridedArray::create(&[3, 4, 5, 6], 2)?;
    log::info!("created array with shape {:?}", array.shape());
    println!("Original Array:");
    println!("{array}");

    println!("\nIndexing Operation:");
    println!("Element at [1, 2, 3, 4]: {}", array.get(&[1, 2, 3, 4])?);

    println!("\nIterator Operation:");
    let plane = array.select(2, 2)?;
    for (idx, element) in plane.iter().enumerate() {
        println!("Iter[{idx}] = {element}");
    }

    println!("\nSlice Operation:");
    let sliced = array.slice(&[SliceSpec::step(2), SliceSpec::full()])?;
    log::info!(
        "sliced view shape {:?} strides {:?}",
        sliced.shape(),
        sliced.strides()
    );
    println!("Sliced Array:");
    println!("{sliced}");

    Ok(())
}
