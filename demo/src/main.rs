use anyhow::Result;
use containers::{DoublyLinkedList, DynamicArray};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut array = DynamicArray::new();
    fill_array(&mut array, &mut rng, &cli)?;
    println!("array list:\n{array}");
    println!("{}", array.count());
    info!("sorting {} elements with {} sort", array.count(), array.sort_strategy());
    array.sort();
    println!("sorted array list:\n{array}");
    array.clear();
    println!("cleared array list:\n{array}");

    let mut list = DoublyLinkedList::new();
    fill_list(&mut list, &mut rng, &cli);
    println!("linked list:\n{list}");
    list.sort();
    println!("sorted linked list:\n{list}");
    list.clear();
    println!("cleared linked list:\n{list}");

    Ok(())
}

/// Inserts a random number of random values, each at the head.
fn fill_array(array: &mut DynamicArray<u32>, rng: &mut impl Rng, cli: &Cli) -> Result<()> {
    let len = rng.random_range(0..=cli.max_len);
    for _ in 0..len {
        array.insert(rng.random_range(0..=cli.max_value), 0)?;
    }
    info!("filled array with {len} values");
    Ok(())
}

/// Appends a random number of random values.
fn fill_list(list: &mut DoublyLinkedList<u32>, rng: &mut impl Rng, cli: &Cli) {
    let len = rng.random_range(0..=cli.max_len);
    for _ in 0..len {
        list.append(rng.random_range(0..=cli.max_value));
    }
    info!("filled linked list with {len} values");
}
