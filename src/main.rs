use log::{error, info};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use symbol_histogram::{
    histogram, invert, read_mapping_csv, read_mapping_csv_gz, sort_by_frequency, sort_by_symbol,
    Error,
};

fn main() {
    // Initialize the logger
    env_logger::init();

    // With a path argument, invert the CSV mapping; otherwise count stdin
    let result = match std::env::args().nth(1) {
        Some(path) => print_inverted_csv(Path::new(&path)),
        None => print_stdin_histogram(),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn print_stdin_histogram() -> Result<(), Error> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let frequencies = histogram(&input);
    info!("Counted {} distinct characters", frequencies.len());

    for (symbol, frequency) in sort_by_frequency(&frequencies) {
        println!("{:?}: {}", symbol, frequency);
    }

    println!();

    // Invert in symbol order so each bucket lists its symbols ascending
    let inverse = invert(sort_by_symbol(&frequencies));
    let mut buckets: Vec<_> = inverse.into_iter().collect();
    buckets.sort_by(|a, b| b.0.cmp(&a.0));

    for (frequency, symbols) in buckets {
        let symbols: Vec<String> = symbols.iter().map(|c| format!("{:?}", c)).collect();
        println!("{}: {}", frequency, symbols.join(", "));
    }

    Ok(())
}

fn print_inverted_csv(path: &Path) -> Result<(), Error> {
    let file = BufReader::new(File::open(path)?);

    let entries = if path.extension().map_or(false, |ext| ext == "gz") {
        read_mapping_csv_gz(file)?
    } else {
        read_mapping_csv(file)?
    };
    info!("Loaded {} entries from {:?}", entries.len(), path);

    let mut buckets: Vec<_> = invert(entries).into_iter().collect();
    buckets.sort_by(|a, b| a.0.cmp(&b.0));

    for (value, keys) in buckets {
        println!("{}: {}", value, keys.join(", "));
    }

    Ok(())
}
