use clap::Parser;
use icy_infostring::{InfoString, limits::MAX_AGGREGATED_INFO_STRING};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

/// Print the entries of an info string
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Info string to print, e.g. "\name\Player\model\gordon"
    #[arg(value_name = "INFO", required_unless_present = "file")]
    info: Option<String>,

    /// Read the info string from a file instead
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Only print the value of this key
    #[arg(short, long)]
    key: Option<String>,

    /// Remove all keys starting with this character before printing
    #[arg(short = 'x', long)]
    strip_prefix: Option<char>,

    /// Show validity and size details
    #[arg(short = 'r', long)]
    raw: bool,
}

fn main() {
    let args = Args::parse();

    let data = match (&args.file, &args.info) {
        (Some(path), _) => match fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                eprintln!("Error reading file '{}': {}", path.display(), err);
                process::exit(1);
            }
        },
        (None, Some(info)) => info.clone().into_bytes(),
        (None, None) => unreachable!("clap enforces INFO or --file"),
    };

    let mut info = match InfoString::from_bytes(&data, MAX_AGGREGATED_INFO_STRING) {
        Ok(info) => info,
        Err(err) => {
            eprintln!("Error importing info string: {}", err);
            process::exit(1);
        }
    };

    if let Some(prefix) = args.strip_prefix {
        if !prefix.is_ascii() {
            eprintln!("Prefix must be an ASCII character");
            process::exit(1);
        }
        info.remove_prefixed_keys(prefix as u8);
    }

    if let Some(key) = &args.key {
        match info.get(key) {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("Key '{}' not found", key);
                process::exit(1);
            }
        }
        return;
    }

    if let Err(err) = info.print_to(&mut io::stdout().lock()) {
        eprintln!("Error printing info string: {}", err);
        process::exit(1);
    }

    if args.raw {
        println!();
        println!("{}", "-".repeat(40));
        println!("Valid:          {}", if info.is_valid() { "Yes" } else { "No" });
        println!("Entries:        {}", info.pairs().count());
        println!("Size:           {} / {} bytes", info.len(), info.max_size());
        if let Some(key) = info.find_largest_key() {
            println!("Largest evictable key: {}", key);
        }
    }
}
