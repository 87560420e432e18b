//! Pasteboard reading demo.

use pastepeek_pasteboard::{PasteboardItem, PasteboardSource, SystemSource};

fn main() {
    println!("Reading pasteboard...");
    let mut source = match SystemSource::general() {
        Ok(source) => source,
        Err(err) => {
            println!("Pasteboard unavailable: {err}");
            return;
        }
    };

    match source.items() {
        Ok(items) if items.is_empty() => println!("Pasteboard is empty."),
        Ok(items) => {
            for item in &items {
                for ty in item.types() {
                    match item.data_for_type(&ty) {
                        Some(data) => println!("{ty}: {} bytes", data.len()),
                        None => println!("{ty}: no value registered"),
                    }
                }
            }
        }
        Err(err) => println!("Failed to read pasteboard: {err}"),
    }
}
