use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use billed::{
    bill::{NewBill, create_bill},
    initialize_db,
};

/// A utility for creating a test database for the Billed server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The email of the employee who owns the test bills.
    #[arg(long, short, default_value = "employee@test.tld")]
    email: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test bills for {}...", args.email);

    for bill in test_bills(&args.email) {
        let bill = create_bill(bill, &conn)?;
        println!("  {} {} ({})", bill.date, bill.name, bill.status);
    }

    println!("Success!");

    Ok(())
}

fn test_bills(email: &str) -> Vec<NewBill> {
    let bill = |bill_type: &str, name: &str, amount: f64, date: &str, status: &str| NewBill {
        email: email.to_owned(),
        bill_type: bill_type.to_owned(),
        name: name.to_owned(),
        amount,
        date: date.to_owned(),
        status: status.to_owned(),
        commentary: Some("séminaire billed".to_owned()),
        file_url: Some("https://test.storage.tld/receipts/preview-facture-free.jpg".to_owned()),
        file_name: Some("preview-facture-free.jpg".to_owned()),
        vat: Some("70".to_owned()),
        pct: Some(20),
    };

    vec![
        bill("Hôtel et logement", "encore", 400.0, "2004-04-04", "pending"),
        bill("Transports", "test1", 100.0, "2001-01-01", "refused"),
        bill("Services en ligne", "test3", 300.0, "2003-03-03", "accepted"),
        bill("Restaurants et bars", "test2", 200.0, "2002-02-02", "refused"),
        bill("Transports", "date invalide", 50.0, "pas une date", "pending"),
    ]
}
