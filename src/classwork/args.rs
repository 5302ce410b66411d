use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "classwork")]
#[command(about = "Room pricing, product filters and a student roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $CLASSWORK_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a room with optional amenities
    #[command(alias = "r")]
    Room {
        /// Room class: economy, standard or luxury
        class: String,

        /// Amenity to add, innermost first (internet, sofa, food-delivery, breakfast, dinner)
        #[arg(short = 'w', long = "with", value_name = "AMENITY")]
        amenities: Vec<String>,
    },

    /// Filter a product catalogue
    #[command(alias = "p")]
    Products {
        /// JSON catalogue file (defaults to the built-in sample)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Keep only products from this manufacturer
        #[arg(short, long)]
        manufacturer: Option<String>,

        /// Keep only products at or below this effective price
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Manage the student roster
    #[command(subcommand)]
    Students(StudentCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (students-file, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Add a student to the roster
    #[command(alias = "a")]
    Add {
        surname: String,
        name: String,
        faculty: String,
        course: u8,
        group: String,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Show one student by position (e.g. 1)
    #[command(alias = "v")]
    Show { index: usize },
}
