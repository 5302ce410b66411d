use clap::Parser;
use classwork::api::{
    ClassworkApi, CmdMessage, ConfigAction, DisplayStudent, MessageLevel, ProductQuery, RoomQuote,
};
use classwork::config::{ClassworkConfig, KEYS};
use classwork::error::{ClassworkError, Result};
use classwork::products::{Product, ProductCollection};
use classwork::store::fs::FileStore;
use classwork::students::Student;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, StudentCommands};

const HOME_ENV: &str = "CLASSWORK_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ClassworkApi<FileStore>,
    config: ClassworkConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Room { class, amenities } => handle_room(&ctx, &class, &amenities),
        Commands::Products {
            file,
            manufacturer,
            max_price,
        } => handle_products(&ctx, file, manufacturer, max_price),
        Commands::Students(StudentCommands::Add {
            surname,
            name,
            faculty,
            course,
            group,
        }) => handle_student_add(
            &mut ctx,
            Student::new(surname, name, faculty, course, group),
        ),
        Commands::Students(StudentCommands::List) => handle_student_list(&ctx),
        Commands::Students(StudentCommands::Show { index }) => handle_student_show(&ctx, index),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn resolve_home(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "classwork", "classwork")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ClassworkError::Api("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli)?;
    let config = ClassworkConfig::load(&home)?;
    let students_path = config.students_path(&home);
    debug!(home = %home.display(), roster = %students_path.display(), "resolved paths");

    let store = FileStore::new(students_path);
    let api = ClassworkApi::new(store, home);
    Ok(AppContext { api, config })
}

fn handle_room(ctx: &AppContext, class: &str, amenities: &[String]) -> Result<()> {
    let result = ctx.api.quote_room(class, amenities)?;
    if let Some(quote) = &result.quote {
        print_quote(quote, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_products(
    ctx: &AppContext,
    file: Option<PathBuf>,
    manufacturer: Option<String>,
    max_price: Option<f64>,
) -> Result<()> {
    let collection = match file {
        Some(path) => ProductCollection::load(path)?,
        None => ProductCollection::demo(),
    };
    let query = ProductQuery {
        manufacturer,
        max_price,
    };
    let result = ctx.api.filter_products(&collection, &query)?;
    print_products(&result.products, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_student_add(ctx: &mut AppContext, student: Student) -> Result<()> {
    let result = ctx.api.add_student(student)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_student_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_students()?;
    print_students(&result.listed_students);
    print_messages(&result.messages);
    Ok(())
}

fn handle_student_show(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.show_student(index)?;
    for dp in &result.listed_students {
        print!("{}", dp.student);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LABEL_WIDTH: usize = 32;

fn print_quote(quote: &RoomQuote, currency: &str) {
    println!("{}", quote.description.bold());
    println!("--------------------------------------------");
    for (i, line) in quote.lines.iter().enumerate() {
        let amount = if i == 0 {
            format!("{}", line.amount)
        } else {
            format!("+{}", line.amount)
        };
        println!(
            "{}{:>8} {}",
            pad_to_width(&line.label, LABEL_WIDTH),
            amount,
            currency
        );
    }
    println!("--------------------------------------------");
    println!(
        "{}{:>8} {}",
        pad_to_width("Итого", LABEL_WIDTH),
        quote.price.to_string().yellow(),
        currency
    );
}

fn print_products(products: &[Product], currency: &str) {
    for product in products {
        let price = match product.selling_price {
            Some(selling) => format!(
                "{} {} {}",
                product.list_price.to_string().strikethrough(),
                selling.to_string().green(),
                currency
            ),
            None => format!("{} {}", product.list_price, currency),
        };
        println!(
            "{}{}{}",
            pad_to_width(&product.name, 16),
            pad_to_width(&product.manufacturer, 20).dimmed(),
            price
        );
    }
}

fn print_students(students: &[DisplayStudent]) {
    for dp in students {
        let idx = format!("{}. ", dp.index);
        println!(
            "{}{}{}  {}",
            idx.yellow(),
            pad_to_width(&dp.student.full_name(), 28),
            dp.student.faculty,
            format!("{} курс, гр. {}", dp.student.course, dp.student.group).dimmed()
        );
    }
}

/// Right-pads by display width so Cyrillic and ASCII columns line up.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
