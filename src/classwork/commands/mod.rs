use crate::config::ClassworkConfig;
use crate::products::Product;
use crate::students::Student;

pub mod catalog;
pub mod config;
pub mod quote;
pub mod roster;

pub use quote::{QuoteLine, RoomQuote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A student together with its 1-based position in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStudent {
    pub index: usize,
    pub student: Student,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub quote: Option<RoomQuote>,
    pub products: Vec<Product>,
    pub listed_students: Vec<DisplayStudent>,
    pub config: Option<ClassworkConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_quote(mut self, quote: RoomQuote) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<DisplayStudent>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_config(mut self, config: ClassworkConfig) -> Self {
        self.config = Some(config);
        self
    }
}
