//! # API Facade
//!
//! A thin layer over the command functions and the single entry point for UI
//! clients. It turns loose inputs (room and amenity names, 1-based positions)
//! into typed values, dispatches to `commands/*.rs`, and returns
//! `Result<CmdResult>`. No printing, no formatting, no business logic.
//!
//! `ClassworkApi<S: RosterStore>` is generic over the roster backend:
//! - Production: `ClassworkApi<FileStore>`
//! - Testing: `ClassworkApi<InMemoryStore>`
//!
//! API tests check dispatch and argument handling only; command behaviour is
//! tested next to each command.

use crate::commands;
use crate::error::Result;
use crate::products::ProductCollection;
use crate::rooms::RoomOrder;
use crate::store::RosterStore;
use crate::students::Student;
use std::path::PathBuf;

/// The main API facade.
///
/// All UI clients should interact through this type.
pub struct ClassworkApi<S: RosterStore> {
    store: S,
    home: PathBuf,
}

impl<S: RosterStore> ClassworkApi<S> {
    pub fn new(store: S, home: PathBuf) -> Self {
        Self { store, home }
    }

    pub fn quote_room<I: AsRef<str>>(
        &self,
        class: &str,
        amenities: &[I],
    ) -> Result<commands::CmdResult> {
        let order = RoomOrder::parse(class, amenities)?;
        commands::quote::run(&order)
    }

    pub fn filter_products(
        &self,
        collection: &ProductCollection,
        query: &ProductQuery,
    ) -> Result<commands::CmdResult> {
        commands::catalog::run(collection, query)
    }

    pub fn add_student(&mut self, student: Student) -> Result<commands::CmdResult> {
        commands::roster::add(&mut self.store, student)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::roster::list(&self.store)
    }

    pub fn show_student(&self, index: usize) -> Result<commands::CmdResult> {
        commands::roster::show(&self.store, index)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.home, action)
    }
}

pub use crate::commands::catalog::ProductQuery;
pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, DisplayStudent, MessageLevel, QuoteLine, RoomQuote,
};
