//! CLI command implementations
//!
//! Every command writes exactly one JSON object to stdout, except `serve`,
//! which writes one per request line. A refused request (invalid fields,
//! unknown id) is written as an error object and also returned as a
//! `Rejected` CLI error so the exit status reflects it.

use std::path::Path;

use serde_json::{json, Value};

use crate::api::ApiHandler;
use crate::book::{AddressBook, BookError, BookResult};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::regions::RegionList;
use crate::store::{FileSlots, RecordStore, SlotBackend};
use crate::validation::{validate, RawFields};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_error, write_json, write_response};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::List { config } => list(&config),
        Command::Show { config, id } => show(&config, id),
        Command::Add { config, fields } => add(&config, fields.into()),
        Command::Update { config, id, fields } => update(&config, id, fields.into()),
        Command::Delete { config, id } => delete(&config, id),
        Command::Validate { fields } => check(fields.into()),
        Command::Regions { config } => regions(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Create the data directory and write an empty collection to the slot.
///
/// Refuses to touch a slot that already exists.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let mut slots = FileSlots::new(config.data_path());

    let slot_path = slots.slot_path(&config.slot)?;
    if slots.read_slot(&config.slot)?.is_some() {
        return Err(CliError::already_initialized(slot_path.display()));
    }

    slots.write_slot(&config.slot, "[]")?;

    let slot_display = slot_path.display().to_string();
    log_event_with_fields(Event::DataDirInitialized, &[("slot", slot_display.as_str())]);

    write_response(json!({"initialized": true, "slot": slot_display}))
}

pub fn list(config_path: &Path) -> CliResult<()> {
    let book = open_book(config_path)?;
    write_response(serde_json::to_value(book.contacts())?)
}

pub fn show(config_path: &Path, id: u64) -> CliResult<()> {
    let book = open_book(config_path)?;
    respond(book.contact(id))
}

pub fn add(config_path: &Path, fields: RawFields) -> CliResult<()> {
    let mut book = open_book(config_path)?;
    respond(book.add(&fields))
}

pub fn update(config_path: &Path, id: u64, fields: RawFields) -> CliResult<()> {
    let mut book = open_book(config_path)?;
    respond(book.edit(id, &fields))
}

pub fn delete(config_path: &Path, id: u64) -> CliResult<()> {
    let mut book = open_book(config_path)?;
    respond(book.remove(id).map(|_| json!({ "deleted": id })))
}

/// Validate fields without a store or config
pub fn check(fields: RawFields) -> CliResult<()> {
    respond(
        validate(&fields)
            .map(|_| json!({ "valid": true }))
            .map_err(BookError::from),
    )
}

pub fn regions(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let path = config
        .regions_path()
        .ok_or_else(|| CliError::config_error("regions_file is not configured"))?;

    let list = RegionList::load(&path)?;
    write_response(json!(list.names()))
}

/// Serve line-delimited JSON requests until stdin closes.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let mut book = open_book(config_path)?;
    let mut handler = ApiHandler::new(&mut book);

    log_event(Event::Serving);

    for request in read_requests() {
        match request {
            Ok(line) => {
                let response = handler.handle(&line);
                write_json(&response.to_json())?;
            }
            Err(e) => {
                write_error(e.code_str(), e.message(), &[])?;
                break;
            }
        }
    }

    log_event(Event::ServingStopped);

    Ok(())
}

fn open_book(config_path: &Path) -> CliResult<AddressBook<FileSlots>> {
    let config = Config::load(config_path)?;
    let store = RecordStore::open(FileSlots::new(config.data_path()), config.slot.as_str())?
        .with_id_policy(config.id_policy);
    Ok(AddressBook::new(store))
}

fn respond<T: serde::Serialize>(result: BookResult<T>) -> CliResult<()> {
    match result {
        Ok(data) => write_response(serde_json::to_value(data)?),
        Err(e) => {
            write_error(e.code(), &e.to_string(), &e.failed_fields())?;
            Err(CliError::rejected(e.code()))
        }
    }
}
