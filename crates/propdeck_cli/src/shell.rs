use crate::console::{ConsoleDocuments, ConsoleSink};
use chrono::{DateTime, Utc};
use propdeck_editor::{EditorSideEffect, PropertyFormEditor, RowKind};
use propdeck_forms::{PropertyUpdate, PropertyValue};
use std::io::{self, BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("no property at row {0}")]
    NoSuchRow(usize),
    #[error("parse error: {0}")]
    Parse(String),
}

pub type ShellResult<T> = Result<T, ShellError>;

const ACTIONS_SECTION: usize = 1;

/// Interactive host for one `PropertyFormEditor`. Owns the one-time SDK
/// bootstrap flag; the editor itself never knows whether the sink behind it
/// has been started.
pub struct Shell {
    editor: PropertyFormEditor,
    sdk_started: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            editor: PropertyFormEditor::detached(),
            sdk_started: false,
        }
    }

    /// Idempotent bootstrap: installs the console-backed collaborators the
    /// first time through and is a no-op afterwards.
    fn ensure_sdk_started(&mut self) {
        if self.sdk_started {
            return;
        }
        self.editor.set_reporting_sink(Box::new(ConsoleSink));
        self.editor.set_document_store(Box::new(ConsoleDocuments::default()));
        self.sdk_started = true;
        tracing::info!("reporting sdk started");
    }

    pub fn run(&mut self) -> ShellResult<()> {
        self.ensure_sdk_started();
        self.render();

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input == "quit" || input == "dismiss" {
                break;
            }
            match self.dispatch(input) {
                Ok(()) => self.drain_side_effects(),
                Err(err) => println!("{}", err),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, input: &str) -> ShellResult<()> {
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        match command {
            "insert" => {
                self.editor.insert_property();
                Ok(())
            }
            "delete" => {
                let row = parse_row(&rest)?;
                let index = self.data_index(row)?;
                self.editor.delete_property(index);
                Ok(())
            }
            "key" => {
                let row = parse_row(&rest)?;
                let key = rest
                    .get(1)
                    .ok_or_else(|| ShellError::Parse("usage: key <row> <name>".into()))?;
                let index = self.data_index(row)?;
                if let Some(property) = self.editor.property_mut(index) {
                    property.key = (*key).to_string();
                }
                Ok(())
            }
            "set" => {
                let row = parse_row(&rest)?;
                let kind = *rest
                    .get(1)
                    .ok_or_else(|| ShellError::Parse("usage: set <row> <type> <value>".into()))?;
                let value = parse_value(kind, &rest[2..])?;
                let index = self.data_index(row)?;
                if let Some(property) = self.editor.property_mut(index) {
                    property.update = PropertyUpdate::Set(value);
                }
                Ok(())
            }
            "clear" => {
                let row = parse_row(&rest)?;
                let index = self.data_index(row)?;
                if let Some(property) = self.editor.property_mut(index) {
                    property.update = PropertyUpdate::Clear;
                }
                Ok(())
            }
            "send" => {
                self.ensure_sdk_started();
                self.editor.send();
                Ok(())
            }
            "todo" => {
                let text = rest.join(" ");
                let input = if text.is_empty() { None } else { Some(text.as_str()) };
                self.editor.append_entry(input);
                Ok(())
            }
            "show" => {
                self.render();
                Ok(())
            }
            "help" => {
                print_help();
                Ok(())
            }
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }

    /// Map a properties-section row number to its bound pending index.
    fn data_index(&self, row: usize) -> ShellResult<usize> {
        match self.editor.classify(self.editor.properties_section(), row) {
            Some(RowKind::Data(index)) => Ok(index),
            _ => Err(ShellError::NoSuchRow(row)),
        }
    }

    fn drain_side_effects(&mut self) {
        let mut reload = false;
        while let Some(effect) = self.editor.side_effects.pop_front() {
            match effect {
                EditorSideEffect::UserNotice(message) => println!("** {} **", message),
                EditorSideEffect::Reload => reload = true,
            }
        }
        if reload {
            self.render();
        }
    }

    fn render(&self) {
        println!("Custom Properties");
        let section = self.editor.properties_section();
        for row in 0..self.editor.row_count(section) {
            match self.editor.classify(section, row) {
                Some(RowKind::Insert) => println!("  [{}] (+) add property", row),
                Some(RowKind::Data(index)) => {
                    let property = &self.editor.properties()[index];
                    println!("  [{}] {} = {}", row, property.key, describe(&property.update));
                }
                _ => {}
            }
        }
        println!("Actions");
        for row in 0..self.editor.row_count(ACTIONS_SECTION) {
            match self.editor.classify(ACTIONS_SECTION, row) {
                Some(RowKind::Send) => println!("  [{}] send", row),
                Some(RowKind::Dismiss) => println!("  [{}] dismiss", row),
                _ => {}
            }
        }
        if !self.editor.entries().is_empty() {
            println!("To Dos");
            for entry in self.editor.entries() {
                println!("  - {} [{}]", entry.label, entry.background().as_str());
            }
        }
    }
}

fn parse_row(rest: &[&str]) -> ShellResult<usize> {
    rest.first()
        .ok_or_else(|| ShellError::Parse("missing row number".into()))?
        .parse()
        .map_err(|_| ShellError::Parse("row must be a number".into()))
}

fn parse_value(kind: &str, rest: &[&str]) -> ShellResult<PropertyValue> {
    let text = rest.join(" ");
    match kind {
        "string" => Ok(PropertyValue::String(text)),
        "number" => text
            .parse::<f64>()
            .map(PropertyValue::Number)
            .map_err(|_| ShellError::Parse(format!("not a number: {}", text))),
        "bool" => text
            .parse::<bool>()
            .map(PropertyValue::Boolean)
            .map_err(|_| ShellError::Parse(format!("not a bool: {}", text))),
        "datetime" => DateTime::parse_from_rfc3339(&text)
            .map(|d| PropertyValue::DateTime(d.with_timezone(&Utc)))
            .map_err(|err| ShellError::Parse(format!("not an RFC 3339 date: {}", err))),
        other => Err(ShellError::Parse(format!("unknown type: {}", other))),
    }
}

fn describe(update: &PropertyUpdate) -> String {
    match update {
        PropertyUpdate::Clear => "(clear)".to_string(),
        PropertyUpdate::Set(PropertyValue::String(s)) => format!("{:?}", s),
        PropertyUpdate::Set(PropertyValue::Number(n)) => n.to_string(),
        PropertyUpdate::Set(PropertyValue::Boolean(b)) => b.to_string(),
        PropertyUpdate::Set(PropertyValue::DateTime(d)) => d.to_rfc3339(),
    }
}

fn print_help() {
    println!("commands:");
    println!("  insert                       add a pending property");
    println!("  delete <row>                 delete the property at that row");
    println!("  key <row> <name>             rename the property's key");
    println!("  set <row> <type> <value>     set a value (string|number|bool|datetime)");
    println!("  clear <row>                  mark the key for removal");
    println!("  send                         submit the batch and clear the list");
    println!("  todo [label,color]           append a to-do entry");
    println!("  show                         redraw the table");
    println!("  quit | dismiss               leave");
}
