//! Roster spreadsheets: the downloadable template and the upload parser.
//!
//! Spreadsheets travel as CSV. Excel in pt-BR exports with `;` in
//! Windows-1252, other tools with `,` in UTF-8, so the delimiter is taken
//! from the header line and bytes that are not UTF-8 are read as Windows-1252.
use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

use crate::domain::NewMember;
use crate::errors::ImportError;

pub const REQUIRED_COLUMNS: [&str; 4] = ["nome", "grupo", "telefone", "email"];
pub const TEMPLATE_FILE_NAME: &str = "modelo_obreiros.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn template_csv() -> Result<Vec<u8>, ImportError> {
    let mut wtr = csv::Writer::from_writer(UTF8_BOM.to_vec());
    wtr.write_record(REQUIRED_COLUMNS)
        .map_err(|e| ImportError::Template(e.to_string()))?;
    wtr.write_record(["João Silva", "Louvor", "(11) 99999-9999", "joao@exemplo.com"])
        .map_err(|e| ImportError::Template(e.to_string()))?;
    wtr.into_inner()
        .map_err(|e| ImportError::Template(e.to_string()))
}

/// Parses an uploaded roster. A file lacking any required column is rejected
/// as a whole; rows with a blank name are skipped.
pub fn parse_roster(data: &[u8]) -> Result<Vec<NewMember>, ImportError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let text = decode(data);
    let data = text.as_bytes();

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(data))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| ImportError::Unreadable(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut positions = [0usize; 4];
    let mut missing = Vec::new();
    for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h == column) {
            Some(position) => positions[slot] = position,
            None => missing.push(*column),
        }
    }
    if !missing.is_empty() {
        return Err(ImportError::InvalidTemplate(missing.join(", ")));
    }
    let [nome, grupo, telefone, email] = positions;

    let mut members = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| ImportError::Unreadable(e.to_string()))?;
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        let name = field(nome);
        if name.is_empty() {
            continue;
        }
        members.push(NewMember::new(name, field(grupo)).with_contact(field(telefone), field(email)));
    }
    Ok(members)
}

fn decode(data: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(data) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("roster is not UTF-8, decoding as Windows-1252");
            WINDOWS_1252.decode_without_bom_handling(data).0
        }
    }
}

fn detect_delimiter(data: &[u8]) -> u8 {
    let header = data.split(|b| *b == b'\n').next().unwrap_or_default();
    let semicolons = header.iter().filter(|b| **b == b';').count();
    let commas = header.iter().filter(|b| **b == b',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}
