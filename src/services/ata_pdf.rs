//! Fixed-width PDF export of an ata.
//!
//! The document is first laid out as pages of text lines ([`layout`]), which
//! depends only on the stored record, and then drawn in Courier by
//! [`render_pdf`].
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::domain::Ata;
use crate::errors::AtaError;

pub const LINE_WIDTH: usize = 88;
pub const LINES_PER_PAGE: usize = 58;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 12.0;
const TOP_MARGIN_MM: f32 = 280.0;
const FOOTER_MM: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 4.3;
const FONT_SIZE: f32 = 10.0;

const TITLE: &str = "ASSEMBLEIA DE DEUS - MINISTÉRIO FIDELIDADE";

pub type Page = Vec<String>;

struct PageWriter {
    pages: Vec<Page>,
    continuation: Option<String>,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            continuation: None,
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        if self.current().len() >= LINES_PER_PAGE {
            self.pages.push(Vec::new());
            if let Some(header) = self.continuation.clone() {
                self.current().push(header);
                self.current().push(String::new());
            }
        }
        self.current().push(text.into());
    }

    fn blank(&mut self) {
        self.line(String::new());
    }

    fn current(&mut self) -> &mut Page {
        // `pages` always holds at least one page.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn finish(self) -> Vec<Page> {
        self.pages
    }
}

/// Greedy word wrap on character count; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn field(writer: &mut PageWriter, label: &str, value: &str) {
    let value = if value.trim().is_empty() { "-" } else { value };
    let prefix = format!("{}: ", label);
    let indent = " ".repeat(prefix.chars().count());
    let width = LINE_WIDTH - prefix.chars().count();
    for (index, line) in wrap(value, width).into_iter().enumerate() {
        if index == 0 {
            writer.line(format!("{}{}", prefix, line));
        } else {
            writer.line(format!("{}{}", indent, line));
        }
    }
}

fn rule() -> String {
    "-".repeat(LINE_WIDTH)
}

pub fn layout(ata: &Ata) -> Vec<Page> {
    let mut writer = PageWriter::new();

    writer.line(TITLE);
    writer.line(format!("ATA DE REUNIÃO Nº {}", ata.id));
    writer.line(rule());
    field(&mut writer, "Data", &ata.data_label());
    field(&mut writer, "Tipo", ata.tipo.label());
    field(&mut writer, "Departamento", ata.departamento.label());
    field(&mut writer, "Tema", &ata.tema);
    field(&mut writer, "Local", &ata.local);
    writer.blank();

    writer.line(format!("PRESENTES ({})", ata.presentes.len()));
    writer.line(rule());
    writer.continuation = Some("PRESENTES (continuação)".to_string());
    if ata.presentes.is_empty() {
        writer.line("Nenhum obreiro registrado.");
    }
    let number_width = ata.presentes.len().to_string().len();
    for (index, attendee) in ata.presentes.iter().enumerate() {
        let number = format!("{:>width$}. ", index + 1, width = number_width);
        let entry = if attendee.grupo.is_empty() {
            attendee.nome.clone()
        } else {
            format!("{} - {}", attendee.nome, attendee.grupo)
        };
        let indent = " ".repeat(number.len());
        for (line_index, line) in wrap(&entry, LINE_WIDTH - number.len())
            .into_iter()
            .enumerate()
        {
            let lead = if line_index == 0 { &number } else { &indent };
            writer.line(format!("{}{}", lead, line));
        }
    }
    writer.continuation = None;
    writer.blank();

    writer.line("OBSERVAÇÕES");
    writer.line(rule());
    writer.continuation = Some("OBSERVAÇÕES (continuação)".to_string());
    if ata.observacoes.trim().is_empty() {
        writer.line("Nenhuma observação.");
    }
    for paragraph in ata.observacoes.lines() {
        if paragraph.trim().is_empty() {
            writer.blank();
            continue;
        }
        for line in wrap(paragraph, LINE_WIDTH) {
            writer.line(line);
        }
    }

    writer.finish()
}

pub fn render_pdf(title: &str, pages: &[Page]) -> Result<Vec<u8>, AtaError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Camada 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| AtaError::Pdf(e.to_string()))?;

    let total = pages.len();
    for (index, lines) in pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Camada {}", index + 1),
            )
        };
        let current = doc.get_page(page).get_layer(layer);

        let mut y = TOP_MARGIN_MM;
        for line in lines {
            if !line.is_empty() {
                current.use_text(line.clone(), FONT_SIZE, Mm(LEFT_MARGIN_MM), Mm(y), &font);
            }
            y -= LINE_HEIGHT_MM;
        }
        current.use_text(
            format!("Página {} de {}", index + 1, total),
            FONT_SIZE,
            Mm(LEFT_MARGIN_MM),
            Mm(FOOTER_MM),
            &font,
        );
    }

    doc.save_to_bytes().map_err(|e| AtaError::Pdf(e.to_string()))
}

/// Lays out and renders on a blocking worker.
pub async fn generate(ata: &Ata) -> Result<Vec<u8>, AtaError> {
    let pages = layout(ata);
    let title = format!("Ata {} - {}", ata.id, ata.data_label());
    tokio::task::spawn_blocking(move || render_pdf(&title, &pages))
        .await
        .map_err(|e| AtaError::Pdf(e.to_string()))?
}
