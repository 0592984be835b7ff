use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::errors::ExportError;
use crate::models::domain::Quiz;
use crate::services::export::Exporter;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 25.4;
const FONT_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_PT: f32 = 14.4;
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Helvetica at 12pt averages about 6pt per glyph; 159mm of text width
/// fits roughly 75 of them.
const MAX_LINE_CHARS: usize = 75;

const OPTION_INDENT: &str = "  - ";
const CONTINUATION_INDENT: &str = "    ";

/// A4 document: questions first, answer key from a fresh page.
///
/// Long lines are word-wrapped and a section that outgrows its page carries
/// on to the next one, so nothing is drawn past the bottom margin.
pub struct PdfExporter;

impl Exporter for PdfExporter {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_name(&self) -> &'static str {
        "quiz.pdf"
    }

    fn render(&self, quiz: &Quiz) -> Result<Vec<u8>, ExportError> {
        let pages = layout(quiz);

        let (doc, first_page, first_layer) = PdfDocument::new(
            "Quiz",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("{e:?}")))?;

        let mut targets = vec![(first_page, first_layer)];
        for _ in 1..pages.len() {
            targets.push(doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"));
        }

        for ((page, layer), lines) in targets.into_iter().zip(&pages) {
            let layer = doc.get_page(page).get_layer(layer);

            layer.begin_text_section();
            layer.set_font(&font, FONT_SIZE_PT);
            layer.set_line_height(LINE_HEIGHT_PT);
            layer.set_text_cursor(Mm(MARGIN_MM), Mm(PAGE_HEIGHT_MM - MARGIN_MM));
            for line in lines {
                layer.write_text(line.as_str(), &font);
                layer.add_line_break();
            }
            layer.end_text_section();
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::Pdf(format!("{e:?}")))
    }
}

fn lines_per_page() -> usize {
    let usable_mm = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;
    (usable_mm / (LINE_HEIGHT_PT * PT_TO_MM)).floor() as usize
}

/// Text lines of every page, in order.
pub(crate) fn layout(quiz: &Quiz) -> Vec<Vec<String>> {
    let mut question_lines = Vec::new();
    for (i, question) in quiz.questions().iter().enumerate() {
        question_lines.push(format!("{}. {}", i + 1, question.heading()));
        for option in question.options() {
            question_lines.push(format!("{OPTION_INDENT}{option}"));
        }
        question_lines.push(String::new());
    }

    let mut answer_lines = Vec::new();
    for (i, entry) in quiz.answer_key().iter().enumerate() {
        answer_lines.push(format!("{}. {}", i + 1, entry.question));
        answer_lines.push(format!("Answer: {}", entry.answer));
        answer_lines.push(String::new());
    }

    let mut pages = paginate("Quiz Questions", question_lines);
    pages.extend(paginate("Answer Key", answer_lines));
    pages
}

fn paginate(title: &str, lines: Vec<String>) -> Vec<Vec<String>> {
    let capacity = lines_per_page();
    let mut pages = vec![vec![title.to_string(), String::new()]];

    for line in lines.iter().flat_map(|l| wrap(&sanitize(l), MAX_LINE_CHARS)) {
        let full = pages.last().map_or(true, |page| page.len() >= capacity);
        if full {
            if line.is_empty() {
                continue;
            }
            pages.push(Vec::new());
        }
        if let Some(page) = pages.last_mut() {
            page.push(line);
        }
    }

    pages
}

/// Word-wraps `line` to `width` characters. Leading whitespace is kept on the
/// first line, continuation lines are indented, and words longer than a line
/// are split.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(CONTINUATION_INDENT.len() + 1);
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let body = line.trim_start();
    let lead = &line[..line.len() - body.len()];
    let lead = if lead.chars().count() < width { lead } else { "" };

    let mut out = Vec::new();
    let mut current = lead.to_string();
    let mut line_start = current.chars().count();

    for word in body.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let current_len = current.chars().count();
            let separator = usize::from(current_len > line_start);
            if current_len + separator + word.len() <= width {
                if separator == 1 {
                    current.push(' ');
                }
                current.extend(word.iter());
                break;
            }

            if current_len == line_start {
                // Word alone does not fit on a fresh line: split it.
                let room = width - current_len;
                current.extend(word.drain(..room));
            }
            out.push(std::mem::replace(&mut current, CONTINUATION_INDENT.to_string()));
            line_start = CONTINUATION_INDENT.len();
            if word.is_empty() {
                break;
            }
        }
    }

    if current.chars().count() > line_start {
        out.push(current);
    } else if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// The built-in Helvetica is written with WinAnsi encoding, which covers
/// Latin-1. Typographic punctuation is mapped to ASCII and anything else
/// outside Latin-1 becomes `?`.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            '\t' => ' ',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            '\u{00A0}'..='\u{00FF}' => c,
            _ => '?',
        })
        .collect()
}
