//! Раскладка отчета по страницам: координаты заголовка, шапки таблицы и строк.
//! Чистые вычисления без PDF, отрисовка в `pdf_renderer`.

use contracts::usecases::u508_beneficiary_reports::{CellValue, Group, Record};
use serde::Deserialize;

use super::font_metrics::{text_width, FontFace};
use crate::shared::format::format_brl;

/// A4 альбомная
pub const PAGE_WIDTH: f64 = 841.89;
pub const PAGE_HEIGHT: f64 = 595.28;
/// Ширина книжного A4, по ней заголовок центрировался исторически
pub const PORTRAIT_WIDTH: f64 = 595.28;

pub const TABLE_LEFT: f64 = 50.0;
pub const TITLE_BASELINE: f64 = 550.0;
pub const HEADER_CURSOR: f64 = TITLE_BASELINE - 40.0;
pub const FIRST_ROW_CURSOR: f64 = HEADER_CURSOR - ROW_HEIGHT;
pub const ROW_HEIGHT: f64 = 30.0;
/// Ниже этой отметки строка переносится на новую страницу
pub const BOTTOM_MARGIN: f64 = 100.0;

pub const COLUMN_WIDTHS: [f64; 3] = [200.0, 150.0, 150.0];
pub const HEADERS: [&str; 3] = ["Empreendimento", "Unidade", "Valor Total"];

pub const TITLE_FONT_SIZE: f64 = 16.0;
pub const CELL_FONT_SIZE: f64 = 10.0;
pub const MAX_CELL_CHARS: usize = 30;

/// Относительно какой ширины центрируется заголовок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleCentering {
    #[default]
    PageWidth,
    PortraitWidth,
}

impl TitleCentering {
    pub fn reference_width(&self) -> f64 {
        match self {
            TitleCentering::PageWidth => PAGE_WIDTH,
            TitleCentering::PortraitWidth => PORTRAIT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub face: FontFace,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellBox {
    pub rect: Rect,
    pub text: TextRun,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub highlight: bool,
    pub cells: Vec<CellBox>,
}

impl RowLayout {
    /// Заливка итоговой строки на всю ширину таблицы
    pub fn highlight_rect(&self) -> Option<Rect> {
        if !self.highlight {
            return None;
        }
        self.cells.first().map(|first| Rect {
            x: TABLE_LEFT,
            y: first.rect.y,
            width: table_width(),
            height: ROW_HEIGHT,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub title: TextRun,
    pub header: Vec<CellBox>,
    pub rows: Vec<RowLayout>,
}

impl PageLayout {
    fn new(title: &TextRun, header: &[CellBox]) -> Self {
        Self {
            title: title.clone(),
            header: header.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Все текстовые фрагменты страницы в порядке вывода
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        std::iter::once(&self.title)
            .chain(self.header.iter().map(|c| &c.text))
            .chain(self.rows.iter().flat_map(|r| r.cells.iter().map(|c| &c.text)))
    }
}

pub fn table_width() -> f64 {
    COLUMN_WIDTHS.iter().sum()
}

/// Сколько строк помещается на одну страницу
pub fn rows_per_page() -> usize {
    ((FIRST_ROW_CURSOR - BOTTOM_MARGIN) / ROW_HEIGHT).floor() as usize + 1
}

pub fn title_text(beneficiary: &str) -> String {
    format!("Relatório do Beneficiário: {}", beneficiary)
}

/// Текст ячейки: числа в формате R$, затем обрезка до 30 символов
pub fn cell_text(value: &CellValue) -> String {
    let text = match value {
        CellValue::Number(n) => format_brl(*n),
        CellValue::Text(s) => s.clone(),
    };
    text.chars().take(MAX_CELL_CHARS).collect()
}

/// Раскладывает строки группы по страницам. На каждой странице
/// одинаковые заголовок и шапка, строки идут в исходном порядке.
pub fn paginate(group: &Group, centering: TitleCentering) -> Vec<PageLayout> {
    let title = title_run(&group.beneficiary, centering);
    let header = header_cells();

    let mut pages = Vec::with_capacity(group.records.len() / rows_per_page() + 1);
    let mut current = PageLayout::new(&title, &header);
    let mut cursor = FIRST_ROW_CURSOR;

    for record in &group.records {
        if cursor < BOTTOM_MARGIN {
            pages.push(std::mem::replace(
                &mut current,
                PageLayout::new(&title, &header),
            ));
            cursor = FIRST_ROW_CURSOR;
        }
        current.rows.push(row_layout(record, cursor));
        cursor -= ROW_HEIGHT;
    }

    pages.push(current);
    pages
}

fn title_run(beneficiary: &str, centering: TitleCentering) -> TextRun {
    let text = title_text(beneficiary);
    let width = text_width(&text, FontFace::Bold, TITLE_FONT_SIZE);
    TextRun {
        x: (centering.reference_width() - width) / 2.0,
        y: TITLE_BASELINE,
        text,
        face: FontFace::Bold,
        size: TITLE_FONT_SIZE,
    }
}

fn header_cells() -> Vec<CellBox> {
    let mut x = TABLE_LEFT;
    HEADERS
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(title, width)| {
            let cell = cell_box(x, HEADER_CURSOR, width, title.to_string(), FontFace::Bold);
            x += width;
            cell
        })
        .collect()
}

fn row_layout(record: &Record, cursor: f64) -> RowLayout {
    let mut x = TABLE_LEFT;
    let cells = record
        .body_values()
        .into_iter()
        .zip(COLUMN_WIDTHS)
        .map(|(value, width)| {
            let cell = cell_box(x, cursor, width, cell_text(value), FontFace::Regular);
            x += width;
            cell
        })
        .collect();

    RowLayout {
        highlight: record.is_total_row(),
        cells,
    }
}

/// Ячейка высотой в строку: рамка от cursor-20 до cursor+10,
/// базовая линия текста на cursor-10, текст по центру колонки
fn cell_box(x: f64, cursor: f64, width: f64, text: String, face: FontFace) -> CellBox {
    let text_w = text_width(&text, face, CELL_FONT_SIZE);
    CellBox {
        rect: Rect {
            x,
            y: cursor - 20.0,
            width,
            height: ROW_HEIGHT,
        },
        text: TextRun {
            x: x + width / 2.0 - text_w / 2.0,
            y: cursor - 10.0,
            text,
            face,
            size: CELL_FONT_SIZE,
        },
    }
}
