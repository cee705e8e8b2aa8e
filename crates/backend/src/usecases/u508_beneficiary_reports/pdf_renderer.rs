use contracts::usecases::u508_beneficiary_reports::Group;
use oxidize_pdf::{Color, Document, Page};

use super::error::ReportError;
use super::font_metrics::pdf_font;
use super::layout::{self, PageLayout, Rect, TitleCentering, PAGE_HEIGHT, PAGE_WIDTH};

/// #f0f0f0
fn header_fill() -> Color {
    Color::rgb(240.0 / 255.0, 240.0 / 255.0, 240.0 / 255.0)
}

fn grid_stroke() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}

fn highlight_fill() -> Color {
    Color::rgb(1.0, 1.0, 0.0)
}

fn text_fill() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

/// Один PDF на группу: раскладка по страницам и отрисовка каждой страницы
pub fn render_group(group: &Group, centering: TitleCentering) -> Result<Vec<u8>, ReportError> {
    let pages = layout::paginate(group, centering);
    render_pages(&group.beneficiary, &pages)
}

pub fn render_pages(beneficiary: &str, pages: &[PageLayout]) -> Result<Vec<u8>, ReportError> {
    let pdf_err = |source| ReportError::Pdf {
        beneficiary: beneficiary.to_string(),
        source,
    };

    let mut doc = Document::new();
    doc.set_title(&layout::title_text(beneficiary));

    for page_layout in pages {
        let mut page = Page::new(PAGE_WIDTH, PAGE_HEIGHT);
        paint_page(&mut page, page_layout).map_err(pdf_err)?;
        doc.add_page(page);
    }

    // PDF пишется сразу в память
    let mut bytes = Vec::new();
    doc.write(&mut bytes).map_err(pdf_err)?;

    tracing::debug!(
        "Rendered report for '{}': {} pages, {} bytes",
        beneficiary,
        pages.len(),
        bytes.len()
    );

    Ok(bytes)
}

/// Сначала вся графика (заливки и рамки), затем текст поверх
fn paint_page(page: &mut Page, layout: &PageLayout) -> oxidize_pdf::Result<()> {
    let gfx = page.graphics();
    gfx.set_line_width(1.0);

    for cell in &layout.header {
        fill_rect(gfx, cell.rect, header_fill());
        stroke_rect(gfx, cell.rect);
    }

    for row in &layout.rows {
        // Заливка без рамки, рамки ячеек рисуются поверх
        if let Some(rect) = row.highlight_rect() {
            fill_rect(gfx, rect, highlight_fill());
        }
        for cell in &row.cells {
            stroke_rect(gfx, cell.rect);
        }
    }

    // Текстовый слой выводится после графики и наследует цвет заливки
    gfx.set_fill_color(text_fill());

    for run in layout.text_runs() {
        page.text()
            .set_font(pdf_font(run.face), run.size)
            .at(run.x, run.y)
            .write(&run.text)?;
    }

    Ok(())
}

fn fill_rect(gfx: &mut oxidize_pdf::graphics::GraphicsContext, rect: Rect, color: Color) {
    gfx.set_fill_color(color)
        .rect(rect.x, rect.y, rect.width, rect.height)
        .fill();
}

fn stroke_rect(gfx: &mut oxidize_pdf::graphics::GraphicsContext, rect: Rect) {
    gfx.set_stroke_color(grid_stroke())
        .rect(rect.x, rect.y, rect.width, rect.height)
        .stroke();
}
