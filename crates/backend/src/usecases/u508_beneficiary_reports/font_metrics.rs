//! Измерение текста базовыми шрифтами PDF. ASCII меряет `oxidize_pdf`,
//! для букв Latin-1 с диакритикой его таблицы дают ширину по умолчанию (556),
//! поэтому такие символы приводятся к базовой букве или берутся из AFM.

use oxidize_pdf::text::measure_text;
use oxidize_pdf::Font;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

pub fn pdf_font(face: FontFace) -> Font {
    match face {
        FontFace::Regular => Font::Helvetica,
        FontFace::Bold => Font::HelveticaBold,
    }
}

/// Ширина строки в пунктах для заданного кегля
pub fn text_width(text: &str, face: FontFace, size: f64) -> f64 {
    let mut measurable = String::with_capacity(text.len());
    let mut extra_units: u32 = 0;

    for ch in text.chars() {
        match latin1_width(ch) {
            Some(units) => extra_units += units,
            None => measurable.push(fold_accent(ch)),
        }
    }

    measure_text(&measurable, pdf_font(face), size) + extra_units as f64 * size / 1000.0
}

/// Символы, ширина которых в AFM не совпадает с базовой буквой
/// (одинакова для Helvetica и Helvetica-Bold)
fn latin1_width(ch: char) -> Option<u32> {
    match ch {
        '\u{a0}' => Some(278),
        'í' | 'ì' | 'î' | 'ï' => Some(278),
        'º' => Some(365),
        'ª' => Some(370),
        '°' => Some(400),
        '–' => Some(556),
        '—' => Some(1000),
        _ => None,
    }
}

/// Буквы Latin-1 с диакритикой имеют ширину базовой буквы
fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}
