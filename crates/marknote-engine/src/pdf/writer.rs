//! printpdf glue: turn typeset pages into a PDF file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::PdfError;
use super::layout::{
    FontKind, Line, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, SIDE_MARGIN_MM, TOP_MARGIN_MM, line_height_mm,
};

const LAYER_NAME: &str = "content";

/// Write the paginated lines to `out` as an A4 PDF titled `title`.
pub fn write_pages(title: &str, pages: &[Vec<Line>], out: &Path) -> Result<(), PdfError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let mono = doc.add_builtin_font(BuiltinFont::Courier)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        // printpdf's origin is the bottom-left corner; walk down from the
        // fixed top margin
        let mut y_mm = PAGE_HEIGHT_MM - TOP_MARGIN_MM;
        for line in page {
            y_mm -= line_height_mm(line.size_pt);
            if !line.text.is_empty() {
                let font = match line.font {
                    FontKind::Regular => &regular,
                    FontKind::Bold => &bold,
                    FontKind::Mono => &mono,
                };
                layer.use_text(
                    line.text.clone(),
                    line.size_pt,
                    Mm(SIDE_MARGIN_MM + line.indent_mm),
                    Mm(y_mm),
                    font,
                );
            }
            y_mm -= line.space_after_mm;
        }
    }

    let file = File::create(out).map_err(|source| PdfError::Create {
        path: out.to_path_buf(),
        source,
    })?;
    doc.save(&mut BufWriter::new(file))?;
    Ok(())
}
