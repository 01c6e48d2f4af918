//! Whole-document page rotation

use crate::error::PdfError;
use crate::page_tree;
use lopdf::{Document, Object};
use serde::Deserialize;
use std::str::FromStr;

/// Rotation direction for a quarter-turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Left,
    Right,
}

impl Rotation {
    /// Degrees added to each page's /Rotate value. A left turn is
    /// expressed as +270 so the result stays in 0..360.
    pub fn degrees(self) -> i64 {
        match self {
            Rotation::Left => 270,
            Rotation::Right => 90,
        }
    }
}

impl FromStr for Rotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Rotation::Left),
            "right" => Ok(Rotation::Right),
            other => Err(format!("Invalid rotation direction: {}", other)),
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rotation::Left => write!(f, "left"),
            Rotation::Right => write!(f, "right"),
        }
    }
}

/// Rotate every page of a PDF by a quarter turn.
///
/// The delta composes with each page's existing /Rotate value modulo 360;
/// page content is untouched. The input bytes are never mutated, a new
/// document is serialized.
pub fn rotate_pages(pdf_bytes: &[u8], rotation: Rotation) -> Result<Vec<u8>, PdfError> {
    let mut doc =
        Document::load_mem(pdf_bytes).map_err(|e| PdfError::Parse(e.to_string()))?;

    let pages: Vec<_> = doc.get_pages().into_values().collect();

    for page_id in pages {
        let page_dict = doc
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)
            .map_err(|e| PdfError::Operation(format!("Invalid page object: {}", e)))?;

        let current = page_dict
            .get(b"Rotate")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(0);

        page_dict.set("Rotate", Object::Integer((current + rotation.degrees()) % 360));
    }

    page_tree::save_to_bytes(&mut doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pdf::create_test_pdf;
    use pretty_assertions::assert_eq;

    fn page_rotations(pdf_bytes: &[u8]) -> Vec<i64> {
        let doc = Document::load_mem(pdf_bytes).unwrap();
        doc.get_pages()
            .into_values()
            .map(|page_id| {
                doc.get_object(page_id)
                    .and_then(Object::as_dict)
                    .unwrap()
                    .get(b"Rotate")
                    .ok()
                    .and_then(|o| o.as_i64().ok())
                    .unwrap_or(0)
            })
            .collect()
    }

    #[test]
    fn test_rotate_right_adds_90() {
        let pdf = create_test_pdf(3, "Doc");
        let rotated = rotate_pages(&pdf, Rotation::Right).unwrap();
        assert_eq!(page_rotations(&rotated), vec![90, 90, 90]);
    }

    #[test]
    fn test_rotate_left_adds_270() {
        let pdf = create_test_pdf(2, "Doc");
        let rotated = rotate_pages(&pdf, Rotation::Left).unwrap();
        assert_eq!(page_rotations(&rotated), vec![270, 270]);
    }

    #[test]
    fn test_rotate_composes_modulo_360() {
        let pdf = create_test_pdf(1, "Doc");
        let once = rotate_pages(&pdf, Rotation::Right).unwrap();
        let twice = rotate_pages(&once, Rotation::Right).unwrap();
        let thrice = rotate_pages(&twice, Rotation::Right).unwrap();
        let full = rotate_pages(&thrice, Rotation::Right).unwrap();
        assert_eq!(page_rotations(&twice), vec![180]);
        assert_eq!(page_rotations(&full), vec![0]);
    }

    #[test]
    fn test_rotate_left_inverts_right() {
        let pdf = create_test_pdf(4, "Doc");
        let there = rotate_pages(&pdf, Rotation::Right).unwrap();
        let back = rotate_pages(&there, Rotation::Left).unwrap();
        assert_eq!(page_rotations(&back), page_rotations(&pdf));
    }

    #[test]
    fn test_rotate_keeps_page_count() {
        let pdf = create_test_pdf(5, "Doc");
        let rotated = rotate_pages(&pdf, Rotation::Left).unwrap();
        let doc = Document::load_mem(&rotated).unwrap();
        assert_eq!(doc.get_pages().len(), 5);
    }

    #[test]
    fn test_rotation_from_str() {
        assert_eq!("left".parse::<Rotation>().unwrap(), Rotation::Left);
        assert_eq!("right".parse::<Rotation>().unwrap(), Rotation::Right);
        assert!("up".parse::<Rotation>().is_err());
        assert!("Left".parse::<Rotation>().is_err());
    }
}
