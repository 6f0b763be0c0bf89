use crate::quiz::{Catalog, Entry, QuizError};

// タヌキ (raccoon dog) and the two animals it is most often mistaken for.
const ANIMALS: [(&str, &str); 3] = [
    ("タヌキ", "tanuki.svg"),
    ("アナグマ", "anaguma.svg"),
    ("ハクビシン", "hakubishin.svg"),
];

pub fn english_label(image: &str) -> Option<&'static str> {
    match image {
        "tanuki.svg" => Some("Tanuki"),
        "anaguma.svg" => Some("Badger"),
        "hakubishin.svg" => Some("Masked Palm Civet"),
        _ => None,
    }
}

pub fn entries() -> Vec<Entry> {
    ANIMALS
        .iter()
        .map(|(name, image)| Entry::new(*name, *image))
        .collect()
}

pub fn catalog() -> Result<Catalog, QuizError> {
    Catalog::new(entries())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_is_valid() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.entries().len(), ANIMALS.len());
        for entry in catalog.entries() {
            assert!(english_label(&entry.image).is_some(), "{} has no label", entry.image);
        }
    }
}
