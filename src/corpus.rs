use std::fmt;

use crate::record::Record;

/// Where the records of a [`Corpus`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusSource {
    /// Parsed from the files of an existing snippet directory.
    Directory,
    /// The directory was missing and has been created with seed files.
    Seeded,
    /// Nothing on disk could be used; the built-in records are in effect.
    BuiltIn,
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Directory => "directory",
            Self::Seeded => "seeded",
            Self::BuiltIn => "built-in",
        };
        f.write_str(name)
    }
}

/// The full, immutable set of searchable records.
///
/// Order is file-enumeration order followed by in-file order and serves as
/// the tie-break when ranking.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<Record>,
    source: CorpusSource,
}

impl Corpus {
    pub fn new(records: Vec<Record>, source: CorpusSource) -> Self {
        Self { records, source }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn source(&self) -> CorpusSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Look up a record by title, ignoring case. The first match in corpus
    /// order wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Record> {
        let wanted = title.to_lowercase();
        self.records
            .iter()
            .find(|r| r.title.to_lowercase() == wanted)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_title_ignores_case() {
        let corpus = Corpus::new(
            vec![
                Record::new("For Loop", "", "for", None),
                Record::new("While Loop", "", "while", None),
            ],
            CorpusSource::Directory,
        );

        let found = corpus.find_by_title("while loop").unwrap();
        assert_eq!(found.code, "while");
        assert!(corpus.find_by_title("do loop").is_none());
    }

    #[test]
    fn source_display() {
        assert_eq!(CorpusSource::BuiltIn.to_string(), "built-in");
        assert_eq!(CorpusSource::Seeded.to_string(), "seeded");
    }
}
