use serde::{Deserialize, Serialize};

/// One summary variant: an ordered sequence of sentences.
///
/// When staged to disk each sentence becomes one line of the staged file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
	pub sentences: Vec<String>,
}

impl Summary {
	pub fn new<I, S>(sentences: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { sentences: sentences.into_iter().map(Into::into).collect() }
	}

	pub fn len(&self) -> usize {
		self.sentences.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sentences.is_empty()
	}
}

impl<S: Into<String>> From<Vec<S>> for Summary {
	fn from(sentences: Vec<S>) -> Self {
		Self::new(sentences)
	}
}

/// A multi-document corpus: `documents[i]` holds every summary variant for
/// document `i`, in variant order. A peer set and a model set passed to one
/// evaluation must have the same document count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySet {
	pub documents: Vec<Vec<Summary>>,
}

impl SummarySet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_document(&mut self, variants: Vec<Summary>) {
		self.documents.push(variants);
	}

	/// Number of documents.
	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	/// Total number of summary variants across all documents, which is also
	/// the number of files a staging pass writes for this set.
	pub fn variant_count(&self) -> usize {
		self.documents.iter().map(Vec::len).sum()
	}
}

impl<T: Into<Summary>> From<Vec<Vec<T>>> for SummarySet {
	fn from(documents: Vec<Vec<T>>) -> Self {
		Self {
			documents: documents
				.into_iter()
				.map(|variants| variants.into_iter().map(Into::into).collect())
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_from_str_vec() {
		let s = Summary::from(vec!["The cat sat.", "It purred."]);
		assert_eq!(s.len(), 2);
		assert_eq!(s.sentences[1], "It purred.");
	}

	#[test]
	fn set_from_nested_vecs() {
		let set = SummarySet::from(vec![
			vec![vec!["a", "b"], vec!["c"]],
			vec![vec!["d"]],
		]);
		assert_eq!(set.len(), 2);
		assert_eq!(set.variant_count(), 3);
		assert_eq!(set.documents[0][1].sentences, vec!["c"]);
	}

	#[test]
	fn variant_count_of_empty_set_is_zero() {
		assert_eq!(SummarySet::new().variant_count(), 0);
	}
}
